//! Two-finger pinch tracking.
//!
//! Pinch tracking is reset whenever the number of active contacts changes.
//! A two-contact move that arrives without a baseline (for example right
//! after a third finger lifted) only establishes the baseline, so the first
//! zoom delta is always measured between two observations of the same pair
//! of fingers.

use glam::Vec2;

/// Tracks the screen-space distance between exactly two active contacts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PinchTracker {
    last_distance: Option<f32>,
    active_count: usize,
}

/// Distance between the two contacts, or `None` unless exactly two are
/// active.
#[must_use]
pub fn pinch_distance(touches: &[Vec2]) -> Option<f32> {
    match touches {
        [a, b] => Some(a.distance(*b)),
        _ => None,
    }
}

impl PinchTracker {
    /// Distance recorded at the last two-contact observation.
    #[must_use]
    pub fn last_distance(&self) -> Option<f32> {
        self.last_distance
    }

    /// Number of contacts seen in the last touch event.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// A contact began. Re-bases on exactly two contacts, otherwise clears.
    pub fn start(&mut self, touches: &[Vec2]) {
        self.rebase(touches);
    }

    /// Contacts moved. Returns how much the pinch distance shrank since
    /// the previous observation (positive = fingers closer together).
    pub fn update(&mut self, touches: &[Vec2]) -> Option<f32> {
        if touches.len() != self.active_count {
            self.rebase(touches);
            return None;
        }
        let new_distance = pinch_distance(touches)?;
        let Some(last) = self.last_distance.replace(new_distance) else {
            log::debug!("pinch baseline {new_distance:.1}px");
            return None;
        };
        Some(last - new_distance)
    }

    /// A contact ended; `remaining` are the contacts still down.
    pub fn end(&mut self, remaining: &[Vec2]) {
        self.rebase(remaining);
    }

    fn rebase(&mut self, touches: &[Vec2]) {
        self.active_count = touches.len();
        self.last_distance = pinch_distance(touches);
        if let Some(d) = self.last_distance {
            log::debug!("pinch baseline {d:.1}px");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(d: f32) -> Vec<Vec2> {
        vec![Vec2::new(0.0, 0.0), Vec2::new(d, 0.0)]
    }

    #[test]
    fn distance_needs_exactly_two_contacts() {
        assert_eq!(pinch_distance(&[]), None);
        assert_eq!(pinch_distance(&[Vec2::ONE]), None);
        assert_eq!(
            pinch_distance(&[Vec2::ZERO, Vec2::new(3.0, 4.0)]),
            Some(5.0)
        );
        assert_eq!(pinch_distance(&[Vec2::ZERO, Vec2::X, Vec2::Y]), None);
    }

    #[test]
    fn move_reports_shrink_since_last_observation() {
        let mut pinch = PinchTracker::default();
        pinch.start(&pair(200.0));
        assert_eq!(pinch.update(&pair(150.0)), Some(50.0));
        assert_eq!(pinch.update(&pair(180.0)), Some(-30.0));
        assert_eq!(pinch.last_distance(), Some(180.0));
    }

    #[test]
    fn single_contact_clears_baseline() {
        let mut pinch = PinchTracker::default();
        pinch.start(&pair(200.0));
        pinch.end(&[Vec2::ZERO]);
        assert_eq!(pinch.last_distance(), None);
        assert_eq!(pinch.update(&[Vec2::ONE]), None);
    }

    #[test]
    fn count_change_rebases_without_delta() {
        let mut pinch = PinchTracker::default();
        let three = vec![Vec2::ZERO, Vec2::X, Vec2::new(500.0, 0.0)];
        pinch.start(&three);
        assert_eq!(pinch.last_distance(), None);

        // Third finger lifted but the host only reports a move.
        assert_eq!(pinch.update(&pair(120.0)), None);
        assert_eq!(pinch.last_distance(), Some(120.0));
        assert_eq!(pinch.update(&pair(100.0)), Some(20.0));
    }

    #[test]
    fn end_with_two_remaining_rebases() {
        let mut pinch = PinchTracker::default();
        pinch.start(&[Vec2::ZERO, Vec2::X, Vec2::Y]);
        pinch.end(&pair(90.0));
        assert_eq!(pinch.active_count(), 2);
        assert_eq!(pinch.update(&pair(100.0)), Some(-10.0));
    }
}
