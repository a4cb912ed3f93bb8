use crate::util::smoothing::approach;

/// Camera distance: a clamped target and its smoothed counterpart.
///
/// `target` always lies in the configured range. `current` can sit outside
/// it only transiently, e.g. right after the range was narrowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    /// Requested camera distance, clamped on every write.
    pub target: f32,
    /// Camera distance actually applied.
    pub current: f32,
}

impl ZoomState {
    /// Start at rest at `distance`.
    #[must_use]
    pub fn at(distance: f32) -> Self {
        Self {
            target: distance,
            current: distance,
        }
    }

    /// Add `delta` to the target and clamp into `[min, max]`.
    pub fn accumulate(&mut self, delta: f32, min: f32, max: f32) {
        self.target = (self.target + delta).clamp(min, max);
    }

    /// Ease `current` toward `target` by `factor` of the gap.
    pub fn step(&mut self, factor: f32) {
        self.current = approach(self.current, self.target, factor);
    }

    /// Remaining gap between current and target.
    #[must_use]
    pub fn gap(&self) -> f32 {
        (self.target - self.current).abs()
    }
}
