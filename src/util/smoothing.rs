//! Exponential smoothing helpers for per-frame easing.
//!
//! Every eased value in the controller moves a fixed fraction of its
//! remaining distance each frame. With a factor in `(0, 1]` the step never
//! overshoots: the gap shrinks by `(1 - factor)` per tick.

/// Advance `current` toward `target` by `factor` of the remaining gap.
///
/// `factor` is expected in `(0, 1]`; `1.0` snaps to the target.
#[inline]
#[must_use]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Whether `factor` yields a monotonic, non-overshooting approach.
#[inline]
#[must_use]
pub fn is_valid_factor(factor: f32) -> bool {
    factor > 0.0 && factor <= 1.0
}

/// Upper bound on the ticks needed for an initial `gap` to shrink below
/// `epsilon` when easing with `factor`.
///
/// Returns `0` when the gap is already within `epsilon`, and `u32::MAX`
/// for a factor that never converges.
#[must_use]
pub fn ticks_to_converge(gap: f32, factor: f32, epsilon: f32) -> u32 {
    let gap = gap.abs();
    if gap < epsilon {
        return 0;
    }
    if !is_valid_factor(factor) {
        return u32::MAX;
    }
    if factor >= 1.0 {
        return 1;
    }
    // gap * (1 - factor)^n < epsilon
    let n = (epsilon / gap).ln() / (1.0 - factor).ln();
    n.ceil().max(1.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_moves_by_fraction_of_gap() {
        assert!((approach(0.0, 10.0, 0.15) - 1.5).abs() < 1e-6);
        assert!((approach(10.0, 0.0, 0.1) - 9.0).abs() < 1e-6);
        assert_eq!(approach(3.0, 7.0, 1.0), 7.0);
    }

    #[test]
    fn approach_at_target_is_fixed_point() {
        assert_eq!(approach(4.25, 4.25, 0.15), 4.25);
    }

    #[test]
    fn factor_validity() {
        assert!(is_valid_factor(0.15));
        assert!(is_valid_factor(1.0));
        assert!(!is_valid_factor(0.0));
        assert!(!is_valid_factor(1.2));
        assert!(!is_valid_factor(f32::NAN));
    }

    #[test]
    fn tick_bound_is_sufficient() {
        let (gap, factor, eps) = (5.0_f32, 0.15_f32, 1e-3_f32);
        let n = ticks_to_converge(gap, factor, eps);
        let mut current = 0.0_f32;
        for _ in 0..n {
            current = approach(current, gap, factor);
        }
        assert!((gap - current).abs() < eps);
    }

    #[test]
    fn tick_bound_edge_cases() {
        assert_eq!(ticks_to_converge(0.0, 0.15, 1e-3), 0);
        assert_eq!(ticks_to_converge(1.0, 1.0, 1e-3), 1);
        assert_eq!(ticks_to_converge(1.0, 0.0, 1e-3), u32::MAX);
    }
}
