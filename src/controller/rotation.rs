use glam::Vec2;

use crate::util::smoothing::approach;

/// Pitch/yaw pair in radians.
///
/// Angles are never wrapped: only the rendered orientation is periodic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    /// Rotation about the horizontal (X) axis.
    pub pitch: f32,
    /// Rotation about the vertical (Y) axis.
    pub yaw: f32,
}

/// Accumulated drag rotation and its smoothed, rendered counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    /// Orientation accumulated from drag deltas.
    pub target: Orientation,
    /// Orientation actually applied to the rendered object.
    pub current: Orientation,
}

impl RotationState {
    /// Accumulate a drag delta in pixels. Horizontal motion turns yaw,
    /// vertical motion turns pitch.
    pub fn drag(&mut self, delta: Vec2, rotate_speed: f32) {
        self.target.yaw += delta.x * rotate_speed;
        self.target.pitch += delta.y * rotate_speed;
    }

    /// Ease `current` toward `target` by `factor` of the gap.
    pub fn step(&mut self, factor: f32) {
        self.current.pitch =
            approach(self.current.pitch, self.target.pitch, factor);
        self.current.yaw = approach(self.current.yaw, self.target.yaw, factor);
    }

    /// Largest remaining per-axis gap between current and target.
    #[must_use]
    pub fn gap(&self) -> f32 {
        (self.target.pitch - self.current.pitch)
            .abs()
            .max((self.target.yaw - self.current.yaw).abs())
    }
}
