//! Interactive orientation controller.
//!
//! The [`OrientationController`] turns pointer drags, wheel scrolls, and
//! two-finger pinches into two independent eased subsystems: a pitch/yaw
//! rotation applied to the viewed object and a camera distance along the
//! viewing axis. Input handlers only accumulate *targets*; the per-frame
//! [`tick`](OrientationController::tick) moves the rendered *current*
//! values a fixed fraction of the way there.
//!
//! The controller is host-agnostic. A windowing layer (see the `viewer`
//! feature) or a DOM binding (see the `web` feature) calls the `on_*`
//! methods, or [`handle_event`](OrientationController::handle_event), and
//! calls `tick` once per rendered frame.

/// Pitch/yaw target and eased state.
pub mod rotation;
/// Camera distance target and eased state.
pub mod zoom;

use glam::{EulerRot, Quat, Vec2, Vec3};

pub use rotation::{Orientation, RotationState};
pub use zoom::ZoomState;

use crate::error::TumbleError;
use crate::input::{EventResponse, InputEvent, PinchTracker, PointerState};
use crate::options::ControlOptions;

/// Per-frame output consumed by the rendering back end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransform {
    /// Object rotation about its X axis, radians.
    pub pitch: f32,
    /// Object rotation about its Y axis, radians.
    pub yaw: f32,
    /// Camera distance from the origin along +Z.
    pub zoom_distance: f32,
}

impl FrameTransform {
    /// Object-local rotation: pitch about X, then yaw about Y.
    #[must_use]
    pub fn object_rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0)
    }

    /// Camera position looking down -Z at the origin.
    #[must_use]
    pub fn camera_eye(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.zoom_distance)
    }
}

/// Converts raw input into eased rotation and zoom.
///
/// # Usage
///
/// ```
/// use tumble::controller::OrientationController;
///
/// let mut controller = OrientationController::default();
/// controller.on_pointer_down(100.0, 100.0);
/// controller.on_pointer_move(150.0, 130.0);
/// controller.on_pointer_up();
///
/// // Once per rendered frame:
/// let frame = controller.tick();
/// assert!(frame.yaw > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct OrientationController {
    options: ControlOptions,
    pointer: PointerState,
    rotation: RotationState,
    zoom: ZoomState,
    pinch: PinchTracker,
}

impl OrientationController {
    /// Create a controller at rest at the configured initial distance.
    ///
    /// # Errors
    ///
    /// Returns [`TumbleError::InvalidOptions`] if the options fail
    /// [`ControlOptions::validate`].
    pub fn new(options: ControlOptions) -> Result<Self, TumbleError> {
        options.validate().map_err(TumbleError::InvalidOptions)?;
        Ok(Self::from_valid(options))
    }

    fn from_valid(options: ControlOptions) -> Self {
        Self {
            zoom: ZoomState::at(options.clamp_zoom(options.initial_zoom)),
            options,
            pointer: PointerState::default(),
            rotation: RotationState::default(),
            pinch: PinchTracker::default(),
        }
    }

    /// Active control options.
    #[must_use]
    pub fn options(&self) -> &ControlOptions {
        &self.options
    }

    /// Replace the control options at runtime.
    ///
    /// The zoom target is re-clamped into the new range; eased values keep
    /// converging from wherever they are.
    ///
    /// # Errors
    ///
    /// Returns [`TumbleError::InvalidOptions`] and keeps the previous
    /// options if the new ones fail validation.
    pub fn set_options(
        &mut self,
        options: ControlOptions,
    ) -> Result<(), TumbleError> {
        options.validate().map_err(TumbleError::InvalidOptions)?;
        self.zoom.target = options.clamp_zoom(self.zoom.target);
        self.options = options;
        Ok(())
    }

    /// Drag tracking state.
    #[must_use]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Whether a pointer drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.pointer.is_dragging()
    }

    /// Rotation target and eased state.
    #[must_use]
    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    /// Zoom target and eased state.
    #[must_use]
    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    /// Two-finger pinch tracking state.
    #[must_use]
    pub fn pinch(&self) -> &PinchTracker {
        &self.pinch
    }

    // ── Pointer ──────────────────────────────────────────────────────────

    /// Primary pointer pressed: begin a drag at `(x, y)`.
    pub fn on_pointer_down(&mut self, x: f32, y: f32) {
        self.pointer.begin(Vec2::new(x, y));
        log::debug!("drag start at ({x:.0}, {y:.0})");
    }

    /// Pointer moved. Rotates only while dragging.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let Some(delta) = self.pointer.drag_to(Vec2::new(x, y)) else {
            return;
        };
        self.rotation.drag(delta, self.options.rotate_speed);
        log::trace!(
            "drag delta ({}, {}) -> target pitch {:.3} yaw {:.3}",
            delta.x,
            delta.y,
            self.rotation.target.pitch,
            self.rotation.target.yaw
        );
    }

    /// Primary pointer released: end the drag. The rotation target freezes
    /// where it is; there is no inertia.
    pub fn on_pointer_up(&mut self) {
        if self.pointer.release() {
            log::debug!("drag end");
        }
    }

    /// Pointer left the interactive surface. Same as a release, so a drag
    /// can never stay stuck after the cursor exits.
    pub fn on_pointer_leave(&mut self) {
        self.on_pointer_up();
    }

    // ── Wheel ────────────────────────────────────────────────────────────

    /// Scroll wheel with browser-convention `delta_y` (positive zooms out).
    pub fn on_wheel(&mut self, delta_y: f32) {
        self.accumulate_zoom(delta_y * self.options.wheel_speed);
    }

    // ── Touch ────────────────────────────────────────────────────────────

    /// A contact began; `touches` holds every active contact.
    ///
    /// Exactly two contacts start pinch tracking. Any other count clears
    /// it. Zoom is never changed here.
    ///
    /// Hosts that also report touch contacts as pointer events would
    /// otherwise rotate with the first finger during a pinch, so a second
    /// contact ends any drag in progress. The rotation target is kept.
    pub fn on_touch_start(&mut self, touches: &[Vec2]) {
        self.pinch.start(touches);
        if touches.len() >= 2 && self.pointer.release() {
            log::debug!("drag handed over to {}-finger gesture", touches.len());
        }
    }

    /// Contacts moved; `touches` holds every active contact.
    ///
    /// With two contacts, fingers moving closer push the camera away and
    /// spreading them pulls it in.
    pub fn on_touch_move(&mut self, touches: &[Vec2]) {
        if let Some(shrink) = self.pinch.update(touches) {
            self.accumulate_zoom(shrink * self.options.pinch_speed);
        }
    }

    /// A contact ended; `touches` holds the contacts still active.
    pub fn on_touch_end(&mut self, touches: &[Vec2]) {
        self.pinch.end(touches);
    }

    // ── Dispatch ─────────────────────────────────────────────────────────

    /// Route a queued [`InputEvent`] to the matching handler.
    ///
    /// Wheel and touch events are always [`EventResponse::Consumed`] so the
    /// host can suppress page scrolling and browser zoom. Pointer events
    /// are consumed when they start, continue, or end a drag.
    pub fn handle_event(&mut self, event: &InputEvent) -> EventResponse {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.on_pointer_down(*x, *y);
                EventResponse::Consumed
            }
            InputEvent::PointerMove { x, y } => {
                let dragging = self.is_dragging();
                self.on_pointer_move(*x, *y);
                consumed_if(dragging)
            }
            InputEvent::PointerUp => {
                let dragging = self.is_dragging();
                self.on_pointer_up();
                consumed_if(dragging)
            }
            InputEvent::PointerLeave => {
                let dragging = self.is_dragging();
                self.on_pointer_leave();
                consumed_if(dragging)
            }
            InputEvent::Wheel { delta_y } => {
                self.on_wheel(*delta_y);
                EventResponse::Consumed
            }
            InputEvent::TouchStart { touches } => {
                self.on_touch_start(touches);
                EventResponse::Consumed
            }
            InputEvent::TouchMove { touches } => {
                self.on_touch_move(touches);
                EventResponse::Consumed
            }
            InputEvent::TouchEnd { touches } => {
                self.on_touch_end(touches);
                EventResponse::Consumed
            }
        }
    }

    // ── View ─────────────────────────────────────────────────────────────

    /// Send rotation back to zero and zoom back to the initial distance.
    ///
    /// Only targets change; the rendered values ease back over the
    /// following frames.
    pub fn reset_view(&mut self) {
        self.rotation.target = Orientation::default();
        self.zoom.target = self.options.clamp_zoom(self.options.initial_zoom);
        log::debug!("view reset");
    }

    /// Advance the eased values one frame and return the transform to
    /// render.
    ///
    /// Call at most once per rendered frame. Targets are never modified.
    pub fn tick(&mut self) -> FrameTransform {
        self.rotation.step(self.options.rotation_smoothing);
        self.zoom.step(self.options.zoom_smoothing);
        self.transform()
    }

    /// Current eased transform without advancing.
    #[must_use]
    pub fn transform(&self) -> FrameTransform {
        FrameTransform {
            pitch: self.rotation.current.pitch,
            yaw: self.rotation.current.yaw,
            zoom_distance: self.zoom.current,
        }
    }

    /// Whether every eased value is within `epsilon` of its target.
    #[must_use]
    pub fn is_settled(&self, epsilon: f32) -> bool {
        self.rotation.gap() < epsilon && self.zoom.gap() < epsilon
    }

    fn accumulate_zoom(&mut self, delta: f32) {
        self.zoom
            .accumulate(delta, self.options.zoom_min, self.options.zoom_max);
    }
}

impl Default for OrientationController {
    fn default() -> Self {
        Self::from_valid(ControlOptions::default())
    }
}

fn consumed_if(handled: bool) -> EventResponse {
    if handled {
        EventResponse::Consumed
    } else {
        EventResponse::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::smoothing::ticks_to_converge;

    const EPS: f32 = 1e-5;

    fn pair(d: f32) -> Vec<Vec2> {
        vec![Vec2::new(100.0, 300.0), Vec2::new(100.0 + d, 300.0)]
    }

    #[test]
    fn drag_scenario_rotates_and_releases() {
        let mut c = OrientationController::default();
        c.on_pointer_down(100.0, 100.0);
        c.on_pointer_move(150.0, 130.0);
        c.on_pointer_up();

        let target = c.rotation().target;
        assert!((target.yaw - 0.5).abs() < EPS);
        assert!((target.pitch - 0.3).abs() < EPS);
        assert!(!c.is_dragging());

        for _ in 0..50 {
            let _ = c.tick();
        }
        assert_eq!(c.rotation().target, target);
    }

    #[test]
    fn drag_accumulates_sum_of_deltas() {
        let mut c = OrientationController::default();
        c.on_pointer_down(0.0, 0.0);
        let xs = [12.0_f32, -4.0, 30.0, 30.0, -100.0, 7.5];
        let mut x = 0.0;
        for dx in xs {
            x += dx;
            c.on_pointer_move(x, 0.0);
        }
        let expected = 0.01 * xs.iter().sum::<f32>();
        assert!((c.rotation().target.yaw - expected).abs() < 1e-4);
        assert_eq!(c.rotation().target.pitch, 0.0);
    }

    #[test]
    fn rotation_is_never_wrapped() {
        let mut c = OrientationController::default();
        c.on_pointer_down(0.0, 0.0);
        c.on_pointer_move(2000.0, 0.0);
        assert!((c.rotation().target.yaw - 20.0).abs() < 1e-3);
    }

    #[test]
    fn move_without_drag_is_a_no_op() {
        let mut c = OrientationController::default();
        c.on_pointer_move(500.0, 500.0);
        assert_eq!(*c.rotation(), RotationState::default());
        assert_eq!(
            c.handle_event(&InputEvent::PointerMove { x: 1.0, y: 1.0 }),
            EventResponse::Ignored
        );
    }

    #[test]
    fn pointer_leave_ends_drag() {
        let mut c = OrientationController::default();
        c.on_pointer_down(10.0, 10.0);
        assert_eq!(
            c.handle_event(&InputEvent::PointerLeave),
            EventResponse::Consumed
        );
        assert!(!c.is_dragging());
        c.on_pointer_move(90.0, 90.0);
        assert_eq!(c.rotation().target, Orientation::default());
    }

    #[test]
    fn wheel_target_stays_clamped_after_every_event() {
        let mut c = OrientationController::default();
        let deltas = [
            120.0_f32, 900.0, 5000.0, -30.0, -1200.0, -8000.0, 250.0, -1.0,
        ];
        for d in deltas {
            assert_eq!(
                c.handle_event(&InputEvent::Wheel { delta_y: d }),
                EventResponse::Consumed
            );
            let z = c.zoom().target;
            assert!((3.0..=15.0).contains(&z), "zoom target {z} escaped");
        }
        // 3.0 after the big negative scrolls, then +2.5 and -0.01.
        assert!((c.zoom().target - 5.49).abs() < 1e-4);
    }

    #[test]
    fn wheel_scales_by_wheel_speed() {
        let mut c = OrientationController::default();
        c.on_wheel(100.0);
        assert!((c.zoom().target - 6.0).abs() < EPS);
        c.on_wheel(-150.0);
        assert!((c.zoom().target - 4.5).abs() < EPS);
    }

    #[test]
    fn pinch_changes_zoom_by_clamped_distance_delta() {
        let mut c = OrientationController::default();
        let old = c.zoom().target;
        c.on_touch_start(&pair(300.0));
        c.on_touch_move(&pair(200.0));
        let expected = (old + (300.0 - 200.0) * 0.02).clamp(3.0, 15.0) - old;
        assert!((c.zoom().target - old - expected).abs() < EPS);

        // Spreading far apart clamps at the near limit.
        c.on_touch_move(&pair(2000.0));
        assert_eq!(c.zoom().target, 3.0);
    }

    #[test]
    fn touch_counts_other_than_two_leave_zoom_alone() {
        let mut c = OrientationController::default();
        let before = *c.zoom();
        c.on_touch_start(&[Vec2::ZERO]);
        c.on_touch_move(&[Vec2::new(40.0, 40.0)]);
        let three = [Vec2::ZERO, Vec2::X * 50.0, Vec2::Y * 80.0];
        c.on_touch_start(&three);
        c.on_touch_move(&three.map(|p| p * 2.0));
        assert_eq!(*c.zoom(), before);
    }

    #[test]
    fn second_finger_ends_touch_drag() {
        let mut c = OrientationController::default();
        // Browsers report the first finger as a pointer as well.
        c.on_pointer_down(100.0, 300.0);
        c.on_touch_start(&[Vec2::new(100.0, 300.0)]);
        c.on_pointer_move(110.0, 300.0);
        assert!(c.is_dragging());
        let before = c.rotation().target;

        c.on_touch_start(&pair(200.0));
        assert!(!c.is_dragging());
        assert_eq!(c.rotation().target, before);

        // The first finger keeps moving while pinching: only zoom changes.
        c.on_pointer_move(140.0, 260.0);
        c.on_touch_move(&pair(150.0));
        assert_eq!(c.rotation().target, before);
        assert!((c.zoom().target - 6.0).abs() < EPS);
    }

    #[test]
    fn pinch_rebases_after_third_finger_lifts() {
        let mut c = OrientationController::default();
        c.on_touch_start(&[Vec2::ZERO, Vec2::X * 10.0, Vec2::Y * 10.0]);
        // First two-finger move after the count changed only sets a
        // baseline.
        c.on_touch_move(&pair(400.0));
        assert_eq!(c.zoom().target, 5.0);
        c.on_touch_move(&pair(350.0));
        assert!((c.zoom().target - 6.0).abs() < EPS);
    }

    #[test]
    fn current_converges_monotonically_without_overshoot() {
        let mut c = OrientationController::default();
        c.on_pointer_down(0.0, 0.0);
        c.on_pointer_move(300.0, -200.0);
        c.on_pointer_up();
        c.on_wheel(600.0);

        let target = c.rotation().target;
        let eps = 1e-3;
        let n = ticks_to_converge(3.0, 0.15, eps / 2.0)
            .max(ticks_to_converge(6.0, 0.1, eps / 2.0));

        let mut last_gap = c.rotation().gap();
        let mut last_zoom_gap = c.zoom().gap();
        for _ in 0..n {
            let frame = c.tick();
            assert!(frame.yaw <= target.yaw);
            assert!(frame.pitch >= target.pitch);
            assert!(frame.zoom_distance <= c.zoom().target);
            assert!(c.rotation().gap() <= last_gap);
            assert!(c.zoom().gap() <= last_zoom_gap);
            last_gap = c.rotation().gap();
            last_zoom_gap = c.zoom().gap();
        }
        assert!(c.is_settled(eps));
    }

    #[test]
    fn release_freezes_target_while_current_catches_up() {
        let mut c = OrientationController::default();
        c.on_pointer_down(0.0, 0.0);
        c.on_pointer_move(100.0, 0.0);
        let first = c.tick();
        c.on_pointer_up();

        let frozen = c.rotation().target;
        let second = c.tick();
        assert_eq!(c.rotation().target, frozen);
        assert!(second.yaw > first.yaw);
        assert!(second.yaw < frozen.yaw);
    }

    #[test]
    fn rotation_and_zoom_are_independent() {
        let mut c = OrientationController::default();
        c.on_wheel(500.0);
        let _ = c.tick();
        assert_eq!(c.rotation().current, Orientation::default());

        let mut d = OrientationController::default();
        d.on_pointer_down(0.0, 0.0);
        d.on_pointer_move(80.0, 80.0);
        let _ = d.tick();
        assert_eq!(d.zoom().current, 5.0);
    }

    #[test]
    fn narrowing_the_range_reclamps_target_only() {
        let mut c = OrientationController::default();
        c.on_wheel(1000.0);
        for _ in 0..200 {
            let _ = c.tick();
        }
        let opts = ControlOptions {
            zoom_max: 8.0,
            ..ControlOptions::default()
        };
        c.set_options(opts).unwrap();
        assert_eq!(c.zoom().target, 8.0);
        assert!(c.zoom().current > 8.0);
        for _ in 0..200 {
            let _ = c.tick();
        }
        assert!((c.zoom().current - 8.0).abs() < 1e-3);
    }

    #[test]
    fn invalid_options_are_rejected() {
        let bad = ControlOptions {
            zoom_smoothing: 0.0,
            ..ControlOptions::default()
        };
        assert!(OrientationController::new(bad).is_err());

        let mut c = OrientationController::default();
        assert!(c.set_options(bad).is_err());
        assert_eq!(c.options().zoom_smoothing, 0.1);
    }

    #[test]
    fn reset_view_eases_back() {
        let mut c = OrientationController::default();
        c.on_pointer_down(0.0, 0.0);
        c.on_pointer_move(40.0, 40.0);
        c.on_pointer_up();
        c.on_wheel(300.0);
        for _ in 0..100 {
            let _ = c.tick();
        }
        c.reset_view();
        assert_eq!(c.rotation().target, Orientation::default());
        assert_eq!(c.zoom().target, 5.0);
        assert!(!c.is_settled(1e-3));
        for _ in 0..200 {
            let _ = c.tick();
        }
        assert!(c.is_settled(1e-3));
    }

    #[test]
    fn frame_transform_feeds_object_and_camera() {
        let frame = FrameTransform {
            pitch: 0.0,
            yaw: std::f32::consts::FRAC_PI_2,
            zoom_distance: 7.0,
        };
        assert_eq!(frame.camera_eye(), Vec3::new(0.0, 0.0, 7.0));
        let turned = frame.object_rotation() * Vec3::X;
        assert!((turned - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
    }
}
