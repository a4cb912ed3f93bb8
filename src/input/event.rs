use glam::Vec2;

/// Platform-agnostic input events.
///
/// These are fed into an
/// [`OrientationController`](crate::controller::OrientationController),
/// either through its per-event methods or through
/// [`handle_event`](crate::controller::OrientationController::handle_event).
///
/// # Example
///
/// ```
/// use tumble::controller::OrientationController;
/// use tumble::input::InputEvent;
///
/// let mut controller = OrientationController::default();
/// let _ = controller.handle_event(&InputEvent::PointerDown { x: 100.0, y: 200.0 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary pointer pressed at an absolute screen position.
    PointerDown {
        /// Horizontal position in screen pixels.
        x: f32,
        /// Vertical position in screen pixels.
        y: f32,
    },
    /// Pointer moved to an absolute screen position.
    PointerMove {
        /// Horizontal position in screen pixels.
        x: f32,
        /// Vertical position in screen pixels.
        y: f32,
    },
    /// Primary pointer released.
    PointerUp,
    /// Pointer left the interactive surface.
    PointerLeave,
    /// Scroll wheel, browser convention (positive = scroll down = zoom out).
    Wheel {
        /// Vertical scroll amount in pixels.
        delta_y: f32,
    },
    /// A contact began; carries every contact now active.
    TouchStart {
        /// Active touch positions in screen pixels.
        touches: Vec<Vec2>,
    },
    /// One or more contacts moved; carries every contact now active.
    TouchMove {
        /// Active touch positions in screen pixels.
        touches: Vec<Vec2>,
    },
    /// A contact ended or was cancelled; carries the remaining contacts.
    TouchEnd {
        /// Touch positions still active after the change.
        touches: Vec<Vec2>,
    },
}

/// Whether the controller acted on an event.
///
/// Hosts with cancelable events should suppress their default handling
/// (page scroll, browser pinch zoom) for [`Consumed`](Self::Consumed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum EventResponse {
    /// The controller handled the event.
    Consumed,
    /// The event did not affect the controller.
    Ignored,
}

impl EventResponse {
    /// `true` for [`Consumed`](Self::Consumed).
    #[must_use]
    pub fn is_consumed(self) -> bool {
        self == Self::Consumed
    }
}
