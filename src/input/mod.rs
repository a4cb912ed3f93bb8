//! Input handling: event types and the small state machines the
//! orientation controller is built from.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Two-finger pinch distance tracking.
pub mod pinch;
/// Primary pointer drag tracking.
pub mod pointer;
/// Per-contact touch updates folded into touch-list events.
pub mod touch;

pub use event::{EventResponse, InputEvent};
pub use keyboard::KeyAction;
pub use pinch::PinchTracker;
pub use pointer::PointerState;
pub use touch::{TouchPhase, TouchTracker};
