use glam::Vec2;

/// Drag tracking for the primary pointer.
///
/// Set on drag start, updated on every drag move, cleared on drag end or
/// when the pointer leaves the interactive surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    is_dragging: bool,
    last_pointer: Vec2,
}

impl PointerState {
    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Last observed pointer position in screen pixels.
    #[must_use]
    pub fn last_pointer(&self) -> Vec2 {
        self.last_pointer
    }

    /// Begin a drag at `pos`.
    pub fn begin(&mut self, pos: Vec2) {
        self.is_dragging = true;
        self.last_pointer = pos;
    }

    /// Move the pointer to `pos`, returning the delta since the last
    /// observed position while dragging.
    ///
    /// Moves outside a drag are ignored and leave the state untouched.
    pub fn drag_to(&mut self, pos: Vec2) -> Option<Vec2> {
        if !self.is_dragging {
            return None;
        }
        let delta = pos - self.last_pointer;
        self.last_pointer = pos;
        Some(delta)
    }

    /// End the drag. Returns whether a drag was actually in progress.
    pub fn release(&mut self) -> bool {
        std::mem::replace(&mut self.is_dragging, false)
    }
}
