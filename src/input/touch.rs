use std::collections::BTreeMap;

use glam::Vec2;

use super::event::InputEvent;

/// Platform-agnostic phase of a single touch contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// Contact began.
    Started,
    /// Contact moved.
    Moved,
    /// Contact lifted.
    Ended,
    /// Contact was cancelled by the platform.
    Cancelled,
}

#[cfg(feature = "viewer")]
impl From<winit::event::TouchPhase> for TouchPhase {
    fn from(phase: winit::event::TouchPhase) -> Self {
        match phase {
            winit::event::TouchPhase::Started => Self::Started,
            winit::event::TouchPhase::Moved => Self::Moved,
            winit::event::TouchPhase::Ended => Self::Ended,
            winit::event::TouchPhase::Cancelled => Self::Cancelled,
        }
    }
}

/// Folds per-contact touch updates into whole touch-list events.
///
/// Windowing systems such as winit report one contact per event, while the
/// controller reasons about every active contact at once (the DOM model).
/// Contacts are kept ordered by id so the first two fingers down stay the
/// pinch pair.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    active: BTreeMap<u64, Vec2>,
}

impl TouchTracker {
    /// Number of contacts currently down.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Apply a single-contact update and produce the matching list event.
    ///
    /// Moves and ends for unknown contacts are dropped.
    pub fn handle(
        &mut self,
        id: u64,
        phase: TouchPhase,
        pos: Vec2,
    ) -> Option<InputEvent> {
        match phase {
            TouchPhase::Started => {
                let _ = self.active.insert(id, pos);
                Some(InputEvent::TouchStart {
                    touches: self.positions(),
                })
            }
            TouchPhase::Moved => {
                let slot = self.active.get_mut(&id)?;
                *slot = pos;
                Some(InputEvent::TouchMove {
                    touches: self.positions(),
                })
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                let _ = self.active.remove(&id)?;
                Some(InputEvent::TouchEnd {
                    touches: self.positions(),
                })
            }
        }
    }

    fn positions(&self) -> Vec<Vec2> {
        self.active.values().copied().collect()
    }
}
