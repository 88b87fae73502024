//! Hover slowdown bookkeeping.
//!
//! Hovering a tag halves the cloud's speed, and leaving it restores the
//! speed exactly. The pre-hover speed is saved rather than re-derived by
//! doubling, so moving straight from one tag to another never compounds the
//! slowdown and a single leave always restores the original value.

use crate::cloud::CloudState;
use crate::tag::TagId;

/// Speed multiplier applied while any tag is hovered.
pub const HOVER_SLOWDOWN: f64 = 0.5;

/// Extra scale applied to the hovered tag on top of its depth scale.
pub const HOVER_SCALE: f64 = 1.2;

/// Minimum stack order of the hovered tag.
pub const HOVER_STACK_ORDER: i32 = 1000;

/// Stack order that keeps the hovered tag above every other tag on a
/// sphere of `radius` pixels.
pub fn hover_stack_order(radius: f64) -> i32 {
    HOVER_STACK_ORDER.max(radius.ceil() as i32 + 1)
}

/// Outcome of a hover event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverChange {
    /// No tag was hovered; the cloud slowed down.
    Entered,
    /// Another tag was hovered; the highlight moved without slowing further.
    Moved { from: TagId },
    /// The tag was already hovered.
    Unchanged,
}

/// Tracks the hovered tag and the speed to restore when it is left.
#[derive(Debug, Clone, Default)]
pub struct HoverController {
    hovered: Option<TagId>,
    saved_speed: Option<f64>,
}

impl HoverController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<TagId> {
        self.hovered
    }

    /// Speed that will be restored on leave, if a tag is hovered.
    pub fn saved_speed(&self) -> Option<f64> {
        self.saved_speed
    }

    /// Record a hover on `id`, slowing `state` on the first hover.
    pub fn hover(&mut self, id: TagId, state: &mut CloudState) -> HoverChange {
        match self.hovered {
            Some(current) if current == id => HoverChange::Unchanged,
            Some(current) => {
                self.hovered = Some(id);
                HoverChange::Moved { from: current }
            }
            None => {
                self.saved_speed = Some(state.speed);
                state.speed *= HOVER_SLOWDOWN;
                self.hovered = Some(id);
                HoverChange::Entered
            }
        }
    }

    /// Record a leave from `id`, restoring the saved speed.
    ///
    /// Returns false when `id` is not the hovered tag; the speed is left
    /// alone in that case.
    pub fn leave(&mut self, id: TagId, state: &mut CloudState) -> bool {
        if self.hovered != Some(id) {
            log::warn!("leave from {id} without a matching hover");
            return false;
        }
        if let Some(speed) = self.saved_speed.take() {
            state.speed = speed;
        }
        self.hovered = None;
        true
    }
}
