//! Tag cloud state and its frame-by-frame behavior.
//!
//! The cloud keeps its mutable state in explicit owned values that are
//! passed to pure layout functions, so every frame can be driven and
//! inspected without a live frame scheduler:
//! - `CloudState`: rotation angle, speed multiplier, sphere radius
//! - `AnimationDriver`: advances the angle once per frame until stopped
//! - `HoverController`: slows the cloud while a tag is hovered
//! - `CloudEngine`: owns the tags, their visuals, and all of the above

mod animation;
mod engine;
mod interaction;
mod state;
mod style;

pub use animation::{AnimationDriver, DriverStatus};
pub use engine::CloudEngine;
pub use interaction::{HOVER_SCALE, HOVER_SLOWDOWN, HoverChange, HoverController, hover_stack_order};
pub use state::CloudState;
pub use style::TagStyle;
