//! Tag records and their per-frame visual state.
//!
//! Tags are immutable inputs identified only by their position in the input
//! sequence. Each tag owns exactly one [`TagVisual`], recomputed in place on
//! every layout pass.

mod label;
mod record;
mod visual;

pub use label::parse_tag_label;
pub use record::{Tag, TagId};
pub use visual::{TagState, TagVisual};
