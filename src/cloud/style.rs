//! Presentation attributes for one tag, ready for a rendering surface.

use serde::Serialize;

use crate::cloud::HOVER_SCALE;
use crate::layout::color;
use crate::tag::{TagState, TagVisual};

/// Style values for a tag element, as CSS strings and numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagStyle {
    pub transform: String,
    pub opacity: f64,
    pub z_index: i32,
    pub color: String,
    pub background_color: String,
    pub font_size: String,
}

impl TagStyle {
    /// Build the style for a tag from its visual and hover state.
    ///
    /// The hovered tag gets an extra scale on top of its depth transform and
    /// the hover color; everything else uses its hue.
    pub fn from_visual(visual: &TagVisual, state: TagState, hover_color: &str) -> Self {
        let mut transform = visual.css_transform();
        let color = if state.is_hovered() {
            transform.push_str(&format!(" scale({HOVER_SCALE})"));
            hover_color.to_string()
        } else {
            color::text_color(visual.hue)
        };

        Self {
            transform,
            opacity: visual.opacity,
            z_index: visual.stack_order,
            color,
            background_color: color::background_color(visual.hue),
            font_size: format!("{}px", visual.font_size),
        }
    }
}
