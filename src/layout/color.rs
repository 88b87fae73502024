//! Index-based tag palette.
//!
//! Hues are spread evenly around the color wheel in tag order, so the same
//! tag list always produces the same colors.

/// Saturation shared by every tag color, in percent.
pub const SATURATION: u32 = 70;

/// Lightness shared by every tag color, in percent.
pub const LIGHTNESS: u32 = 50;

/// Alpha of the tinted background behind each tag.
pub const BACKGROUND_ALPHA: f64 = 0.1;

/// Hue in degrees for tag `index` of `count`.
pub fn hue_for_index(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    360.0 * index as f64 / count as f64
}

/// CSS text color for a hue.
pub fn text_color(hue: f64) -> String {
    format!("hsl({hue}, {SATURATION}%, {LIGHTNESS}%)")
}

/// CSS background tint for a hue.
pub fn background_color(hue: f64) -> String {
    format!("hsla({hue}, {SATURATION}%, {LIGHTNESS}%, {BACKGROUND_ALPHA})")
}
