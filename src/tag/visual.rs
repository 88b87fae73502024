//! Per-tag visual state.
//!
//! Font size and hue are fixed when the cloud is built. Position, scale,
//! opacity and stack order are overwritten on every layout pass.

/// Derived presentation state for one tag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TagVisual {
    /// Font size in pixels.
    pub font_size: f64,
    /// Hue in degrees, `360 * i / N`.
    pub hue: f64,
    /// Offset from the container center, in pixels.
    pub x: f64,
    pub y: f64,
    /// Depth toward the viewer, in pixels.
    pub z: f64,
    /// Depth-based scale, before any hover emphasis.
    pub scale: f64,
    pub opacity: f64,
    /// Higher values render on top.
    pub stack_order: i32,
}

impl TagVisual {
    /// Create a visual with its fixed attributes and a neutral pose.
    pub fn new(font_size: f64, hue: f64) -> Self {
        Self {
            font_size,
            hue,
            scale: 1.0,
            opacity: 1.0,
            ..Default::default()
        }
    }

    /// CSS transform for the depth-projected pose.
    pub fn css_transform(&self) -> String {
        format!(
            "translate3d({}px, {}px, {}px) scale({})",
            self.x, self.y, self.z, self.scale
        )
    }
}

/// Tag state flags packed into a single byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagState {
    flags: u8,
}

impl TagState {
    const HOVERED: u8 = 0b0000_0001;

    /// Create a new default tag state.
    #[inline]
    pub fn new() -> Self {
        Self { flags: 0 }
    }

    /// Check if the tag is hovered.
    #[inline]
    pub fn is_hovered(self) -> bool {
        self.flags & Self::HOVERED != 0
    }

    /// Set the hovered state.
    #[inline]
    pub fn set_hovered(&mut self, hovered: bool) {
        if hovered {
            self.flags |= Self::HOVERED;
        } else {
            self.flags &= !Self::HOVERED;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_visual_is_neutral() {
        let visual = TagVisual::new(18.0, 120.0);
        assert_eq!(visual.font_size, 18.0);
        assert_eq!(visual.hue, 120.0);
        assert_eq!(visual.scale, 1.0);
        assert_eq!(visual.opacity, 1.0);
        assert_eq!(visual.stack_order, 0);
    }

    #[test]
    fn test_css_transform() {
        let visual = TagVisual {
            x: 10.0,
            y: -2.5,
            z: 40.0,
            scale: 1.25,
            ..TagVisual::new(12.0, 0.0)
        };
        assert_eq!(
            visual.css_transform(),
            "translate3d(10px, -2.5px, 40px) scale(1.25)"
        );
    }

    #[test]
    fn test_tag_state_hovered() {
        let mut state = TagState::new();
        assert!(!state.is_hovered());

        state.set_hovered(true);
        assert!(state.is_hovered());

        state.set_hovered(false);
        assert!(!state.is_hovered());
    }
}
