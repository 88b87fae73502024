//! Tag cloud configuration.
//!
//! Options arrive from JavaScript as a plain object. Every option is
//! optional and falls back to its default; unrecognized keys are ignored.
//! Values of the wrong type fail to decode, and out-of-range values are
//! rejected by [`CloudConfig::validate`].

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::error::{CloudError, CloudResult};

/// Angle added per frame at speed 1.0, in radians.
pub const BASE_INCREMENT: f64 = 0.002;

/// Fraction of the smaller viewport side used as the sphere radius.
pub const VIEWPORT_RADIUS_FACTOR: f64 = 0.3;

/// Speed used when the widget is bootstrapped from page data.
pub const PAGE_SPEED: f64 = 0.3;

/// Quiet period before a resize triggers a rebuild.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

/// Runtime configuration for one tag cloud instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudConfig {
    /// Sphere radius in pixels (default: 200).
    pub radius: f64,
    /// Rotation speed multiplier (default: 0.5).
    pub speed: f64,
    /// Font family applied to every tag (default: "Arial").
    pub font: String,
    /// Font size for the least popular tag, in pixels (default: 12).
    pub min_font: f64,
    /// Font size for the most popular tag, in pixels (default: 24).
    pub max_font: f64,
    /// Container text color (default: "#333").
    pub text_color: String,
    /// Color of the hovered tag (default: "#40e0d0").
    pub hover_color: String,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            radius: 200.0,
            speed: 0.5,
            font: "Arial".to_string(),
            min_font: 12.0,
            max_font: 24.0,
            text_color: "#333".to_string(),
            hover_color: "#40e0d0".to_string(),
        }
    }
}

impl CloudConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> CloudResult<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(CloudError::Config(format!(
                "radius must be a positive finite number, got {}",
                self.radius
            )));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(CloudError::Config(format!(
                "speed must be a non-negative finite number, got {}",
                self.speed
            )));
        }
        if !self.min_font.is_finite() || self.min_font <= 0.0 {
            return Err(CloudError::Config(format!(
                "minFont must be positive, got {}",
                self.min_font
            )));
        }
        if !self.max_font.is_finite() || self.max_font < self.min_font {
            return Err(CloudError::Config(format!(
                "maxFont must be >= minFont, got {} < {}",
                self.max_font, self.min_font
            )));
        }
        if self.hover_color.trim().is_empty() {
            return Err(CloudError::Config("hoverColor must not be empty".to_string()));
        }
        Ok(())
    }

    /// Decode options from a JS object. `undefined` and `null` mean defaults.
    pub fn from_js(options: &JsValue) -> CloudResult<Self> {
        let config: Self = if options.is_undefined() || options.is_null() {
            Self::default()
        } else {
            serde_wasm_bindgen::from_value(options.clone())?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON string.
    pub fn from_json(json: &str) -> CloudResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Override the radius, keeping every other option.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Override the speed, keeping every other option.
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }
}

/// Sphere radius for a viewport of the given size.
pub fn radius_for_viewport(width: f64, height: f64) -> f64 {
    width.min(height) * VIEWPORT_RADIUS_FACTOR
}
