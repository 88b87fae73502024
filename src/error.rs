//! Error types for the tag cloud.
//!
//! Layout itself never fails: degenerate inputs (no tags, equal counts) are
//! handled in place. Errors come from malformed configuration, malformed tag
//! records, out-of-range indices, and the browser surface.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Root error type for all tag cloud failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CloudError {
    /// A configuration value is out of its accepted range.
    #[error("config error: {0}")]
    Config(String),

    /// A tag record cannot be placed on the sphere.
    #[error("invalid tag: {0}")]
    InvalidTag(String),

    /// A hover/leave event referred to a tag that does not exist.
    #[error("tag index {index} out of range for {len} tags")]
    IndexOutOfRange { index: usize, len: usize },

    /// The browser environment is missing something the widget needs.
    #[error("dom error: {0}")]
    Dom(String),

    /// A JS value or JSON document could not be decoded.
    #[error("deserialize error: {0}")]
    Deserialize(String),
}

pub type CloudResult<T> = Result<T, CloudError>;

impl From<serde_wasm_bindgen::Error> for CloudError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::Deserialize(err.to_string())
    }
}

impl From<serde_json::Error> for CloudError {
    fn from(err: serde_json::Error) -> Self {
        Self::Deserialize(err.to_string())
    }
}

impl From<CloudError> for JsValue {
    fn from(err: CloudError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
