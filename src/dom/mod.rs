//! Browser surface for the tag cloud.
//!
//! Builds one anchor element per tag inside a container, applies each
//! frame's styles, drives the frame loop with `requestAnimationFrame`, and
//! wires pointer hover and leave. Everything here is a thin shell over
//! [`crate::cloud::CloudEngine`], which holds all of the behavior.

mod extract;
mod page;
mod widget;

pub use extract::{TAG_DATA_SELECTOR, tags_from_document};
pub use page::{mount_from_page, unmount_page};
pub use widget::{ITEM_CLASS, MountedCloud};

use wasm_bindgen::JsValue;

use crate::error::CloudError;

/// Map a JS exception into a [`CloudError::Dom`] with some context.
pub(crate) fn js_error(context: &'static str) -> impl Fn(JsValue) -> CloudError {
    move |value| {
        let detail = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        CloudError::Dom(format!("{context}: {detail}"))
    }
}
