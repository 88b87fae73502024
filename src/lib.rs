//! Tag Sphere - WASM Module
//!
//! This module provides a rotating pseudo-3D tag cloud: tags are placed on a
//! sphere with an equal-area spiral, spun a little every frame, and
//! projected to 2D with depth-based scale, opacity and stacking. It is
//! compiled to WebAssembly and exposes a JavaScript-friendly API via
//! wasm-bindgen.
//!
//! # Architecture
//!
//! - `tag`: Tag records, per-tag visual state, `Name (Count)` label parsing
//! - `layout`: Font scaling, sphere placement, color palette (pure functions)
//! - `cloud`: Rotation state, animation driver, hover handling, engine
//! - `spatial`: R-tree index over projected tags for pointer hit testing
//! - `dom`: Browser surface (elements, frame loop, listeners, page bootstrap)

use js_sys::Float32Array;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

pub mod cloud;
pub mod config;
pub mod dom;
pub mod error;
pub mod layout;
pub mod logging;
pub mod spatial;
pub mod tag;

use cloud::CloudEngine;
use config::CloudConfig;
use dom::MountedCloud;
use tag::{Tag, TagId};

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
}

/// Set the console log level: "error", "warn", "info", "debug" or "trace".
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let level: log::LevelFilter = level
        .parse()
        .map_err(|_| error::CloudError::Config(format!("unknown log level '{level}'")))?;
    logging::init(level);
    Ok(())
}

/// Decode an array of `{ name, url, count }` records.
fn tags_from_js(tags: JsValue) -> Result<Vec<Tag>, JsValue> {
    let tags: Vec<Tag> = serde_wasm_bindgen::from_value(tags).map_err(error::CloudError::from)?;
    Ok(tags)
}

/// Headless tag cloud.
///
/// Wraps the internal CloudEngine without touching the DOM. Callers drive
/// frames themselves and read poses back as flat buffers, which suits
/// canvas or WebGL renderers and tests.
#[wasm_bindgen]
pub struct TagCloudWasm {
    engine: CloudEngine,
}

#[wasm_bindgen]
impl TagCloudWasm {
    /// Create a cloud from an array of tags and an optional options object.
    #[wasm_bindgen(constructor)]
    pub fn new(tags: JsValue, options: JsValue) -> Result<TagCloudWasm, JsValue> {
        let config = CloudConfig::from_js(&options)?;
        let engine = CloudEngine::new(tags_from_js(tags)?, config)?;
        Ok(Self { engine })
    }

    // =========================================================================
    // Frame Operations
    // =========================================================================

    /// Advance one frame. Returns false once stopped.
    pub fn tick(&mut self) -> bool {
        self.engine.tick()
    }

    /// Advance up to `frames` frames. Returns how many ran.
    #[wasm_bindgen(js_name = runFrames)]
    pub fn run_frames(&mut self, frames: u32) -> u32 {
        self.engine.run_frames(frames)
    }

    /// Stop the animation for good.
    pub fn stop(&mut self) {
        self.engine.stop();
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// Highlight a tag and slow the rotation.
    pub fn hover(&mut self, index: usize) -> Result<(), JsValue> {
        self.engine.hover(index)?;
        Ok(())
    }

    /// Clear the highlight on a tag, restore speed, and relayout.
    pub fn leave(&mut self, index: usize) -> Result<(), JsValue> {
        self.engine.leave(index)?;
        Ok(())
    }

    /// Topmost tag under a point relative to the cloud center.
    #[wasm_bindgen(js_name = tagAt)]
    pub fn tag_at(&self, x: f64, y: f64) -> Option<u32> {
        self.engine.tag_at(x, y).map(TagId::raw)
    }

    /// Feed pointer motion; hovers and leaves tags as needed.
    ///
    /// Returns the hovered tag after the move.
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<Option<u32>, JsValue> {
        Ok(self.engine.pointer_move(x, y)?.map(TagId::raw))
    }

    /// The pointer left the cloud.
    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&mut self) -> Result<(), JsValue> {
        self.engine.pointer_leave()?;
        Ok(())
    }

    #[wasm_bindgen(js_name = hoveredTag)]
    pub fn hovered_tag(&self) -> Option<u32> {
        self.engine.hovered().map(TagId::raw)
    }

    // =========================================================================
    // State Access
    // =========================================================================

    #[wasm_bindgen(js_name = tagCount)]
    pub fn tag_count(&self) -> u32 {
        self.engine.len() as u32
    }

    pub fn angle(&self) -> f64 {
        self.engine.state().angle
    }

    pub fn speed(&self) -> f64 {
        self.engine.state().speed
    }

    pub fn radius(&self) -> f64 {
        self.engine.state().radius
    }

    /// Poses as [x0, y0, z0, scale0, opacity0, stack0, x1, ...].
    #[wasm_bindgen(js_name = getPoses)]
    pub fn get_poses(&self) -> Float32Array {
        Float32Array::from(&self.engine.pose_buffer()[..])
    }

    /// Font size in pixels per tag.
    #[wasm_bindgen(js_name = getFontSizes)]
    pub fn get_font_sizes(&self) -> Float32Array {
        Float32Array::from(&self.engine.font_sizes()[..])
    }

    /// Hue in degrees per tag.
    #[wasm_bindgen(js_name = getHues)]
    pub fn get_hues(&self) -> Float32Array {
        Float32Array::from(&self.engine.hues()[..])
    }

    /// CSS style object for one tag, or undefined for a bad index.
    #[wasm_bindgen(js_name = getStyle)]
    pub fn get_style(&self, index: u32) -> Result<JsValue, JsValue> {
        match self.engine.style(TagId(index)) {
            Some(style) => Ok(serde_wasm_bindgen::to_value(&style)?),
            None => Ok(JsValue::UNDEFINED),
        }
    }
}

/// A tag cloud mounted into the DOM.
#[wasm_bindgen]
pub struct TagCloudHandle {
    cloud: MountedCloud,
}

#[wasm_bindgen]
impl TagCloudHandle {
    /// Cancel the animation, remove listeners, and empty the container.
    pub fn dispose(&self) {
        self.cloud.dispose();
    }

    #[wasm_bindgen(js_name = isDisposed)]
    pub fn is_disposed(&self) -> bool {
        self.cloud.is_disposed()
    }

    pub fn speed(&self) -> f64 {
        self.cloud.engine().state().speed
    }

    pub fn angle(&self) -> f64 {
        self.cloud.engine().state().angle
    }
}

/// Build a tag cloud inside `container` and start animating it.
#[wasm_bindgen(js_name = mountTagCloud)]
pub fn mount_tag_cloud(
    container: HtmlElement,
    tags: JsValue,
    options: JsValue,
) -> Result<TagCloudHandle, JsValue> {
    let config = CloudConfig::from_js(&options)?;
    let cloud = MountedCloud::mount(container, tags_from_js(tags)?, config)?;
    Ok(TagCloudHandle { cloud })
}

/// Build the page's tag cloud from `.tag-cloud-data` elements into the
/// element with id `container_id`, rebuilding it after resizes.
///
/// Returns false when there is no container or no tag data.
#[wasm_bindgen(js_name = mountFromPage)]
pub fn mount_from_page(container_id: &str) -> Result<bool, JsValue> {
    Ok(dom::mount_from_page(container_id)?)
}

/// Remove the page's tag cloud and its resize handling.
#[wasm_bindgen(js_name = unmountPage)]
pub fn unmount_page() {
    dom::unmount_page();
}

/// Sphere radius used for a viewport of the given size.
#[wasm_bindgen(js_name = radiusForViewport)]
pub fn radius_for_viewport(width: f64, height: f64) -> f64 {
    config::radius_for_viewport(width, height)
}
