//! A tag cloud mounted into a container element.

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{AnimationFrame, request_animation_frame};
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, HtmlAnchorElement, HtmlElement};

use crate::cloud::CloudEngine;
use crate::config::CloudConfig;
use crate::dom::js_error;
use crate::error::{CloudError, CloudResult};
use crate::tag::{Tag, TagId};

/// Class given to every tag element.
pub const ITEM_CLASS: &str = "tag-cloud-item";

struct Inner {
    container: HtmlElement,
    elements: Vec<HtmlElement>,
    engine: RefCell<CloudEngine>,
    frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
    disposed: Cell<bool>,
}

/// A running tag cloud bound to a container.
///
/// Dropping the value disposes it: the pending frame is cancelled, the
/// listeners are removed, and the container is emptied.
pub struct MountedCloud {
    inner: Rc<Inner>,
}

impl MountedCloud {
    /// Replace the container's contents with a tag cloud and start animating.
    pub fn mount(container: HtmlElement, tags: Vec<Tag>, config: CloudConfig) -> CloudResult<Self> {
        let engine = CloudEngine::new(tags, config)?;
        let document = container
            .owner_document()
            .ok_or_else(|| CloudError::Dom("container is not attached to a document".to_string()))?;

        container.set_inner_html("");
        set_style(&container.style(), "color", &engine.config().text_color)?;
        let elements = build_elements(&document, &container, &engine)?;

        let inner = Rc::new(Inner {
            container,
            elements,
            engine: RefCell::new(engine),
            frame: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
            disposed: Cell::new(false),
        });

        inner.render_all()?;
        install_listeners(&inner);
        schedule_frame(&inner);

        log::info!("tag cloud mounted with {} tags", inner.elements.len());
        Ok(Self { inner })
    }

    /// Read access to the engine behind the widget.
    pub fn engine(&self) -> Ref<'_, CloudEngine> {
        self.inner.engine.borrow()
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    /// Stop the animation and tear the widget down. Idempotent.
    pub fn dispose(&self) {
        let inner = &self.inner;
        if inner.disposed.replace(true) {
            return;
        }
        inner.engine.borrow_mut().stop();
        inner.frame.borrow_mut().take();
        inner.listeners.borrow_mut().clear();
        inner.container.set_inner_html("");
        log::debug!("tag cloud disposed");
    }
}

impl Drop for MountedCloud {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl Inner {
    fn render_one(&self, engine: &CloudEngine, index: usize) -> CloudResult<()> {
        let Some(style) = engine.style(TagId(index as u32)) else {
            return Ok(());
        };
        let css = self.elements[index].style();
        set_style(&css, "transform", &style.transform)?;
        set_style(&css, "opacity", &style.opacity.to_string())?;
        set_style(&css, "z-index", &style.z_index.to_string())?;
        set_style(&css, "color", &style.color)?;
        Ok(())
    }

    fn render_all(&self) -> CloudResult<()> {
        let engine = self.engine.borrow();
        for index in 0..self.elements.len() {
            self.render_one(&engine, index)?;
        }
        Ok(())
    }

    fn on_hover(&self, index: usize) {
        let mut engine = self.engine.borrow_mut();
        let result = engine
            .hover(index)
            .and_then(|_| self.render_one(&engine, index));
        if let Err(err) = result {
            log::warn!("hover on tag {index} failed: {err}");
        }
    }

    fn on_leave(&self, index: usize) {
        let left = self.engine.borrow_mut().leave(index);
        if let Err(err) = left.and_then(|_| self.render_all()) {
            log::warn!("leave on tag {index} failed: {err}");
        }
    }
}

fn set_style(css: &CssStyleDeclaration, property: &str, value: &str) -> CloudResult<()> {
    css.set_property(property, value)
        .map_err(js_error("set style property"))
}

fn build_elements(
    document: &Document,
    container: &HtmlElement,
    engine: &CloudEngine,
) -> CloudResult<Vec<HtmlElement>> {
    let font = &engine.config().font;
    let mut elements = Vec::with_capacity(engine.len());

    for (i, tag) in engine.tags().iter().enumerate() {
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(js_error("create tag element"))?
            .dyn_into()
            .map_err(|_| CloudError::Dom("created element is not an anchor".to_string()))?;

        anchor.set_href(&tag.url);
        anchor.set_class_name(ITEM_CLASS);
        anchor.set_text_content(Some(&tag.name));
        anchor
            .set_attribute("data-count", &tag.count.to_string())
            .map_err(js_error("set data-count"))?;
        anchor
            .set_attribute("data-index", &i.to_string())
            .map_err(js_error("set data-index"))?;

        if let Some(style) = engine.style(TagId(i as u32)) {
            let css = anchor.style();
            set_style(&css, "font-size", &style.font_size)?;
            set_style(&css, "font-family", font)?;
            set_style(&css, "background-color", &style.background_color)?;
        }

        container
            .append_child(&anchor)
            .map_err(js_error("append tag element"))?;
        elements.push(anchor.into());
    }

    Ok(elements)
}

fn install_listeners(inner: &Rc<Inner>) {
    let mut listeners = Vec::with_capacity(inner.elements.len() * 2);

    for (index, element) in inner.elements.iter().enumerate() {
        let weak = Rc::downgrade(inner);
        listeners.push(EventListener::new(element, "mouseenter", move |_| {
            if let Some(inner) = weak.upgrade() {
                inner.on_hover(index);
            }
        }));

        let weak = Rc::downgrade(inner);
        listeners.push(EventListener::new(element, "mouseleave", move |_| {
            if let Some(inner) = weak.upgrade() {
                inner.on_leave(index);
            }
        }));
    }

    *inner.listeners.borrow_mut() = listeners;
}

fn schedule_frame(inner: &Rc<Inner>) {
    if inner.disposed.get() {
        return;
    }
    let weak = Rc::downgrade(inner);
    let handle = request_animation_frame(move |_| {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        inner.frame.borrow_mut().take();
        if !inner.engine.borrow_mut().tick() {
            return;
        }
        if let Err(err) = inner.render_all() {
            log::warn!("frame render failed: {err}");
        }
        schedule_frame(&inner);
    });
    *inner.frame.borrow_mut() = Some(handle);
}
