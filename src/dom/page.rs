//! Page bootstrap: build the cloud from tag data already in the document and
//! rebuild it after the viewport settles from a resize.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

use crate::config::{CloudConfig, PAGE_SPEED, RESIZE_DEBOUNCE_MS, radius_for_viewport};
use crate::dom::{MountedCloud, js_error, tags_from_document};
use crate::error::{CloudError, CloudResult};

struct PageCloud {
    container_id: String,
    cloud: Option<MountedCloud>,
    _resize: EventListener,
    _pending: Rc<RefCell<Option<Timeout>>>,
}

thread_local! {
    static PAGE: RefCell<Option<PageCloud>> = const { RefCell::new(None) };
}

/// Mount (or remount) the page's tag cloud into the element `container_id`.
///
/// Returns false without error when the container is missing or the page
/// carries no tag data. Calling this again replaces the previous instance.
pub fn mount_from_page(container_id: &str) -> CloudResult<bool> {
    let same_container = PAGE.with(|page| {
        let mut page = page.borrow_mut();
        match page.as_mut() {
            Some(existing) if existing.container_id == container_id => {
                // Dispose before rebuilding: both share the container
                existing.cloud.take();
                true
            }
            _ => {
                page.take();
                false
            }
        }
    });

    let window = web_sys::window().ok_or_else(|| CloudError::Dom("no window".to_string()))?;
    let cloud = build_page_cloud(&window, container_id)?;
    let mounted = cloud.is_some();

    PAGE.with(|page| {
        let mut page = page.borrow_mut();
        if same_container {
            if let Some(existing) = page.as_mut() {
                existing.cloud = cloud;
                return;
            }
        }
        let pending = Rc::new(RefCell::new(None));
        *page = Some(PageCloud {
            container_id: container_id.to_string(),
            cloud,
            _resize: resize_listener(&window, container_id, Rc::clone(&pending)),
            _pending: pending,
        });
    });

    Ok(mounted)
}

/// Tear down the page's tag cloud and stop listening for resizes.
pub fn unmount_page() {
    let previous = PAGE.with(|page| page.borrow_mut().take());
    drop(previous);
}

fn build_page_cloud(window: &Window, container_id: &str) -> CloudResult<Option<MountedCloud>> {
    let document = window
        .document()
        .ok_or_else(|| CloudError::Dom("no document".to_string()))?;

    let Some(container) = document.get_element_by_id(container_id) else {
        log::debug!("no #{container_id} container on this page");
        return Ok(None);
    };
    let container: HtmlElement = container
        .dyn_into()
        .map_err(|_| CloudError::Dom(format!("#{container_id} is not an HTML element")))?;

    let tags = tags_from_document(&document)?;
    if tags.is_empty() {
        return Ok(None);
    }

    let (width, height) = viewport_size(window)?;
    let config = CloudConfig::default()
        .with_radius(radius_for_viewport(width, height))
        .with_speed(PAGE_SPEED);

    MountedCloud::mount(container, tags, config).map(Some)
}

fn viewport_size(window: &Window) -> CloudResult<(f64, f64)> {
    let width = window.inner_width().map_err(js_error("read innerWidth"))?;
    let height = window.inner_height().map_err(js_error("read innerHeight"))?;
    match (width.as_f64(), height.as_f64()) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(CloudError::Dom("viewport size is not numeric".to_string())),
    }
}

fn resize_listener(
    window: &Window,
    container_id: &str,
    pending: Rc<RefCell<Option<Timeout>>>,
) -> EventListener {
    let container_id = container_id.to_string();
    EventListener::new(window, "resize", move |_| {
        let container_id = container_id.clone();
        let timeout = Timeout::new(RESIZE_DEBOUNCE_MS, move || {
            if let Err(err) = mount_from_page(&container_id) {
                log::error!("tag cloud rebuild after resize failed: {err}");
            }
        });
        // Replacing the pending timeout cancels it
        *pending.borrow_mut() = Some(timeout);
    })
}
