//! Tag records embedded in the page as `Name (Count)` elements.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement};

use crate::dom::js_error;
use crate::error::CloudResult;
use crate::tag::{Tag, parse_tag_label};

/// Elements carrying tag data.
pub const TAG_DATA_SELECTOR: &str = ".tag-cloud-data";

/// Read every tag data element in document order.
///
/// Anchors contribute their resolved `href`; other elements fall back to an
/// `href` attribute, or an empty link. Elements whose label has no name,
/// such as a bare `(3)`, are skipped.
pub fn tags_from_document(document: &Document) -> CloudResult<Vec<Tag>> {
    let nodes = document
        .query_selector_all(TAG_DATA_SELECTOR)
        .map_err(js_error("query tag data"))?;

    let mut tags = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else {
            continue;
        };
        let text = node.text_content().unwrap_or_default();
        let url = match node.dyn_ref::<HtmlAnchorElement>() {
            Some(anchor) => anchor.href(),
            None => node
                .dyn_ref::<Element>()
                .and_then(|el| el.get_attribute("href"))
                .unwrap_or_default(),
        };
        let (name, count) = parse_tag_label(&text);
        if name.is_empty() {
            log::debug!("skipping tag data element {i} with no name");
            continue;
        }
        tags.push(Tag::new(name, url, count));
    }

    log::debug!("extracted {} tags from page", tags.len());
    Ok(tags)
}
