//! Browser tests for the JS-facing API. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Object, Reflect};
use tag_sphere_wasm::dom::tags_from_document;
use tag_sphere_wasm::{TagCloudWasm, mount_from_page, mount_tag_cloud, unmount_page};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Event, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn set(obj: &Object, key: &str, value: JsValue) {
    Reflect::set(obj, &JsValue::from_str(key), &value).unwrap();
}

fn tag(name: &str, url: &str, count: f64) -> JsValue {
    let obj = Object::new();
    set(&obj, "name", JsValue::from_str(name));
    set(&obj, "url", JsValue::from_str(url));
    set(&obj, "count", JsValue::from_f64(count));
    obj.into()
}

fn sample_tags() -> JsValue {
    let tags = Array::new();
    tags.push(&tag("JavaScript", "/js", 10.0));
    tags.push(&tag("Python", "/py", 5.0));
    tags.push(&tag("Rust", "/rs", 1.0));
    tags.into()
}

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn container() -> HtmlElement {
    let document = document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div.dyn_into().unwrap()
}

/// Append `.tag-cloud-data` elements for each label under a fresh wrapper.
///
/// Labels become anchors to `/tags/<n>`, except the last, which is a plain
/// span carrying an `href` attribute.
fn page_data(labels: &[&str]) -> HtmlElement {
    let document = document();
    let wrapper = container();
    for (i, label) in labels.iter().enumerate() {
        let kind = if i + 1 == labels.len() { "span" } else { "a" };
        let el = document.create_element(kind).unwrap();
        el.set_class_name("tag-cloud-data");
        el.set_attribute("href", &format!("/tags/{i}")).unwrap();
        el.set_text_content(Some(label));
        wrapper.append_child(&el).unwrap();
    }
    wrapper
}

fn style_of(el: &HtmlElement, property: &str) -> String {
    el.style().get_property_value(property).unwrap()
}

fn dispatch(el: &HtmlElement, kind: &str) {
    el.dispatch_event(&Event::new(kind).unwrap()).unwrap();
}

#[wasm_bindgen_test]
fn constructs_with_default_options() {
    let cloud = TagCloudWasm::new(sample_tags(), JsValue::UNDEFINED).unwrap();
    assert_eq!(cloud.tag_count(), 3);
    assert_eq!(cloud.radius(), 200.0);
    assert_eq!(cloud.speed(), 0.5);
    assert!(cloud.is_running());
}

#[wasm_bindgen_test]
fn camel_case_options_are_read() {
    let options = Object::new();
    set(&options, "radius", JsValue::from_f64(120.0));
    set(&options, "minFont", JsValue::from_f64(10.0));
    set(&options, "maxFont", JsValue::from_f64(30.0));

    let cloud = TagCloudWasm::new(sample_tags(), options.into()).unwrap();
    assert_eq!(cloud.radius(), 120.0);

    let sizes = cloud.get_font_sizes().to_vec();
    assert_eq!(sizes[0], 30.0);
    assert_eq!(sizes[2], 10.0);
}

#[wasm_bindgen_test]
fn invalid_options_are_rejected() {
    let options = Object::new();
    set(&options, "radius", JsValue::from_f64(-5.0));
    assert!(TagCloudWasm::new(sample_tags(), options.into()).is_err());
}

#[wasm_bindgen_test]
fn poses_have_six_values_per_tag() {
    let mut cloud = TagCloudWasm::new(sample_tags(), JsValue::NULL).unwrap();
    assert_eq!(cloud.run_frames(3), 3);
    assert_eq!(cloud.get_poses().length(), 18);
}

#[wasm_bindgen_test]
fn hover_halves_speed_and_leave_restores_it() {
    let mut cloud = TagCloudWasm::new(sample_tags(), JsValue::NULL).unwrap();
    cloud.hover(1).unwrap();
    assert_eq!(cloud.speed(), 0.25);
    assert_eq!(cloud.hovered_tag(), Some(1));

    cloud.leave(1).unwrap();
    assert_eq!(cloud.speed(), 0.5);
    assert_eq!(cloud.hovered_tag(), None);
}

#[wasm_bindgen_test]
fn hover_out_of_range_is_an_error() {
    let mut cloud = TagCloudWasm::new(sample_tags(), JsValue::NULL).unwrap();
    assert!(cloud.hover(7).is_err());
}

#[wasm_bindgen_test]
fn style_is_a_plain_object() {
    let cloud = TagCloudWasm::new(sample_tags(), JsValue::NULL).unwrap();
    let style = cloud.get_style(0).unwrap();
    let color = Reflect::get(&style, &JsValue::from_str("color")).unwrap();
    assert_eq!(color.as_string().as_deref(), Some("hsl(0, 70%, 50%)"));
    assert!(cloud.get_style(99).unwrap().is_undefined());
}

#[wasm_bindgen_test]
fn mount_builds_anchors_and_dispose_empties() {
    let container = container();
    let handle = mount_tag_cloud(container.clone(), sample_tags(), JsValue::UNDEFINED).unwrap();

    let items = container.query_selector_all(".tag-cloud-item").unwrap();
    assert_eq!(items.length(), 3);
    let first: HtmlElement = items.item(0).unwrap().dyn_into().unwrap();
    assert_eq!(first.text_content().as_deref(), Some("JavaScript"));
    assert_eq!(first.get_attribute("data-count").as_deref(), Some("10"));

    handle.dispose();
    assert!(handle.is_disposed());
    assert_eq!(container.child_element_count(), 0);

    // A second dispose is a no-op
    handle.dispose();
}

#[wasm_bindgen_test]
fn mouse_hover_and_leave_update_the_element() {
    let container = container();
    let options = Object::new();
    set(&options, "hoverColor", JsValue::from_str("rgb(1, 2, 3)"));
    let handle = mount_tag_cloud(container.clone(), sample_tags(), options.into()).unwrap();

    let item: HtmlElement = container
        .query_selector(".tag-cloud-item")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    let color = style_of(&item, "color");
    let z_index = style_of(&item, "z-index");
    assert_eq!(handle.speed(), 0.5);

    dispatch(&item, "mouseenter");
    assert_eq!(style_of(&item, "color"), "rgb(1, 2, 3)");
    assert_eq!(style_of(&item, "z-index"), "1000");
    assert!(style_of(&item, "transform").ends_with("scale(1.2)"));
    assert_eq!(handle.speed(), 0.25);

    dispatch(&item, "mouseleave");
    assert_eq!(style_of(&item, "color"), color);
    assert_eq!(style_of(&item, "z-index"), z_index);
    assert!(!style_of(&item, "transform").ends_with("scale(1.2)"));
    assert_eq!(handle.speed(), 0.5);

    handle.dispose();
    container.remove();
}

#[wasm_bindgen_test]
fn page_data_becomes_tags() {
    let wrapper = page_data(&["Rust (10)", "(3)", "Go (4)", "Zig"]);
    let tags = tags_from_document(&document()).unwrap();
    wrapper.remove();

    let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Rust", "Go", "Zig"]);
    assert_eq!(tags[0].count, 10.0);
    assert_eq!(tags[1].count, 4.0);
    assert_eq!(tags[2].count, 1.0);
    assert!(tags[0].url.ends_with("/tags/0"));
    assert_eq!(tags[2].url, "/tags/3");
}

#[wasm_bindgen_test]
fn page_mount_and_unmount() {
    let wrapper = page_data(&["Rust (10)", "Go (4)", "Zig"]);
    let target = container();
    target.set_id("tag-cloud-canvas");

    assert!(!mount_from_page("no-such-container").unwrap());

    assert!(mount_from_page("tag-cloud-canvas").unwrap());
    let items = target.query_selector_all(".tag-cloud-item").unwrap();
    assert_eq!(items.length(), 3);
    let last: HtmlElement = items.item(2).unwrap().dyn_into().unwrap();
    assert_eq!(last.text_content().as_deref(), Some("Zig"));
    assert_eq!(last.get_attribute("data-count").as_deref(), Some("1"));

    // Mounting again replaces the cloud instead of stacking a second one
    assert!(mount_from_page("tag-cloud-canvas").unwrap());
    assert_eq!(target.query_selector_all(".tag-cloud-item").unwrap().length(), 3);

    unmount_page();
    assert_eq!(target.child_element_count(), 0);

    wrapper.remove();
    target.remove();
}
