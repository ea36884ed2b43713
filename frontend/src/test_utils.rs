//! Helpers for browser tests that mount components into the page.

use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlInputElement};

/// Append a fresh container to `<body>` to render into
pub fn mount_point() -> Element {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .expect("test runs in a browser document");
    let root = document.create_element("div").expect("create test root");
    document
        .body()
        .expect("document has a body")
        .append_child(&root)
        .expect("attach test root");
    root
}

/// Let the scheduler finish pending renders and effects
pub async fn settle() {
    yew::platform::time::sleep(Duration::ZERO).await;
}

pub fn element(root: &Element, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("no element matches {}", selector))
        .unchecked_into()
}

pub fn elements(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let nodes = root.query_selector_all(selector).expect("valid selector");
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .map(|node| node.unchecked_into())
        .collect()
}

pub fn input(root: &Element, selector: &str) -> HtmlInputElement {
    element(root, selector).unchecked_into()
}

/// Set an input's text and fire a bubbling `input` event, as typing would
pub fn type_into(field: &HtmlInputElement, text: &str) {
    field.set_value(text);
    let mut init = EventInit::new();
    init.bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).expect("create input event");
    field.dispatch_event(&event).expect("dispatch input event");
}

pub fn has_class(element: &HtmlElement, class: &str) -> bool {
    element.class_name().split_whitespace().any(|c| c == class)
}
