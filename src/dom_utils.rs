//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Small, **ergonomic** wrappers for the inline-style, focus and collection
//! patterns the modal code needs, without sprinkling `dyn_ref` casts and
//! `HtmlCollection` index loops across the code-base.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlCollection, HtmlElement};

use crate::constants::STYLE_DISPLAY;

/// The page document, if running inside a browser window.
pub fn current_document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Read the inline `display` value.  Non-HTML elements (SVG, MathML) have
/// no inline style object and report an empty string.
pub fn inline_display(el: &Element) -> String {
    el.dyn_ref::<HtmlElement>()
        .and_then(|html| html.style().get_property_value(STYLE_DISPLAY).ok())
        .unwrap_or_default()
}

/// Set the inline `display` value, ignoring elements without a style object.
pub fn set_inline_display(el: &Element, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(STYLE_DISPLAY, value);
    }
}

/// The element's own `focus` method, if it has one.  HTML and SVG elements
/// both do; looking the method up covers either without a cast per type.
fn focus_method(el: &Element) -> Option<js_sys::Function> {
    js_sys::Reflect::get(el, &JsValue::from_str("focus"))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

/// Whether `el` has a native `focus()` method.
pub fn can_focus(el: &Element) -> bool {
    focus_method(el).is_some()
}

/// Call native `focus()` if available.  Rejection (disabled control, hidden
/// subtree) is not an error – callers compare `document.activeElement`.
pub fn focus(el: &Element) {
    if let Some(method) = focus_method(el) {
        let _ = method.call0(el);
    }
}

/// Copy a live `HtmlCollection` into a `Vec` so callers can mutate the DOM
/// while iterating.
pub fn collect_elements(collection: &HtmlCollection) -> Vec<Element> {
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}
