//! `web-sys` implementation of [`IDocument`].

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event};

use super::IDocument;
use crate::constants::EVENT_FOCUS;
use crate::dom_utils;

/// Callback invoked with the target of every captured `focus` event.
pub type FocusCallback = Rc<dyn Fn(Element)>;

/// The page document plus the callback the capturing focus listener
/// forwards to.
pub struct WebDocument {
    document: Document,
    on_focus: FocusCallback,
}

impl WebDocument {
    pub fn new(document: Document, on_focus: FocusCallback) -> Self {
        Self { document, on_focus }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

/// Capturing `focus` listener attached to the document.  Removed on drop.
pub struct FocusListener {
    document: Document,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for FocusListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback_and_bool(
            EVENT_FOCUS,
            self.closure.as_ref().unchecked_ref(),
            true,
        );
    }
}

impl IDocument for WebDocument {
    type Node = Element;
    type Listener = FocusListener;

    fn child_nodes(&self, node: &Element) -> Vec<Element> {
        // Text and comment nodes can neither take focus nor have children,
        // so walking `children` visits the same candidates as `childNodes`.
        dom_utils::collect_elements(&node.children())
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &web_sys::Node = node;
        ancestor.contains(Some(node))
    }

    fn supports_focus(&self, node: &Element) -> bool {
        dom_utils::can_focus(node)
    }

    fn focus(&self, node: &Element) {
        dom_utils::focus(node);
    }

    fn active_element(&self) -> Option<Element> {
        self.document.active_element()
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn display(&self, node: &Element) -> String {
        dom_utils::inline_display(node)
    }

    fn set_display(&self, node: &Element, value: &str) {
        dom_utils::set_inline_display(node, value);
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn elements_with_class(&self, class: &str) -> Vec<Element> {
        dom_utils::collect_elements(&self.document.get_elements_by_class_name(class))
    }

    fn listen_focus(&self) -> Result<FocusListener, JsValue> {
        let on_focus = self.on_focus.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            if let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                on_focus(target);
            }
        }) as Box<dyn FnMut(Event)>);

        // Focus events do not bubble; capture on the document sees them all.
        self.document.add_event_listener_with_callback_and_bool(
            EVENT_FOCUS,
            closure.as_ref().unchecked_ref(),
            true,
        )?;

        Ok(FocusListener {
            document: self.document.clone(),
            closure,
        })
    }
}
