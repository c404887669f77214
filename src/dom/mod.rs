//! Document seam used by the focus trap.
//!
//! `ModalTrap` only needs a handful of read/write operations on the page, so
//! they are collected in [`IDocument`].  The browser implementation lives in
//! [`web`]; unit tests drive the controller against the in-memory tree in
//! `memory`.

pub mod web;

#[cfg(test)]
pub mod memory;

use wasm_bindgen::JsValue;

/// Operations the focus trap performs on a document.
///
/// Node handles are non-owning: cloning one never affects the lifetime of
/// the element it names.
pub trait IDocument {
    type Node: Clone + PartialEq;
    /// Subscription for the capturing `focus` listener.  Dropping it
    /// unsubscribes.
    type Listener;

    /// Direct children of `node`, in document order.
    fn child_nodes(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Inclusive descendant test (`node` contains itself).
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    /// Whether `node` exposes a focus capability at all.
    fn supports_focus(&self, node: &Self::Node) -> bool;

    /// Native focus call.  May be rejected silently by the document.
    fn focus(&self, node: &Self::Node);

    fn active_element(&self) -> Option<Self::Node>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Inline `display` style (empty string when unset).
    fn display(&self, node: &Self::Node) -> String;

    fn set_display(&self, node: &Self::Node, value: &str);

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Snapshot of every element carrying `class`, in document order.
    fn elements_with_class(&self, class: &str) -> Vec<Self::Node>;

    /// Install a capturing document-level `focus` listener.
    fn listen_focus(&self) -> Result<Self::Listener, JsValue>;
}
