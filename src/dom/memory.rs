//! In-memory document used by the native unit tests.
//!
//! Models just enough of the DOM for the focus trap: a tree of elements with
//! ids, classes, attributes and inline `display`, an active element, and
//! browser-like focus rules (disabled controls and anything inside a
//! `display: none` subtree reject focus).

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsValue;

use super::IDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct MemoryNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: HashMap<String, String>,
    display: String,
    /// Has a `focus()` method at all (false for text nodes).
    focus_capable: bool,
    /// Accepts focus when visible (inputs, buttons, `tabindex`).
    focusable: bool,
    disabled: bool,
}

#[derive(Debug)]
struct Tree {
    nodes: Vec<MemoryNode>,
    active: Option<NodeId>,
    focus_calls: Vec<NodeId>,
}

pub struct MemoryDocument {
    tree: RefCell<Tree>,
    listeners: Rc<Cell<usize>>,
    fail_listen: Cell<bool>,
}

/// Counts live subscriptions so tests can assert install/remove pairing.
pub struct MemoryListener {
    listeners: Rc<Cell<usize>>,
}

impl Drop for MemoryListener {
    fn drop(&mut self) {
        self.listeners.set(self.listeners.get() - 1);
    }
}

impl MemoryDocument {
    /// A document with a single `body` root that holds focus by default.
    pub fn new() -> Self {
        let body = MemoryNode {
            focus_capable: true,
            ..MemoryNode::default()
        };
        Self {
            tree: RefCell::new(Tree {
                nodes: vec![body],
                active: Some(NodeId(0)),
                focus_calls: Vec::new(),
            }),
            listeners: Rc::new(Cell::new(0)),
            fail_listen: Cell::new(false),
        }
    }

    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a non-focusable container element (`<div>`).
    pub fn element(&self, parent: NodeId) -> NodeId {
        self.append(parent, true, false)
    }

    /// Append an element that accepts focus (`<input>`, `<button>`).
    pub fn control(&self, parent: NodeId) -> NodeId {
        self.append(parent, true, true)
    }

    /// Append a text node: no focus capability, no children.
    pub fn text(&self, parent: NodeId) -> NodeId {
        self.append(parent, false, false)
    }

    fn append(&self, parent: NodeId, focus_capable: bool, focusable: bool) -> NodeId {
        let mut tree = self.tree.borrow_mut();
        let id = NodeId(tree.nodes.len());
        tree.nodes.push(MemoryNode {
            parent: Some(parent),
            focus_capable,
            focusable,
            ..MemoryNode::default()
        });
        tree.nodes[parent.0].children.push(id);
        id
    }

    pub fn set_id(&self, node: NodeId, id: &str) {
        self.tree.borrow_mut().nodes[node.0].id = Some(id.to_string());
    }

    pub fn add_class(&self, node: NodeId, class: &str) {
        self.tree.borrow_mut().nodes[node.0]
            .classes
            .push(class.to_string());
    }

    pub fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
        self.tree.borrow_mut().nodes[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn set_disabled(&self, node: NodeId, disabled: bool) {
        self.tree.borrow_mut().nodes[node.0].disabled = disabled;
    }

    /// Build a closed `p-modal` dialog under `parent` with the given id.
    pub fn modal(&self, parent: NodeId, id: &str) -> NodeId {
        let dialog = self.element(parent);
        self.set_id(dialog, id);
        self.add_class(dialog, crate::constants::CSS_MODAL);
        self.set_display(&dialog, crate::constants::DISPLAY_CLOSED);
        dialog
    }

    /// Simulate the user (or page script) moving focus; returns whether the
    /// document accepted it.  No focus event is dispatched – tests forward
    /// the target to `ModalTrap::handle_focus` themselves.
    pub fn user_focus(&self, node: NodeId) -> bool {
        self.focus(&node);
        self.active_element() == Some(node)
    }

    pub fn focus_listener_count(&self) -> usize {
        self.listeners.get()
    }

    /// Every node `focus()` was called on, in order.
    pub fn focus_calls(&self) -> Vec<NodeId> {
        self.tree.borrow().focus_calls.clone()
    }

    pub fn fail_next_listen(&self) {
        self.fail_listen.set(true);
    }

    fn is_rendered(tree: &Tree, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if tree.nodes[id.0].display == "none" {
                return false;
            }
            current = tree.nodes[id.0].parent;
        }
        true
    }
}

impl IDocument for MemoryDocument {
    type Node = NodeId;
    type Listener = MemoryListener;

    fn child_nodes(&self, node: &NodeId) -> Vec<NodeId> {
        self.tree.borrow().nodes[node.0].children.clone()
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let tree = self.tree.borrow();
        let mut current = Some(*node);
        while let Some(id) = current {
            if id == *ancestor {
                return true;
            }
            current = tree.nodes[id.0].parent;
        }
        false
    }

    fn supports_focus(&self, node: &NodeId) -> bool {
        self.tree.borrow().nodes[node.0].focus_capable
    }

    fn focus(&self, node: &NodeId) {
        let mut tree = self.tree.borrow_mut();
        tree.focus_calls.push(*node);
        let candidate = &tree.nodes[node.0];
        if candidate.focus_capable
            && candidate.focusable
            && !candidate.disabled
            && Self::is_rendered(&tree, *node)
        {
            tree.active = Some(*node);
        }
    }

    fn active_element(&self) -> Option<NodeId> {
        self.tree.borrow().active
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.tree.borrow().nodes[node.0]
            .classes
            .iter()
            .any(|c| c == class)
    }

    fn display(&self, node: &NodeId) -> String {
        self.tree.borrow().nodes[node.0].display.clone()
    }

    fn set_display(&self, node: &NodeId, value: &str) {
        let mut tree = self.tree.borrow_mut();
        tree.nodes[node.0].display = value.to_string();
        // Hiding the subtree holding focus blurs it back to the body.
        if let Some(active) = tree.active {
            if !Self::is_rendered(&tree, active) {
                tree.active = Some(NodeId(0));
            }
        }
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.tree.borrow().nodes[node.0].attributes.get(name).cloned()
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .borrow()
            .nodes
            .iter()
            .position(|n| n.id.as_deref() == Some(id))
            .map(NodeId)
    }

    fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        let tree = self.tree.borrow();
        let mut found = Vec::new();
        let mut stack = vec![NodeId(0)];
        while let Some(id) = stack.pop() {
            let node = &tree.nodes[id.0];
            if node.classes.iter().any(|c| c == class) {
                found.push(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        found
    }

    fn listen_focus(&self) -> Result<MemoryListener, JsValue> {
        if self.fail_listen.replace(false) {
            // Constructing a `JsValue` calls into JS, which is unavailable
            // natively; `NULL` is a compile-time constant.
            return Err(JsValue::NULL);
        }
        self.listeners.set(self.listeners.get() + 1);
        Ok(MemoryListener {
            listeners: self.listeners.clone(),
        })
    }
}
