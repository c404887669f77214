//! Focus-trapping modal controller.
//!
//! One dialog is tracked at a time.  While it is open a capturing `focus`
//! listener is held; any focus change that lands outside the dialog is
//! pulled back to the first focusable descendant, or to the last one when
//! the first was already the previous focus (backward Tab past the start).
//!
//! The controller is generic over [`IDocument`] so the algorithm runs against
//! the browser (`WebDocument`) and, in unit tests, an in-memory tree.

use crate::config::TrapConfig;
use crate::dom::IDocument;
use crate::{debug_log, warn_log};

pub struct ModalTrap<D: IDocument> {
    document: D,
    config: TrapConfig,
    current_dialog: Option<D::Node>,
    last_focus: Option<D::Node>,
    /// Set only while one of our own `focus()` calls is in flight.
    ignore_focus_changes: bool,
    focus_after_close: Option<D::Node>,
    focus_listener: Option<D::Listener>,
}

impl<D: IDocument> ModalTrap<D> {
    pub fn new(document: D, config: TrapConfig) -> Self {
        Self {
            document,
            config,
            current_dialog: None,
            last_focus: None,
            ignore_focus_changes: false,
            focus_after_close: None,
            focus_listener: None,
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn config(&self) -> &TrapConfig {
        &self.config
    }

    pub fn current_dialog(&self) -> Option<&D::Node> {
        self.current_dialog.as_ref()
    }

    pub fn is_listening(&self) -> bool {
        self.focus_listener.is_some()
    }

    /// Open or close `dialog`.  `open: None` flips the current state
    /// (inline `display: none` counts as closed).  Elements without the
    /// modal class are ignored.
    pub fn toggle(&mut self, dialog: &D::Node, source: Option<&D::Node>, open: Option<bool>) {
        if !self.document.has_class(dialog, &self.config.modal_class) {
            return;
        }

        let open =
            open.unwrap_or_else(|| self.document.display(dialog) == self.config.closed_display);

        if open {
            self.open(dialog, source);
        } else {
            self.close(dialog);
        }
    }

    fn open(&mut self, dialog: &D::Node, source: Option<&D::Node>) {
        self.current_dialog = Some(dialog.clone());
        self.document.set_display(dialog, &self.config.open_display);
        self.focus_first_descendant(dialog);
        self.focus_after_close = source.cloned();

        // Release any previous subscription before taking a new one.
        self.focus_listener = None;
        match self.document.listen_focus() {
            Ok(listener) => self.focus_listener = Some(listener),
            Err(e) => warn_log!("Failed to install focus trap listener: {:?}", e),
        }
        debug_log!("Modal opened");
    }

    fn close(&mut self, dialog: &D::Node) {
        self.document.set_display(dialog, &self.config.closed_display);
        let before = self.document.active_element();
        if let Some(previous) = self.focus_after_close.clone() {
            if self.document.supports_focus(&previous) {
                self.document.focus(&previous);
            }
        }

        // The focus listener is still attached during the restore and the
        // guard is off, so the restore is a trap event like any other: it
        // lands outside the hidden dialog and resets `last_focus`.
        let after = self.document.active_element();
        if self.focus_listener.is_some() && after != before {
            if let Some(target) = after {
                self.handle_focus(&target);
            }
        }

        self.focus_listener = None;
        self.current_dialog = None;
        debug_log!("Modal closed");
    }

    /// Close every element carrying the modal class, tracked or not.
    pub fn close_all(&mut self) {
        for dialog in self.document.elements_with_class(&self.config.modal_class) {
            self.toggle(&dialog, None, Some(false));
        }
    }

    /// Capturing focus listener body.
    pub fn handle_focus(&mut self, target: &D::Node) {
        if self.ignore_focus_changes {
            return;
        }
        let Some(dialog) = self.current_dialog.clone() else {
            return;
        };

        if self.document.contains(&dialog, target) {
            self.last_focus = Some(target.clone());
            return;
        }

        self.focus_first_descendant(&dialog);
        if self.last_focus == self.document.active_element() {
            self.focus_last_descendant(&dialog);
        }
        self.last_focus = self.document.active_element();
        debug_log!("Focus left the open modal; redirected");
    }

    /// Document click: a target naming a dialog via the controls attribute
    /// toggles it, remembering the target for focus restoration.
    pub fn handle_click(&mut self, target: &D::Node) {
        let Some(controls) = self.document.attribute(target, &self.config.controls_attribute)
        else {
            return;
        };
        if controls.is_empty() {
            return;
        }
        if let Some(dialog) = self.document.element_by_id(&controls) {
            self.toggle(&dialog, Some(target), None);
        }
    }

    /// Document keydown: the close key shuts every dialog.
    pub fn handle_keydown(&mut self, code: &str, key_code: u32) {
        if self.config.is_close_key(code, key_code) {
            self.close_all();
        }
    }

    /// Focus the first focusable node under `element`, pre-order.
    pub fn focus_first_descendant(&mut self, element: &D::Node) -> bool {
        for child in self.document.child_nodes(element) {
            if self.attempt_focus(&child) || self.focus_first_descendant(&child) {
                return true;
            }
        }
        false
    }

    /// Focus the last focusable node under `element`, reverse pre-order.
    pub fn focus_last_descendant(&mut self, element: &D::Node) -> bool {
        for child in self.document.child_nodes(element).iter().rev() {
            if self.attempt_focus(child) || self.focus_last_descendant(child) {
                return true;
            }
        }
        false
    }

    fn attempt_focus(&mut self, node: &D::Node) -> bool {
        if !self.document.supports_focus(node) {
            return false;
        }
        self.ignore_focus_changes = true;
        self.document.focus(node);
        self.ignore_focus_changes = false;
        self.document.active_element().as_ref() == Some(node)
    }
}
