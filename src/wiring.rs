//! Page-level event wiring for the modal focus trap.
//!
//! `install` creates the page's single `ModalTrap` and attaches the
//! document-level `click` and `keydown` listeners.  Both the controller and
//! the listener closures live in thread-locals (WASM runs on one thread) so
//! they survive for the page lifetime without `Closure::forget`, and
//! `uninstall` can detach them again.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, KeyboardEvent, MouseEvent};

use crate::config::TrapConfig;
use crate::constants::{EVENT_CLICK, EVENT_KEYDOWN};
use crate::dom::web::WebDocument;
use crate::dom::IDocument;
use crate::dom_utils;
use crate::trap::ModalTrap;
use crate::{debug_log, warn_log};

type WebModalTrap = ModalTrap<WebDocument>;

/// Document listeners attached by `install`.  Dropping detaches them.
struct DocumentHandlers {
    document: Document,
    click: Closure<dyn FnMut(MouseEvent)>,
    keydown: Closure<dyn FnMut(KeyboardEvent)>,
}

impl Drop for DocumentHandlers {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback(EVENT_CLICK, self.click.as_ref().unchecked_ref());
        let _ = self.document.remove_event_listener_with_callback(
            EVENT_KEYDOWN,
            self.keydown.as_ref().unchecked_ref(),
        );
    }
}

thread_local! {
    static MODAL_TRAP: RefCell<Option<WebModalTrap>> = RefCell::new(None);
    static DOCUMENT_HANDLERS: RefCell<Option<DocumentHandlers>> = RefCell::new(None);
}

/// Run `f` against the installed controller.
///
/// Returns `None` when nothing is installed or the controller is already
/// borrowed.  The latter happens when one of the controller's own `focus()`
/// calls synchronously dispatches a `focus` event back into us; such events
/// are programmatic and must not re-enter the trap.
fn with_trap<R>(f: impl FnOnce(&mut WebModalTrap) -> R) -> Option<R> {
    MODAL_TRAP.with(|cell| {
        let mut slot = cell.try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    })
}

fn dispatch_focus(target: Element) {
    with_trap(|trap| trap.handle_focus(&target));
}

fn event_target_element(event: &web_sys::Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

/// Create the page's controller and attach the document listeners.
/// Calling it again replaces the previous installation.
pub fn install(config: TrapConfig) -> Result<(), JsValue> {
    let document = dom_utils::current_document()
        .ok_or_else(|| JsValue::from_str("No document available for modal trap"))?;

    uninstall();

    let web_document = WebDocument::new(document.clone(), Rc::new(dispatch_focus));
    MODAL_TRAP.with(|cell| {
        *cell.borrow_mut() = Some(ModalTrap::new(web_document, config));
    });

    let click = Closure::wrap(Box::new(move |event: MouseEvent| {
        if let Some(target) = event_target_element(&event) {
            with_trap(|trap| trap.handle_click(&target));
        }
    }) as Box<dyn FnMut(MouseEvent)>);

    let keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        let code = event.code();
        let key_code = event.key_code();
        with_trap(|trap| trap.handle_keydown(&code, key_code));
    }) as Box<dyn FnMut(KeyboardEvent)>);

    document.add_event_listener_with_callback(EVENT_CLICK, click.as_ref().unchecked_ref())?;
    if let Err(e) =
        document.add_event_listener_with_callback(EVENT_KEYDOWN, keydown.as_ref().unchecked_ref())
    {
        let _ = document
            .remove_event_listener_with_callback(EVENT_CLICK, click.as_ref().unchecked_ref());
        return Err(e);
    }

    DOCUMENT_HANDLERS.with(|cell| {
        *cell.borrow_mut() = Some(DocumentHandlers {
            document,
            click,
            keydown,
        });
    });

    debug_log!("Modal focus trap installed");
    Ok(())
}

/// Detach the document listeners and drop the controller, releasing the
/// focus listener of any dialog still open.  No-op when not installed.
pub fn uninstall() {
    // Take first, drop outside the borrow: `Drop` impls call back into JS.
    let handlers = DOCUMENT_HANDLERS.with(|cell| cell.borrow_mut().take());
    let trap = MODAL_TRAP.with(|cell| cell.borrow_mut().take());
    drop(handlers);
    drop(trap);
}

// ---------------------------------------------------------------------------
// JS API
// ---------------------------------------------------------------------------

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    install(TrapConfig::default())
}

/// `installModalTrap({ modalClass, controlsAttribute, ... })` – reinstall
/// with a custom markup convention.  Omitted fields keep their defaults.
#[wasm_bindgen(js_name = installModalTrap)]
pub fn install_with_options(options: JsValue) -> Result<(), JsValue> {
    let config = if options.is_undefined() || options.is_null() {
        TrapConfig::default()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };
    install(config)
}

/// `toggleModal(id, open?)` – toggle a dialog from page script.  Focus
/// returns to whatever held it when the dialog opened.
#[wasm_bindgen(js_name = toggleModal)]
pub fn toggle_modal(id: &str, open: Option<bool>) {
    let handled = with_trap(|trap| {
        let Some(dialog) = trap.document().element_by_id(id) else {
            return;
        };
        let source = trap.document().active_element();
        trap.toggle(&dialog, source.as_ref(), open);
    });
    if handled.is_none() {
        warn_log!("toggleModal('{}') ignored: modal trap not installed", id);
    }
}

/// `closeModals()` – close every dialog, as the Escape key does.
#[wasm_bindgen(js_name = closeModals)]
pub fn close_modals() {
    with_trap(|trap| trap.close_all());
}

/// `hasKeys(value)` – the template predicate for page scripts that render
/// outside the Rust registry.  Works on the live JS value, so properties
/// holding functions, symbols or BigInts count like any other key.
#[wasm_bindgen(js_name = hasKeys)]
pub fn has_keys_js(value: JsValue) -> bool {
    if value.is_undefined() || value.is_null() {
        return false;
    }
    // `Object.keys` applies ToObject itself, so strings count their code
    // units and numbers/booleans come back empty without a wrapper here.
    js_sys::Object::keys(value.unchecked_ref::<js_sys::Object>()).length() > 0
}
