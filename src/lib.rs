//! Focus-trapping modal dialogs for server-rendered pages.
//!
//! Markup drives everything: a control with `aria-controls="<id>"` toggles
//! the `.p-modal` element with that id; while a dialog is open keyboard
//! focus cannot leave it; Escape closes every dialog and focus returns to
//! the control that opened it.  The `getKeys` / `hasKeys` template helpers
//! live in [`helpers`].
//!
//! Loading the WASM module installs the trap with the default markup
//! convention (see [`wiring::start`]).

mod macros;

pub mod config;
pub mod constants;
pub mod dom;
pub mod dom_utils;
pub mod helpers;
pub mod trap;
pub mod wiring;

pub use config::TrapConfig;
pub use helpers::register_helpers;
pub use trap::ModalTrap;
