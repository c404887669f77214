//! Small crate-wide convenience macros.

/// Log a formatted line to the browser console in debug wasm builds.
///
/// On native targets (unit tests) and in release builds the branch is
/// constant-false, so nothing reaches `web_sys` – calling wasm-bindgen
/// imports outside the browser would panic.
///
/// ```rust,ignore
/// debug_log!("Opened modal {}", id);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if cfg!(all(debug_assertions, target_arch = "wasm32")) {
            ::web_sys::console::log_1(&format!($($arg)*).into());
        }
    };
}

/// Same as [`debug_log!`] but always on in wasm builds and routed to
/// `console.warn`.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        if cfg!(target_arch = "wasm32") {
            ::web_sys::console::warn_1(&format!($($arg)*).into());
        }
    };
}
