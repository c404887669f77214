// Markup contract – these are the single source of truth for the defaults in
// `TrapConfig`.
pub const CSS_MODAL: &str = "p-modal";
pub const ATTR_ARIA_CONTROLS: &str = "aria-controls";

pub const STYLE_DISPLAY: &str = "display";
pub const DISPLAY_OPEN: &str = "flex";
pub const DISPLAY_CLOSED: &str = "none";

// Keyboard
pub const KEY_CODE_ESCAPE: &str = "Escape";
pub const LEGACY_KEY_CODE_ESCAPE: u32 = 27;

// DOM event names
pub const EVENT_CLICK: &str = "click";
pub const EVENT_KEYDOWN: &str = "keydown";
pub const EVENT_FOCUS: &str = "focus";

// Template helper names as seen from templates
pub const HELPER_GET_KEYS: &str = "getKeys";
pub const HELPER_HAS_KEYS: &str = "hasKeys";
