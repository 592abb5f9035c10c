//! Browser console logging

use wasm_bindgen::JsValue;

/// Log to the browser console with the carousel prefix
pub(crate) fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(&format!("[swipe] {}", msg)));
}

/// Warn on the browser console with the carousel prefix
pub(crate) fn warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(&format!("[swipe] {}", msg)));
}

/// Best-effort text for a thrown JS value
pub(crate) fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
