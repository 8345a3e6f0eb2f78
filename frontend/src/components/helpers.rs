//! Helpers shared by the form screens.
//!
//! - **User feedback**: `show_toast` injects a temporary notification `div`
//!   that removes itself after a few seconds.
//! - **Navigation guard**: `set_app_dirty_flag` mirrors the engine's
//!   "has unsaved work" signal (`is_dirty OR has_pending`) onto
//!   `window.app_dirty`, where the host page's beforeunload handler polls
//!   it to decide whether to prompt before leaving the screen.
//! - **Input parsing**: `parse_tags` turns the comma separated tag input
//!   into the model's tag list.

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::HtmlElement;

/// Displays a temporary notification message at the bottom of the screen.
/// Used by the form screens to confirm loads and saves and to report
/// registration and upload errors.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_inner_html(message);
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Publishes the "has unsaved work" signal for the navigation guard.
pub fn set_app_dirty_flag(dirty: bool) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str("app_dirty"),
            &JsValue::from_bool(dirty),
        );
    }
}

/// Splits a comma separated tag input into trimmed, non-empty tags.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

use wasm_bindgen::JsCast;
