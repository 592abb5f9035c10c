//! Frame-driven tweens and timers
//!
//! Tweens run on `requestAnimationFrame` and are never cancelled: a newer
//! tween on the same element simply writes after the older one.

use std::cell::RefCell;
use std::rc::Rc;

use swipe_core::Tween;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::console::{describe, warn};

/// Current time in milliseconds, same clock as event timestamps fed to the engine
pub(crate) fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Run `tween`, calling `apply` with each sampled value and `on_done` once
/// the final value has been applied.
pub(crate) fn run(tween: Tween, mut apply: impl FnMut(f64) + 'static, on_done: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        apply(tween.to);
        on_done();
        return;
    };

    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let handle = frame.clone();
    let mut on_done = Some(on_done);
    let next_window = window.clone();

    *handle.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
        let now = now_ms();
        apply(tween.value_at(now));

        if tween.is_complete(now) {
            // Drop our own closure to end the loop
            let _ = frame.borrow_mut().take();
            if let Some(done) = on_done.take() {
                done();
            }
            return;
        }

        if let Some(callback) = frame.borrow().as_ref() {
            if let Err(e) = next_window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                warn(&format!("requestAnimationFrame failed: {}", describe(&e)));
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = handle.borrow().as_ref() {
        if let Err(e) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            warn(&format!("requestAnimationFrame failed: {}", describe(&e)));
        }
    };
}

/// Run `f` once after `delay_ms`
pub(crate) fn after(delay_ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)
    {
        warn(&format!("setTimeout failed: {}", describe(&e)));
    }
}
