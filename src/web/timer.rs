//! `setTimeout` / `setInterval` with Rust closures.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::console;

/// Run `f` once after `ms` milliseconds.
pub fn after(ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    if let Err(e) =
        window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)
    {
        console::warn(&format!("setTimeout failed: {e:?}"));
    }
}

/// A running `setInterval`.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    id: i32,
}

impl Interval {
    /// No further calls after this. The callback itself stays allocated, since
    /// it may be the one asking to stop.
    pub fn clear(self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}

/// Run `f` every `ms` milliseconds until cleared or the page unloads.
pub fn every(ms: i32, f: impl FnMut() + 'static) -> Option<Interval> {
    let window = web_sys::window()?;
    let closure = Closure::<dyn FnMut()>::new(f);
    match window
        .set_interval_with_callback_and_timeout_and_arguments_0(closure.as_ref().unchecked_ref(), ms)
    {
        Ok(id) => {
            closure.forget();
            Some(Interval { id })
        }
        Err(e) => {
            console::warn(&format!("setInterval failed: {e:?}"));
            None
        }
    }
}

/// Milliseconds from `performance.now()`, or the wall clock without it.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}
