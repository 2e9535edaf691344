use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

use crate::console;

/// Attach `handler` for the lifetime of the page.
pub fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()) {
        console::warn(&format!("failed to listen for {kind}: {e:?}"));
    }
    closure.forget();
}
