//! Page-level helpers: lookups, toasts, animation, navigation.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::{events, timer};
use crate::console;
use crate::message::Toast;
use crate::navigation::NextTarget;

/// Delay before the `.next-button` appears after a completed step.
pub const NEXT_BUTTON_DELAY_MS: i32 = 1000;

/// Gap between consecutive `.animate-on-load` elements.
pub const ANIMATION_STAGGER_MS: i32 = 200;

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property(property, value);
    }
}

pub fn update_progress_bar(document: &Document, percent: f64) {
    if let Ok(Some(bar)) = document.query_selector(".progress-fill") {
        set_style(&bar, "width", &format!("{percent}%"));
    }
}

pub fn show_toast(document: &Document, toast: &Toast) {
    let Some(body) = document.body() else {
        return;
    };
    let Ok(el) = document.create_element("div") else {
        return;
    };
    el.set_class_name(&toast.class_name());
    el.set_text_content(Some(&toast.text));
    let _ = el.set_attribute("style", &toast.css());
    if body.append_child(&el).is_err() {
        return;
    }
    timer::after(toast.lifetime_ms(), move || el.remove());
}

/// Show the page's `.next-button` after `NEXT_BUTTON_DELAY_MS`.
pub fn reveal_next_button_later(document: &Document) {
    let document = document.clone();
    timer::after(NEXT_BUTTON_DELAY_MS, move || {
        if let Ok(Some(button)) = document.query_selector(".next-button") {
            set_style(&button, "display", "block");
        }
    });
}

/// Fade in `.animate-on-load` elements one after another.
pub fn animate_elements(document: &Document) {
    for (i, el) in query_all(document, ".animate-on-load").into_iter().enumerate() {
        timer::after(i as i32 * ANIMATION_STAGGER_MS, move || {
            set_style(&el, "opacity", "1");
            set_style(&el, "transform", "translateY(0)");
        });
    }
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

pub fn navigate(target: &NextTarget) {
    let Some(href) = target.href(&current_path()) else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(&href) {
        console::warn(&format!("navigation to {href} failed: {e:?}"));
    }
}

pub fn go_back() {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.back();
    }
}

/// `[data-goto]`, `[data-screen]` and `.back-button` controls.
pub fn bind_navigation(document: &Document) {
    for el in query_all(document, "[data-goto]") {
        let Some(page) = el.get_attribute("data-goto") else {
            continue;
        };
        let target = NextTarget::Page(page);
        events::listen(&el, "click", move |_| navigate(&target));
    }
    for el in query_all(document, "[data-screen]") {
        let Some(screen) = el.get_attribute("data-screen") else {
            continue;
        };
        let target = NextTarget::Screen(screen);
        events::listen(&el, "click", move |_| navigate(&target));
    }
    for el in query_all(document, ".back-button") {
        events::listen(&el, "click", |_| go_back());
    }
}

/// Sound effects are not wired up yet; log what would play.
pub fn play_sound(name: &str) {
    console::log(&format!("Играет звук: {name}"));
}
