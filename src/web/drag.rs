//! Drag-and-drop of ingredients onto drop zones.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, DragEvent, Element, Event};

use super::page::{self, query_all, set_style};
use super::{events, SharedTracker};
use crate::dropzone::{DropOutcome, DropZone};
use crate::message::{MessageKind, Toast};

const PAYLOAD_FORMAT: &str = "text/plain";
const DRAG_OVER_CLASS: &str = "drag-over";

pub fn init(document: &Document, tracker: &SharedTracker) {
    for el in query_all(document, ".draggable") {
        bind_draggable(&el);
    }
    for el in query_all(document, ".drop-zone") {
        bind_zone(document, &el, tracker);
    }
}

fn bind_draggable(el: &Element) {
    let source = el.clone();
    events::listen(el, "dragstart", move |event| {
        let payload = source
            .get_attribute("data-ingredient")
            .or_else(|| source.text_content())
            .unwrap_or_default();
        if let Some(dt) = event.dyn_ref::<DragEvent>().and_then(|e| e.data_transfer()) {
            let _ = dt.set_data(PAYLOAD_FORMAT, payload.trim());
        }
        set_style(&source, "opacity", "0.5");
    });

    let source = el.clone();
    events::listen(el, "dragend", move |_| set_style(&source, "opacity", "1"));
}

fn bind_zone(document: &Document, el: &Element, tracker: &SharedTracker) {
    let zone = Rc::new(RefCell::new(DropZone::from_attributes(
        el.get_attribute("data-accepts").as_deref(),
        el.get_attribute("data-required").as_deref(),
        el.get_attribute("data-dish").as_deref(),
    )));

    events::listen(el, "dragover", |event| event.prevent_default());

    let target = el.clone();
    events::listen(el, "dragenter", move |event| {
        event.prevent_default();
        let _ = target.class_list().add_1(DRAG_OVER_CLASS);
    });

    let target = el.clone();
    events::listen(el, "dragleave", move |_| {
        let _ = target.class_list().remove_1(DRAG_OVER_CLASS);
    });

    let target = el.clone();
    let document = document.clone();
    let tracker = tracker.clone();
    events::listen(el, "drop", move |event| {
        handle_drop(&document, &target, &zone, &tracker, &event);
    });
}

fn handle_drop(
    document: &Document,
    zone_el: &Element,
    zone: &RefCell<DropZone>,
    tracker: &SharedTracker,
    event: &Event,
) {
    event.prevent_default();
    let _ = zone_el.class_list().remove_1(DRAG_OVER_CLASS);

    let Some(id) = event
        .dyn_ref::<DragEvent>()
        .and_then(|e| e.data_transfer())
        .and_then(|dt| dt.get_data(PAYLOAD_FORMAT).ok())
    else {
        return;
    };

    let outcome = zone.borrow_mut().drop_ingredient(&id);
    if !matches!(outcome, DropOutcome::Accepted | DropOutcome::Completed) {
        return;
    }

    append_marker(document, zone_el, &id);
    tracker.borrow_mut().add_ingredient(&id);
    page::play_sound("drop");

    if outcome == DropOutcome::Completed {
        let dish = zone.borrow().dish().map(str::to_string);
        complete_step(document, tracker, dish.as_deref());
    }
}

fn append_marker(document: &Document, zone_el: &Element, id: &str) {
    let Ok(marker) = document.create_element("div") else {
        return;
    };
    marker.set_class_name("dropped-ingredient");
    marker.set_text_content(Some(id));
    let _ = zone_el.append_child(&marker);
}

fn complete_step(document: &Document, tracker: &SharedTracker, dish: Option<&str>) {
    page::play_sound("success");
    page::show_toast(document, &Toast::step_success());

    if let Some(dish) = dish {
        let mut t = tracker.borrow_mut();
        if !t.has_completed(dish) {
            t.complete_dish(dish);
            page::show_toast(
                document,
                &Toast::message(
                    format!("🍽 Блюдо готово! Ваш счёт: {}", t.state().score),
                    MessageKind::Info,
                ),
            );
            page::update_progress_bar(document, t.dish_progress_percent());
        }
    }

    page::reveal_next_button_later(document);
}
