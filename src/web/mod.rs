//! DOM wiring for the game pages.
//!
//! Every lookup is optional: a page that lacks some piece of markup simply
//! doesn't get the matching behaviour.

mod dialog_view;
mod drag;
mod events;
mod page;
mod timer;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::console;
use crate::dialog::scripts::PageId;
use crate::message::{MessageKind, Toast};
use crate::progress::ProgressTracker;
use crate::store::LocalStore;

pub(crate) type SharedTracker = Rc<RefCell<ProgressTracker<LocalStore>>>;

/// Page entry point. Builds the tracker and dialog player for this page and
/// hands them to the event handlers that need them.
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(document) = page::document() else {
        return;
    };
    let page_id = PageId::detect(
        document
            .body()
            .and_then(|b| b.get_attribute("data-page"))
            .as_deref(),
        &page::current_path(),
    );

    let tracker: SharedTracker = Rc::new(RefCell::new(ProgressTracker::load(LocalStore::open())));
    {
        let t = tracker.borrow();
        console::log(&format!(
            "page {page_id:?} loaded: {} ingredients, {} dishes, score {}",
            t.state().collected_ingredients.len(),
            t.state().completed_dishes.len(),
            t.state().score,
        ));
        page::update_progress_bar(&document, t.dish_progress_percent());
    }

    page::animate_elements(&document);
    page::bind_navigation(&document);
    drag::init(&document, &tracker);
    dialog_view::init(&document, &page_id);
}

/// `showMessage(text, kind)` for inline page scripts. `kind` is one of
/// `info`, `warning`, `error`, `success`; anything else shows as info.
#[wasm_bindgen(js_name = showMessage)]
pub fn show_message(text: &str, kind: Option<String>) {
    let Some(document) = page::document() else {
        return;
    };
    let kind = kind.as_deref().map(MessageKind::parse).unwrap_or(MessageKind::Info);
    page::show_toast(&document, &Toast::message(text, kind));
}
