//! Dialog markup: `#vn-speaker`, `#vn-text`, `#progress-fill`, `#vn-next-btn`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_sys::{Document, Element};

use super::page::{self, set_style};
use super::{events, timer};
use crate::dialog::scripts::{script_for, PageId};
use crate::dialog::{DialogPlayer, DialogView};
use crate::navigation::NextTarget;
use crate::time::DEFAULT_REVEAL_INTERVAL_MS;

const TYPING_CLASS: &str = "typing";

pub struct DomDialogView {
    speaker: Option<Element>,
    text: Element,
    progress: Option<Element>,
    next: Option<Element>,
    /// Set once a line repurposes the next control; clicks then navigate.
    next_target: Rc<RefCell<Option<NextTarget>>>,
}

impl DomDialogView {
    /// `None` when the page has no text slot, i.e. no dialog UI at all.
    pub fn mount(document: &Document) -> Option<Self> {
        Some(Self {
            speaker: document.get_element_by_id("vn-speaker"),
            text: document.get_element_by_id("vn-text")?,
            progress: document.get_element_by_id("progress-fill"),
            next: document.get_element_by_id("vn-next-btn"),
            next_target: Rc::new(RefCell::new(None)),
        })
    }
}

impl DialogView for DomDialogView {
    fn show_speaker(&mut self, speaker: &str) {
        if let Some(el) = &self.speaker {
            el.set_text_content(Some(speaker));
        }
    }

    fn show_text(&mut self, text: &str) {
        self.text.set_text_content(Some(text));
    }

    fn set_typing(&mut self, typing: bool) {
        let classes = self.text.class_list();
        let _ = if typing {
            classes.add_1(TYPING_CLASS)
        } else {
            classes.remove_1(TYPING_CLASS)
        };
    }

    fn show_progress(&mut self, percent: f64) {
        if let Some(el) = &self.progress {
            set_style(el, "width", &format!("{percent}%"));
        }
    }

    fn repurpose_next(&mut self, label: &str, target: &NextTarget) {
        if let Some(el) = &self.next {
            el.set_text_content(Some(label));
            *self.next_target.borrow_mut() = Some(target.clone());
        }
    }
}

/// Start this page's dialog, if it has both a script and the markup for it.
pub fn init(document: &Document, page_id: &PageId) {
    let Some(script) = script_for(page_id) else {
        return;
    };
    let Some(view) = DomDialogView::mount(document) else {
        return;
    };
    let next_button = view.next.clone();
    let next_target = view.next_target.clone();

    let player = Rc::new(RefCell::new(DialogPlayer::new(view)));
    player.borrow_mut().init(script, timer::now_ms());

    // Stops itself once the last line is on screen.
    let ticker: Rc<Cell<Option<timer::Interval>>> = Rc::new(Cell::new(None));
    let ticking = player.clone();
    let own = ticker.clone();
    let handle = timer::every(DEFAULT_REVEAL_INTERVAL_MS as i32, move || {
        let mut player = ticking.borrow_mut();
        player.update(timer::now_ms());
        if player.is_finished() {
            if let Some(interval) = own.take() {
                interval.clear();
            }
        }
    });
    ticker.set(handle);

    if let Some(button) = next_button {
        events::listen(&button, "click", move |_| {
            let target = next_target.borrow().clone();
            match target {
                Some(target) => page::navigate(&target),
                None => player.borrow_mut().advance(timer::now_ms()),
            }
        });
    }
}
