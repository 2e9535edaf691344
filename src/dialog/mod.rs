//! Visual-novel style dialog: a scripted list of lines revealed one
//! character at a time.
//!
//! The player is a small state machine:
//!
//! ```text
//! Idle --init--> Revealing(0) --tick*/advance--> Shown(0) --advance--> Revealing(1) ...
//! ```
//!
//! Each line's action fires exactly once, when its reveal finishes (by the
//! last tick or by a skip), and always before the next line can start.
//! Rendering goes through [`DialogView`] so the same player runs against the
//! DOM or a test recorder.

pub mod scripts;

use std::fmt;
use std::rc::Rc;

use crate::navigation::NextTarget;
use crate::time::{RevealClock, DEFAULT_REVEAL_INTERVAL_MS};

/// Side effect attached to a line.
#[derive(Clone)]
pub enum LineAction {
    /// Repurpose the "next" control: new label, and clicking it navigates.
    NextButton { label: String, target: NextTarget },
    Callback(Rc<dyn Fn()>),
}

impl fmt::Debug for LineAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineAction::NextButton { label, target } => f
                .debug_struct("NextButton")
                .field("label", label)
                .field("target", target)
                .finish(),
            LineAction::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DialogLine {
    pub speaker: String,
    pub text: String,
    pub action: Option<LineAction>,
}

impl DialogLine {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            action: None,
        }
    }

    pub fn with_action(mut self, action: LineAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_callback(self, f: impl Fn() + 'static) -> Self {
        self.with_action(LineAction::Callback(Rc::new(f)))
    }
}

pub type DialogScript = Vec<DialogLine>;

/// Where the player draws. The DOM implementation lives in `web::dialog_view`.
pub trait DialogView {
    fn show_speaker(&mut self, speaker: &str);
    fn show_text(&mut self, text: &str);
    /// Toggle the "typing" look of the text slot.
    fn set_typing(&mut self, typing: bool);
    fn show_progress(&mut self, percent: f64);
    fn repurpose_next(&mut self, label: &str, target: &NextTarget);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No script, or an empty one.
    Idle,
    /// `shown` characters of the current line are on screen.
    Revealing { shown: usize },
    /// The current line is fully on screen and its action has run.
    Shown,
}

pub struct DialogPlayer<V: DialogView> {
    view: V,
    script: DialogScript,
    index: usize,
    phase: Phase,
    clock: RevealClock,
}

impl<V: DialogView> DialogPlayer<V> {
    pub fn new(view: V) -> Self {
        Self::with_interval(view, DEFAULT_REVEAL_INTERVAL_MS)
    }

    pub fn with_interval(view: V, interval_ms: u32) -> Self {
        Self {
            view,
            script: Vec::new(),
            index: 0,
            phase: Phase::Idle,
            clock: RevealClock::new(interval_ms),
        }
    }

    /// Load `script` and start revealing its first line at `now_ms`.
    pub fn init(&mut self, script: DialogScript, now_ms: f64) {
        self.clock.cancel();
        self.script = script;
        self.index = 0;
        self.phase = Phase::Idle;
        if self.script.is_empty() {
            return;
        }
        self.begin_line(now_ms);
    }

    /// Skip the running reveal, or move on to the next line starting at `now_ms`.
    pub fn advance(&mut self, now_ms: f64) {
        match self.phase {
            Phase::Idle => {}
            Phase::Revealing { .. } => self.finish_line(),
            Phase::Shown => {
                if self.index + 1 < self.script.len() {
                    self.index += 1;
                    self.begin_line(now_ms);
                }
            }
        }
    }

    /// Feed a wall-clock timestamp; reveals as many characters as are due.
    pub fn update(&mut self, now_ms: f64) {
        let ticks = self.clock.update(now_ms);
        for _ in 0..ticks {
            if !self.is_revealing() {
                break;
            }
            self.tick();
        }
    }

    /// One reveal step: show the next character, or complete the line when
    /// every character is already visible.
    pub fn tick(&mut self) {
        let Phase::Revealing { shown } = self.phase else {
            return;
        };
        let total = self.script[self.index].text.chars().count();
        if shown < total {
            let shown = shown + 1;
            self.phase = Phase::Revealing { shown };
            let text = prefix_chars(&self.script[self.index].text, shown);
            self.view.show_text(text);
        } else {
            self.finish_line();
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_revealing(&self) -> bool {
        matches!(self.phase, Phase::Revealing { .. })
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            Phase::Idle => None,
            _ => Some(self.index),
        }
    }

    /// Text currently on screen.
    pub fn displayed_text(&self) -> &str {
        match self.phase {
            Phase::Idle => "",
            Phase::Revealing { shown } => prefix_chars(&self.script[self.index].text, shown),
            Phase::Shown => &self.script[self.index].text,
        }
    }

    pub fn progress_percent(&self) -> f64 {
        if self.script.is_empty() {
            return 0.0;
        }
        (self.index + 1) as f64 / self.script.len() as f64 * 100.0
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Shown && self.index + 1 == self.script.len()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn begin_line(&mut self, now_ms: f64) {
        let line = &self.script[self.index];
        self.view.show_speaker(&line.speaker);
        self.view.show_text("");
        self.view.set_typing(true);
        self.phase = Phase::Revealing { shown: 0 };
        self.clock.start(now_ms);
        let percent = self.progress_percent();
        self.view.show_progress(percent);
    }

    fn finish_line(&mut self) {
        self.clock.cancel();
        self.phase = Phase::Shown;

        let line = &self.script[self.index];
        self.view.show_text(&line.text);
        self.view.set_typing(false);
        match &line.action {
            Some(LineAction::Callback(f)) => f(),
            Some(LineAction::NextButton { label, target }) => {
                self.view.repurpose_next(label, target);
            }
            None => {}
        }
        let percent = self.progress_percent();
        self.view.show_progress(percent);
    }
}

/// The first `n` characters of `text`, cut on a char boundary.
fn prefix_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct Recorder {
        speaker: String,
        text: String,
        typing: bool,
        progress: f64,
        next_label: Option<String>,
        next_target: Option<NextTarget>,
        text_updates: usize,
    }

    impl DialogView for Recorder {
        fn show_speaker(&mut self, speaker: &str) {
            self.speaker = speaker.to_string();
        }
        fn show_text(&mut self, text: &str) {
            self.text = text.to_string();
            self.text_updates += 1;
        }
        fn set_typing(&mut self, typing: bool) {
            self.typing = typing;
        }
        fn show_progress(&mut self, percent: f64) {
            self.progress = percent;
        }
        fn repurpose_next(&mut self, label: &str, target: &NextTarget) {
            self.next_label = Some(label.to_string());
            self.next_target = Some(target.clone());
        }
    }

    fn counter() -> (Rc<Cell<u32>>, impl Fn() + 'static) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        (count, move || c.set(c.get() + 1))
    }

    fn three_lines() -> DialogScript {
        vec![
            DialogLine::new("Фатима", "Салам"),
            DialogLine::new("Фатима", "Эчпочмак"),
            DialogLine::new("Фатима", "Чак-чак"),
        ]
    }

    #[test]
    fn new_player_is_idle() {
        let mut player = DialogPlayer::new(Recorder::default());
        assert_eq!(player.phase(), Phase::Idle);
        player.advance(0.0);
        player.tick();
        player.update(1000.0);
        assert_eq!(player.phase(), Phase::Idle);
        assert_eq!(player.current_index(), None);
        assert_eq!(player.displayed_text(), "");
    }

    #[test]
    fn empty_script_stays_idle() {
        let mut player = DialogPlayer::new(Recorder::default());
        player.init(Vec::new(), 0.0);
        assert_eq!(player.phase(), Phase::Idle);
        assert_eq!(player.progress_percent(), 0.0);
    }

    #[test]
    fn init_starts_revealing_first_line() {
        let mut player = DialogPlayer::new(Recorder::default());
        player.init(three_lines(), 0.0);
        assert_eq!(player.phase(), Phase::Revealing { shown: 0 });
        assert_eq!(player.current_index(), Some(0));
        assert_eq!(player.view().speaker, "Фатима");
        assert_eq!(player.view().text, "");
        assert!(player.view().typing);
        assert!((player.view().progress - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn ticks_reveal_multibyte_text_by_char() {
        let mut player = DialogPlayer::new(Recorder::default());
        player.init(vec![DialogLine::new("Фатима", "Чай")], 0.0);
        player.tick();
        assert_eq!(player.view().text, "Ч");
        player.tick();
        assert_eq!(player.view().text, "Ча");
        player.tick();
        assert_eq!(player.view().text, "Чай");
        // All characters visible but the line only completes on the next tick.
        assert!(player.is_revealing());
        player.tick();
        assert_eq!(player.phase(), Phase::Shown);
        assert!(!player.view().typing);
    }

    #[test]
    fn update_converts_time_into_ticks() {
        let mut player = DialogPlayer::with_interval(Recorder::default(), 50);
        player.init(vec![DialogLine::new("Фатима", "Hello")], 0.0);
        player.update(0.0);
        assert_eq!(player.displayed_text(), "");
        player.update(100.0);
        assert_eq!(player.displayed_text(), "He");
        player.update(250.0);
        assert_eq!(player.displayed_text(), "Hello");
        assert!(player.is_revealing());
        player.update(300.0);
        assert_eq!(player.phase(), Phase::Shown);
    }

    #[test]
    fn first_character_due_one_interval_after_init() {
        let mut player = DialogPlayer::with_interval(Recorder::default(), 50);
        player.init(vec![DialogLine::new("Фатима", "Hello")], 1000.0);
        player.update(1049.0);
        assert_eq!(player.displayed_text(), "");
        player.update(1050.0);
        assert_eq!(player.displayed_text(), "H");
    }

    #[test]
    fn next_line_counts_from_the_advance() {
        let mut player = DialogPlayer::with_interval(Recorder::default(), 50);
        player.init(vec![DialogLine::new("a", "ab"), DialogLine::new("b", "cd")], 0.0);
        player.advance(10.0); // skip
        player.advance(300.0);
        player.update(350.0);
        assert_eq!(player.displayed_text(), "c");
    }

    #[test]
    fn surplus_ticks_do_not_leak_into_next_line() {
        let mut player = DialogPlayer::with_interval(Recorder::default(), 10);
        player.init(vec![DialogLine::new("a", "ab"), DialogLine::new("b", "cd")], 0.0);
        player.update(0.0);
        player.update(200.0); // 20 ticks, only 3 needed
        assert_eq!(player.phase(), Phase::Shown);
        assert_eq!(player.current_index(), Some(0));
    }

    #[test]
    fn typed_completion_fires_action_once() {
        let (count, f) = counter();
        let mut player = DialogPlayer::new(Recorder::default());
        player.init(vec![DialogLine::new("a", "hi").with_callback(f)], 0.0);
        for _ in 0..10 {
            player.tick();
        }
        assert_eq!(count.get(), 1);
        player.advance(0.0);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn finished_once_last_line_is_typed_out() {
        let mut player = DialogPlayer::with_interval(Recorder::default(), 50);
        player.init(vec![DialogLine::new("a", "x"), DialogLine::new("b", "yz")], 0.0);
        player.update(100.0);
        assert!(!player.is_finished()); // line 0 shown, line 1 still ahead
        player.advance(100.0);
        player.update(200.0);
        assert!(player.is_revealing());
        assert!(!player.is_finished());
        player.update(250.0);
        assert!(player.is_finished());
        player.update(1000.0);
        assert!(player.is_finished());
    }

    #[test]
    fn skip_shows_full_text_and_fires_once() {
        let (count, f) = counter();
        let mut player = DialogPlayer::new(Recorder::default());
        player.init(vec![DialogLine::new("a", "Салам алейкум").with_callback(f)], 0.0);
        player.tick();
        player.advance(0.0);
        assert_eq!(player.view().text, "Салам алейкум");
        assert_eq!(player.phase(), Phase::Shown);
        assert_eq!(count.get(), 1);

        player.advance(0.0);
        player.tick();
        player.update(10_000.0);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn skip_cancels_pending_ticks() {
        let mut player = DialogPlayer::with_interval(Recorder::default(), 50);
        player.init(vec![DialogLine::new("a", "abc"), DialogLine::new("b", "def")], 0.0);
        player.update(0.0);
        player.update(50.0);
        player.advance(0.0); // skip
        let updates = player.view().text_updates;
        player.update(400.0);
        assert_eq!(player.view().text_updates, updates);
        assert_eq!(player.current_index(), Some(0));
    }

    #[test]
    fn advance_walks_to_last_line_then_stops() {
        let mut player = DialogPlayer::new(Recorder::default());
        player.init(three_lines(), 0.0);
        player.advance(0.0); // skip line 0
        for expected in 1..3 {
            player.advance(0.0);
            assert_eq!(player.current_index(), Some(expected));
            assert!(player.is_revealing());
            player.advance(0.0);
        }
        assert!(player.is_finished());
        player.advance(0.0);
        assert_eq!(player.current_index(), Some(2));
        assert_eq!(player.phase(), Phase::Shown);
        assert_eq!(player.view().text, "Чак-чак");
        assert!((player.view().progress - 100.0).abs() < 1e-9);
    }

    #[test]
    fn next_button_action_reaches_view() {
        let mut player = DialogPlayer::new(Recorder::default());
        let line = DialogLine::new("a", "go").with_action(LineAction::NextButton {
            label: "К холодильнику!".into(),
            target: NextTarget::Page("refrigerator.html".into()),
        });
        player.init(vec![line], 0.0);
        assert_eq!(player.view().next_label, None);
        player.advance(0.0);
        assert_eq!(player.view().next_label.as_deref(), Some("К холодильнику!"));
        assert_eq!(
            player.view().next_target,
            Some(NextTarget::Page("refrigerator.html".into()))
        );
    }

    #[test]
    fn empty_line_completes_on_first_tick() {
        let (count, f) = counter();
        let mut player = DialogPlayer::new(Recorder::default());
        player.init(vec![DialogLine::new("a", "").with_callback(f)], 0.0);
        player.tick();
        assert_eq!(player.phase(), Phase::Shown);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn reinit_resets_position() {
        let mut player = DialogPlayer::new(Recorder::default());
        player.init(three_lines(), 0.0);
        player.advance(0.0);
        player.advance(0.0);
        player.init(three_lines(), 0.0);
        assert_eq!(player.current_index(), Some(0));
        assert!(player.is_revealing());
    }

    #[test]
    fn prefix_chars_boundaries() {
        assert_eq!(prefix_chars("Чай", 0), "");
        assert_eq!(prefix_chars("Чай", 2), "Ча");
        assert_eq!(prefix_chars("Чай", 3), "Чай");
        assert_eq!(prefix_chars("Чай", 9), "Чай");
    }
}
