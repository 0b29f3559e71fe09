//! Application state management

use crate::game::dictionary::{Dictionary, DEFAULT_LANGUAGE};
use crate::game::validation::{Rejection, Verdict};
use crate::game::word_list::WordListSource;
use crate::game::Session;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A modal message shown after a rejected word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    /// Build the alert for a rejection against `root`
    pub fn for_rejection(reason: Rejection, root: &str) -> Self {
        let (title, message) = match reason {
            Rejection::TooShort => (
                "Too short",
                "A word must have at least 3 letters.".to_string(),
            ),
            Rejection::SameAsRoot => ("Same word as root word", "You cannot use that one!".to_string()),
            Rejection::AlreadyUsed => ("Word used already", "Be more original".to_string()),
            Rejection::NotSpellableFromRoot => (
                "Word not possible",
                format!("You can't spell that word from '{}'!", root),
            ),
            Rejection::NotARealWord => (
                "Word not recognized",
                "You can't just make them up, right?".to_string(),
            ),
        };

        Self {
            title: title.to_string(),
            message,
        }
    }
}

/// Main application state
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,
    /// Current user input
    pub input: String,
    /// Alert from the last rejected submission, until dismissed
    pub alert: Option<Alert>,
    /// Points awarded for the last accepted word
    pub last_points: Option<u64>,
    session: Session,
    dictionary: Box<dyn Dictionary>,
    language: String,
    word_source: Box<dyn WordListSource>,
    rng: StdRng,
}

impl App {
    /// Create a new application and deal the first root word
    pub fn new(
        dictionary: Box<dyn Dictionary>,
        word_source: Box<dyn WordListSource>,
        language: &str,
        seed: Option<u64>,
    ) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let session = Session::start_with_rng(word_source.as_ref(), &mut rng);

        Self {
            should_quit: false,
            input: String::new(),
            alert: None,
            last_points: None,
            session,
            dictionary,
            language: language.to_string(),
            word_source,
            rng,
        }
    }

    /// Create an application using the bundled dictionary and start words
    pub fn with_defaults(seed: Option<u64>) -> Self {
        Self::new(
            Box::new(crate::game::dictionary::bundled().clone()),
            Box::new(crate::game::word_list::BundledStartWords),
            DEFAULT_LANGUAGE,
            seed,
        )
    }

    /// Signal the application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Dispatch a key press.
    ///
    /// Characters typed with Ctrl or Alt held are shortcuts, never input.
    pub fn on_key(&mut self, key: KeyEvent) {
        // Only handle key press events (not release)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.on_escape(),
            KeyCode::Enter => self.on_submit(),
            KeyCode::Backspace => self.on_backspace(),
            KeyCode::F(2) => self.new_deal(),
            KeyCode::Char('n') if ctrl => self.new_deal(),
            KeyCode::Char('c') if ctrl => self.quit(),
            KeyCode::Char(c) if is_plain(key.modifiers) => self.on_char(c),
            _ => {}
        }
    }

    /// Handle character input (ignored while an alert is open)
    pub fn on_char(&mut self, c: char) {
        if self.alert.is_some() {
            return;
        }
        self.input.push(c);
        self.last_points = None;
    }

    /// Handle backspace (ignored while an alert is open)
    pub fn on_backspace(&mut self) {
        if self.alert.is_some() {
            return;
        }
        self.input.pop();
        self.last_points = None;
    }

    /// Handle Enter: dismiss an open alert, otherwise submit the input
    pub fn on_submit(&mut self) {
        if self.alert.is_some() {
            self.dismiss_alert();
            return;
        }

        let verdict = self
            .session
            .submit(&self.input, self.dictionary.as_ref(), &self.language);

        match verdict {
            Verdict::Accepted { .. } => {
                self.last_points = self.session.last_increment();
                self.input.clear();
            }
            Verdict::Rejected(reason) => {
                self.alert = Some(Alert::for_rejection(reason, self.session.root()));
            }
        }
    }

    /// Handle Esc: dismiss an open alert, otherwise quit
    pub fn on_escape(&mut self) {
        if self.alert.is_some() {
            self.dismiss_alert();
        } else {
            self.quit();
        }
    }

    /// Close the alert, keeping the input for correction
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// New deal: fresh root word, empty history, zero score
    pub fn new_deal(&mut self) {
        self.session
            .restart_with_rng(self.word_source.as_ref(), &mut self.rng);
        self.input.clear();
        self.alert = None;
        self.last_points = None;
    }

    /// The current session
    pub fn session(&self) -> &Session {
        &self.session
    }
}

/// No modifier other than Shift is held
fn is_plain(modifiers: KeyModifiers) -> bool {
    modifiers.difference(KeyModifiers::SHIFT).is_empty()
}
