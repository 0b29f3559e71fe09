//! SCRAMBLE - spell words from the letters of a root word
//!
//! The rules engine lives in [`game`]: [`game::validation::validate`] decides
//! whether a candidate word is admissible, [`game::scoring`] prices it and
//! [`game::Session`] holds one game's root word, history and score.
//! [`app`] and [`tui`] are the terminal front end.

pub mod app;
pub mod config;
pub mod error;
pub mod game;
pub mod log;
pub mod tui;

pub use error::ScrambleError;
pub use game::dictionary::{Dictionary, WordListDictionary, DEFAULT_LANGUAGE};
pub use game::scoring::{apply_increment, score_increment};
pub use game::validation::{validate, Rejection, Verdict};
pub use game::word_list::{BundledStartWords, FileWordList, WordListError, WordListSource};
pub use game::{normalize, start_session, Session, DEFAULT_ROOT_WORD};
