//! Errors that stop the game from starting.
//!
//! Rejected words are not errors; see [`crate::game::validation::Rejection`].

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ScrambleError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("could not load dictionary {}: {source}", path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no bundled dictionary for language {language:?}; pass --dictionary")]
    UnsupportedLanguage { language: String },

    #[error("could not determine data directory")]
    NoDataDirectory,
}
