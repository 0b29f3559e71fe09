//! Command-line configuration

use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;

use crate::error::ScrambleError;
use crate::game::dictionary::{self, Dictionary, WordListDictionary, DEFAULT_LANGUAGE};
use crate::game::word_list::{BundledStartWords, FileWordList, WordListSource};

/// File name looked up in the data directory for custom start words
pub const START_WORDS_FILE: &str = "start.txt";

/// Default log file name inside the data directory
pub const LOG_FILE: &str = "scramble.log";

/// Scramble: spell as many words as you can from the root word
#[derive(Parser, Debug, Clone)]
#[command(name = "scramble", version, about, long_about = None)]
pub struct Cli {
    /// Word list to draw root words from, one per line
    #[arg(long, value_name = "PATH")]
    pub start_words: Option<PathBuf>,

    /// Word list to use as the dictionary, one word per line
    #[arg(long, value_name = "PATH")]
    pub dictionary: Option<PathBuf>,

    /// Dictionary language
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Seed for root word selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where to write the log
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(long)]
    pub debug: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            start_words: None,
            dictionary: None,
            language: DEFAULT_LANGUAGE.to_string(),
            seed: None,
            log_file: None,
            debug: false,
        }
    }
}

impl Cli {
    /// Source for root words: the flag, then `start.txt` in the data
    /// directory, then the bundled list.
    pub fn word_source(&self) -> Box<dyn WordListSource> {
        if let Some(path) = &self.start_words {
            return Box::new(FileWordList::new(path));
        }

        match data_dir() {
            Ok(dir) if dir.join(START_WORDS_FILE).is_file() => {
                Box::new(FileWordList::new(dir.join(START_WORDS_FILE)))
            }
            _ => Box::new(BundledStartWords),
        }
    }

    /// The dictionary from `--dictionary`, or the bundled one.
    ///
    /// The bundled dictionary only knows its own language; asking it for
    /// any other would reject every word.
    pub fn dictionary(&self) -> Result<Box<dyn Dictionary>, ScrambleError> {
        match &self.dictionary {
            Some(path) => {
                let dict = WordListDictionary::load_from_path(&self.language, path).map_err(
                    |source| ScrambleError::Dictionary {
                        path: path.clone(),
                        source,
                    },
                )?;
                log::info!(
                    "loaded {} words from {}",
                    dict.word_count(),
                    path.display()
                );
                Ok(Box::new(dict))
            }
            None => {
                let bundled = dictionary::bundled();
                if !bundled.language().eq_ignore_ascii_case(&self.language) {
                    return Err(ScrambleError::UnsupportedLanguage {
                        language: self.language.clone(),
                    });
                }
                Ok(Box::new(bundled.clone()))
            }
        }
    }

    /// Log destination: the flag, or `scramble.log` in the data directory.
    pub fn log_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.log_file {
            return Some(path.clone());
        }
        let dir = data_dir().ok()?;
        std::fs::create_dir_all(&dir).ok()?;
        Some(dir.join(LOG_FILE))
    }
}

/// Get the OS-standard data directory for Scramble
///
/// - Linux: `$XDG_DATA_HOME/scramble/` or `~/.local/share/scramble/`
/// - macOS: `~/Library/Application Support/scramble/`
pub fn data_dir() -> Result<PathBuf, ScrambleError> {
    ProjectDirs::from("", "", "scramble")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(ScrambleError::NoDataDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["scramble"]);
        assert_eq!(cli.language, "en");
        assert!(cli.seed.is_none());
        assert!(!cli.debug);
        assert!(cli.dictionary.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "scramble",
            "--start-words",
            "roots.txt",
            "--language",
            "fr",
            "--seed",
            "42",
            "--debug",
        ]);
        assert_eq!(cli.start_words, Some(PathBuf::from("roots.txt")));
        assert_eq!(cli.language, "fr");
        assert_eq!(cli.seed, Some(42));
        assert!(cli.debug);
    }

    #[test]
    fn test_start_words_flag_wins() {
        let path = std::env::temp_dir().join(format!("scramble-cli-{}.txt", std::process::id()));
        std::fs::write(&path, "blizzard\n").unwrap();

        let cli = Cli {
            start_words: Some(path.clone()),
            ..Default::default()
        };
        let words = cli.word_source().load_word_list().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["blizzard".to_string()]);
    }

    #[test]
    fn test_bundled_dictionary_by_default() {
        let cli = Cli::parse_from(["scramble"]);
        let dict = cli.dictionary().unwrap();
        assert!(dict.is_known_word("silk", "en"));
    }

    #[test]
    fn test_missing_dictionary_file_is_error() {
        let cli = Cli::parse_from(["scramble", "--dictionary", "/no/such/scramble/words.txt"]);
        let err = cli.dictionary().err().unwrap();
        assert!(matches!(err, ScrambleError::Dictionary { .. }));
    }

    #[test]
    fn test_other_language_needs_dictionary_file() {
        let cli = Cli::parse_from(["scramble", "--language", "fr"]);
        let err = cli.dictionary().err().unwrap();
        assert!(matches!(
            &err,
            ScrambleError::UnsupportedLanguage { language } if language == "fr"
        ));
        assert!(err.to_string().contains("--dictionary"));
    }

    #[test]
    fn test_language_match_is_case_insensitive() {
        let cli = Cli::parse_from(["scramble", "--language", "EN"]);
        let dict = cli.dictionary().unwrap();
        assert!(dict.is_known_word("silk", "EN"));
    }

    #[test]
    fn test_other_language_with_dictionary_file() {
        let path = std::env::temp_dir().join(format!("scramble-fr-{}.txt", std::process::id()));
        std::fs::write(&path, "soir\nrois\n").unwrap();

        let cli = Cli::parse_from([
            "scramble",
            "--language",
            "fr",
            "--dictionary",
            path.to_str().unwrap(),
        ]);
        let dict = cli.dictionary().unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(dict.is_known_word("soir", "fr"));
    }

    #[test]
    fn test_default_matches_parsed_defaults() {
        let default = Cli::default();
        let parsed = Cli::parse_from(["scramble"]);
        assert_eq!(default.language, parsed.language);
        assert_eq!(default.seed, parsed.seed);
        assert_eq!(default.debug, parsed.debug);
        assert!(default.dictionary().unwrap().is_known_word("silk", "en"));
    }

    #[test]
    fn test_log_file_flag() {
        let cli = Cli::parse_from(["scramble", "--log-file", "game.log"]);
        assert_eq!(cli.log_path(), Some(PathBuf::from("game.log")));
    }
}
