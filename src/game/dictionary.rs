//! Dictionary lookup for word validation
//!
//! The validator only needs to ask "is this a real word in this language?",
//! so any lookup (static list, platform spell checker, remote service) can
//! stand behind the [`Dictionary`] trait.
//!
//! Embeds an English word list at build time and provides O(1) hash set
//! lookup over it.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;

/// Language code used when none is configured
pub const DEFAULT_LANGUAGE: &str = "en";

/// Embedded English wordlist
/// Words are lowercase, alphabetic only, one per line
static WORDS_DATA: &str = include_str!("../../data/words.txt");

/// Pre-built bundled dictionary
static BUNDLED: Lazy<WordListDictionary> =
    Lazy::new(|| WordListDictionary::from_text(DEFAULT_LANGUAGE, WORDS_DATA));

/// Spell-checking capability consumed by the validator.
pub trait Dictionary: Send + Sync {
    /// Returns true if `word` is a recognised word in `language`.
    /// Unknown or misspelled input is `false`, never a panic.
    fn is_known_word(&self, word: &str, language: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

/// A dictionary backed by a set of words in a single language.
#[derive(Debug, Clone, Default)]
pub struct WordListDictionary {
    language: String,
    words: HashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from newline-separated text.
    /// Blank lines are skipped; entries are trimmed and lowercased.
    pub fn from_text(language: &str, text: &str) -> Self {
        Self::from_words(language, text.lines())
    }

    /// Build a dictionary from any sequence of words.
    pub fn from_words<I, S>(language: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            language: language.to_lowercase(),
            words,
        }
    }

    /// Load a dictionary from a word list file, one word per line.
    pub fn load_from_path(language: &str, path: &Path) -> std::io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_text(language, &text))
    }

    /// The language this dictionary answers for
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the total number of words in the dictionary
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl Dictionary for WordListDictionary {
    /// Case-insensitive in both word and language.
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        if !self.language.eq_ignore_ascii_case(language) {
            return false;
        }
        let lower = word.to_lowercase();
        self.words.contains(lower.as_str())
    }
}

/// The English dictionary compiled into the binary.
pub fn bundled() -> &'static WordListDictionary {
    &BUNDLED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_valid_words() {
        let dict = bundled();
        assert!(dict.is_known_word("silk", "en"));
        assert!(dict.is_known_word("worm", "en"));
        assert!(dict.is_known_word("milk", "en"));
        assert!(dict.is_known_word("word", "en"));
    }

    #[test]
    fn test_case_insensitive() {
        let dict = bundled();
        assert!(dict.is_known_word("Silk", "en"));
        assert!(dict.is_known_word("SILK", "EN"));
    }

    #[test]
    fn test_invalid_words() {
        let dict = bundled();
        assert!(!dict.is_known_word("xyzzyplugh", "en"));
        assert!(!dict.is_known_word("asdfghjkl", "en"));
        assert!(!dict.is_known_word("", "en"));
    }

    #[test]
    fn test_other_language_unknown() {
        assert!(!bundled().is_known_word("silk", "fr"));
    }

    #[test]
    fn test_bundled_word_count() {
        let count = bundled().word_count();
        assert!(count > 500, "Expected 500+ words, got {}", count);
        assert_eq!(bundled().language(), "en");
    }

    #[test]
    fn test_from_text_skips_blank_lines() {
        let dict = WordListDictionary::from_text("en", "Cat\n\n  dog \n");
        assert_eq!(dict.word_count(), 2);
        assert!(dict.is_known_word("cat", "en"));
        assert!(dict.is_known_word("dog", "en"));
    }

    #[test]
    fn test_load_from_missing_path() {
        let path = std::env::temp_dir().join("scramble-no-such-dictionary.txt");
        assert!(WordListDictionary::load_from_path("en", &path).is_err());
    }

    #[test]
    fn test_closure_dictionary() {
        let only_cat = |word: &str, _: &str| word == "cat";
        assert!(only_cat.is_known_word("cat", "en"));
        assert!(!only_cat.is_known_word("dog", "en"));
    }
}
