//! Word validation for SCRAMBLE
//!
//! Validates submitted words against:
//! - Minimum length (3 characters)
//! - The root word itself
//! - Words already accepted this session
//! - Letter availability in the root word (with multiplicity)
//! - Dictionary presence

use super::dictionary::Dictionary;
use super::normalize;

/// Minimum word length for valid submissions
pub const MIN_WORD_LENGTH: usize = 3;

/// Why a candidate word was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Fewer than 3 characters after normalization
    TooShort,
    /// The candidate is the root word
    SameAsRoot,
    /// The candidate was already accepted this session
    AlreadyUsed,
    /// The candidate needs letters the root word does not have
    NotSpellableFromRoot,
    /// The dictionary does not know the candidate
    NotARealWord,
}

impl Rejection {
    /// Every rejection reason, in rule order
    #[cfg(test)]
    pub fn all() -> &'static [Rejection] {
        &[
            Rejection::TooShort,
            Rejection::SameAsRoot,
            Rejection::AlreadyUsed,
            Rejection::NotSpellableFromRoot,
            Rejection::NotARealWord,
        ]
    }
}

/// Result of validating one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Candidate passed every rule; carries the normalized word
    Accepted { word: String },
    /// Candidate failed the first rule listed in [`Rejection`]
    Rejected(Rejection),
}

impl Verdict {
    /// Returns true if the word was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted { .. })
    }

    /// The normalized word, if accepted
    pub fn accepted_word(&self) -> Option<&str> {
        match self {
            Verdict::Accepted { word } => Some(word),
            Verdict::Rejected(_) => None,
        }
    }

    /// The rejection reason, if rejected
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Verdict::Accepted { .. } => None,
            Verdict::Rejected(reason) => Some(*reason),
        }
    }
}

/// Validate a candidate against the root word, history and dictionary
///
/// Checks in order, stopping at the first failure:
/// 1. Length >= 3
/// 2. Not the root word
/// 3. Not already used
/// 4. All letters available in the root (with multiplicity)
/// 5. Word exists in dictionary
///
/// `root` and `history` are expected to be lowercase already.
pub fn validate<D>(
    candidate: &str,
    root: &str,
    history: &[String],
    dictionary: &D,
    language: &str,
) -> Verdict
where
    D: Dictionary + ?Sized,
{
    let word = normalize(candidate);

    if word.chars().count() < MIN_WORD_LENGTH {
        return Verdict::Rejected(Rejection::TooShort);
    }

    if word == root {
        return Verdict::Rejected(Rejection::SameAsRoot);
    }

    if !is_original(&word, history) {
        return Verdict::Rejected(Rejection::AlreadyUsed);
    }

    if !is_spellable_from(&word, root) {
        return Verdict::Rejected(Rejection::NotSpellableFromRoot);
    }

    if !dictionary.is_known_word(&word, language) {
        return Verdict::Rejected(Rejection::NotARealWord);
    }

    Verdict::Accepted { word }
}

/// Check that `word` has not been accepted before
pub fn is_original(word: &str, history: &[String]) -> bool {
    !history.iter().any(|used| used == word)
}

/// Check if every letter in `word` is available in `root` (respecting multiplicity)
///
/// Consumes one matching letter of the root per letter of the word, left to
/// right, and fails on the first letter with nothing left to match.
pub fn is_spellable_from(word: &str, root: &str) -> bool {
    let mut available: Vec<char> = root.chars().collect();

    for c in word.chars() {
        match available.iter().position(|&r| r == c) {
            Some(pos) => {
                available.swap_remove(pos);
            }
            None => return false,
        }
    }

    true
}
