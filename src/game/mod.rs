//! Game logic: root words, word validation, scoring, sessions

pub mod dictionary;
pub mod scoring;
pub mod validation;
pub mod word_list;

use rand::prelude::*;

use dictionary::Dictionary;
use scoring::{apply_increment, score_increment};
use validation::{validate, Verdict};
use word_list::WordListSource;

/// Root word used when the word list cannot be loaded or is empty
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

/// Trim surrounding whitespace and newlines, then lowercase.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Pick a root word uniformly at random from `words`.
/// Falls back to [`DEFAULT_ROOT_WORD`] when the list is empty.
pub fn choose_root_word<R: Rng + ?Sized>(words: &[String], rng: &mut R) -> String {
    words
        .choose(rng)
        .map(|w| normalize(w))
        .filter(|w| !w.is_empty())
        .unwrap_or_else(|| DEFAULT_ROOT_WORD.to_string())
}

/// Begin a session: pick a root word, empty history, zero score.
///
/// A word list that fails to load or comes back empty is not fatal; the
/// default root word is used instead.
pub fn start_session<S, R>(source: &S, rng: &mut R) -> (String, Vec<String>, u64)
where
    S: WordListSource + ?Sized,
    R: Rng + ?Sized,
{
    let words = match source.load_word_list() {
        Ok(words) => {
            if words.is_empty() {
                log::warn!("word list is empty, using default root word");
            }
            words
        }
        Err(e) => {
            log::warn!("{}, using default root word", e);
            Vec::new()
        }
    };

    let root = choose_root_word(&words, rng);
    log::info!("new session with root word {:?}", root);
    (root, Vec::new(), 0)
}

/// One game session: a root word, the words found so far and the score.
///
/// Owned by the caller. Only [`Session::submit`] and the start/restart
/// methods mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    root: String,
    /// Accepted words, newest first
    used_words: Vec<String>,
    score: u64,
    /// Points added by the most recent accepted word
    last_increment: Option<u64>,
}

impl Session {
    /// Start a session with a root word from `source`.
    pub fn start<S: WordListSource + ?Sized>(source: &S) -> Self {
        Self::start_with_rng(source, &mut rand::rng())
    }

    /// Start a session using a specific RNG (for testing/seeding).
    pub fn start_with_rng<S, R>(source: &S, rng: &mut R) -> Self
    where
        S: WordListSource + ?Sized,
        R: Rng + ?Sized,
    {
        let (root, used_words, score) = start_session(source, rng);
        Self {
            root,
            used_words,
            score,
            last_increment: None,
        }
    }

    /// Start a session on a known root word.
    pub fn with_root(root: &str) -> Self {
        Self {
            root: normalize(root),
            used_words: Vec::new(),
            score: 0,
            last_increment: None,
        }
    }

    /// New deal: discard history and score and re-roll the root word.
    pub fn restart<S: WordListSource + ?Sized>(&mut self, source: &S) {
        self.restart_with_rng(source, &mut rand::rng());
    }

    /// Restart using a specific RNG.
    pub fn restart_with_rng<S, R>(&mut self, source: &S, rng: &mut R)
    where
        S: WordListSource + ?Sized,
        R: Rng + ?Sized,
    {
        *self = Self::start_with_rng(source, rng);
    }

    /// Validate a candidate and, if accepted, record it and add its points.
    pub fn submit<D>(&mut self, candidate: &str, dictionary: &D, language: &str) -> Verdict
    where
        D: Dictionary + ?Sized,
    {
        let verdict = validate(candidate, &self.root, &self.used_words, dictionary, language);

        if let Verdict::Accepted { word } = &verdict {
            let points = score_increment(word.chars().count(), self.used_words.len());
            self.score = apply_increment(self.score, points);
            self.last_increment = Some(points);
            self.used_words.insert(0, word.clone());
            log::debug!("accepted {:?} for {} points", word, points);
        } else {
            log::debug!("rejected {:?}: {:?}", candidate, verdict);
        }

        verdict
    }

    /// The root word for this session
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Accepted words, newest first
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Current score
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Points the most recent accepted word added to the score
    pub fn last_increment(&self) -> Option<u64> {
        self.last_increment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::validation::Rejection;
    use crate::game::word_list::{BundledStartWords, WordListError};
    use rand::rngs::StdRng;

    struct FailingSource;

    impl WordListSource for FailingSource {
        fn load_word_list(&self) -> Result<Vec<String>, WordListError> {
            Err(WordListError::Read {
                path: "start.txt".into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            })
        }
    }

    fn any_word(_: &str, _: &str) -> bool {
        true
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Silk\n"), "silk");
        assert_eq!(normalize("\tWORM \r\n"), "worm");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["silk", "  MiLk ", "\nworms\n", "", "ÉCOLE"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_start_session_is_fresh() {
        let (root, history, score) = start_session(&BundledStartWords, &mut rand::rng());
        assert!(!root.is_empty());
        assert!(history.is_empty());
        assert_eq!(score, 0);
    }

    #[test]
    fn test_failing_source_uses_default() {
        let session = Session::start(&FailingSource);
        assert_eq!(session.root(), DEFAULT_ROOT_WORD);
    }

    #[test]
    fn test_empty_source_uses_default() {
        let session = Session::start(&Vec::<String>::new());
        assert_eq!(session.root(), DEFAULT_ROOT_WORD);
    }

    #[test]
    fn test_root_is_drawn_from_list() {
        let words = vec!["blizzard".to_string(), "checkers".to_string()];
        for _ in 0..20 {
            let session = Session::start(&words);
            assert!(words.contains(&session.root().to_string()));
        }
    }

    #[test]
    fn test_seeded_selection_is_deterministic() {
        use rand::SeedableRng;

        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        let a = Session::start_with_rng(&BundledStartWords, &mut rng1);
        let b = Session::start_with_rng(&BundledStartWords, &mut rng2);

        assert_eq!(a.root(), b.root());
    }

    #[test]
    fn test_submit_accepts_and_scores() {
        let mut session = Session::with_root("silkworm");

        let verdict = session.submit("silk", &any_word, "en");
        assert_eq!(verdict.accepted_word(), Some("silk"));
        assert_eq!(session.score(), 4);
        assert_eq!(session.used_words(), ["silk".to_string()]);

        // 4 letters + 1 word already found
        session.submit("worm", &any_word, "en");
        assert_eq!(session.score(), 9);
    }

    #[test]
    fn test_last_increment_matches_score_change() {
        let mut session = Session::with_root("silkworm");
        assert_eq!(session.last_increment(), None);

        for word in ["silk", "worm", "works"] {
            let before = session.score();
            session.submit(word, &any_word, "en");
            assert_eq!(session.last_increment(), Some(session.score() - before));
        }
        // 5 letters + 2 words already found
        assert_eq!(session.last_increment(), Some(7));

        // A rejection keeps the last applied increment
        session.submit("silk", &any_word, "en");
        assert_eq!(session.last_increment(), Some(7));

        session.restart(&vec!["blizzard".to_string()]);
        assert_eq!(session.last_increment(), None);
    }

    #[test]
    fn test_history_is_newest_first() {
        let mut session = Session::with_root("silkworm");
        session.submit("silk", &any_word, "en");
        session.submit("worm", &any_word, "en");
        session.submit("milk", &any_word, "en");

        assert_eq!(
            session.used_words(),
            ["milk".to_string(), "worm".to_string(), "silk".to_string()]
        );
    }

    #[test]
    fn test_score_uses_normalized_length() {
        let mut session = Session::with_root("silkworm");
        session.submit("   SILK   \n", &any_word, "en");
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn test_rejection_leaves_state_unchanged() {
        let mut session = Session::with_root("silkworm");
        session.submit("silk", &any_word, "en");
        let before = session.clone();

        assert_eq!(
            session.submit("silk", &any_word, "en"),
            Verdict::Rejected(Rejection::AlreadyUsed)
        );
        assert_eq!(
            session.submit("silos", &any_word, "en"),
            Verdict::Rejected(Rejection::NotSpellableFromRoot)
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_restart_resets_state() {
        let mut session = Session::with_root("silkworm");
        session.submit("silk", &any_word, "en");
        assert!(session.score() > 0);

        let words = vec!["blizzard".to_string()];
        session.restart(&words);

        assert_eq!(session.root(), "blizzard");
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_with_root_normalizes() {
        assert_eq!(Session::with_root(" SilkWorm ").root(), "silkworm");
    }
}
