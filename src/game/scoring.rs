//! Scoring for accepted words
//!
//! A word is worth its length plus the number of words already found, so
//! each new word is worth more than the last at equal length.
//!
//! Scores are `u64`. Every increment is at least 3 and bounded by the word
//! length plus the history size, so a session would need on the order of
//! 2^32 accepted words before the running total came near the limit.

/// Points for a newly accepted word.
pub fn score_increment(word_length: usize, history_len: usize) -> u64 {
    let points = word_length.saturating_add(history_len);
    u64::try_from(points).unwrap_or(u64::MAX)
}

/// Add an increment to the running score.
pub fn apply_increment(score: u64, increment: u64) -> u64 {
    score.saturating_add(increment)
}
