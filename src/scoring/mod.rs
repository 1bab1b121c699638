//! Recitation scoring: compares a speech-to-text transcript against the
//! expected transliteration of a verse and reports a similarity percentage
//! plus the expected words that were not matched.

pub mod distance;
pub mod normalize;

pub use distance::levenshtein;
pub use normalize::normalize;

use serde::Serialize;
use tracing::debug;

/// Outcome of scoring one recitation attempt. Owned entirely by the caller;
/// nothing is shared or cached across invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PronunciationResult {
    /// Similarity percentage in [0, 100].
    pub score: u8,
    /// Normalized reference transliteration.
    pub expected: String,
    /// Normalized transcription.
    pub actual: String,
    /// Expected words without a positional match in the transcription,
    /// in verse order.
    pub mismatches: Vec<String>,
}

/// Scores a recitation transcript against the expected transliteration.
///
/// Both inputs are normalized (see [`normalize`]) before a character-level
/// Levenshtein comparison. Two empty strings score a perfect 100. The word
/// mismatch list compares position by position without realignment, so a
/// dropped word shifts every later word out of place; acceptable for
/// lightweight practice feedback.
pub fn score_pronunciation(
    expected_transliteration: &str,
    actual_transcription: &str,
) -> PronunciationResult {
    let expected = normalize(expected_transliteration);
    let actual = normalize(actual_transcription);

    let max_len = expected.chars().count().max(actual.chars().count());
    let score = if max_len == 0 {
        100
    } else {
        let distance = levenshtein(&expected, &actual);
        let raw = ((max_len as f64 - distance as f64) / max_len as f64 * 100.0).round();
        raw.clamp(0.0, 100.0) as u8
    };

    let mismatches = word_mismatches(&expected, &actual);
    debug!(
        score,
        mismatched_words = mismatches.len(),
        "scored recitation attempt"
    );

    PronunciationResult {
        score,
        expected,
        actual,
        mismatches,
    }
}

/// Positional word comparison: the i-th expected word is flagged when it
/// differs from the i-th transcribed word (or has no counterpart).
fn word_mismatches(expected: &str, actual: &str) -> Vec<String> {
    let expected_words: Vec<&str> = expected.split(' ').collect();
    let actual_words: Vec<&str> = actual.split(' ').collect();

    let mut mismatches = Vec::new();
    for i in 0..expected_words.len().max(actual_words.len()) {
        let exp = expected_words.get(i).copied().unwrap_or("");
        let act = actual_words.get(i).copied().unwrap_or("");
        if exp != act && !exp.is_empty() {
            mismatches.push(exp.to_string());
        }
    }
    mismatches
}
