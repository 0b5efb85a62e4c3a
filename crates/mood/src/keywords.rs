//! Keyword-based mood detection for free chat text.

use catalog::Mood;
use tracing::debug;

/// Keyword groups in priority order; the first group with a hit wins
const KEYWORD_GROUPS: [(Mood, &[&str]); 5] = [
    (Mood::Excited, &["excited", "action", "adventure"]),
    (Mood::Calm, &["calm", "peaceful", "quiet"]),
    (Mood::Emotional, &["sad", "emotional", "cry"]),
    (Mood::Happy, &["happy", "comedy", "fun"]),
    (Mood::Relaxed, &["relax", "chill", "easy"]),
];

/// Guess a mood from what the user typed. Defaults to `Mood::Happy`.
///
/// Matching is a case-insensitive substring test, so "crying" hits "cry"
/// and "funny" hits "fun".
pub fn detect_mood(text: &str) -> Mood {
    let lowered = text.to_lowercase();

    let detected = KEYWORD_GROUPS
        .iter()
        .find(|(_, words)| words.iter().any(|w| lowered.contains(w)))
        .map(|&(mood, _)| mood)
        .unwrap_or(Mood::Happy);

    debug!("Detected {} from chat text", detected);
    detected
}
