//! Quiz mood classifier.
//!
//! ## Algorithm
//! 1. Map every answer symbol to a mood via the quiz option table
//!    (unknown symbols are skipped)
//! 2. Tally occurrences per mood
//! 3. Pick the mood with the strictly highest tally, scanning in
//!    `Mood::ALL` order so ties go to the earlier mood
//! 4. No tallies at all means `Mood::Happy`

use catalog::{Mood, quiz_option_mood};
use tracing::debug;

/// Count how many answers point at each mood, indexed by `Mood::index`
pub fn tally<S: AsRef<str>>(answers: &[S]) -> [usize; 5] {
    let mut counts = [0usize; 5];
    for answer in answers {
        match quiz_option_mood(answer.as_ref()) {
            Some(mood) => counts[mood.index()] += 1,
            None => debug!("Ignoring unmapped quiz answer {:?}", answer.as_ref()),
        }
    }
    counts
}

/// Predict the dominant mood from quiz answers. Total over any input.
pub fn predict_mood<S: AsRef<str>>(answers: &[S]) -> Mood {
    let counts = tally(answers);

    let mut top = Mood::Happy;
    let mut max = 0;
    for mood in Mood::ALL {
        let count = counts[mood.index()];
        if count > max {
            max = count;
            top = mood;
        }
    }

    debug!("Quiz tally {:?} -> {}", counts, top);
    top
}
