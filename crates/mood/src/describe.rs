//! Human-readable text about moods.

use catalog::Mood;

/// Blurb shown with quiz results
pub fn describe(mood: Mood) -> &'static str {
    match mood {
        Mood::Excited => {
            "You're feeling energetic and ready for action! Perfect for high-energy adventures and thrilling stories."
        }
        Mood::Calm => {
            "You're in a peaceful state of mind. Great for thoughtful dramas and serene narratives."
        }
        Mood::Emotional => {
            "You're ready to feel deeply. Ideal for touching stories that tug at the heartstrings."
        }
        Mood::Happy => {
            "You're in a cheerful mood! Perfect for feel-good movies and uplifting adventures."
        }
        Mood::Relaxed => {
            "You want to unwind and take it easy. Great for laid-back comedies and gentle stories."
        }
    }
}

/// Bot line restating the mood detected from chat text
pub fn restate(mood: Mood) -> String {
    format!(
        "Based on what you said, I think you're in a {} mood! Here are some perfect movie recommendations for you:",
        mood.name().to_lowercase()
    )
}
