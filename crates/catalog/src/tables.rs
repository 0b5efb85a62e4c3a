//! Fixed lookup tables: mood → genres, quiz option → mood, quiz questions.

use crate::types::{Mood, QuizOption, QuizQuestion};

/// Genres that suit each mood
pub fn mood_genres(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Excited => &["Action", "Adventure", "Thriller", "Sci-Fi"],
        Mood::Calm => &["Drama", "Romance", "Documentary"],
        Mood::Emotional => &["Drama", "Biography", "Romance", "Animation"],
        Mood::Happy => &["Comedy", "Adventure", "Family", "Musical"],
        Mood::Relaxed => &["Comedy", "Drama", "Romance", "Adventure"],
    }
}

const OPTION_MOODS: [(&str, Mood); 19] = [
    ("🎉", Mood::Excited),
    ("🎧", Mood::Excited),
    ("🏙", Mood::Excited),
    ("🍿", Mood::Excited),
    ("📚", Mood::Calm),
    ("☕", Mood::Calm),
    ("🎼", Mood::Calm),
    ("🏔", Mood::Calm),
    ("🌧", Mood::Emotional),
    ("❤", Mood::Emotional),
    ("🍦", Mood::Emotional),
    ("🍕", Mood::Happy),
    ("🌞", Mood::Happy),
    ("🏖", Mood::Happy),
    ("📺", Mood::Happy),
    ("😴", Mood::Relaxed),
    ("🌾", Mood::Relaxed),
    ("☁", Mood::Relaxed),
    ("❄", Mood::Relaxed),
];

/// Mood a quiz option symbol stands for, if the symbol is known
pub fn quiz_option_mood(symbol: &str) -> Option<Mood> {
    OPTION_MOODS
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|&(_, mood)| mood)
}

const fn option(emoji: &'static str, label: &'static str) -> QuizOption {
    QuizOption {
        emoji,
        label,
        value: emoji,
    }
}

pub const QUIZ_QUESTIONS: [QuizQuestion; 5] = [
    QuizQuestion {
        id: 1,
        prompt: "What's your ideal Friday night activity?",
        options: [
            option("🎉", "Going to a party"),
            option("📚", "Reading a good book"),
            option("🌧", "Staying in during rain"),
            option("🍕", "Pizza with friends"),
        ],
    },
    QuizQuestion {
        id: 2,
        prompt: "What type of music matches your current vibe?",
        options: [
            option("🎧", "Hip-Hop & Electronic"),
            option("🎼", "Classical & Ambient"),
            option("❤", "Romantic ballads"),
            option("🌞", "Upbeat pop songs"),
        ],
    },
    QuizQuestion {
        id: 3,
        prompt: "Where would you love to spend your vacation?",
        options: [
            option("🏙", "Bustling city"),
            option("🏔", "Peaceful mountains"),
            option("🏖", "Sunny beach"),
            option("🌾", "Quiet countryside"),
        ],
    },
    QuizQuestion {
        id: 4,
        prompt: "What's your go-to comfort food?",
        options: [
            option("🍿", "Movie theater popcorn"),
            option("☕", "Hot coffee & pastry"),
            option("🍦", "Ice cream"),
            option("😴", "Warm soup"),
        ],
    },
    QuizQuestion {
        id: 5,
        prompt: "What's your ideal weather?",
        options: [
            option("🌞", "Bright sunshine"),
            option("☁", "Overcast & cool"),
            option("🌧", "Gentle rain"),
            option("❄", "Crisp winter day"),
        ],
    },
];
