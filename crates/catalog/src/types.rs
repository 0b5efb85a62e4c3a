//! Core domain types for the movie catalog.
//!
//! This module defines the fundamental data structures shared by every other
//! crate in the workspace:
//! - `Movie`, the immutable catalog record
//! - `Mood`, the five-value enumeration that drives recommendations
//! - `QuizQuestion` / `QuizOption`, the static quiz tables

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie ("1", "2", ... in the built-in table)
pub type MovieId = String;

// =============================================================================
// Movie
// =============================================================================

/// A movie record.
///
/// The serde layout (camelCase keys, rating under `imdb`) is the storage
/// format of a persisted watchlist, so renaming a field is a format change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Poster image URL
    pub poster: String,
    /// Genre tags in display order (e.g. "Action", "Sci-Fi")
    pub genres: Vec<String>,
    /// IMDb rating, 0.0 - 10.0
    pub imdb: f32,
    pub year: u16,
    pub trailer_url: String,
    pub plot: String,
}

impl Movie {
    /// True if this movie carries exactly `tag` among its genres
    pub fn has_genre(&self, tag: &str) -> bool {
        self.genres.iter().any(|g| g == tag)
    }

    /// True if any of this movie's genres is in `tags`
    pub fn shares_genre_with(&self, tags: &[&str]) -> bool {
        self.genres.iter().any(|g| tags.contains(&g.as_str()))
    }
}

// =============================================================================
// Mood
// =============================================================================

/// The five moods a user can be in.
///
/// Declaration order is significant: classifiers break ties in favour of the
/// mood that comes first in `Mood::ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mood {
    Excited,
    Calm,
    Emotional,
    Happy,
    Relaxed,
}

impl Mood {
    /// All moods in enumeration order
    pub const ALL: [Mood; 5] = [
        Mood::Excited,
        Mood::Calm,
        Mood::Emotional,
        Mood::Happy,
        Mood::Relaxed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Mood::Excited => "Excited",
            Mood::Calm => "Calm",
            Mood::Emotional => "Emotional",
            Mood::Happy => "Happy",
            Mood::Relaxed => "Relaxed",
        }
    }

    /// Position in `Mood::ALL`, usable as an array index
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mood {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::UnknownMood(s.to_string()))
    }
}

// =============================================================================
// Quiz Types
// =============================================================================

/// One selectable answer of a quiz question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOption {
    pub emoji: &'static str,
    pub label: &'static str,
    /// Symbol recorded as the answer; looked up in the option→mood table
    pub value: &'static str,
}

/// A quiz question with its four options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub id: u8,
    pub prompt: &'static str,
    pub options: [QuizOption; 4],
}

impl QuizQuestion {
    /// Find the option whose value is `symbol`
    pub fn option(&self, symbol: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.value == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_parse_is_case_insensitive() {
        assert_eq!("excited".parse::<Mood>().unwrap(), Mood::Excited);
        assert_eq!(" RELAXED ".parse::<Mood>().unwrap(), Mood::Relaxed);
        assert!("grumpy".parse::<Mood>().is_err());
    }

    #[test]
    fn test_mood_index_matches_enumeration_order() {
        for (i, mood) in Mood::ALL.iter().enumerate() {
            assert_eq!(mood.index(), i);
        }
    }

    #[test]
    fn test_movie_serializes_with_storage_keys() {
        let movie = Movie {
            id: "42".to_string(),
            title: "Test".to_string(),
            poster: "p".to_string(),
            genres: vec!["Drama".to_string()],
            imdb: 7.5,
            year: 2001,
            trailer_url: "t".to_string(),
            plot: "x".to_string(),
        };

        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["trailerUrl"], "t");
        assert_eq!(json["imdb"], 7.5);
        assert!(json.get("trailer_url").is_none());
    }
}
