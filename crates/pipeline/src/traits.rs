//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to movie lists, and the query
//! that every filter reads its criteria from.

use anyhow::Result;
use catalog::{Movie, Mood};

/// What the caller is asking for. Filters ignore criteria that are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieQuery {
    pub mood: Option<Mood>,
    /// Exact genre tag the result must carry
    pub genre: Option<String>,
    /// Free text matched against titles and genre tags
    pub text: Option<String>,
}

impl MovieQuery {
    pub fn for_mood(mood: Mood) -> Self {
        Self {
            mood: Some(mood),
            ..Self::default()
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn for_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

/// Core trait for filtering movies.
///
/// ## Design Note
/// - `Send + Sync` allows filters to live behind an `Arc` in async services
/// - Filters take ownership of the Vec<Movie> and return a filtered Vec
/// - Filters must keep the relative order of the movies they let through
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a list of movies.
    fn apply(&self, movies: Vec<Movie>, query: &MovieQuery) -> Result<Vec<Movie>>;
}
