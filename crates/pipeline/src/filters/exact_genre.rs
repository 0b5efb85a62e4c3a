//! Filter to restrict movies to one exact genre tag.

use crate::traits::{Filter, MovieQuery};
use anyhow::Result;
use catalog::Movie;

/// Keeps movies that carry `query.genre` verbatim (case-sensitive).
///
/// A query without a genre passes everything through.
pub struct ExactGenreFilter;

impl Filter for ExactGenreFilter {
    fn name(&self) -> &str {
        "ExactGenreFilter"
    }

    fn apply(&self, movies: Vec<Movie>, query: &MovieQuery) -> Result<Vec<Movie>> {
        let Some(genre) = query.genre.as_deref() else {
            return Ok(movies);
        };

        Ok(movies
            .into_iter()
            .filter(|movie| movie.has_genre(genre))
            .collect())
    }
}
