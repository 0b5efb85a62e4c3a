//! Filter to keep only movies that suit the requested mood.

use crate::traits::{Filter, MovieQuery};
use anyhow::Result;
use catalog::{Movie, mood_genres};

/// Keeps movies whose genres intersect the mood's genre set.
///
/// ## Algorithm
/// 1. Look up the fixed genre set for `query.mood`
/// 2. Keep movies with at least one genre in that set
///
/// A query without a mood passes everything through.
pub struct MoodGenreFilter;

impl Filter for MoodGenreFilter {
    fn name(&self) -> &str {
        "MoodGenreFilter"
    }

    fn apply(&self, movies: Vec<Movie>, query: &MovieQuery) -> Result<Vec<Movie>> {
        let Some(mood) = query.mood else {
            return Ok(movies);
        };

        let wanted = mood_genres(mood);
        let filtered: Vec<Movie> = movies
            .into_iter()
            .filter(|movie| movie.shares_genre_with(wanted))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Catalog, Mood};

    #[test]
    fn test_mood_genre_filter() {
        let catalog = Catalog::builtin();
        let filter = MoodGenreFilter;

        let filtered = filter
            .apply(catalog.movies().to_vec(), &MovieQuery::for_mood(Mood::Calm))
            .unwrap();

        // Calm = Drama / Romance / Documentary
        let ids: Vec<_> = filtered.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "4", "5", "9", "10"]);
    }

    #[test]
    fn test_no_mood_passes_through() {
        let catalog = Catalog::builtin();
        let filtered = MoodGenreFilter
            .apply(catalog.movies().to_vec(), &MovieQuery::default())
            .unwrap();
        assert_eq!(filtered.len(), catalog.len());
    }
}
