//! Recommendation Resolver
//!
//! Turns a mood (and optional genre) into a short, ordered movie list.
//!
//! ## Algorithm
//! 1. Run the catalog through `MoodGenreFilter` then `ExactGenreFilter`
//! 2. If nothing survives, fall back to the first 3 catalog entries
//!    (the fallback deliberately ignores the mood)
//! 3. Truncate to 5, keeping catalog order

use std::sync::Arc;

use anyhow::{Context, Result};
use catalog::{Catalog, Movie, Mood, TRENDING_COUNT};
use tracing::{debug, instrument};

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{ExactGenreFilter, MoodGenreFilter, SearchFilter};
use crate::traits::MovieQuery;

/// Most recommendations returned per call
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Size of the list returned when no movie matches
pub const FALLBACK_COUNT: usize = 3;

/// Synchronous resolver over a shared catalog
pub struct Resolver {
    /// Shared reference to the catalog (read-only, so no Mutex needed)
    catalog: Arc<Catalog>,
    recommend_pipeline: FilterPipeline,
    search_pipeline: FilterPipeline,
    limit: usize,
    fallback_len: usize,
}

impl Resolver {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            recommend_pipeline: FilterPipeline::new()
                .add_filter(MoodGenreFilter)
                .add_filter(ExactGenreFilter),
            search_pipeline: FilterPipeline::new().add_filter(SearchFilter),
            limit: MAX_RECOMMENDATIONS,
            fallback_len: FALLBACK_COUNT,
        }
    }

    /// Configure the maximum number of recommendations (default: 5)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Configure the fallback list length (default: 3)
    pub fn with_fallback_len(mut self, len: usize) -> Self {
        self.fallback_len = len;
        self
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Movies for a mood, optionally restricted to one genre tag
    #[instrument(skip(self))]
    pub fn recommend(&self, mood: Mood, genre: Option<&str>) -> Result<Vec<Movie>> {
        let mut query = MovieQuery::for_mood(mood);
        if let Some(genre) = genre {
            query = query.with_genre(genre);
        }

        let mut movies = self
            .recommend_pipeline
            .apply(self.catalog.movies().to_vec(), &query)
            .context("Failed to apply recommendation filters")?;

        if movies.is_empty() {
            debug!("No movie matched {:?}, using fallback list", query);
            movies = self.fallback();
        }

        movies.truncate(self.limit);
        Ok(movies)
    }

    /// Case-insensitive search over titles and genre tags
    #[instrument(skip(self))]
    pub fn search(&self, text: &str) -> Result<Vec<Movie>> {
        self.search_pipeline
            .apply(self.catalog.movies().to_vec(), &MovieQuery::for_text(text))
            .context("Failed to apply search filter")
    }

    /// Trending row: the catalog prefix
    pub fn trending(&self) -> Vec<Movie> {
        self.catalog.trending(TRENDING_COUNT).to_vec()
    }

    fn fallback(&self) -> Vec<Movie> {
        self.catalog.trending(self.fallback_len).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin_resolver() -> Resolver {
        Resolver::new(Arc::new(Catalog::builtin()))
    }

    fn ids(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_excited_recommendations() {
        let resolver = builtin_resolver();
        let movies = resolver.recommend(Mood::Excited, None).unwrap();

        assert!(movies.len() <= MAX_RECOMMENDATIONS);
        let wanted = catalog::mood_genres(Mood::Excited);
        assert!(movies.iter().all(|m| m.shares_genre_with(wanted)));
        // Catalog order, truncated at five
        assert_eq!(ids(&movies), vec!["1", "2", "4", "6", "7"]);
    }

    #[test]
    fn test_genre_restriction() {
        let resolver = builtin_resolver();
        let movies = resolver.recommend(Mood::Happy, Some("Family")).unwrap();
        assert_eq!(ids(&movies), vec!["8"]);
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        let resolver = builtin_resolver();
        let movies = resolver.recommend(Mood::Calm, Some("Western")).unwrap();
        assert_eq!(ids(&movies), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_custom_limit() {
        let resolver = builtin_resolver().with_limit(2).with_fallback_len(1);
        assert_eq!(resolver.recommend(Mood::Relaxed, None).unwrap().len(), 2);
        assert_eq!(
            ids(&resolver.recommend(Mood::Relaxed, Some("Horror")).unwrap()),
            vec!["1"]
        );
    }

    #[test]
    fn test_search_and_trending() {
        let resolver = builtin_resolver();
        assert_eq!(ids(&resolver.search("paddington").unwrap()), vec!["8"]);
        assert_eq!(resolver.trending().len(), TRENDING_COUNT);
    }
}
