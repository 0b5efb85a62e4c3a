//! Filter for free-text search over titles and genre tags.

use crate::traits::{Filter, MovieQuery};
use anyhow::Result;
use catalog::Movie;

/// Keeps movies whose title or any genre tag contains `query.text`,
/// ignoring case. An empty search text matches everything.
pub struct SearchFilter;

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn apply(&self, movies: Vec<Movie>, query: &MovieQuery) -> Result<Vec<Movie>> {
        let Some(text) = query.text.as_deref() else {
            return Ok(movies);
        };
        let needle = text.to_lowercase();

        Ok(movies
            .into_iter()
            .filter(|movie| {
                movie.title.to_lowercase().contains(&needle)
                    || movie
                        .genres
                        .iter()
                        .any(|genre| genre.to_lowercase().contains(&needle))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;

    fn search(text: &str) -> Vec<String> {
        let catalog = Catalog::builtin();
        SearchFilter
            .apply(catalog.movies().to_vec(), &MovieQuery::for_text(text))
            .unwrap()
            .into_iter()
            .map(|m| m.id)
            .collect()
    }

    #[test]
    fn test_title_match_ignores_case() {
        assert_eq!(search("JOHN"), vec!["2"]);
        assert_eq!(search("the "), vec!["5", "7", "9"]);
    }

    #[test]
    fn test_genre_match() {
        assert_eq!(search("sci"), vec!["1", "4"]);
        assert_eq!(search("biography"), vec!["5"]);
    }

    #[test]
    fn test_empty_text_matches_all() {
        assert_eq!(search("").len(), 10);
    }

    #[test]
    fn test_no_match() {
        assert!(search("zzz").is_empty());
    }
}
