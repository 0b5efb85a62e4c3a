//! Catalog building and indexing logic.
//!
//! The catalog keeps movies in dataset order (recommendations, trending and
//! the fallback list all depend on that order) plus two indices:
//! - id → position, for watchlist and CLI lookups
//! - genre tag → positions, for genre queries

use crate::error::{CatalogError, Result};
use crate::types::{Movie, MovieId};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Number of movies shown in the trending row
pub const TRENDING_COUNT: usize = 8;

/// Read-only, in-memory movie catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
    id_index: HashMap<MovieId, usize>,
    genre_index: HashMap<String, Vec<usize>>,
}

impl Catalog {
    /// Catalog over the built-in ten-movie table
    pub fn builtin() -> Self {
        // The built-in rows are unique and non-empty; covered by dataset tests.
        let movies = crate::dataset::builtin_movies();
        let (id_index, genre_index) = build_indices(&movies);
        Self {
            movies,
            id_index,
            genre_index,
        }
    }

    /// Build a catalog from records, validating id uniqueness
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self> {
        if movies.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(movies.len());
        for movie in &movies {
            if !seen.insert(movie.id.as_str()) {
                return Err(CatalogError::DuplicateMovie {
                    id: movie.id.clone(),
                });
            }
        }

        let (id_index, genre_index) = build_indices(&movies);
        Ok(Self {
            movies,
            id_index,
            genre_index,
        })
    }

    /// Load a catalog from a JSON file holding an array of movies
    ///
    /// The file uses the same record layout as a persisted watchlist.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CatalogError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let raw = fs::read_to_string(path)?;
        let movies: Vec<Movie> =
            serde_json::from_str(&raw).map_err(|e| CatalogError::ParseError {
                file: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Self::from_movies(movies)
    }

    /// All movies in dataset order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn get_movie(&self, id: &str) -> Option<&Movie> {
        self.id_index.get(id).map(|&pos| &self.movies[pos])
    }

    /// Movies tagged with exactly `genre`, in dataset order
    pub fn movies_with_genre(&self, genre: &str) -> Vec<&Movie> {
        self.genre_index
            .get(genre)
            .map(|positions| positions.iter().map(|&pos| &self.movies[pos]).collect())
            .unwrap_or_default()
    }

    /// Every distinct genre tag, sorted
    pub fn genres(&self) -> Vec<&str> {
        let mut genres: Vec<&str> = self.genre_index.keys().map(String::as_str).collect();
        genres.sort_unstable();
        genres
    }

    /// First `n` movies of the dataset
    pub fn trending(&self, n: usize) -> &[Movie] {
        &self.movies[..n.min(self.movies.len())]
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn build_indices(movies: &[Movie]) -> (HashMap<MovieId, usize>, HashMap<String, Vec<usize>>) {
    let mut id_index = HashMap::with_capacity(movies.len());
    let mut genre_index: HashMap<String, Vec<usize>> = HashMap::new();

    for (pos, movie) in movies.iter().enumerate() {
        id_index.insert(movie.id.clone(), pos);
        for genre in &movie.genres {
            genre_index.entry(genre.clone()).or_default().push(pos);
        }
    }

    (id_index, genre_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn movie(id: &str, genres: &[&str]) -> Movie {
        Movie {
            id: id.to_string(),
            title: format!("Movie {}", id),
            poster: String::new(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            imdb: 7.0,
            year: 2000,
            trailer_url: String::new(),
            plot: String::new(),
        }
    }

    #[test]
    fn test_builtin_lookups() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.get_movie("4").unwrap().title, "Her");
        assert!(catalog.get_movie("999").is_none());

        let family: Vec<_> = catalog
            .movies_with_genre("Family")
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(family, vec!["8"]);
        assert!(catalog.movies_with_genre("Western").is_empty());
    }

    #[test]
    fn test_trending_is_dataset_prefix() {
        let catalog = Catalog::builtin();
        let trending = catalog.trending(TRENDING_COUNT);

        assert_eq!(trending.len(), 8);
        assert_eq!(trending[0].id, "1");
        assert_eq!(trending[7].id, "8");
        assert_eq!(catalog.trending(50).len(), 10);
    }

    #[test]
    fn test_from_movies_rejects_duplicates() {
        let result = Catalog::from_movies(vec![movie("1", &["Drama"]), movie("1", &["Comedy"])]);
        assert!(matches!(result, Err(CatalogError::DuplicateMovie { id }) if id == "1"));
    }

    #[test]
    fn test_from_movies_rejects_empty() {
        assert!(matches!(
            Catalog::from_movies(vec![]),
            Err(CatalogError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let movies = vec![movie("a", &["Drama"]), movie("b", &["Comedy", "Drama"])];
        write!(file, "{}", serde_json::to_string(&movies).unwrap()).unwrap();

        let catalog = Catalog::load_from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.movies_with_genre("Drama").len(), 2);
        assert_eq!(catalog.genres(), vec!["Comedy", "Drama"]);
    }

    #[test]
    fn test_load_from_file_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let result = Catalog::load_from_file(file.path());
        assert!(matches!(result, Err(CatalogError::ParseError { .. })));
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = Catalog::load_from_file(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(CatalogError::FileNotFound { .. })));
    }
}
