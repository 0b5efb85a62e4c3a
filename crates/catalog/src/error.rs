//! Error types for the catalog crate.
//!
//! Loading a catalog from disk is the only fallible path here; the built-in
//! table is known-good at compile time.

use thiserror::Error;

/// Errors that can occur while loading or querying the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be found or opened
    #[error("Failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The catalog file was not a valid JSON array of movies
    #[error("Parse error in {file}: {reason}")]
    ParseError { file: String, reason: String },

    /// Two records share the same identifier
    #[error("Duplicate movie id: {id}")]
    DuplicateMovie { id: String },

    /// A catalog needs at least one movie to serve trending and fallback lists
    #[error("Catalog contains no movies")]
    EmptyCatalog,

    /// Text did not name one of the five moods
    #[error("Unknown mood: {0}")]
    UnknownMood(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
