//! # Catalog Crate
//!
//! This crate owns the movie dataset and the fixed tables around it.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Mood, QuizQuestion)
//! - **dataset**: The built-in movie table and trivia facts
//! - **tables**: Mood → genre and quiz option → mood lookups, quiz questions
//! - **index**: `Catalog`, the read-only movie store with id and genre indices
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Catalog, Mood, mood_genres};
//!
//! let catalog = Catalog::builtin();
//! let her = catalog.get_movie("4").unwrap();
//! let wanted = mood_genres(Mood::Calm);
//! assert!(her.shares_genre_with(wanted));
//! ```

// Public modules
pub mod dataset;
pub mod error;
pub mod index;
pub mod tables;
pub mod types;

// Re-export commonly used types for convenience
pub use dataset::TRIVIA;
pub use error::{CatalogError, Result};
pub use index::{Catalog, TRENDING_COUNT};
pub use tables::{QUIZ_QUESTIONS, mood_genres, quiz_option_mood};
pub use types::{Movie, MovieId, Mood, QuizOption, QuizQuestion};
