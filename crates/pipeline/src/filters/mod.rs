//! Filter implementations for the movie pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod exact_genre;
pub mod mood_genre;
pub mod search;

// Re-export for convenience
pub use exact_genre::ExactGenreFilter;
pub use mood_genre::MoodGenreFilter;
pub use search::SearchFilter;
