//! Pipeline for filtering the catalog into recommendation and search results.
//!
//! This crate provides:
//! - Filter trait and implementations for movie filtering
//! - FilterPipeline for composing filters
//! - Resolver, the synchronous recommendation/search core
//!
//! ## Architecture
//! Every query runs the catalog through a pipeline in stages:
//! 1. Filters remove movies that do not fit the query (mood, genre, text)
//! 2. The resolver applies the empty-result fallback and the result limit
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::Resolver;
//! use catalog::{Catalog, Mood};
//! use std::sync::Arc;
//!
//! let resolver = Resolver::new(Arc::new(Catalog::builtin()));
//! let picks = resolver.recommend(Mood::Excited, None)?;
//! let found = resolver.search("wick")?;
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod resolver;
pub mod traits;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use resolver::{FALLBACK_COUNT, MAX_RECOMMENDATIONS, Resolver};
pub use traits::{Filter, MovieQuery};
