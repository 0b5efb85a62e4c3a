//! # Mood Crate
//!
//! Pure classifiers that turn user input into a `Mood`.
//!
//! ## Components
//!
//! ### Quiz classifier
//! Frequency count over quiz option symbols with a fixed tie-break:
//! - Each symbol maps to one mood through the catalog's option table
//! - Highest tally wins, earlier mood wins ties, `Happy` when nothing counts
//!
//! ### Keyword classifier
//! Scans chat text for keyword groups in priority order, `Happy` by default.
//!
//! ### Descriptions
//! Result blurbs and the chat restatement line.
//!
//! ## Example Usage
//!
//! ```ignore
//! use mood::{predict_mood, detect_mood};
//!
//! let quiz_mood = predict_mood(&["🎉", "🎧", "🏙", "🍿"]);
//! let chat_mood = detect_mood("something to make me cry");
//! ```

pub mod describe;
pub mod keywords;
pub mod quiz;

pub use describe::{describe, restate};
pub use keywords::detect_mood;
pub use quiz::{predict_mood, tally};
