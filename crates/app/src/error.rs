//! Error types for the application layer.

use thiserror::Error;

/// Errors surfaced by `MovieService` calls
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Injected transient failure; the user may simply try again
    #[error("Failed to fetch recommendations. Please try again.")]
    Unavailable,

    #[error(transparent)]
    Resolver(#[from] anyhow::Error),
}

impl ServiceError {
    /// True for failures a retry can fix
    pub fn is_transient(&self) -> bool {
        matches!(self, ServiceError::Unavailable)
    }
}

/// Errors from the durable key/value storage
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error on key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from driving the quiz
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("{symbol:?} is not an option of question {question}")]
    UnknownOption { question: u8, symbol: String },

    #[error("Question {question} has no answer yet")]
    Unanswered { question: u8 },

    #[error("Only {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },

    #[error("Could not fetch recommendations: {0}")]
    Service(#[from] ServiceError),
}
