//! # App Crate
//!
//! Everything above the pure catalog and classifiers: the async movie
//! service, the state store with its persistence, and the chat and quiz
//! sessions.
//!
//! ## Main Components
//!
//! - **network**: `NetworkPolicy`, simulated latency and failure injection
//! - **service**: `MovieService`, async recommendations, search, trending
//! - **store**: `AppState`, `Action`, the pure `reduce` and the `Store`
//! - **persistence**: key/value storage and the theme style context
//! - **chat** / **quiz**: the two ways of finding out the user's mood
//! - **application**: `MoodReel`, the root that owns one user session
//!
//! ## Example Usage
//!
//! ```ignore
//! use app::{AppConfig, MoodReel, persistence::NoStyle};
//!
//! let mut app = MoodReel::from_config(&AppConfig::default(), NoStyle)?;
//! let reply = app.chat.send("something fun", &app.service, &mut app.store).await;
//! ```

pub mod application;
pub mod chat;
pub mod config;
pub mod error;
pub mod network;
pub mod persistence;
pub mod quiz;
pub mod service;
pub mod store;

pub use application::MoodReel;
pub use chat::{APOLOGY, ChatMessage, ChatSession, GREETING, MessageId, PendingReply, Reaction, Role};
pub use config::AppConfig;
pub use error::{QuizError, ServiceError, StorageError};
pub use network::{Endpoint, InstantNetwork, NetworkPolicy, SimulatedNetwork};
pub use persistence::{FileStore, KeyValueStore, MemoryStore, PersistenceBridge, StyleContext};
pub use quiz::{QuizOutcome, QuizSession};
pub use service::MovieService;
pub use store::{Action, AppState, PersistedState, Store, Theme, reduce};
