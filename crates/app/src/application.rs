//! # Application Root
//!
//! Owns everything a front end needs for one user session:
//! 1. The shared catalog behind a `MovieService`
//! 2. The `Store`, seeded from durable storage
//! 3. One `ChatSession` and one `QuizSession`
//!
//! Front ends borrow the parts they drive; nothing here is global.

use std::sync::Arc;

use anyhow::{Context, Result};
use catalog::{Catalog, Movie, Mood};
use tracing::{info, instrument};

use crate::chat::ChatSession;
use crate::config::AppConfig;
use crate::error::ServiceError;
use crate::network::NetworkPolicy;
use crate::persistence::{PersistenceBridge, StyleContext};
use crate::quiz::QuizSession;
use crate::service::MovieService;
use crate::store::Store;

pub struct MoodReel {
    pub service: MovieService,
    pub store: Store,
    pub chat: ChatSession,
    pub quiz: QuizSession,
}

impl MoodReel {
    /// Build the session described by `config`, applying themes to `style`
    pub fn from_config(config: &AppConfig, style: impl StyleContext + 'static) -> Result<Self> {
        let catalog = config
            .load_catalog()
            .context("Failed to load movie catalog")?;
        info!(
            "Starting with {} movies, data in {}",
            catalog.len(),
            config.data_dir.display()
        );

        let bridge = PersistenceBridge::new(config.storage()).with_style(style);
        Ok(Self::new(
            Arc::new(catalog),
            config.network(),
            Store::with_persistence(bridge),
        ))
    }

    pub fn new(catalog: Arc<Catalog>, network: Arc<dyn NetworkPolicy>, store: Store) -> Self {
        Self {
            service: MovieService::new(catalog, network),
            store,
            chat: ChatSession::new(),
            quiz: QuizSession::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.service.catalog()
    }

    /// Recommendation page flow: remember the mood, flag loading around the
    /// call, record or clear the error
    #[instrument(skip(self))]
    pub async fn recommend(
        &mut self,
        mood: Mood,
        genre: Option<&str>,
    ) -> Result<Vec<Movie>, ServiceError> {
        self.store.set_mood(mood);
        self.store.set_error(None);
        self.store.set_loading(true);

        let result = self.service.get_recommendations(mood, genre).await;

        self.store.set_loading(false);
        if let Err(e) = &result {
            self.store.set_error(Some(e.to_string()));
        }
        result
    }

    /// Add a catalog movie to the watchlist. `None` when the id is unknown.
    pub fn add_to_watchlist(&mut self, movie_id: &str) -> Option<&Movie> {
        let movie = self.service.catalog().get_movie(movie_id)?.clone();
        self.store.add_to_watchlist(movie);
        self.store.state().watchlist.iter().find(|m| m.id == movie_id)
    }

    /// Toggle a catalog movie's watchlist membership. `None` when the id is
    /// unknown.
    pub fn toggle_watchlist(&mut self, movie_id: &str) -> Option<bool> {
        let movie = self.service.catalog().get_movie(movie_id)?.clone();
        Some(self.store.toggle_watchlist(movie))
    }
}
