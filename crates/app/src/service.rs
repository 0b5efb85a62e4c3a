//! # Movie Service
//!
//! The asynchronous face of the catalog. Each call:
//! 1. Waits the endpoint's simulated latency
//! 2. Optionally fails (recommendations only)
//! 3. Runs the synchronous resolver
//!
//! Calls capture their own input and share nothing mutable, so a cloned
//! service can serve concurrent callers without locking. There is no
//! cancellation: a started call always runs to completion.

use std::sync::Arc;
use std::time::Instant;

use catalog::{Catalog, Movie, Mood, TRIVIA};
use pipeline::Resolver;
use rand::Rng;
use tracing::{debug, info, instrument, warn};

use crate::error::ServiceError;
use crate::network::{Endpoint, NetworkPolicy};

#[derive(Clone)]
pub struct MovieService {
    resolver: Arc<Resolver>,
    network: Arc<dyn NetworkPolicy>,
}

impl MovieService {
    pub fn new(catalog: Arc<Catalog>, network: Arc<dyn NetworkPolicy>) -> Self {
        Self {
            resolver: Arc::new(Resolver::new(catalog)),
            network,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        self.resolver.catalog()
    }

    /// Up to five movies for `mood`, optionally restricted to `genre`
    ///
    /// Fails with `ServiceError::Unavailable` when the network policy injects
    /// a failure; the caller decides how to tell the user.
    #[instrument(skip(self))]
    pub async fn get_recommendations(
        &self,
        mood: Mood,
        genre: Option<&str>,
    ) -> Result<Vec<Movie>, ServiceError> {
        let start_time = Instant::now();

        self.wait(Endpoint::Recommendations).await;
        if self.network.should_fail(Endpoint::Recommendations) {
            warn!("Injected failure for {} recommendations", mood);
            return Err(ServiceError::Unavailable);
        }

        let movies = self.resolver.recommend(mood, genre)?;
        info!(
            "Resolved {} recommendations for {} in {:.2?}",
            movies.len(),
            mood,
            start_time.elapsed()
        );
        Ok(movies)
    }

    /// Movies whose title or a genre tag contains `query`, ignoring case
    #[instrument(skip(self))]
    pub async fn search_movies(&self, query: &str) -> Result<Vec<Movie>, ServiceError> {
        self.wait(Endpoint::Search).await;
        let movies = self.resolver.search(query)?;
        debug!("Search {:?} matched {} movies", query, movies.len());
        Ok(movies)
    }

    /// The trending row
    pub async fn get_trending_movies(&self) -> Vec<Movie> {
        self.wait(Endpoint::Trending).await;
        self.resolver.trending()
    }

    /// Pause while the chat bot composes its reply
    pub async fn compose_pause(&self) {
        self.wait(Endpoint::ChatCompose).await;
    }

    /// A random movie trivia fact
    pub fn random_trivia(&self) -> &'static str {
        TRIVIA[rand::rng().random_range(0..TRIVIA.len())]
    }

    async fn wait(&self, endpoint: Endpoint) {
        let delay = self.network.latency(endpoint);
        if !delay.is_zero() {
            debug!("Simulating {:?} latency of {:?}", endpoint, delay);
            tokio::time::sleep(delay).await;
        }
    }
}
