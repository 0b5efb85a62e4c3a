//! Application state store.
//!
//! All state changes go through `Action`s reduced by the pure `reduce`
//! function. `Store` owns the current snapshot, swaps in the reduced one in
//! a single assignment, and tells the persistence bridge about watchlist and
//! theme transitions.

use std::collections::HashSet;
use std::fmt;

use catalog::{Movie, MovieId, Mood};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::persistence::PersistenceBridge;

/// Colour scheme of the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Storage token, `dark` or `light`
    pub fn token(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Snapshot of everything the front end renders from
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    /// Saved movies, unique by id, in the order they were added
    pub watchlist: Vec<Movie>,
    pub current_mood: Option<Mood>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub theme: Theme,
}

impl AppState {
    pub fn is_in_watchlist(&self, movie_id: &str) -> bool {
        self.watchlist.iter().any(|m| m.id == movie_id)
    }
}

/// The persisted subset of `AppState`; `None` fields are left untouched
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PersistedState {
    pub watchlist: Option<Vec<Movie>>,
    pub theme: Option<Theme>,
}

impl PersistedState {
    pub fn is_empty(&self) -> bool {
        self.watchlist.is_none() && self.theme.is_none()
    }
}

/// Every way the state can change
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddToWatchlist(Movie),
    RemoveFromWatchlist(MovieId),
    SetMood(Mood),
    SetLoading(bool),
    SetError(Option<String>),
    ToggleTheme,
    LoadPersisted(PersistedState),
}

impl Action {
    /// Short name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Action::AddToWatchlist(_) => "AddToWatchlist",
            Action::RemoveFromWatchlist(_) => "RemoveFromWatchlist",
            Action::SetMood(_) => "SetMood",
            Action::SetLoading(_) => "SetLoading",
            Action::SetError(_) => "SetError",
            Action::ToggleTheme => "ToggleTheme",
            Action::LoadPersisted(_) => "LoadPersisted",
        }
    }
}

/// Compute the next state. Pure: `state` is never modified.
pub fn reduce(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();

    match action {
        Action::AddToWatchlist(movie) => {
            if !next.is_in_watchlist(&movie.id) {
                next.watchlist.push(movie);
            }
        }
        Action::RemoveFromWatchlist(movie_id) => {
            next.watchlist.retain(|m| m.id != movie_id);
        }
        Action::SetMood(mood) => next.current_mood = Some(mood),
        Action::SetLoading(loading) => next.is_loading = loading,
        Action::SetError(error) => next.error = error,
        Action::ToggleTheme => next.theme = next.theme.toggled(),
        Action::LoadPersisted(persisted) => {
            if let Some(watchlist) = persisted.watchlist {
                next.watchlist = dedup_by_id(watchlist);
            }
            if let Some(theme) = persisted.theme {
                next.theme = theme;
            }
        }
    }

    next
}

/// Keep the first occurrence of each id
fn dedup_by_id(movies: Vec<Movie>) -> Vec<Movie> {
    let mut seen = HashSet::new();
    movies
        .into_iter()
        .filter(|m| seen.insert(m.id.clone()))
        .collect()
}

/// Owner of the application state.
///
/// The store is owned by the application root and handed to consumers by
/// `&mut` reference; there is no global instance.
pub struct Store {
    state: AppState,
    bridge: Option<PersistenceBridge>,
}

impl Store {
    /// In-memory store with default state and no persistence
    pub fn new() -> Self {
        Self {
            state: AppState::default(),
            bridge: None,
        }
    }

    /// Store seeded from durable storage.
    ///
    /// Whatever the bridge can read is merged via `LoadPersisted`; the
    /// resulting theme is applied to the style context right away.
    pub fn with_persistence(bridge: PersistenceBridge) -> Self {
        let persisted = bridge.load();
        let state = if persisted.is_empty() {
            AppState::default()
        } else {
            reduce(&AppState::default(), Action::LoadPersisted(persisted))
        };
        bridge.apply_theme(state.theme);

        Self {
            state,
            bridge: Some(bridge),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Reduce `action` into a new snapshot and persist what changed
    pub fn dispatch(&mut self, action: Action) -> &AppState {
        debug!("Dispatching {}", action.kind());
        let next = reduce(&self.state, action);

        if let Some(bridge) = &self.bridge {
            if next.watchlist != self.state.watchlist {
                bridge.save_watchlist(&next.watchlist);
            }
            if next.theme != self.state.theme {
                bridge.save_theme(next.theme);
            }
        }

        self.state = next;
        &self.state
    }

    pub fn add_to_watchlist(&mut self, movie: Movie) {
        self.dispatch(Action::AddToWatchlist(movie));
    }

    pub fn remove_from_watchlist(&mut self, movie_id: &str) {
        self.dispatch(Action::RemoveFromWatchlist(movie_id.to_string()));
    }

    /// Remove the movie if saved, add it otherwise. Returns the new membership.
    pub fn toggle_watchlist(&mut self, movie: Movie) -> bool {
        if self.is_in_watchlist(&movie.id) {
            self.remove_from_watchlist(&movie.id);
            false
        } else {
            self.add_to_watchlist(movie);
            true
        }
    }

    pub fn is_in_watchlist(&self, movie_id: &str) -> bool {
        self.state.is_in_watchlist(movie_id)
    }

    pub fn set_mood(&mut self, mood: Mood) {
        self.dispatch(Action::SetMood(mood));
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.dispatch(Action::SetLoading(loading));
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.dispatch(Action::SetError(error));
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.dispatch(Action::ToggleTheme).theme
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Catalog;

    fn movie(id: &str) -> Movie {
        Catalog::builtin()
            .get_movie(id)
            .cloned()
            .expect("builtin movie")
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut store = Store::new();
        store.add_to_watchlist(movie("1"));
        store.add_to_watchlist(movie("1"));

        assert_eq!(store.state().watchlist.len(), 1);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut store = Store::new();
        for id in ["7", "2", "9"] {
            store.add_to_watchlist(movie(id));
        }

        let ids: Vec<_> = store.state().watchlist.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["7", "2", "9"]);
    }

    #[test]
    fn test_remove_then_query() {
        let mut store = Store::new();
        store.add_to_watchlist(movie("3"));
        assert!(store.is_in_watchlist("3"));

        store.remove_from_watchlist("3");
        assert!(!store.is_in_watchlist("3"));
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut store = Store::new();
        store.add_to_watchlist(movie("3"));
        let before = store.state().clone();

        store.remove_from_watchlist("nope");
        assert_eq!(store.state(), &before);
    }

    #[test]
    fn test_toggle_watchlist() {
        let mut store = Store::new();
        assert!(store.toggle_watchlist(movie("5")));
        assert!(store.is_in_watchlist("5"));
        assert!(!store.toggle_watchlist(movie("5")));
        assert!(!store.is_in_watchlist("5"));
    }

    #[test]
    fn test_scalar_actions() {
        let mut store = Store::new();
        store.set_mood(Mood::Calm);
        store.set_loading(true);
        store.set_error(Some("boom".to_string()));

        let state = store.state();
        assert_eq!(state.current_mood, Some(Mood::Calm));
        assert!(state.is_loading);
        assert_eq!(state.error.as_deref(), Some("boom"));

        store.set_error(None);
        assert_eq!(store.state().error, None);
    }

    #[test]
    fn test_toggle_theme_flips() {
        let mut store = Store::new();
        assert_eq!(store.state().theme, Theme::Dark);
        assert_eq!(store.toggle_theme(), Theme::Light);
        assert_eq!(store.toggle_theme(), Theme::Dark);
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let state = AppState::default();
        let next = reduce(&state, Action::AddToWatchlist(movie("1")));

        assert!(state.watchlist.is_empty());
        assert_eq!(next.watchlist.len(), 1);
    }

    #[test]
    fn test_load_persisted_merges_present_fields() {
        let mut state = AppState::default();
        state.current_mood = Some(Mood::Happy);
        state.watchlist.push(movie("1"));

        let next = reduce(
            &state,
            Action::LoadPersisted(PersistedState {
                watchlist: None,
                theme: Some(Theme::Light),
            }),
        );
        assert_eq!(next.theme, Theme::Light);
        assert_eq!(next.watchlist.len(), 1);
        assert_eq!(next.current_mood, Some(Mood::Happy));
    }

    #[test]
    fn test_load_persisted_drops_duplicate_ids() {
        let next = reduce(
            &AppState::default(),
            Action::LoadPersisted(PersistedState {
                watchlist: Some(vec![movie("2"), movie("4"), movie("2")]),
                theme: None,
            }),
        );

        let ids: Vec<_> = next.watchlist.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4"]);
    }

    #[test]
    fn test_theme_tokens() {
        assert_eq!(Theme::from_token("light"), Some(Theme::Light));
        assert_eq!(Theme::from_token("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_token("Dark"), None);
        assert_eq!(Theme::Light.to_string(), "light");
    }
}
