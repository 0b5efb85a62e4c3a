//! End-to-end session tests.
//!
//! A whole user session over file-backed storage: quiz, chat, watchlist and
//! theme, then a restart that must see the same watchlist and theme.

use std::sync::Arc;

use app::{
    APOLOGY, AppConfig, FileStore, InstantNetwork, MoodReel, PersistenceBridge, Role,
    StyleContext, Store, Theme,
};
use catalog::{Catalog, Mood, mood_genres};
use std::sync::Mutex;

#[derive(Default)]
struct RecordingStyle {
    applied: Mutex<Vec<Theme>>,
}

impl StyleContext for RecordingStyle {
    fn apply_theme(&self, theme: Theme) {
        self.applied.lock().unwrap().push(theme);
    }
}

fn build_app(dir: &std::path::Path, network: Arc<InstantNetwork>) -> MoodReel {
    let bridge = PersistenceBridge::new(FileStore::new(dir));
    MoodReel::new(
        Arc::new(Catalog::builtin()),
        network,
        Store::with_persistence(bridge),
    )
}

#[tokio::test]
async fn test_full_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let network = Arc::new(InstantNetwork::reliable());

    {
        let mut app = build_app(dir.path(), network.clone());

        for symbol in ["🎉", "🎧", "🏙", "🍿", "❄"] {
            app.quiz.select(symbol).unwrap();
            app.quiz.next().unwrap();
        }
        let outcome = app.quiz.submit(&app.service, &mut app.store).await.unwrap();
        assert_eq!(outcome.mood, Mood::Excited);
        let wanted = mood_genres(Mood::Excited);
        assert!(
            outcome
                .recommendations
                .iter()
                .all(|m| m.shares_genre_with(wanted))
        );

        for movie in outcome.recommendations.iter().take(3) {
            app.store.add_to_watchlist(movie.clone());
        }
        app.store.toggle_theme();
    }

    let app = build_app(dir.path(), network);
    let ids: Vec<_> = app
        .store
        .state()
        .watchlist
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(ids, vec!["1", "2", "4"]);
    assert_eq!(app.store.state().theme, Theme::Light);
}

#[tokio::test]
async fn test_chat_recovers_after_outage() {
    let dir = tempfile::tempdir().unwrap();
    let network = Arc::new(InstantNetwork::failing());
    let mut app = build_app(dir.path(), network.clone());

    let reply = app
        .chat
        .send("I need a good cry", &app.service, &mut app.store)
        .await
        .unwrap();
    assert_eq!(reply.text, APOLOGY);
    assert!(!app.chat.is_composing());

    network.set_failing(false);
    let reply = app
        .chat
        .send("I need a good cry", &app.service, &mut app.store)
        .await
        .unwrap();
    assert_eq!(reply.role, Role::Bot);
    assert!(reply.text.contains("emotional mood"));
    assert!(reply.movies.as_ref().is_some_and(|m| !m.is_empty()));

    // greeting + two exchanges
    assert_eq!(app.chat.messages().len(), 5);
    assert!(!app.store.state().is_loading);
}

#[test]
fn test_corrupt_files_start_fresh() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("movieWatchlist"), "{oops").unwrap();
    std::fs::write(dir.path().join("movieTheme"), "sepia").unwrap();

    let style = Arc::new(RecordingStyle::default());
    let config = AppConfig {
        data_dir: dir.path().to_path_buf(),
        simulate_latency: false,
        ..AppConfig::default()
    };
    let app = MoodReel::from_config(&config, style.clone()).unwrap();

    assert!(app.store.state().watchlist.is_empty());
    assert_eq!(app.store.state().theme, Theme::Dark);
    assert_eq!(*style.applied.lock().unwrap(), vec![Theme::Dark]);
}
