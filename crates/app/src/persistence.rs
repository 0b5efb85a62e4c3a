//! Persistence bridge between the store and durable key/value storage.
//!
//! Two entries are kept:
//! - `movieWatchlist`: JSON array of movies
//! - `movieTheme`: `dark` or `light`
//!
//! Reads are forgiving (anything unreadable counts as absent) and writes
//! are fire-and-forget (failures are logged, never returned to the caller).

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use catalog::Movie;
use tracing::{debug, warn};

use crate::error::StorageError;
use crate::store::{PersistedState, Theme};

pub const WATCHLIST_KEY: &str = "movieWatchlist";
pub const THEME_KEY: &str = "movieTheme";

/// String-keyed durable storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// One file per key inside a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            key: key.to_string(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(io_err)?;
        // Write then rename so a crash never leaves a half-written entry
        let tmp = self.dir.join(format!(".{}.tmp", key));
        fs::write(&tmp, value).map_err(io_err)?;
        fs::rename(&tmp, self.path_for(key)).map_err(io_err)?;
        Ok(())
    }
}

/// In-memory storage for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw stored value, bypassing the bridge
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Where the active theme is applied (the document root in a browser,
/// the terminal palette in the CLI)
pub trait StyleContext: Send + Sync {
    fn apply_theme(&self, theme: Theme);
}

impl<T: StyleContext + ?Sized> StyleContext for Arc<T> {
    fn apply_theme(&self, theme: Theme) {
        (**self).apply_theme(theme)
    }
}

/// Style context that ignores theme changes
#[derive(Debug, Default, Clone, Copy)]
pub struct NoStyle;

impl StyleContext for NoStyle {
    fn apply_theme(&self, _theme: Theme) {}
}

pub struct PersistenceBridge {
    storage: Box<dyn KeyValueStore>,
    style: Box<dyn StyleContext>,
}

impl PersistenceBridge {
    pub fn new(storage: impl KeyValueStore + 'static) -> Self {
        Self {
            storage: Box::new(storage),
            style: Box::new(NoStyle),
        }
    }

    /// Attach the style context that theme changes are applied to
    pub fn with_style(mut self, style: impl StyleContext + 'static) -> Self {
        self.style = Box::new(style);
        self
    }

    /// Read whatever valid state is stored. Never fails.
    pub fn load(&self) -> PersistedState {
        let watchlist = self
            .read(WATCHLIST_KEY)
            .and_then(|raw| match serde_json::from_str::<Vec<Movie>>(&raw) {
                Ok(movies) => Some(movies),
                Err(e) => {
                    warn!("Ignoring malformed stored watchlist: {}", e);
                    None
                }
            });

        let theme = self.read(THEME_KEY).and_then(|raw| {
            let theme = Theme::from_token(raw.trim());
            if theme.is_none() {
                warn!("Ignoring unknown stored theme {:?}", raw);
            }
            theme
        });

        debug!(
            "Loaded persisted state (watchlist: {}, theme: {:?})",
            watchlist.as_ref().map_or(0, Vec::len),
            theme
        );
        PersistedState { watchlist, theme }
    }

    /// Overwrite the stored watchlist with `watchlist`
    pub fn save_watchlist(&self, watchlist: &[Movie]) {
        let result = serde_json::to_string(watchlist)
            .map_err(|source| StorageError::Serialize {
                key: WATCHLIST_KEY.to_string(),
                source,
            })
            .and_then(|json| self.storage.set(WATCHLIST_KEY, &json));

        if let Err(e) = result {
            warn!("Failed to persist watchlist: {}", e);
        }
    }

    /// Store the theme token and apply the theme
    pub fn save_theme(&self, theme: Theme) {
        if let Err(e) = self.storage.set(THEME_KEY, theme.token()) {
            warn!("Failed to persist theme: {}", e);
        }
        self.apply_theme(theme);
    }

    pub fn apply_theme(&self, theme: Theme) {
        self.style.apply_theme(theme);
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Treating unreadable {} as absent: {}", key, e);
                None
            }
        }
    }
}
