//! Preference storage for the site: a single string preference, the selected
//! playlist, kept across sessions. Browser builds use `localStorage`, native
//! builds a small SQLite table in the platform data directory.

use thiserror::Error;
use tracing::{debug, warn};

use crate::player::PlaylistId;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(not(target_arch = "wasm32"))]
mod sqlite;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserPreferences;
#[cfg(not(target_arch = "wasm32"))]
pub use sqlite::SqlitePreferences;

/// Key under which the playlist identifier is stored.
pub const PLAYLIST_KEY: &str = "playlistId";

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Preference storage unavailable: {0}")]
    Unavailable(String),

    #[cfg(not(target_arch = "wasm32"))]
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Durable string key-value store scoped to this client.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, DbError>;
    fn set(&self, key: &str, value: &str) -> Result<(), DbError>;
}

/// Store used by the running site.
#[cfg(target_arch = "wasm32")]
pub fn default_store() -> BrowserPreferences {
    BrowserPreferences
}

/// Store used by the running site.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_store() -> SqlitePreferences {
    SqlitePreferences::open_default()
}

/// Read the saved playlist; an unreadable store counts as "nothing selected".
pub fn load_playlist_id(store: &impl PreferenceStore, key: &str) -> PlaylistId {
    match store.get(key) {
        Ok(Some(value)) => PlaylistId::new(value),
        Ok(None) => PlaylistId::default(),
        Err(err) => {
            warn!(error = %err, "failed to load saved playlist");
            PlaylistId::default()
        }
    }
}

/// Persist the selected playlist. The empty selection is never written.
pub fn save_playlist_id(
    store: &impl PreferenceStore,
    key: &str,
    playlist: &PlaylistId,
) -> Result<(), DbError> {
    if playlist.is_empty() {
        return Ok(());
    }
    store.set(key, playlist.as_str())?;
    debug!(playlist = %playlist, "saved playlist preference");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
        broken: bool,
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, DbError> {
            if self.broken {
                return Err(DbError::Unavailable("broken".to_string()));
            }
            Ok(self.values.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), DbError> {
            if self.broken {
                return Err(DbError::Unavailable("broken".to_string()));
            }
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn saved_playlist_is_loaded_back() {
        let store = MemoryStore::default();
        save_playlist_id(&store, PLAYLIST_KEY, &PlaylistId::new("PL123")).unwrap();
        assert_eq!(load_playlist_id(&store, PLAYLIST_KEY).as_str(), "PL123");
    }

    #[test]
    fn empty_selection_is_not_written() {
        let store = MemoryStore::default();
        save_playlist_id(&store, PLAYLIST_KEY, &PlaylistId::new("PL123")).unwrap();
        save_playlist_id(&store, PLAYLIST_KEY, &PlaylistId::default()).unwrap();
        assert_eq!(load_playlist_id(&store, PLAYLIST_KEY).as_str(), "PL123");
    }

    #[test]
    fn missing_or_broken_store_means_no_selection() {
        assert!(load_playlist_id(&MemoryStore::default(), PLAYLIST_KEY).is_empty());
        let broken = MemoryStore {
            broken: true,
            ..MemoryStore::default()
        };
        assert!(load_playlist_id(&broken, PLAYLIST_KEY).is_empty());
        assert!(save_playlist_id(&broken, PLAYLIST_KEY, &PlaylistId::new("PL1")).is_err());
    }
}
