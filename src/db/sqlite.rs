use std::path::PathBuf;

use rusqlite::{Connection, OptionalExtension};

use super::{DbError, PreferenceStore};

const APP_DIR: &str = "friendly";
const DB_FILE: &str = "friendly.db";

/// SQLite-backed preferences for native builds.
#[derive(Clone, Debug)]
pub struct SqlitePreferences {
    path: PathBuf,
}

impl SqlitePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/friendly/friendly.db`, or the working directory when the
    /// platform has no data directory.
    pub fn open_default() -> Self {
        let dir = dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join(DB_FILE))
    }

    fn connection(&self) -> Result<Connection, DbError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DbError::Unavailable(format!("Failed to create {}: {e}", parent.display()))
            })?;
        }
        let conn = Connection::open(&self.path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(conn)
    }
}

impl PreferenceStore for SqlitePreferences {
    fn get(&self, key: &str) -> Result<Option<String>, DbError> {
        let conn = self.connection()?;
        let value: Option<String> = conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DbError> {
        let conn = self.connection()?;
        conn.execute(
            "INSERT OR REPLACE INTO preferences (key, value) VALUES (?1, ?2)",
            [key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::PLAYLIST_KEY;

    fn temp_store(name: &str) -> SqlitePreferences {
        let dir = std::env::temp_dir().join(format!("friendly-{}-{name}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        SqlitePreferences::new(dir.join(DB_FILE))
    }

    #[test]
    fn missing_key_reads_as_none() {
        let store = temp_store("missing");
        assert_eq!(store.get(PLAYLIST_KEY).unwrap(), None);
    }

    #[test]
    fn values_persist_and_overwrite() {
        let store = temp_store("overwrite");
        store.set(PLAYLIST_KEY, "PL123").unwrap();
        store.set(PLAYLIST_KEY, "PL456").unwrap();

        let reopened = SqlitePreferences::new(store.path.clone());
        assert_eq!(reopened.get(PLAYLIST_KEY).unwrap().as_deref(), Some("PL456"));
    }
}
