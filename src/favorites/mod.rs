//! Client-local favorites persistence.
//!
//! Preferences are one JSON blob stored under a fixed key in a small SQLite
//! key-value table. Teams are referenced by internal id; ids persisted before
//! the internal-id scheme existed are detected on load and translated once
//! through the identity table.

use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::identity::build_translation_table;
use crate::model::{FavoritePreferences, League};

const FAVORITES_KEY: &str = "favorites";

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS kv (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Thread-safe store (single connection with mutex).
#[derive(Clone)]
pub struct FavoritesStore {
    conn: Arc<Mutex<Connection>>,
}

impl FavoritesStore {
    /// Open (or create) the store at the given path.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Self::from_connection(conn)
    }

    /// In-memory store for tests.
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(FavoritesStore { conn: Arc::new(Mutex::new(conn)) })
    }

    /// Load preferences; a missing blob yields empty defaults. Team ids that
    /// predate the internal-id scheme (no league namespace) set the transient
    /// migration flag.
    pub fn load(&self) -> Result<FavoritePreferences> {
        let conn = self.conn.lock().unwrap();
        let blob: Option<String> = conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![FAVORITES_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(json) = blob else {
            return Ok(default_preferences());
        };
        let mut prefs: FavoritePreferences = serde_json::from_str(&json)?;
        if prefs.teams.first().is_some_and(|t| !t.contains('-')) {
            prefs.needs_migration = true;
        }
        Ok(prefs)
    }

    pub fn save(&self, prefs: &FavoritePreferences) -> Result<()> {
        let json = serde_json::to_string(prefs)?;
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![FAVORITES_KEY, json],
        )?;
        Ok(())
    }

    /// Flip a team's favorite flag by internal id; returns the new state.
    pub fn toggle_team(&self, internal_id: &str) -> Result<FavoritePreferences> {
        let mut prefs = self.load()?;
        match prefs.teams.iter().position(|t| t == internal_id) {
            Some(pos) => {
                prefs.teams.remove(pos);
            }
            None => prefs.teams.push(internal_id.to_string()),
        }
        prefs.last_updated = Utc::now().to_rfc3339();
        self.save(&prefs)?;
        Ok(prefs)
    }

    /// Flip a league's favorite flag; returns the new state.
    pub fn toggle_league(&self, league_id: &str) -> Result<FavoritePreferences> {
        let mut prefs = self.load()?;
        match prefs.leagues.iter().position(|l| l == league_id) {
            Some(pos) => {
                prefs.leagues.remove(pos);
            }
            None => prefs.leagues.push(league_id.to_string()),
        }
        prefs.last_updated = Utc::now().to_rfc3339();
        self.save(&prefs)?;
        Ok(prefs)
    }

    pub fn is_team_favorite(&self, internal_id: &str) -> Result<bool> {
        Ok(self.load()?.teams.iter().any(|t| t == internal_id))
    }

    pub fn is_league_favorite(&self, league_id: &str) -> Result<bool> {
        Ok(self.load()?.leagues.iter().any(|l| l == league_id))
    }

    /// One-time migration of pre-scheme provider ids to internal ids, using
    /// the current rosters. A no-op unless the load-time flag is set.
    pub fn migrate(&self, leagues: &[League]) -> Result<FavoritePreferences> {
        let mut prefs = self.load()?;
        if !prefs.needs_migration {
            return Ok(prefs);
        }
        let table = build_translation_table(leagues);
        prefs.teams = table.migrate(&prefs.teams);
        prefs.needs_migration = false;
        prefs.last_updated = Utc::now().to_rfc3339();
        self.save(&prefs)?;
        Ok(prefs)
    }

    /// Remove the persisted blob entirely.
    pub fn clear(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM kv WHERE key = ?1", params![FAVORITES_KEY])?;
        Ok(())
    }
}

fn default_preferences() -> FavoritePreferences {
    FavoritePreferences {
        teams: Vec::new(),
        leagues: Vec::new(),
        last_updated: Utc::now().to_rfc3339(),
        needs_migration: false,
    }
}
