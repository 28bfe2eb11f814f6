//! services/app/src/adapters/settings_db.rs
//!
//! The concrete implementation of the `SettingsStore` port over SQLite using
//! `sqlx`. One table, one row per key; the application only ever writes the
//! theme flag, but the adapter is a plain key-value store.

use async_trait::async_trait;
use sqlx::SqlitePool;
use wardrobe_core::ports::{PortError, PortResult, SettingsStore};

/// A settings adapter backed by a SQLite key-value table.
#[derive(Clone)]
pub struct DbSettingsAdapter {
    pool: SqlitePool,
}

impl DbSettingsAdapter {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the settings table if it does not exist yet. Run at startup.
    pub async fn init(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS settings (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for DbSettingsAdapter {
    async fn get(&self, key: &str) -> PortResult<Option<String>> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM settings WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        Ok(value)
    }

    async fn put(&self, key: &str, value: &str) -> PortResult<()> {
        sqlx::query(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| PortError::Unexpected(e.to_string()))?;
        Ok(())
    }
}
