use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row};

use crate::db::{connection::Database, helpers::parse_datetime, models::StorageItem};

fn row_to_item(row: &Row) -> Result<StorageItem> {
    let updated_at: String = row.get("updated_at")?;

    Ok(StorageItem {
        key: row.get("key")?,
        value: row.get("value")?,
        updated_at: parse_datetime(&updated_at, "updated_at")?,
    })
}

impl Database {
    /// Read one stored blob by key.
    pub async fn get_item(&self, key: &str) -> Result<Option<StorageItem>> {
        let key = key.to_string();
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT key, value, updated_at FROM local_storage WHERE key = ?1",
            )?;
            let mut rows = stmt.query(params![key])?;
            let item = match rows.next()? {
                Some(row) => Some(row_to_item(row)?),
                None => None,
            };
            Ok(item)
        })
        .await
    }

    /// Write a blob, replacing whatever was stored under the key.
    pub async fn set_item(&self, key: &str, value: String) -> Result<()> {
        let key = key.to_string();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO local_storage (key, value, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                     value = excluded.value,
                     updated_at = excluded.updated_at",
                params![key, value, Utc::now().to_rfc3339()],
            )
            .with_context(|| format!("failed to store item '{key}'"))?;
            Ok(())
        })
        .await
    }

    /// Delete a stored blob. Returns whether anything was stored under the key.
    pub async fn remove_item(&self, key: &str) -> Result<bool> {
        let key = key.to_string();
        self.execute(move |conn| {
            let removed = conn
                .execute("DELETE FROM local_storage WHERE key = ?1", params![key])
                .with_context(|| format!("failed to remove item '{key}'"))?;
            Ok(removed > 0)
        })
        .await
    }

    pub async fn storage_keys(&self) -> Result<Vec<String>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare("SELECT key FROM local_storage ORDER BY key ASC")?;
            let keys = stmt
                .query_map([], |row| row.get::<_, String>(0))?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(keys)
        })
        .await
    }

    pub async fn has_item(&self, key: &str) -> Result<bool> {
        let key = key.to_string();
        self.execute(move |conn| {
            let found: Option<i64> = conn
                .query_row(
                    "SELECT 1 FROM local_storage WHERE key = ?1",
                    params![key],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(found.is_some())
        })
        .await
    }
}
