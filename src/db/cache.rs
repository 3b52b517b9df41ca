//! SQLite-backed fetch cache, so the cache window spans CLI invocations.

use crate::core::cache::{CachedBody, FetchCache};
use crate::errors::AppResult;
use chrono::{DateTime, Local};
use rusqlite::{Connection, OptionalExtension, params};

pub struct DbCache<'a> {
    conn: &'a Connection,
}

impl<'a> DbCache<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl FetchCache for DbCache<'_> {
    fn get(&self, url: &str) -> AppResult<Option<CachedBody>> {
        let row: Option<(String, String)> = self
            .conn
            .query_row(
                "SELECT fetched_at, body FROM fetch_cache WHERE url = ?1",
                [url],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        // An unparsable timestamp is a miss, the next fetch overwrites it
        Ok(row.and_then(|(fetched_at, body)| {
            DateTime::parse_from_rfc3339(&fetched_at)
                .ok()
                .map(|dt| CachedBody {
                    body,
                    fetched_at: dt.with_timezone(&Local),
                })
        }))
    }

    fn put(&mut self, url: &str, body: &str, fetched_at: DateTime<Local>) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO fetch_cache (url, fetched_at, body) VALUES (?1, ?2, ?3)
             ON CONFLICT(url) DO UPDATE SET fetched_at = excluded.fetched_at, body = excluded.body",
            params![url, fetched_at.to_rfc3339(), body],
        )?;
        Ok(())
    }

    fn clear(&mut self) -> AppResult<usize> {
        Ok(self.conn.execute("DELETE FROM fetch_cache", [])?)
    }
}
