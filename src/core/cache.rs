//! Time-boxed cache of raw CSV bodies, keyed by source URL.

use crate::errors::AppResult;
use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::time::Duration;

/// A cached source body and the moment it was fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedBody {
    pub body: String,
    pub fetched_at: DateTime<Local>,
}

impl CachedBody {
    /// An entry is fresh while its age is below `ttl`. A zero TTL never hits.
    pub fn is_fresh(&self, ttl: Duration, now: DateTime<Local>) -> bool {
        let age = now.signed_duration_since(self.fetched_at);
        match age.to_std() {
            Ok(age) => age < ttl,
            // fetched_at in the future (clock moved back): treat as stale
            Err(_) => false,
        }
    }
}

/// Storage behind the loader's memoization.
pub trait FetchCache {
    fn get(&self, url: &str) -> AppResult<Option<CachedBody>>;
    fn put(&mut self, url: &str, body: &str, fetched_at: DateTime<Local>) -> AppResult<()>;
    /// Drop every entry. Returns how many were removed.
    fn clear(&mut self) -> AppResult<usize>;
}

/// In-process cache, lives as long as the loader.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: HashMap<String, CachedBody>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FetchCache for MemoryCache {
    fn get(&self, url: &str) -> AppResult<Option<CachedBody>> {
        Ok(self.entries.get(url).cloned())
    }

    fn put(&mut self, url: &str, body: &str, fetched_at: DateTime<Local>) -> AppResult<()> {
        self.entries.insert(
            url.to_string(),
            CachedBody {
                body: body.to_string(),
                fetched_at,
            },
        );
        Ok(())
    }

    fn clear(&mut self) -> AppResult<usize> {
        let n = self.entries.len();
        self.entries.clear();
        Ok(n)
    }
}
