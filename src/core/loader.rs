//! Feedback loader: fetch the CSV export, parse it, memoize the raw body.

use crate::core::cache::FetchCache;
use crate::errors::{AppError, AppResult};
use crate::models::feedback::{FeedbackRow, FeedbackTable};
use crate::models::outcome::LoadOutcome;
use chrono::Local;
use std::fs;
use std::time::Duration;

/// Number of columns the sheet must expose: timestamp, category, comment.
pub const EXPECTED_COLUMNS: usize = 3;

/// Where the raw CSV comes from.
pub trait FeedbackSource {
    fn fetch(&self, url: &str) -> AppResult<String>;
}

impl FeedbackSource for Box<dyn FeedbackSource> {
    fn fetch(&self, url: &str) -> AppResult<String> {
        (**self).fetch(url)
    }
}

/// One blocking GET per fetch, no retry.
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl FeedbackSource for HttpSource {
    fn fetch(&self, url: &str) -> AppResult<String> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(resp.text()?)
    }
}

/// Reads a local CSV file; the "url" is a filesystem path.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSource;

impl FeedbackSource for FileSource {
    fn fetch(&self, url: &str) -> AppResult<String> {
        Ok(fs::read_to_string(url)?)
    }
}

/// How the last `load` obtained its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Fetched,
    Cache,
}

pub struct FeedbackLoader<S, C> {
    source: S,
    cache: C,
    ttl: Duration,
    last_origin: Option<Origin>,
}

impl<S: FeedbackSource, C: FetchCache> FeedbackLoader<S, C> {
    pub fn new(source: S, cache: C, ttl: Duration) -> Self {
        Self {
            source,
            cache,
            ttl,
            last_origin: None,
        }
    }

    /// Load the table behind `url`.
    ///
    /// A body fetched less than `ttl` ago is served from the cache. Fetch and
    /// parse failures become `LoadFailed` and are never cached.
    pub fn load(&mut self, url: &str) -> LoadOutcome {
        match self.try_load(url) {
            Ok(table) => LoadOutcome::from_table(table),
            Err(e) => LoadOutcome::LoadFailed(e.to_string()),
        }
    }

    fn try_load(&mut self, url: &str) -> AppResult<FeedbackTable> {
        self.last_origin = None;
        let now = Local::now();

        if let Some(hit) = self.cache.get(url)?
            && hit.is_fresh(self.ttl, now)
        {
            self.last_origin = Some(Origin::Cache);
            return parse_feedback_csv(&hit.body);
        }

        let body = self.source.fetch(url)?;
        let table = parse_feedback_csv(&body)?;
        self.cache.put(url, &body, now)?;
        self.last_origin = Some(Origin::Fetched);

        Ok(table)
    }

    /// Explicit clear signal: the next `load` fetches again.
    pub fn clear_cache(&mut self) -> AppResult<usize> {
        self.cache.clear()
    }

    pub fn last_origin(&self) -> Option<Origin> {
        self.last_origin
    }
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.filter(|s| !s.is_empty())
}

/// Parse a sheet export. The first record is the header and only its
/// width is checked; data rows map positionally to
/// timestamp / category / comment.
pub fn parse_feedback_csv(body: &str) -> AppResult<FeedbackTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Ok(FeedbackTable::default());
    }
    if headers.len() != EXPECTED_COLUMNS {
        return Err(AppError::ColumnCount(headers.len()));
    }

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(FeedbackRow::new(
            record.get(0).unwrap_or(""),
            non_empty(record.get(1)),
            non_empty(record.get(2)),
        ));
    }

    Ok(FeedbackTable::new(rows))
}
