//! Shared feedback loading for the commands that read the sheet.

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::loader::{FeedbackLoader, FeedbackSource, FileSource, HttpSource, Origin};
use crate::db::cache::DbCache;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::feedback::FeedbackTable;
use crate::models::outcome::LoadOutcome;
use crate::ui::messages::{detail, error, info};

/// `--csv FILE` wins over the configured sheet.
pub fn resolve_source(cli: &Cli, cfg: &Config) -> AppResult<(String, Box<dyn FeedbackSource>)> {
    if let Some(file) = &cli.csv {
        return Ok((file.clone(), Box::new(FileSource)));
    }
    let url = cfg.feedback_url()?;
    let source = HttpSource::new(cfg.request_timeout())?;
    Ok((url, Box::new(source)))
}

/// Load the feedback table through the cache, logging how it was obtained.
/// Returns the location that was read and the outcome.
pub fn load_feedback(
    cli: &Cli,
    cfg: &Config,
    pool: &DbPool,
    refresh: bool,
) -> AppResult<(String, LoadOutcome)> {
    let (location, source) = resolve_source(cli, cfg)?;
    let mut loader = FeedbackLoader::new(source, DbCache::new(&pool.conn), cfg.cache_ttl());

    if refresh {
        let removed = loader.clear_cache()?;
        ttlog_soft(
            &pool.conn,
            "cache_clear",
            "",
            &format!("{removed} cached source(s) dropped"),
        );
    }

    let outcome = loader.load(&location);

    match (&outcome, loader.last_origin()) {
        (LoadOutcome::LoadFailed(reason), _) => {
            ttlog_soft(&pool.conn, "load_failed", &location, reason)
        }
        (o, Some(Origin::Cache)) => ttlog_soft(
            &pool.conn,
            "cache_hit",
            &location,
            &format!("{} rows", o.row_count()),
        ),
        (o, _) => ttlog_soft(
            &pool.conn,
            "fetch",
            &location,
            &format!("{} rows", o.row_count()),
        ),
    }

    Ok((location, outcome))
}

/// Turn an outcome into a table to work on.
///
/// - `Loaded` → `Some(table)`
/// - `Empty` → "no data" notice, `None`
/// - `LoadFailed` → visible error with detail, then `Err`
pub fn require_table(location: &str, outcome: LoadOutcome) -> AppResult<Option<FeedbackTable>> {
    match outcome {
        LoadOutcome::Loaded(table) => Ok(Some(table)),
        LoadOutcome::Empty => {
            info("📉 No feedback yet: the board is clean. Waiting for data...");
            Ok(None)
        }
        LoadOutcome::LoadFailed(reason) => {
            error("Error reading the feedback sheet.");
            detail(format!("Detail: {reason}"));
            detail(format!("Source attempted: {location}"));
            Err(AppError::LoadFailed(reason))
        }
    }
}

/// Notice shown when a category filter leaves nothing.
pub fn report_no_match(available: &[String]) {
    crate::ui::messages::warning("No feedback matches the selected categories.");
    let labels: Vec<String> = available
        .iter()
        .map(|l| {
            if l.is_empty() {
                "\"\"".to_string()
            } else {
                l.clone()
            }
        })
        .collect();
    info(format!("Available categories: {}", labels.join(", ")));
}
