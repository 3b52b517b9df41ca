//! Unified application error type.
//! All modules (config, core, db, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Data source errors
    // ---------------------------
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("expected 3 columns (timestamp, category, comment), found {0}")]
    ColumnCount(usize),

    #[error("Could not load feedback: {0}")]
    LoadFailed(String),

    // ---------------------------
    // Report generation
    // ---------------------------
    #[error("Report generation failed: {0}")]
    Generation(String),

    #[error("Report not saved: '{0}' already exists and was not overwritten")]
    ReportNotSaved(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Missing configuration value '{0}' (run `retroboard config --edit`)")]
    MissingConfig(&'static str),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
