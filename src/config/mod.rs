use crate::core::prompt::PromptLanguage;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod check;

pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Runtime configuration, built once at startup and passed by reference
/// to the loader, the report generator and the command handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Spreadsheet document identifier.
    #[serde(default)]
    pub sheet_id: String,
    /// Sheet (tab) identifier inside the document.
    #[serde(default)]
    pub gid: String,
    /// Full CSV URL; when set it wins over `sheet_id`/`gid`.
    #[serde(default)]
    pub source_url: String,
    /// Public form where the team submits feedback.
    #[serde(default)]
    pub form_url: String,
    #[serde(default)]
    pub gemini_api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_base")]
    pub api_base_url: String,
    /// Language of the report prompt (`es` or `en`).
    #[serde(default)]
    pub prompt_language: PromptLanguage,
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_recent_rows")]
    pub recent_rows: usize,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}
fn default_cache_ttl() -> u64 {
    60
}
fn default_request_timeout() -> u64 {
    120
}
fn default_recent_rows() -> usize {
    10
}
fn default_wrap_width() -> usize {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            sheet_id: String::new(),
            gid: String::new(),
            source_url: String::new(),
            form_url: String::new(),
            gemini_api_key: String::new(),
            model: default_model(),
            api_base_url: default_api_base(),
            prompt_language: PromptLanguage::default(),
            cache_ttl_secs: default_cache_ttl(),
            request_timeout_secs: default_request_timeout(),
            recent_rows: default_recent_rows(),
            wrap_width: default_wrap_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("retroboard")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".retroboard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("retroboard.conf")
    }

    /// Return the full path of the SQLite database (log + fetch cache)
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("retroboard.sqlite")
    }

    /// Load configuration from file (defaults if not found), then apply
    /// environment overrides.
    pub fn load() -> AppResult<Self> {
        let mut cfg = Self::load_from(&Self::config_file())?;
        cfg.apply_env();
        Ok(cfg)
    }

    /// Defaults plus environment overrides, without reading the file.
    pub fn from_env() -> Self {
        let mut cfg = Config::default();
        cfg.apply_env();
        cfg
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Secrets may live in the environment instead of the config file.
    pub fn apply_env(&mut self) {
        if let Some(v) = non_empty_env("GEMINI_API_KEY") {
            self.gemini_api_key = v;
        }
        if let Some(v) = non_empty_env("RETROBOARD_SHEET_ID") {
            self.sheet_id = v;
        }
        if let Some(v) = non_empty_env("RETROBOARD_GID") {
            self.gid = v;
        }
    }

    /// CSV export URL of the feedback sheet.
    ///
    /// Fails with `MissingConfig` when neither `source_url` nor the
    /// `sheet_id`/`gid` pair is configured.
    pub fn feedback_url(&self) -> AppResult<String> {
        if !self.source_url.trim().is_empty() {
            return Ok(self.source_url.trim().to_string());
        }
        if self.sheet_id.trim().is_empty() {
            return Err(AppError::MissingConfig("sheet_id"));
        }
        if self.gid.trim().is_empty() {
            return Err(AppError::MissingConfig("gid"));
        }
        Ok(format!(
            "https://docs.google.com/spreadsheets/d/{}/export?format=csv&gid={}",
            self.sheet_id.trim(),
            self.gid.trim()
        ))
    }

    pub fn require_api_key(&self) -> AppResult<&str> {
        let key = self.gemini_api_key.trim();
        if key.is_empty() {
            return Err(AppError::MissingConfig("gemini_api_key"));
        }
        Ok(key)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Initialize configuration file and database location.
    /// Returns the configured database path.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        // Keep an existing config, only the database entry is refreshed.
        // An unreadable file is left untouched for the user to fix.
        let (mut config, rewrite) = match Self::load_from(&Self::config_file()) {
            Ok(config) => (config, !is_test),
            Err(e) => {
                warning(format!("{e} (config file left unchanged)"));
                (Config::default(), false)
            }
        };
        config.database = db_path.to_string_lossy().to_string();

        if rewrite {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config.database)
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
