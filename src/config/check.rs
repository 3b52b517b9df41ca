//! Configuration file checks and key migration.
//!
//! Older config files may predate some keys; `--check` reports them and
//! `--migrate` writes the missing ones with their default values, leaving
//! every existing value untouched.

use super::Config;
use crate::errors::AppResult;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys the feedback commands cannot work without.
const REQUIRED: [&str; 3] = ["sheet_id", "gid", "gemini_api_key"];

/// Result of a configuration check.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Keys absent from the file (defaults are in effect).
    pub missing: Vec<String>,
    /// Required keys present but empty.
    pub empty_required: Vec<String>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.empty_required.is_empty()
    }
}

fn default_mapping() -> AppResult<Mapping> {
    let value = serde_yaml::to_value(Config::default())?;
    Ok(value.as_mapping().cloned().unwrap_or_default())
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    if !path.exists() {
        return Ok(Mapping::new());
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }
    let value: Value = serde_yaml::from_str(&content)?;
    Ok(value.as_mapping().cloned().unwrap_or_default())
}

/// Compare the file at `path` with the full set of known keys.
///
/// `source_url` stands in for the `sheet_id`/`gid` pair when it is set.
pub fn check_config(path: &Path) -> AppResult<CheckReport> {
    let defaults = default_mapping()?;
    let current = read_mapping(path)?;

    let mut report = CheckReport::default();

    for key in defaults.keys() {
        if !current.contains_key(key)
            && let Some(k) = key.as_str()
        {
            report.missing.push(k.to_string());
        }
    }

    let has_source_url = current
        .get("source_url")
        .and_then(Value::as_str)
        .is_some_and(|s| !s.trim().is_empty());

    for key in REQUIRED {
        if has_source_url && (key == "sheet_id" || key == "gid") {
            continue;
        }
        let empty = current
            .get(key)
            .and_then(Value::as_str)
            .is_none_or(|s| s.trim().is_empty());
        if empty {
            report.empty_required.push(key.to_string());
        }
    }

    Ok(report)
}

/// Add every missing key with its default value.
/// Returns the keys that were added (empty when nothing changed).
pub fn migrate_config(path: &Path) -> AppResult<Vec<String>> {
    let defaults = default_mapping()?;
    let mut current = read_mapping(path)?;
    let mut added = Vec::new();

    for (key, value) in defaults {
        if !current.contains_key(&key) {
            if let Some(k) = key.as_str() {
                added.push(k.to_string());
            }
            current.insert(key, value);
        }
    }

    if !added.is_empty() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(&Value::Mapping(current))?)?;
    }

    Ok(added)
}
