use crate::config::Config;
use crate::config::check::{check_config, migrate_config};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use crate::cli::parser::Commands;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            let mut shown = cfg.clone();
            if !shown.gemini_api_key.is_empty() {
                shown.gemini_api_key = "********".to_string();
            }
            println!("{}", serde_yaml::to_string(&shown)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            let report = check_config(&path)?;
            if report.is_clean() {
                success(format!("Configuration OK: {}", path.display()));
            }
            for key in &report.missing {
                warning(format!("Missing field '{key}' (default in use)"));
            }
            for key in &report.empty_required {
                warning(format!("Required field '{key}' is empty"));
            }
            if !report.missing.is_empty() {
                info("Run `retroboard config --migrate` to add the missing fields.");
            }
        }

        // ---- MIGRATE CONFIG ----
        if *migrate {
            let added = migrate_config(&path)?;
            if added.is_empty() {
                info("Configuration already up to date.");
            } else {
                success(format!("Added fields: {}", added.join(", ")));
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using '{}'",
                        editor_to_use
                    ));
                }
                Ok(_) | Err(_) => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));

                    match Command::new(&default_editor).arg(&path).status() {
                        Ok(s) if s.success() => {
                            success(format!(
                                "Configuration file edited successfully using fallback '{}'",
                                default_editor
                            ));
                        }
                        Ok(_) | Err(_) => {
                            crate::ui::messages::error(format!(
                                "Failed to edit configuration file using fallback '{}'",
                                default_editor
                            ));
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
