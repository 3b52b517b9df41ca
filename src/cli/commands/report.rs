use crate::cli::commands::source::{load_feedback, report_no_match, require_table};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::classify::classify;
use crate::core::filter::{Selection, filter};
use crate::core::prompt::build_prompt_in;
use crate::core::report::{GeminiClient, generate_report};
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::ui::messages::{detail, error, header, info, success};
use crate::utils::path::expand_tilde;
use std::fs;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        category,
        refresh,
        prompt_only,
        model,
        lang,
        out,
        force,
    } = &cli.command
    {
        // Missing key is a configuration failure: stop before any fetch
        let api_key = if *prompt_only {
            None
        } else {
            Some(cfg.require_api_key()?.to_string())
        };

        let pool = DbPool::new(&cfg.database)?;
        let (location, outcome) = load_feedback(cli, cfg, &pool, *refresh)?;

        let Some(table) = require_table(&location, outcome)? else {
            return Ok(());
        };

        let selection = Selection::from_labels(category.iter().cloned());
        let filtered = filter(&table, &selection);
        if filtered.is_empty() {
            report_no_match(&table.categories());
            return Ok(());
        }

        let prompt = build_prompt_in(&filtered, lang.unwrap_or(cfg.prompt_language));

        let Some(api_key) = api_key else {
            println!("{prompt}");
            return Ok(());
        };

        // The output file is settled before the API is called
        let out_path = match out {
            Some(out) => {
                let path = expand_tilde(out);
                ensure_writable(&path, *force).map_err(|e| match e {
                    AppError::Export(_) => AppError::ReportNotSaved(path.display().to_string()),
                    other => other,
                })?;
                Some(path)
            }
            None => None,
        };

        let model = model.clone().unwrap_or_else(|| cfg.model.clone());
        let summary = classify(&filtered);
        info(format!(
            "Analyzing {} comments ({} keep / {} change-stop) with {model}...",
            summary.total, summary.keep_count, summary.other_count
        ));

        let client = GeminiClient::new(&cfg.api_base_url, &api_key, cfg.request_timeout())?;

        let text = match generate_report(&client, &model, &prompt) {
            Ok(text) => text,
            Err(e) => {
                error("Report generation failed.");
                detail(format!("Detail: {e}"));
                ttlog_soft(&pool.conn, "report_failed", &model, &e.to_string());
                return Err(e);
            }
        };

        header("🧠 PMO management analysis");
        println!("{text}");

        ttlog_soft(
            &pool.conn,
            "report",
            &model,
            &format!("{} comments analyzed", summary.total),
        );

        if let Some(path) = out_path {
            fs::write(&path, &text)?;
            success(format!("Report saved to {}", path.display()));
        }
    }
    Ok(())
}
