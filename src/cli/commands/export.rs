use crate::cli::commands::source::{load_feedback, report_no_match, require_table};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::filter::{Selection, filter};
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        category,
        refresh,
        force,
    } = &cli.command
    {
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

        let written = ExportLogic::export(&filtered, *format, file, *force)?;

        ttlog_soft(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{written} rows written to {file}"),
        );
    }
    Ok(())
}
