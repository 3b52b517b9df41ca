use crate::cli::commands::source::{load_feedback, report_no_match, require_table};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::filter::Selection;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::dashboard::{format_header, print_dashboard};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard {
        category,
        recent,
        refresh,
    } = &cli.command
    {
        let pool = DbPool::new(&cfg.database)?;
        let (location, outcome) = load_feedback(cli, cfg, &pool, *refresh)?;

        let Some(table) = require_table(&location, outcome)? else {
            print!("{}", format_header(&location, &cfg.form_url));
            return Ok(());
        };

        let selection = Selection::from_labels(category.iter().cloned());
        let view = Core::build_view(&table, &selection, recent.unwrap_or(cfg.recent_rows));

        if view.filtered.is_empty() {
            report_no_match(&view.categories);
            return Ok(());
        }

        print_dashboard(&view, &location, &cfg.form_url, cfg.wrap_width);
    }
    Ok(())
}
