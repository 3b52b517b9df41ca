use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::cache::FetchCache;
use crate::db::cache::DbCache;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `refresh` command: explicit cache clear.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Refresh) {
        let pool = DbPool::new(&cfg.database)?;
        let removed = DbCache::new(&pool.conn).clear()?;

        ttlog_soft(
            &pool.conn,
            "cache_clear",
            "",
            &format!("{removed} cached source(s) dropped"),
        );
        success(format!(
            "Fetch cache cleared ({removed} entries). The next command reloads the sheet."
        ));
    }
    Ok(())
}
