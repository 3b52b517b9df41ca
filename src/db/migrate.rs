use rusqlite::{Connection, OptionalExtension, Result, params};

const FETCH_CACHE_VERSION: &str = "20260301_0001_create_fetch_cache";
const FETCH_CACHE_INDEX_VERSION: &str = "20260412_0002_fetch_cache_fetched_at_index";

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check whether a migration version is already marked as applied.
fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut stmt = conn.prepare(
        "SELECT 1 FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
    )?;
    Ok(stmt.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message) VALUES (?1, 'migration_applied', ?2, ?3)",
        params![chrono::Local::now().to_rfc3339(), version, message],
    )?;
    Ok(())
}

/// Create the `fetch_cache` table: one raw CSV body per source URL.
fn create_fetch_cache_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS fetch_cache (
            url        TEXT PRIMARY KEY,
            fetched_at TEXT NOT NULL,
            body       TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_fetch_cache_index(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_fetch_cache_fetched_at ON fetch_cache(fetched_at);",
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db(). Every step is idempotent.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !is_applied(conn, FETCH_CACHE_VERSION)? {
        create_fetch_cache_table(conn)?;
        mark_applied(conn, FETCH_CACHE_VERSION, "Created fetch_cache table")?;
    }

    if !is_applied(conn, FETCH_CACHE_INDEX_VERSION)? {
        create_fetch_cache_index(conn)?;
        mark_applied(
            conn,
            FETCH_CACHE_INDEX_VERSION,
            "Added fetched_at index to fetch_cache",
        )?;
    }

    Ok(())
}
