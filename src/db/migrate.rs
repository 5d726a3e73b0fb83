//! Schema migrations for the snapshot store.
//!
//! The durable layout is a single `kv` table holding one JSON (or raw text)
//! snapshot per key, plus an `audit` table recording every mutating
//! operation. Applied migrations leave a marker row in `audit` so they are
//! never re-run.

use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `audit` table exists with the modern schema.
fn ensure_audit_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS audit (
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

/// Check if the `kv` snapshot table exists.
fn kv_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='kv'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `kv` table has an `updated_at` column.
fn kv_has_updated_at_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('kv')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "updated_at" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `kv` table with the modern schema (including `updated_at`).
fn create_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

/// Migrate a pre-0.2 `kv` table (no write timestamps) to the modern schema.
fn migrate_add_updated_at(conn: &Connection) -> Result<()> {
    let version = "20250412_0001_add_kv_updated_at";

    let mut chk = conn.prepare(
        "SELECT 1 FROM audit
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    conn.execute(
        "ALTER TABLE kv ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';",
        [],
    )?;

    conn.execute(
        "INSERT INTO audit (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added updated_at to kv snapshots')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'updated_at' to kv table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_audit_table(conn)?;

    if !kv_table_exists(conn)? {
        create_kv_table(conn)?;
    } else if !kv_has_updated_at_column(conn)? {
        migrate_add_updated_at(conn)?;
    }

    Ok(())
}
