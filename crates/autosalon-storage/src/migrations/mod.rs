//! Forward-only schema migrations, each applied in its own transaction.

mod v001_initial_schema;

use rusqlite::Connection;
use tracing::{debug, info, warn};

use autosalon_core::errors::StorageError;

use crate::queries::sqe;

/// Highest schema version this build knows about.
pub const LATEST_VERSION: u32 = 1;

type MigrationFn = fn(&Connection) -> Result<(), StorageError>;

const MIGRATIONS: [(u32, &str, MigrationFn); 1] =
    [(1, "initial_schema", v001_initial_schema::migrate)];

/// Current schema version, 0 when `schema_version` does not exist yet.
pub fn current_version(conn: &Connection) -> Result<u32, StorageError> {
    let exists: bool = conn
        .prepare("SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version'")
        .and_then(|mut stmt| stmt.exists([]))
        .map_err(sqe)?;

    if !exists {
        return Ok(0);
    }

    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(sqe)
}

/// Run all pending migrations. Returns how many were applied.
pub fn run_migrations(conn: &Connection) -> Result<u32, StorageError> {
    let current = current_version(conn)?;
    if current >= LATEST_VERSION {
        debug!("database schema is up to date (v{current})");
        return Ok(0);
    }

    info!("running migrations: v{current} → v{LATEST_VERSION}");
    let mut applied = 0;

    for &(version, name, migrate_fn) in &MIGRATIONS {
        if version <= current {
            continue;
        }

        debug!("applying migration v{version:03}: {name}");
        conn.execute_batch("BEGIN IMMEDIATE")
            .map_err(|e| failed(version, format!("begin: {e}")))?;

        let result = migrate_fn(conn).and_then(|()| {
            conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])
                .map(|_| ())
                .map_err(sqe)
        });

        match result {
            Ok(()) => {
                conn.execute_batch("COMMIT")
                    .map_err(|e| failed(version, format!("commit: {e}")))?;
                info!("applied migration v{version:03}: {name}");
                applied += 1;
            }
            Err(e) => {
                warn!("migration v{version:03} failed: {e}, rolling back");
                let _ = conn.execute_batch("ROLLBACK");
                return Err(failed(version, e.to_string()));
            }
        }
    }

    Ok(applied)
}

fn failed(version: u32, message: String) -> StorageError {
    StorageError::MigrationFailed { version, message }
}
