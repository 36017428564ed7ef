//! Connection pragmas and custom SQL functions.

use std::time::Duration;

use rusqlite::functions::FunctionFlags;
use rusqlite::types::{Value, ValueRef};
use rusqlite::Connection;

use autosalon_core::errors::StorageError;
use autosalon_core::query::CASEFOLD_FN;

use crate::queries::sqe;

/// Writer connection setup: WAL, enforced foreign keys, busy timeout.
pub fn configure_connection(conn: &Connection, busy_timeout: Duration) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA cache_size = -8000;
        PRAGMA temp_store = MEMORY;
        ",
    )
    .map_err(sqe)?;
    conn.busy_timeout(busy_timeout).map_err(sqe)?;
    register_functions(conn)
}

/// Same as [`configure_connection`] plus `query_only`.
pub fn configure_readonly_connection(
    conn: &Connection,
    busy_timeout: Duration,
) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        PRAGMA foreign_keys = ON;
        PRAGMA cache_size = -8000;
        PRAGMA temp_store = MEMORY;
        PRAGMA query_only = ON;
        ",
    )
    .map_err(sqe)?;
    conn.busy_timeout(busy_timeout).map_err(sqe)?;
    register_functions(conn)
}

/// Scalar functions rendered predicates rely on. Non-text values pass
/// through unchanged.
pub fn register_functions(conn: &Connection) -> Result<(), StorageError> {
    conn.create_scalar_function(
        CASEFOLD_FN,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            Ok(match ctx.get_raw(0) {
                ValueRef::Text(text) => Value::Text(String::from_utf8_lossy(text).to_lowercase()),
                other => Value::from(other),
            })
        },
    )
    .map_err(sqe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_keys_are_enforced() {
        let conn = Connection::open_in_memory().unwrap();
        configure_connection(&conn, Duration::from_millis(100)).unwrap();
        let fk: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk, 1);
    }

    #[test]
    fn casefold_lowercases_non_ascii_text() {
        let conn = Connection::open_in_memory().unwrap();
        configure_connection(&conn, Duration::from_millis(100)).unwrap();
        let folded: String = conn
            .query_row("SELECT casefold('ЛАДА Vesta')", [], |row| row.get(0))
            .unwrap();
        assert_eq!(folded, "лада vesta");

        let null: Option<String> = conn
            .query_row("SELECT casefold(NULL)", [], |row| row.get(0))
            .unwrap();
        assert!(null.is_none());
    }

    #[test]
    fn readonly_connection_has_casefold() {
        let conn = Connection::open_in_memory().unwrap();
        configure_readonly_connection(&conn, Duration::from_millis(100)).unwrap();
        let hit: bool = conn
            .query_row("SELECT casefold('Лада') LIKE casefold('%ЛАД%')", [], |row| row.get(0))
            .unwrap();
        assert!(hit);
    }

    #[test]
    fn readonly_connection_rejects_writes() {
        let conn = Connection::open_in_memory().unwrap();
        configure_readonly_connection(&conn, Duration::from_millis(100)).unwrap();
        assert!(conn.execute_batch("CREATE TABLE t (x INTEGER)").is_err());
    }
}
