//! Per-table query functions. Each takes a `&Connection` and knows nothing
//! about pooling; the engine decides reader vs writer.

pub mod cars;
pub mod clients;
pub mod orders;
pub mod test_drives;

use std::str::FromStr;

use rusqlite::types::{Type, Value};
use rusqlite::{ErrorCode, Row};

use autosalon_core::errors::StorageError;
use autosalon_core::query::SqlValue;

/// Map a rusqlite error onto the storage error taxonomy.
pub fn sqe(e: rusqlite::Error) -> StorageError {
    match e.sqlite_error_code() {
        Some(ErrorCode::DatabaseBusy) | Some(ErrorCode::DatabaseLocked) => StorageError::DbBusy,
        Some(ErrorCode::ConstraintViolation) => StorageError::ConstraintViolation {
            message: e.to_string(),
        },
        _ => StorageError::SqliteError {
            message: e.to_string(),
        },
    }
}

/// Like [`sqe`], but reports unparseable column values as a corrupt row.
pub(crate) fn row_err(table: &'static str) -> impl Fn(rusqlite::Error) -> StorageError {
    move |e| match e {
        rusqlite::Error::FromSqlConversionFailure(..) => StorageError::CorruptRow {
            table,
            details: e.to_string(),
        },
        other => sqe(other),
    }
}

pub(crate) fn bind_value(value: &SqlValue) -> Value {
    match value {
        SqlValue::Integer(v) => Value::Integer(*v),
        SqlValue::Real(v) => Value::Real(*v),
        SqlValue::Text(v) => Value::Text(v.clone()),
    }
}

/// Read a text column and parse it into one of the string enums.
pub(crate) fn parse_text<T>(row: &Row<'_>, idx: usize) -> rusqlite::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw: String = row.get(idx)?;
    raw.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
