//! Storage-layer errors for SQLite operations.

use super::error_code::{self, ErrorCode};

/// Errors that can occur in the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("Database busy (another write in progress)")]
    DbBusy,

    #[error("Constraint violation: {message}")]
    ConstraintViolation { message: String },

    #[error("Corrupt {table} row: {details}")]
    CorruptRow { table: &'static str, details: String },

    #[error("Connection lock poisoned: {message}")]
    LockPoisoned { message: String },
}

impl ErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DbBusy => error_code::DB_BUSY,
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            Self::ConstraintViolation { .. } => error_code::CONSTRAINT_VIOLATION,
            _ => error_code::STORAGE_ERROR,
        }
    }
}
