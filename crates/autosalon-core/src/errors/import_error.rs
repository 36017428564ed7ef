//! Catalog import errors.

use super::error_code::{self, ErrorCode};
use super::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ErrorCode for ImportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Read { .. } | Self::Parse(_) => error_code::IMPORT_FAILED,
            Self::Storage(e) => e.error_code(),
        }
    }
}
