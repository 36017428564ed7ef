//! Catalog errors: the only modeled negative outcome is a missing car.

use super::error_code::{self, ErrorCode};
use super::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Car not found: {id}")]
    CarNotFound { id: String },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::CarNotFound { .. } => error_code::CAR_NOT_FOUND,
            Self::Storage(e) => e.error_code(),
        }
    }
}
