//! Order and test-drive errors.

use super::error_code::{self, ErrorCode};
use super::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Car {car_id} is not available for purchase")]
    CarUnavailable { car_id: i64 },

    #[error("Car not found: {car_id}")]
    CarNotFound { car_id: i64 },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ErrorCode for OrderError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::CarUnavailable { .. } => error_code::CAR_UNAVAILABLE,
            Self::CarNotFound { .. } => error_code::CAR_NOT_FOUND,
            Self::Validation { .. } => error_code::VALIDATION_ERROR,
            Self::Storage(e) => e.error_code(),
        }
    }
}
