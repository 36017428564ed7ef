//! Registration, login and profile errors.

use super::error_code::{self, ErrorCode};
use super::{AuthError, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("A client with email {email} already exists")]
    EmailTaken { email: String },

    /// Shared by unknown email and wrong password so callers cannot probe accounts.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Client not found: {id}")]
    ClientNotFound { id: i64 },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ErrorCode for AccountError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmailTaken { .. } => error_code::EMAIL_TAKEN,
            Self::InvalidCredentials => error_code::INVALID_CREDENTIALS,
            Self::ClientNotFound { .. } => error_code::CLIENT_NOT_FOUND,
            Self::Validation { .. } => error_code::VALIDATION_ERROR,
            Self::Auth(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
        }
    }
}
