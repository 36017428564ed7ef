//! Token and password primitive errors.

use super::error_code::{self, ErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Authorization required")]
    MissingToken,

    #[error("Invalid token: {reason}")]
    InvalidToken { reason: String },

    #[error("Token signing failed: {message}")]
    Signing { message: String },

    #[error("Password hashing failed: {message}")]
    Hashing { message: String },
}

impl ErrorCode for AuthError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingToken => error_code::AUTH_REQUIRED,
            Self::InvalidToken { .. } => error_code::INVALID_TOKEN,
            Self::Signing { .. } | Self::Hashing { .. } => error_code::AUTH_INTERNAL,
        }
    }
}
