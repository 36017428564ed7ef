//! Stable error codes surfaced in API error bodies.

/// Every autosalon error enum maps its variants onto one of these codes.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const DB_BUSY: &str = "DB_BUSY";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const CONSTRAINT_VIOLATION: &str = "CONSTRAINT_VIOLATION";

pub const CAR_NOT_FOUND: &str = "CAR_NOT_FOUND";
pub const CAR_UNAVAILABLE: &str = "CAR_UNAVAILABLE";
pub const CLIENT_NOT_FOUND: &str = "CLIENT_NOT_FOUND";
pub const EMAIL_TAKEN: &str = "EMAIL_TAKEN";
pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";

pub const AUTH_REQUIRED: &str = "AUTH_REQUIRED";
pub const INVALID_TOKEN: &str = "INVALID_TOKEN";
pub const AUTH_INTERNAL: &str = "AUTH_INTERNAL";

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const IMPORT_FAILED: &str = "IMPORT_FAILED";
