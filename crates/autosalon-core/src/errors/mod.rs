//! Error types for every autosalon subsystem.
//! Each enum implements [`ErrorCode`](error_code::ErrorCode) so the HTTP layer
//! can emit a stable machine-readable code next to the message.

pub mod error_code;

mod account_error;
mod auth_error;
mod catalog_error;
mod config_error;
mod import_error;
mod order_error;
mod storage_error;

pub use account_error::AccountError;
pub use auth_error::AuthError;
pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use import_error::ImportError;
pub use order_error::OrderError;
pub use storage_error::StorageError;
