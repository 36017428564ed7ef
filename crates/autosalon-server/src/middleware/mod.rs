//! Request extractors and middleware.

pub mod auth;
pub mod logging;

pub use auth::AuthenticatedClient;
pub use logging::log_requests;
