//! Route handlers, one module per resource.

pub mod auth;
pub mod car;
pub mod health;
pub mod order;
pub mod profile;
pub mod test_drive;
