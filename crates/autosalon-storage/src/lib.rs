//! # autosalon-storage
//!
//! SQLite persistence for the autosalon backend.
//! WAL mode, one serialized writer plus a read pool, forward-only
//! migrations, per-table query modules, and the JSON catalog importer.

pub mod connection;
pub mod engine;
pub mod import;
pub mod migrations;
pub mod queries;

pub use connection::DatabaseManager;
pub use engine::AutosalonStorageEngine;
