//! # autosalon-core
//!
//! Foundation crate for the autosalon dealership backend.
//! Defines the catalog types, store traits, errors, config, logging setup,
//! the filter predicate builder, and the services that compose them.
//! The storage and server crates both depend on this.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod logging;
pub mod query;
pub mod services;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use catalog::CatalogService;
pub use config::AutosalonConfig;
pub use errors::error_code::ErrorCode;
pub use query::{PageWindow, Predicate};
pub use types::car::{Car, CarStatus, FuelType, Transmission};
pub use types::filter::FilterCriteria;
pub use types::page::{PageRequest, PageResult};
