//! Shared traits used across autosalon crates.

pub mod storage;

pub use storage::{ICatalogStore, IClientStorage, IOrderStorage, ITestDriveStorage};
