//! Storage trait module — re-exports all autosalon storage traits.
//!
//! These traits define the contract between the services and the
//! persistence backend. The SQLite implementation lives in
//! `autosalon-storage`. All traits are object-safe, `Send + Sync`, and have
//! blanket `Arc<T>` impls so services can hold `Arc<dyn ...>` handles.

pub mod account_store;
pub mod catalog_store;
pub mod order_store;
pub mod test_helpers;

pub use account_store::IClientStorage;
pub use catalog_store::ICatalogStore;
pub use order_store::{IOrderStorage, ITestDriveStorage};
