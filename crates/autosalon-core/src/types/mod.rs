//! Domain types shared by the storage and server crates.

pub mod car;
pub mod client;
pub mod facets;
pub mod filter;
pub mod list_query;
pub mod order;
pub mod page;
pub mod test_drive;
