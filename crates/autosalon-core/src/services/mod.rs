//! Account, order and test-drive services layered over the store traits.

pub mod account;
pub mod orders;
pub mod test_drives;

pub use account::{AccountService, AuthSession, LoginRequest, Registration};
pub use orders::{OrderRequest, OrderService};
pub use test_drives::{TestDriveRequest, TestDriveService};
