//! `IOrderStorage` and `ITestDriveStorage` traits.
//!
//! Maps to `autosalon-storage/src/queries/orders.rs` and `test_drives.rs`.

use std::sync::Arc;

use crate::errors::StorageError;
use crate::types::order::{NewOrder, OrderSummary};
use crate::types::test_drive::{NewTestDrive, TestDriveSummary};

pub trait IOrderStorage: Send + Sync {
    /// Atomically reserve an available car and record the order.
    ///
    /// Returns `Ok(None)` when the car does not exist or is not
    /// `available`; nothing is written in that case.
    fn place_order(&self, order: &NewOrder) -> Result<Option<i64>, StorageError>;

    /// Orders of one client, newest first.
    fn list_orders(&self, client_id: i64) -> Result<Vec<OrderSummary>, StorageError>;
}

pub trait ITestDriveStorage: Send + Sync {
    fn insert_test_drive(&self, booking: &NewTestDrive) -> Result<i64, StorageError>;

    /// Test drives of one client ordered by date then time.
    fn list_test_drives(&self, client_id: i64) -> Result<Vec<TestDriveSummary>, StorageError>;
}

impl<T: IOrderStorage + ?Sized> IOrderStorage for Arc<T> {
    fn place_order(&self, order: &NewOrder) -> Result<Option<i64>, StorageError> {
        (**self).place_order(order)
    }
    fn list_orders(&self, client_id: i64) -> Result<Vec<OrderSummary>, StorageError> {
        (**self).list_orders(client_id)
    }
}

impl<T: ITestDriveStorage + ?Sized> ITestDriveStorage for Arc<T> {
    fn insert_test_drive(&self, booking: &NewTestDrive) -> Result<i64, StorageError> {
        (**self).insert_test_drive(booking)
    }
    fn list_test_drives(&self, client_id: i64) -> Result<Vec<TestDriveSummary>, StorageError> {
        (**self).list_test_drives(client_id)
    }
}
