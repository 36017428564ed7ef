//! `AutosalonStorageEngine` implements every core storage trait over one
//! `DatabaseManager`.
//!
//! Reads go through the read-only pool, writes through the single writer.
//! No code outside this module and `queries/` touches a raw `&Connection`.

use std::path::Path;

use rusqlite::{Transaction, TransactionBehavior};
use tracing::info;

use autosalon_core::config::StorageConfig;
use autosalon_core::errors::StorageError;
use autosalon_core::query::{CarColumn, PageWindow, Predicate};
use autosalon_core::traits::{ICatalogStore, IClientStorage, IOrderStorage, ITestDriveStorage};
use autosalon_core::types::car::{Car, CarStatus, NewCar};
use autosalon_core::types::client::{ClientCredentials, ClientProfile, NewClient, ProfileUpdate};
use autosalon_core::types::order::{NewOrder, OrderSummary};
use autosalon_core::types::test_drive::{NewTestDrive, TestDriveSummary};

use crate::connection::DatabaseManager;
use crate::queries::{self, sqe};

pub struct AutosalonStorageEngine {
    db: DatabaseManager,
}

impl AutosalonStorageEngine {
    /// Open the database named by `config.db_path`, migrating it if needed.
    pub fn open(config: &StorageConfig) -> Result<Self, StorageError> {
        Self::open_path(&config.db_path, config)
    }

    pub fn open_path(path: &Path, config: &StorageConfig) -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open(path, config)?,
        })
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open_in_memory()?,
        })
    }

    /// Overwrite a car's status. Returns `false` if the car does not exist.
    ///
    /// Administrative and test hook for moving a car through
    /// available/reserved/sold by hand. Order placement reserves cars
    /// inside its own transaction and does not go through here.
    pub fn set_car_status(&self, id: i64, status: CarStatus) -> Result<bool, StorageError> {
        self.db.with_writer(|conn| queries::cars::set_status(conn, id, status))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ICatalogStore
// ═══════════════════════════════════════════════════════════════════════════════

impl ICatalogStore for AutosalonStorageEngine {
    fn count_cars(&self, predicate: &Predicate) -> Result<u64, StorageError> {
        self.db.with_reader(|conn| queries::cars::count_cars(conn, predicate))
    }

    fn fetch_cars(&self, predicate: &Predicate, window: PageWindow) -> Result<Vec<Car>, StorageError> {
        self.db.with_reader(|conn| queries::cars::fetch_cars(conn, predicate, window))
    }

    fn get_car(&self, id: i64) -> Result<Option<Car>, StorageError> {
        self.db.with_reader(|conn| queries::cars::get_car(conn, id))
    }

    fn distinct_text_values(&self, column: CarColumn) -> Result<Vec<String>, StorageError> {
        self.db.with_reader(|conn| queries::cars::distinct_text_values(conn, column))
    }

    fn distinct_years(&self) -> Result<Vec<i32>, StorageError> {
        self.db.with_reader(queries::cars::distinct_years)
    }

    fn insert_car(&self, car: &NewCar) -> Result<i64, StorageError> {
        self.db.with_writer(|conn| queries::cars::insert_car(conn, car))
    }

    fn insert_cars(&self, cars: &[NewCar]) -> Result<usize, StorageError> {
        self.db.with_writer(|conn| {
            let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate).map_err(sqe)?;
            for car in cars {
                queries::cars::insert_car(&tx, car)?;
            }
            tx.commit().map_err(sqe)?;
            info!(count = cars.len(), "cars inserted");
            Ok(cars.len())
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// IClientStorage
// ═══════════════════════════════════════════════════════════════════════════════

impl IClientStorage for AutosalonStorageEngine {
    fn insert_client(&self, client: &NewClient) -> Result<i64, StorageError> {
        self.db.with_writer(|conn| queries::clients::insert_client(conn, client))
    }

    fn find_credentials_by_email(&self, email: &str) -> Result<Option<ClientCredentials>, StorageError> {
        self.db.with_reader(|conn| queries::clients::find_credentials_by_email(conn, email))
    }

    fn get_client(&self, id: i64) -> Result<Option<ClientProfile>, StorageError> {
        self.db.with_reader(|conn| queries::clients::get_client(conn, id))
    }

    fn update_client(&self, id: i64, update: &ProfileUpdate) -> Result<bool, StorageError> {
        self.db.with_writer(|conn| queries::clients::update_client(conn, id, update))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// IOrderStorage / ITestDriveStorage
// ═══════════════════════════════════════════════════════════════════════════════

impl IOrderStorage for AutosalonStorageEngine {
    fn place_order(&self, order: &NewOrder) -> Result<Option<i64>, StorageError> {
        self.db.with_writer(|conn| queries::orders::place_order(conn, order))
    }

    fn list_orders(&self, client_id: i64) -> Result<Vec<OrderSummary>, StorageError> {
        self.db.with_reader(|conn| queries::orders::list_orders(conn, client_id))
    }
}

impl ITestDriveStorage for AutosalonStorageEngine {
    fn insert_test_drive(&self, booking: &NewTestDrive) -> Result<i64, StorageError> {
        self.db.with_writer(|conn| queries::test_drives::insert_test_drive(conn, booking))
    }

    fn list_test_drives(&self, client_id: i64) -> Result<Vec<TestDriveSummary>, StorageError> {
        self.db.with_reader(|conn| queries::test_drives::list_test_drives(conn, client_id))
    }
}
