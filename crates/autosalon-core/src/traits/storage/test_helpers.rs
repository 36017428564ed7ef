//! `InMemoryStore` — in-memory test double for every storage trait.
//!
//! Used by service tests to avoid opening SQLite. Conditions are evaluated
//! with [`Predicate::matches`], so it follows the same filtering rules as
//! the rendered SQL.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::errors::StorageError;
use crate::query::{CarColumn, PageWindow, Predicate, SqlValue};
use crate::types::car::{Car, CarStatus, NewCar};
use crate::types::client::{ClientCredentials, ClientProfile, NewClient, ProfileUpdate};
use crate::types::order::{NewOrder, OrderSummary};
use crate::types::test_drive::{NewTestDrive, TestDriveSummary};

use super::{ICatalogStore, IClientStorage, IOrderStorage, ITestDriveStorage};

struct StoredClient {
    profile: ClientProfile,
    password_hash: String,
}

/// In-memory stub implementation of all storage traits.
///
/// Call [`InMemoryStore::set_failing`] to make every method return a
/// storage error.
#[derive(Default)]
pub struct InMemoryStore {
    cars: Mutex<Vec<Car>>,
    clients: Mutex<Vec<StoredClient>>,
    orders: Mutex<Vec<OrderSummary>>,
    test_drives: Mutex<Vec<TestDriveSummary>>,
    failing: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with cars, assigning ids 1..=n in order.
    pub fn with_cars(cars: Vec<NewCar>) -> Self {
        let store = Self::new();
        for car in cars {
            let _ = store.insert_car(&car);
        }
        store
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn car_status(&self, id: i64) -> Option<CarStatus> {
        self.cars.lock().unwrap().iter().find(|c| c.id == id).map(|c| c.status)
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::SqliteError {
                message: "stub configured to fail".to_string(),
            });
        }
        Ok(())
    }

    fn matching(&self, predicate: &Predicate) -> Vec<Car> {
        let mut cars: Vec<Car> = self
            .cars
            .lock()
            .unwrap()
            .iter()
            .filter(|c| predicate.matches(c))
            .cloned()
            .collect();
        cars.sort_by_key(|c| c.id);
        cars
    }
}

fn now_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

impl ICatalogStore for InMemoryStore {
    fn count_cars(&self, predicate: &Predicate) -> Result<u64, StorageError> {
        self.check()?;
        Ok(self.matching(predicate).len() as u64)
    }

    fn fetch_cars(&self, predicate: &Predicate, window: PageWindow) -> Result<Vec<Car>, StorageError> {
        self.check()?;
        Ok(window.slice(&self.matching(predicate)).to_vec())
    }

    fn get_car(&self, id: i64) -> Result<Option<Car>, StorageError> {
        self.check()?;
        Ok(self.cars.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    fn distinct_text_values(&self, column: CarColumn) -> Result<Vec<String>, StorageError> {
        self.check()?;
        let mut values = Vec::new();
        for car in self.cars.lock().unwrap().iter() {
            if let SqlValue::Text(v) = column.value_of(car) {
                if !values.contains(&v) {
                    values.push(v);
                }
            }
        }
        Ok(values)
    }

    fn distinct_years(&self) -> Result<Vec<i32>, StorageError> {
        self.check()?;
        let mut years = Vec::new();
        for car in self.cars.lock().unwrap().iter() {
            if !years.contains(&car.year) {
                years.push(car.year);
            }
        }
        Ok(years)
    }

    fn insert_car(&self, car: &NewCar) -> Result<i64, StorageError> {
        self.check()?;
        let mut cars = self.cars.lock().unwrap();
        let id = cars.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        cars.push(car.clone().into_car(id));
        Ok(id)
    }

    fn insert_cars(&self, cars: &[NewCar]) -> Result<usize, StorageError> {
        self.check()?;
        for car in cars {
            self.insert_car(car)?;
        }
        Ok(cars.len())
    }
}

impl IClientStorage for InMemoryStore {
    fn insert_client(&self, client: &NewClient) -> Result<i64, StorageError> {
        self.check()?;
        let mut clients = self.clients.lock().unwrap();
        if clients.iter().any(|c| c.profile.email == client.email) {
            return Err(StorageError::ConstraintViolation {
                message: "UNIQUE constraint failed: clients.email".to_string(),
            });
        }
        let id = clients.len() as i64 + 1;
        clients.push(StoredClient {
            profile: ClientProfile {
                id,
                first_name: client.first_name.clone(),
                last_name: client.last_name.clone(),
                email: client.email.clone(),
                phone: client.phone.clone(),
                address: client.address.clone(),
                created_at: now_timestamp(),
            },
            password_hash: client.password_hash.clone(),
        });
        Ok(id)
    }

    fn find_credentials_by_email(&self, email: &str) -> Result<Option<ClientCredentials>, StorageError> {
        self.check()?;
        Ok(self
            .clients
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.profile.email == email)
            .map(|c| ClientCredentials {
                id: c.profile.id,
                email: c.profile.email.clone(),
                password_hash: c.password_hash.clone(),
            }))
    }

    fn get_client(&self, id: i64) -> Result<Option<ClientProfile>, StorageError> {
        self.check()?;
        Ok(self
            .clients
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.profile.id == id)
            .map(|c| c.profile.clone()))
    }

    fn update_client(&self, id: i64, update: &ProfileUpdate) -> Result<bool, StorageError> {
        self.check()?;
        let mut clients = self.clients.lock().unwrap();
        let Some(stored) = clients.iter_mut().find(|c| c.profile.id == id) else {
            return Ok(false);
        };
        let profile = &mut stored.profile;
        if let Some(v) = &update.first_name {
            profile.first_name = Some(v.clone());
        }
        if let Some(v) = &update.last_name {
            profile.last_name = Some(v.clone());
        }
        if let Some(v) = &update.phone {
            profile.phone = Some(v.clone());
        }
        if let Some(v) = &update.address {
            profile.address = Some(v.clone());
        }
        Ok(true)
    }
}

impl IOrderStorage for InMemoryStore {
    fn place_order(&self, order: &NewOrder) -> Result<Option<i64>, StorageError> {
        self.check()?;
        let mut cars = self.cars.lock().unwrap();
        let Some(car) = cars
            .iter_mut()
            .find(|c| c.id == order.car_id && c.status == CarStatus::Available)
        else {
            return Ok(None);
        };
        car.status = CarStatus::Reserved;

        let mut orders = self.orders.lock().unwrap();
        let id = orders.len() as i64 + 1;
        orders.push(OrderSummary {
            id,
            car_id: car.id,
            client_id: order.client_id,
            order_date: now_timestamp(),
            status: "pending".to_string(),
            total_price: car.price,
            delivery_address: order.delivery_address.clone(),
            delivery_date: order.delivery_date.clone(),
            make: car.make.clone(),
            model: car.model.clone(),
            year: car.year,
            image_url: car.image_url.clone(),
        });
        Ok(Some(id))
    }

    fn list_orders(&self, client_id: i64) -> Result<Vec<OrderSummary>, StorageError> {
        self.check()?;
        let mut orders: Vec<OrderSummary> = self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.client_id == client_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.order_date.cmp(&a.order_date).then(b.id.cmp(&a.id)));
        Ok(orders)
    }
}

impl ITestDriveStorage for InMemoryStore {
    fn insert_test_drive(&self, booking: &NewTestDrive) -> Result<i64, StorageError> {
        self.check()?;
        let car = self
            .cars
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == booking.car_id)
            .cloned()
            .ok_or_else(|| StorageError::ConstraintViolation {
                message: "FOREIGN KEY constraint failed".to_string(),
            })?;
        let mut drives = self.test_drives.lock().unwrap();
        let id = drives.len() as i64 + 1;
        drives.push(TestDriveSummary {
            id,
            car_id: car.id,
            client_id: booking.client_id,
            date: booking.date.clone(),
            time: booking.time.clone(),
            notes: booking.notes.clone(),
            status: "scheduled".to_string(),
            make: car.make,
            model: car.model,
            year: car.year,
            image_url: car.image_url,
        });
        Ok(id)
    }

    fn list_test_drives(&self, client_id: i64) -> Result<Vec<TestDriveSummary>, StorageError> {
        self.check()?;
        let mut drives: Vec<TestDriveSummary> = self
            .test_drives
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.client_id == client_id)
            .cloned()
            .collect();
        drives.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
        Ok(drives)
    }
}
