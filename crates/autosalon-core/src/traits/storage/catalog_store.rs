//! `ICatalogStore` trait — car reads, facet values, and catalog ingestion.
//!
//! Maps to `autosalon-storage/src/queries/cars.rs`.

use std::sync::Arc;

use crate::errors::StorageError;
use crate::query::{CarColumn, PageWindow, Predicate};
use crate::types::car::{Car, NewCar};

/// Catalog access. Reads take a rendered-once [`Predicate`] so the count
/// and the page are always computed from the same conditions.
pub trait ICatalogStore: Send + Sync {
    /// Number of cars matching `predicate`, ignoring pagination.
    fn count_cars(&self, predicate: &Predicate) -> Result<u64, StorageError>;

    /// Matching cars ordered by id ascending, restricted to `window`.
    fn fetch_cars(&self, predicate: &Predicate, window: PageWindow)
        -> Result<Vec<Car>, StorageError>;

    /// Single car by id, regardless of status.
    fn get_car(&self, id: i64) -> Result<Option<Car>, StorageError>;

    /// Distinct raw values of a text column across all cars.
    fn distinct_text_values(&self, column: CarColumn) -> Result<Vec<String>, StorageError>;

    /// Distinct model years across all cars.
    fn distinct_years(&self) -> Result<Vec<i32>, StorageError>;

    fn insert_car(&self, car: &NewCar) -> Result<i64, StorageError>;

    /// Insert many cars atomically. Returns the number inserted.
    fn insert_cars(&self, cars: &[NewCar]) -> Result<usize, StorageError>;
}

impl<T: ICatalogStore + ?Sized> ICatalogStore for Arc<T> {
    fn count_cars(&self, predicate: &Predicate) -> Result<u64, StorageError> {
        (**self).count_cars(predicate)
    }
    fn fetch_cars(&self, predicate: &Predicate, window: PageWindow) -> Result<Vec<Car>, StorageError> {
        (**self).fetch_cars(predicate, window)
    }
    fn get_car(&self, id: i64) -> Result<Option<Car>, StorageError> {
        (**self).get_car(id)
    }
    fn distinct_text_values(&self, column: CarColumn) -> Result<Vec<String>, StorageError> {
        (**self).distinct_text_values(column)
    }
    fn distinct_years(&self) -> Result<Vec<i32>, StorageError> {
        (**self).distinct_years()
    }
    fn insert_car(&self, car: &NewCar) -> Result<i64, StorageError> {
        (**self).insert_car(car)
    }
    fn insert_cars(&self, cars: &[NewCar]) -> Result<usize, StorageError> {
        (**self).insert_cars(cars)
    }
}
