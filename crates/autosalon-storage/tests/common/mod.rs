//! Shared fixtures for storage integration tests.

#![allow(dead_code)]

use autosalon_core::config::StorageConfig;
use autosalon_core::types::car::{CarStatus, FuelType, NewCar, Transmission};
use autosalon_storage::AutosalonStorageEngine;
use tempfile::TempDir;

/// File-backed engine so reads really go through the read-only pool.
pub fn temp_engine() -> (TempDir, AutosalonStorageEngine) {
    let dir = TempDir::new().unwrap();
    let engine =
        AutosalonStorageEngine::open_path(&dir.path().join("test.db"), &StorageConfig::default())
            .unwrap();
    (dir, engine)
}

pub fn car(make: &str, model: &str, year: i32, price: f64, status: CarStatus) -> NewCar {
    NewCar {
        make: make.to_string(),
        model: model.to_string(),
        year,
        body_type: "sedan".to_string(),
        transmission: Transmission::Automatic,
        seats: 5,
        doors: 4,
        fuel_type: FuelType::Petrol,
        mileage: 10_000,
        price,
        status,
        image_url: Some(format!("/images/{}.jpg", model.to_lowercase())),
        description: None,
        vin: None,
        color: None,
        engine_volume: Some(2.0),
        engine_power: Some(150),
    }
}
