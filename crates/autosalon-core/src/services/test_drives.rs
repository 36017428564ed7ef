//! Test drive bookings.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::errors::OrderError;
use crate::traits::{ICatalogStore, ITestDriveStorage};
use crate::types::test_drive::{NewTestDrive, TestDriveSummary};

/// `POST /api/test-drives` body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestDriveRequest {
    pub car_id: i64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub notes: Option<String>,
}

pub struct TestDriveService {
    cars: Arc<dyn ICatalogStore>,
    drives: Arc<dyn ITestDriveStorage>,
}

impl TestDriveService {
    pub fn new(cars: Arc<dyn ICatalogStore>, drives: Arc<dyn ITestDriveStorage>) -> Self {
        Self { cars, drives }
    }

    /// Any existing car can be test driven, whatever its status.
    pub fn book(&self, client_id: i64, request: TestDriveRequest) -> Result<i64, OrderError> {
        if request.date.trim().is_empty() || request.time.trim().is_empty() {
            return Err(OrderError::Validation {
                message: "date and time are required".to_string(),
            });
        }
        if self.cars.get_car(request.car_id)?.is_none() {
            return Err(OrderError::CarNotFound {
                car_id: request.car_id,
            });
        }
        let id = self.drives.insert_test_drive(&NewTestDrive {
            car_id: request.car_id,
            client_id,
            date: request.date,
            time: request.time,
            notes: request.notes,
        })?;
        info!(test_drive_id = id, car_id = request.car_id, client_id, "test drive booked");
        Ok(id)
    }

    pub fn list(&self, client_id: i64) -> Result<Vec<TestDriveSummary>, OrderError> {
        Ok(self.drives.list_test_drives(client_id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::storage::test_helpers::InMemoryStore;
    use crate::types::car::{CarStatus, FuelType, NewCar, Transmission};

    fn service() -> TestDriveService {
        let store = Arc::new(InMemoryStore::with_cars(vec![NewCar {
            make: "Haval".into(),
            model: "Jolion".into(),
            year: 2023,
            body_type: "crossover".into(),
            transmission: Transmission::Automatic,
            seats: 5,
            doors: 5,
            fuel_type: FuelType::Petrol,
            mileage: 0,
            price: 2_000_000.0,
            status: CarStatus::Sold,
            image_url: None,
            description: None,
            vin: None,
            color: None,
            engine_volume: None,
            engine_power: None,
        }]));
        TestDriveService::new(store.clone(), store)
    }

    fn request(car_id: i64, date: &str, time: &str) -> TestDriveRequest {
        TestDriveRequest {
            car_id,
            date: date.into(),
            time: time.into(),
            notes: None,
        }
    }

    #[test]
    fn sold_car_can_still_be_test_driven() {
        let svc = service();
        assert!(svc.book(5, request(1, "2026-11-02", "10:00")).is_ok());
    }

    #[test]
    fn unknown_car_is_not_found() {
        let err = service().book(5, request(42, "2026-11-02", "10:00")).unwrap_err();
        assert!(matches!(err, OrderError::CarNotFound { car_id: 42 }));
    }

    #[test]
    fn bookings_listed_by_date_then_time() {
        let svc = service();
        svc.book(5, request(1, "2026-11-03", "09:00")).unwrap();
        svc.book(5, request(1, "2026-11-02", "15:00")).unwrap();
        svc.book(5, request(1, "2026-11-02", "11:00")).unwrap();
        let slots: Vec<(String, String)> = svc
            .list(5)
            .unwrap()
            .into_iter()
            .map(|d| (d.date, d.time))
            .collect();
        assert_eq!(
            slots,
            vec![
                ("2026-11-02".to_string(), "11:00".to_string()),
                ("2026-11-02".to_string(), "15:00".to_string()),
                ("2026-11-03".to_string(), "09:00".to_string()),
            ]
        );
    }
}
