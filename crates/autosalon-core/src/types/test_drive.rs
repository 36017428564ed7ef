//! Test drive bookings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct NewTestDrive {
    pub car_id: i64,
    pub client_id: i64,
    pub date: String,
    pub time: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestDriveSummary {
    pub id: i64,
    pub car_id: i64,
    pub client_id: i64,
    pub date: String,
    pub time: String,
    pub notes: Option<String>,
    pub status: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub image_url: Option<String>,
}
