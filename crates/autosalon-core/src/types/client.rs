//! Dealership clients (registered customers).

use serde::{Deserialize, Serialize};

/// Public profile. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: String,
}

/// Row inserted on registration; `password_hash` is already hashed.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub password_hash: String,
}

/// What login needs to check a password.
#[derive(Debug, Clone)]
pub struct ClientCredentials {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
}

/// Partial profile update. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}
