//! Purchase orders.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub car_id: i64,
    pub client_id: i64,
    pub delivery_address: Option<String>,
    pub delivery_date: Option<String>,
}

/// An order joined with the summary of its car, as shown on the account page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: i64,
    pub car_id: i64,
    pub client_id: i64,
    pub order_date: String,
    pub status: String,
    pub total_price: f64,
    pub delivery_address: Option<String>,
    pub delivery_date: Option<String>,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub image_url: Option<String>,
}
