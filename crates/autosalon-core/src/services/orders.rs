//! Car purchase orders.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::errors::OrderError;
use crate::traits::IOrderStorage;
use crate::types::order::{NewOrder, OrderSummary};

/// `POST /api/orders` body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub car_id: i64,
    pub delivery_address: Option<String>,
    pub delivery_date: Option<String>,
}

pub struct OrderService {
    orders: Arc<dyn IOrderStorage>,
}

impl OrderService {
    pub fn new(orders: Arc<dyn IOrderStorage>) -> Self {
        Self { orders }
    }

    /// Reserve the car and record the order at the car's current price.
    /// Unknown and non-available cars are both reported as unavailable.
    pub fn place_order(&self, client_id: i64, request: OrderRequest) -> Result<i64, OrderError> {
        let order = NewOrder {
            car_id: request.car_id,
            client_id,
            delivery_address: request.delivery_address,
            delivery_date: request.delivery_date,
        };
        match self.orders.place_order(&order)? {
            Some(id) => {
                info!(order_id = id, car_id = order.car_id, client_id, "order placed, car reserved");
                Ok(id)
            }
            None => Err(OrderError::CarUnavailable {
                car_id: order.car_id,
            }),
        }
    }

    pub fn list_orders(&self, client_id: i64) -> Result<Vec<OrderSummary>, OrderError> {
        Ok(self.orders.list_orders(client_id)?)
    }
}
