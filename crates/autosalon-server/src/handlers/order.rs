//! Purchase orders for the signed-in client.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use autosalon_core::services::OrderRequest;
use autosalon_core::types::order::OrderSummary;

use crate::errors::{blocking, AppError};
use crate::middleware::AuthenticatedClient;
use crate::state::SharedState;

/// `POST /api/orders` → 201 `{orderId}`
pub async fn create_order(
    State(state): State<SharedState>,
    client: AuthenticatedClient,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(request) = payload?;
    let order_id = blocking(move || state.orders.place_order(client.id, request)).await?;
    Ok((StatusCode::CREATED, Json(json!({ "orderId": order_id }))))
}

/// `GET /api/orders`, newest first.
pub async fn list_orders(
    State(state): State<SharedState>,
    client: AuthenticatedClient,
) -> Result<Json<Vec<OrderSummary>>, AppError> {
    Ok(Json(blocking(move || state.orders.list_orders(client.id)).await?))
}
