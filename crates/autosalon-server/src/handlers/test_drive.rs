//! Test drive bookings for the signed-in client.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use autosalon_core::services::TestDriveRequest;
use autosalon_core::types::test_drive::TestDriveSummary;

use crate::errors::{blocking, AppError};
use crate::middleware::AuthenticatedClient;
use crate::state::SharedState;

/// `POST /api/test-drives` → 201 `{testDriveId}`
pub async fn book_test_drive(
    State(state): State<SharedState>,
    client: AuthenticatedClient,
    payload: Result<Json<TestDriveRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(request) = payload?;
    let id = blocking(move || state.test_drives.book(client.id, request)).await?;
    Ok((StatusCode::CREATED, Json(json!({ "testDriveId": id }))))
}

pub async fn list_test_drives(
    State(state): State<SharedState>,
    client: AuthenticatedClient,
) -> Result<Json<Vec<TestDriveSummary>>, AppError> {
    Ok(Json(blocking(move || state.test_drives.list(client.id)).await?))
}
