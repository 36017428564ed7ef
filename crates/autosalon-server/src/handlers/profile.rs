//! The signed-in client's own profile.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use autosalon_core::types::client::{ClientProfile, ProfileUpdate};

use crate::errors::{blocking, AppError};
use crate::middleware::AuthenticatedClient;
use crate::state::SharedState;

pub async fn get_profile(
    State(state): State<SharedState>,
    client: AuthenticatedClient,
) -> Result<Json<ClientProfile>, AppError> {
    Ok(Json(blocking(move || state.accounts.profile(client.id)).await?))
}

pub async fn update_profile(
    State(state): State<SharedState>,
    client: AuthenticatedClient,
    payload: Result<Json<ProfileUpdate>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(update) = payload?;
    blocking(move || state.accounts.update_profile(client.id, &update)).await?;
    Ok(Json(json!({ "message": "Profile updated" })))
}
