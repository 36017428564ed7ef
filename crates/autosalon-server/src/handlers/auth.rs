//! Registration and login.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use autosalon_core::services::{AuthSession, LoginRequest, Registration};

use crate::errors::{blocking, AppError};
use crate::state::SharedState;

/// `POST /api/register` → 201 `{token, userId}`
pub async fn register(
    State(state): State<SharedState>,
    payload: Result<Json<Registration>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthSession>), AppError> {
    let Json(registration) = payload?;
    let session = blocking(move || state.accounts.register(registration)).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// `POST /api/login` → `{token, userId}`
pub async fn login(
    State(state): State<SharedState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthSession>, AppError> {
    let Json(request) = payload?;
    Ok(Json(blocking(move || state.accounts.login(&request)).await?))
}
