//! HTTP error mapping.
//!
//! Every failure leaves the server as `{"error": <message>, "code": <CODE>}`.
//! 5xx responses hide the underlying message; it is logged instead.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use autosalon_core::errors::{AccountError, AuthError, CatalogError, OrderError};
use autosalon_core::ErrorCode;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Account(#[from] AccountError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Malformed request: {0}")]
    BadRequest(String),

    #[error("Not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    code: &'static str,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Catalog(CatalogError::CarNotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Catalog(CatalogError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,

            AppError::Account(e) => match e {
                AccountError::EmailTaken { .. } | AccountError::Validation { .. } => {
                    StatusCode::BAD_REQUEST
                }
                AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AccountError::ClientNotFound { .. } => StatusCode::NOT_FOUND,
                AccountError::Auth(auth) => auth_status(auth),
                AccountError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },

            AppError::Order(e) => match e {
                OrderError::CarUnavailable { .. } | OrderError::Validation { .. } => {
                    StatusCode::BAD_REQUEST
                }
                OrderError::CarNotFound { .. } => StatusCode::NOT_FOUND,
                OrderError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },

            AppError::Auth(e) => auth_status(e),
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Catalog(e) => e.error_code(),
            AppError::Account(e) => e.error_code(),
            AppError::Order(e) => e.error_code(),
            AppError::Auth(e) => e.error_code(),
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotFound => "NOT_FOUND",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Missing token is 401; a token that fails verification is 403.
fn auth_status(e: &AuthError) -> StatusCode {
    match e {
        AuthError::MissingToken => StatusCode::UNAUTHORIZED,
        AuthError::InvalidToken { .. } => StatusCode::FORBIDDEN,
        AuthError::Signing { .. } | AuthError::Hashing { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            error!(error = %self, code = self.code(), "request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };
        let body = ErrorResponse {
            error: message,
            code: self.code(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Run a synchronous store-backed call off the async runtime.
pub async fn blocking<F, T, E>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Into<AppError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(format!("blocking task failed: {e}")))?
        .map_err(Into::into)
}
