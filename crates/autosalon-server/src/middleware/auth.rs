//! Bearer token authentication as an extractor.
//!
//! Handlers that take an [`AuthenticatedClient`] argument are protected;
//! everything else stays public.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::debug;

use autosalon_core::errors::AuthError;

use crate::errors::AppError;
use crate::state::SharedState;

/// The client a verified token was issued to.
#[derive(Debug, Clone)]
pub struct AuthenticatedClient {
    pub id: i64,
    pub email: String,
}

#[async_trait]
impl FromRequestParts<SharedState> for AuthenticatedClient {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &SharedState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(bearer_token)
            .ok_or(AuthError::MissingToken)?;

        let claims = state.tokens.verify(token).map_err(|e| {
            debug!(error = %e, "token rejected");
            e
        })?;

        Ok(Self {
            id: claims.id,
            email: claims.email,
        })
    }
}

/// Second word of `Authorization: <scheme> <token>`.
fn bearer_token(header: &str) -> Option<&str> {
    header
        .split_once(' ')
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_taken_after_scheme() {
        assert_eq!(bearer_token("Bearer abc.def"), Some("abc.def"));
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("abc"), None);
    }
}
