//! Registration, login and profile management.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::{hash_password, verify_password, TokenIssuer};
use crate::config::AuthConfig;
use crate::errors::{AccountError, StorageError};
use crate::traits::IClientStorage;
use crate::types::client::{ClientProfile, NewClient, ProfileUpdate};

/// `POST /api/register` body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Returned by register and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub token: String,
    pub user_id: i64,
}

pub struct AccountService {
    clients: Arc<dyn IClientStorage>,
    tokens: TokenIssuer,
    bcrypt_cost: u32,
}

impl AccountService {
    pub fn new(clients: Arc<dyn IClientStorage>, tokens: TokenIssuer, bcrypt_cost: u32) -> Self {
        Self {
            clients,
            tokens,
            bcrypt_cost,
        }
    }

    pub fn from_config(clients: Arc<dyn IClientStorage>, config: &AuthConfig) -> Self {
        Self::new(clients, TokenIssuer::from_config(config), config.bcrypt_cost)
    }

    pub fn tokens(&self) -> &TokenIssuer {
        &self.tokens
    }

    pub fn register(&self, registration: Registration) -> Result<AuthSession, AccountError> {
        let email = registration.email.trim().to_string();
        if email.is_empty() || registration.password.is_empty() {
            return Err(AccountError::Validation {
                message: "email and password are required".to_string(),
            });
        }
        if self.clients.find_credentials_by_email(&email)?.is_some() {
            return Err(AccountError::EmailTaken { email });
        }

        let password_hash = hash_password(&registration.password, self.bcrypt_cost)?;
        let new_client = NewClient {
            first_name: registration.first_name,
            last_name: registration.last_name,
            email: email.clone(),
            phone: registration.phone,
            address: registration.address,
            password_hash,
        };

        // The UNIQUE index still guards a concurrent registration that
        // slipped past the lookup above.
        let id = match self.clients.insert_client(&new_client) {
            Ok(id) => id,
            Err(StorageError::ConstraintViolation { .. }) => {
                return Err(AccountError::EmailTaken { email })
            }
            Err(e) => return Err(e.into()),
        };

        info!(client_id = id, "client registered");
        Ok(AuthSession {
            token: self.tokens.issue(id, &email)?,
            user_id: id,
        })
    }

    /// Unknown email and wrong password fail identically.
    pub fn login(&self, request: &LoginRequest) -> Result<AuthSession, AccountError> {
        let Some(credentials) = self.clients.find_credentials_by_email(request.email.trim())? else {
            return Err(AccountError::InvalidCredentials);
        };
        if !verify_password(&request.password, &credentials.password_hash)? {
            warn!(client_id = credentials.id, "login rejected: wrong password");
            return Err(AccountError::InvalidCredentials);
        }
        Ok(AuthSession {
            token: self.tokens.issue(credentials.id, &credentials.email)?,
            user_id: credentials.id,
        })
    }

    pub fn profile(&self, client_id: i64) -> Result<ClientProfile, AccountError> {
        self.clients
            .get_client(client_id)?
            .ok_or(AccountError::ClientNotFound { id: client_id })
    }

    /// Absent fields keep their stored values.
    pub fn update_profile(&self, client_id: i64, update: &ProfileUpdate) -> Result<(), AccountError> {
        if self.clients.update_client(client_id, update)? {
            Ok(())
        } else {
            Err(AccountError::ClientNotFound { id: client_id })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::storage::test_helpers::InMemoryStore;
    use chrono::Duration;

    fn service() -> AccountService {
        AccountService::new(
            Arc::new(InMemoryStore::new()),
            TokenIssuer::new("test-secret", Duration::hours(1)),
            4,
        )
    }

    fn registration(email: &str) -> Registration {
        Registration {
            first_name: Some("Ivan".into()),
            last_name: Some("Petrov".into()),
            email: email.into(),
            phone: Some("+7 900 000 00 00".into()),
            address: None,
            password: "pa55word".into(),
        }
    }

    #[test]
    fn register_then_login() {
        let svc = service();
        let session = svc.register(registration("ivan@example.com")).unwrap();
        let claims = svc.tokens().verify(&session.token).unwrap();
        assert_eq!(claims.id, session.user_id);

        let login = svc
            .login(&LoginRequest {
                email: "ivan@example.com".into(),
                password: "pa55word".into(),
            })
            .unwrap();
        assert_eq!(login.user_id, session.user_id);
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let svc = service();
        svc.register(registration("dup@example.com")).unwrap();
        let err = svc.register(registration("dup@example.com")).unwrap_err();
        assert!(matches!(err, AccountError::EmailTaken { .. }));
    }

    #[test]
    fn wrong_password_and_unknown_email_look_the_same() {
        let svc = service();
        svc.register(registration("me@example.com")).unwrap();
        let wrong = svc
            .login(&LoginRequest {
                email: "me@example.com".into(),
                password: "nope".into(),
            })
            .unwrap_err();
        let unknown = svc
            .login(&LoginRequest {
                email: "ghost@example.com".into(),
                password: "nope".into(),
            })
            .unwrap_err();
        assert_eq!(wrong.to_string(), unknown.to_string());
    }

    #[test]
    fn missing_password_is_validation_error() {
        let mut reg = registration("x@example.com");
        reg.password.clear();
        assert!(matches!(service().register(reg), Err(AccountError::Validation { .. })));
    }

    #[test]
    fn partial_profile_update_keeps_other_fields() {
        let svc = service();
        let session = svc.register(registration("p@example.com")).unwrap();
        svc.update_profile(
            session.user_id,
            &ProfileUpdate {
                address: Some("Moscow".into()),
                ..Default::default()
            },
        )
        .unwrap();
        let profile = svc.profile(session.user_id).unwrap();
        assert_eq!(profile.address.as_deref(), Some("Moscow"));
        assert_eq!(profile.first_name.as_deref(), Some("Ivan"));
    }

    #[test]
    fn unknown_client_profile_is_not_found() {
        assert!(matches!(service().profile(77), Err(AccountError::ClientNotFound { id: 77 })));
    }
}
