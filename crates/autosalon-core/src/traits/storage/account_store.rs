//! `IClientStorage` trait — client accounts.
//!
//! Maps to `autosalon-storage/src/queries/clients.rs`.

use std::sync::Arc;

use crate::errors::StorageError;
use crate::types::client::{ClientCredentials, ClientProfile, NewClient, ProfileUpdate};

pub trait IClientStorage: Send + Sync {
    /// Insert a client. A duplicate email surfaces as
    /// [`StorageError::ConstraintViolation`].
    fn insert_client(&self, client: &NewClient) -> Result<i64, StorageError>;

    fn find_credentials_by_email(&self, email: &str)
        -> Result<Option<ClientCredentials>, StorageError>;

    fn get_client(&self, id: i64) -> Result<Option<ClientProfile>, StorageError>;

    /// Apply a partial update. Returns `false` if no such client exists.
    fn update_client(&self, id: i64, update: &ProfileUpdate) -> Result<bool, StorageError>;
}

impl<T: IClientStorage + ?Sized> IClientStorage for Arc<T> {
    fn insert_client(&self, client: &NewClient) -> Result<i64, StorageError> {
        (**self).insert_client(client)
    }
    fn find_credentials_by_email(&self, email: &str) -> Result<Option<ClientCredentials>, StorageError> {
        (**self).find_credentials_by_email(email)
    }
    fn get_client(&self, id: i64) -> Result<Option<ClientProfile>, StorageError> {
        (**self).get_client(id)
    }
    fn update_client(&self, id: i64, update: &ProfileUpdate) -> Result<bool, StorageError> {
        (**self).update_client(id, update)
    }
}
