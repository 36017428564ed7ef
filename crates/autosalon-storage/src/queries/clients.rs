//! clients table queries.

use rusqlite::{params, Connection, OptionalExtension};

use autosalon_core::errors::StorageError;
use autosalon_core::types::client::{ClientCredentials, ClientProfile, NewClient, ProfileUpdate};

use super::sqe;

pub fn insert_client(conn: &Connection, client: &NewClient) -> Result<i64, StorageError> {
    conn.prepare_cached(
        "INSERT INTO clients (first_name, last_name, email, phone, address, password_hash)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .and_then(|mut stmt| {
        stmt.execute(params![
            client.first_name,
            client.last_name,
            client.email,
            client.phone,
            client.address,
            client.password_hash,
        ])
    })
    .map_err(sqe)?;
    Ok(conn.last_insert_rowid())
}

pub fn find_credentials_by_email(
    conn: &Connection,
    email: &str,
) -> Result<Option<ClientCredentials>, StorageError> {
    conn.prepare_cached("SELECT id, email, password_hash FROM clients WHERE email = ?1")
        .and_then(|mut stmt| {
            stmt.query_row(params![email], |row| {
                Ok(ClientCredentials {
                    id: row.get(0)?,
                    email: row.get(1)?,
                    password_hash: row.get(2)?,
                })
            })
            .optional()
        })
        .map_err(sqe)
}

/// Profile without the password hash.
pub fn get_client(conn: &Connection, id: i64) -> Result<Option<ClientProfile>, StorageError> {
    conn.prepare_cached(
        "SELECT id, first_name, last_name, email, phone, address, created_at
         FROM clients WHERE id = ?1",
    )
    .and_then(|mut stmt| {
        stmt.query_row(params![id], |row| {
            Ok(ClientProfile {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                email: row.get(3)?,
                phone: row.get(4)?,
                address: row.get(5)?,
                created_at: row.get(6)?,
            })
        })
        .optional()
    })
    .map_err(sqe)
}

/// `NULL` parameters leave the column untouched.
pub fn update_client(conn: &Connection, id: i64, update: &ProfileUpdate) -> Result<bool, StorageError> {
    let changed = conn
        .prepare_cached(
            "UPDATE clients SET
                first_name = COALESCE(?1, first_name),
                last_name  = COALESCE(?2, last_name),
                phone      = COALESCE(?3, phone),
                address    = COALESCE(?4, address)
             WHERE id = ?5",
        )
        .and_then(|mut stmt| {
            stmt.execute(params![
                update.first_name,
                update.last_name,
                update.phone,
                update.address,
                id,
            ])
        })
        .map_err(sqe)?;
    Ok(changed > 0)
}
