//! test_drives table queries.

use rusqlite::{params, Connection};

use autosalon_core::errors::StorageError;
use autosalon_core::types::test_drive::{NewTestDrive, TestDriveSummary};

use super::sqe;

pub fn insert_test_drive(conn: &Connection, booking: &NewTestDrive) -> Result<i64, StorageError> {
    conn.prepare_cached(
        "INSERT INTO test_drives (car_id, client_id, date, time, notes)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .and_then(|mut stmt| {
        stmt.execute(params![
            booking.car_id,
            booking.client_id,
            booking.date,
            booking.time,
            booking.notes,
        ])
    })
    .map_err(sqe)?;
    Ok(conn.last_insert_rowid())
}

pub fn list_test_drives(conn: &Connection, client_id: i64) -> Result<Vec<TestDriveSummary>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT td.id, td.car_id, td.client_id, td.date, td.time, td.notes, td.status,
                    c.make, c.model, c.year, c.image_url
             FROM test_drives td
             JOIN cars c ON td.car_id = c.id
             WHERE td.client_id = ?1
             ORDER BY td.date, td.time",
        )
        .map_err(sqe)?;
    let rows = stmt
        .query_map(params![client_id], |row| {
            Ok(TestDriveSummary {
                id: row.get(0)?,
                car_id: row.get(1)?,
                client_id: row.get(2)?,
                date: row.get(3)?,
                time: row.get(4)?,
                notes: row.get(5)?,
                status: row.get(6)?,
                make: row.get(7)?,
                model: row.get(8)?,
                year: row.get(9)?,
                image_url: row.get(10)?,
            })
        })
        .map_err(sqe)?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(sqe)
}
