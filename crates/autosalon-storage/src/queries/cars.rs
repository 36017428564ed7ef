//! cars table queries.

use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use autosalon_core::errors::StorageError;
use autosalon_core::query::{CarColumn, PageWindow, Predicate, SqlValue};
use autosalon_core::types::car::{Car, CarStatus, NewCar};

use super::{bind_value, parse_text, row_err, sqe};

const CAR_COLUMNS: &str = "id, make, model, year, type, transmission, seats, doors, fuel_type, \
     mileage, price, status, image_url, description, vin, color, engine_volume, engine_power";

fn map_car(row: &Row<'_>) -> rusqlite::Result<Car> {
    Ok(Car {
        id: row.get(0)?,
        make: row.get(1)?,
        model: row.get(2)?,
        year: row.get(3)?,
        body_type: row.get(4)?,
        transmission: parse_text(row, 5)?,
        seats: row.get(6)?,
        doors: row.get(7)?,
        fuel_type: parse_text(row, 8)?,
        mileage: row.get(9)?,
        price: row.get(10)?,
        status: parse_text(row, 11)?,
        image_url: row.get(12)?,
        description: row.get(13)?,
        vin: row.get(14)?,
        color: row.get(15)?,
        engine_volume: row.get(16)?,
        engine_power: row.get(17)?,
    })
}

/// Count cars matching the predicate.
pub fn count_cars(conn: &Connection, predicate: &Predicate) -> Result<u64, StorageError> {
    let rendered = predicate.render();
    let sql = format!("SELECT COUNT(*) FROM cars WHERE {}", rendered.sql);
    let count: i64 = conn
        .prepare_cached(&sql)
        .and_then(|mut stmt| {
            stmt.query_row(params_from_iter(rendered.params.iter().map(bind_value)), |row| {
                row.get(0)
            })
        })
        .map_err(sqe)?;
    Ok(count.max(0) as u64)
}

/// One window of matching cars, ordered by id ascending.
pub fn fetch_cars(
    conn: &Connection,
    predicate: &Predicate,
    window: PageWindow,
) -> Result<Vec<Car>, StorageError> {
    let rendered = predicate.render();
    let limit_idx = rendered.next_placeholder();
    let sql = format!(
        "SELECT {CAR_COLUMNS} FROM cars WHERE {} ORDER BY id ASC LIMIT ?{} OFFSET ?{}",
        rendered.sql,
        limit_idx,
        limit_idx + 1
    );

    let mut values = rendered.params;
    values.push(SqlValue::Integer(window.sql_limit()));
    values.push(SqlValue::Integer(window.sql_offset()));

    let mut stmt = conn.prepare_cached(&sql).map_err(sqe)?;
    let rows = stmt
        .query_map(params_from_iter(values.iter().map(bind_value)), map_car)
        .map_err(sqe)?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(row_err("cars"))
}

pub fn get_car(conn: &Connection, id: i64) -> Result<Option<Car>, StorageError> {
    let sql = format!("SELECT {CAR_COLUMNS} FROM cars WHERE id = ?1");
    conn.prepare_cached(&sql)
        .and_then(|mut stmt| stmt.query_row(params![id], map_car).optional())
        .map_err(row_err("cars"))
}

/// Distinct non-blank values of a text column.
pub fn distinct_text_values(conn: &Connection, column: CarColumn) -> Result<Vec<String>, StorageError> {
    let col = column.column_name();
    let sql = format!(
        "SELECT DISTINCT {col} FROM cars
         WHERE {col} IS NOT NULL AND TRIM({col}) <> ''
         ORDER BY {col} ASC"
    );
    let mut stmt = conn.prepare_cached(&sql).map_err(sqe)?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0)).map_err(sqe)?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(sqe)
}

pub fn distinct_years(conn: &Connection) -> Result<Vec<i32>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT DISTINCT year FROM cars WHERE year IS NOT NULL ORDER BY year DESC")
        .map_err(sqe)?;
    let rows = stmt.query_map([], |row| row.get::<_, i32>(0)).map_err(sqe)?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(sqe)
}

pub fn insert_car(conn: &Connection, car: &NewCar) -> Result<i64, StorageError> {
    conn.prepare_cached(
        "INSERT INTO cars
         (make, model, year, type, transmission, seats, doors, fuel_type, mileage, price,
          status, image_url, description, vin, color, engine_volume, engine_power)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17)",
    )
    .and_then(|mut stmt| {
        stmt.execute(params![
            car.make,
            car.model,
            car.year,
            car.body_type,
            car.transmission.as_str(),
            car.seats,
            car.doors,
            car.fuel_type.as_str(),
            car.mileage,
            car.price,
            car.status.as_str(),
            car.image_url,
            car.description,
            car.vin,
            car.color,
            car.engine_volume,
            car.engine_power,
        ])
    })
    .map_err(sqe)?;
    Ok(conn.last_insert_rowid())
}

/// Overwrite a car's status. Maintenance hook; the HTTP API never calls it.
pub fn set_status(conn: &Connection, id: i64, status: CarStatus) -> Result<bool, StorageError> {
    let changed = conn
        .execute("UPDATE cars SET status = ?1 WHERE id = ?2", params![status.as_str(), id])
        .map_err(sqe)?;
    Ok(changed > 0)
}
