//! orders table queries.

use rusqlite::{params, Connection, Transaction, TransactionBehavior};
use tracing::debug;

use autosalon_core::errors::StorageError;
use autosalon_core::types::order::{NewOrder, OrderSummary};

use super::sqe;

/// Reserve the car and insert the order in one `IMMEDIATE` transaction.
///
/// The guarded `UPDATE ... WHERE status = 'available'` is the availability
/// check, so two concurrent orders for one car cannot both succeed.
/// Returns `None` (and writes nothing) if the car is missing or not available.
pub fn place_order(conn: &Connection, order: &NewOrder) -> Result<Option<i64>, StorageError> {
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate).map_err(sqe)?;

    let reserved = tx
        .execute(
            "UPDATE cars SET status = 'reserved' WHERE id = ?1 AND status = 'available'",
            params![order.car_id],
        )
        .map_err(sqe)?;
    if reserved == 0 {
        debug!(car_id = order.car_id, "car not available, order rejected");
        return Ok(None);
    }

    tx.execute(
        "INSERT INTO orders (car_id, client_id, total_price, delivery_address, delivery_date)
         SELECT id, ?2, price, ?3, ?4 FROM cars WHERE id = ?1",
        params![
            order.car_id,
            order.client_id,
            order.delivery_address,
            order.delivery_date,
        ],
    )
    .map_err(sqe)?;
    let id = tx.last_insert_rowid();
    tx.commit().map_err(sqe)?;
    Ok(Some(id))
}

/// A client's orders joined with their car, newest first.
pub fn list_orders(conn: &Connection, client_id: i64) -> Result<Vec<OrderSummary>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT o.id, o.car_id, o.client_id, o.order_date, o.status, o.total_price,
                    o.delivery_address, o.delivery_date, c.make, c.model, c.year, c.image_url
             FROM orders o
             JOIN cars c ON o.car_id = c.id
             WHERE o.client_id = ?1
             ORDER BY o.order_date DESC, o.id DESC",
        )
        .map_err(sqe)?;
    let rows = stmt
        .query_map(params![client_id], |row| {
            Ok(OrderSummary {
                id: row.get(0)?,
                car_id: row.get(1)?,
                client_id: row.get(2)?,
                order_date: row.get(3)?,
                status: row.get(4)?,
                total_price: row.get(5)?,
                delivery_address: row.get(6)?,
                delivery_date: row.get(7)?,
                make: row.get(8)?,
                model: row.get(9)?,
                year: row.get(10)?,
                image_url: row.get(11)?,
            })
        })
        .map_err(sqe)?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(sqe)
}
