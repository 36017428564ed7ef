//! v001: cars, clients, orders, test_drives.

use rusqlite::Connection;

use autosalon_core::errors::StorageError;

use crate::queries::sqe;

pub fn migrate(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE cars (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            make          TEXT NOT NULL,
            model         TEXT NOT NULL,
            year          INTEGER NOT NULL,
            type          TEXT NOT NULL,
            transmission  TEXT NOT NULL
                CHECK (transmission IN ('manual', 'automatic')),
            seats         INTEGER NOT NULL,
            doors         INTEGER NOT NULL,
            fuel_type     TEXT NOT NULL
                CHECK (fuel_type IN ('petrol', 'diesel', 'hybrid', 'electric')),
            mileage       INTEGER NOT NULL DEFAULT 0,
            price         REAL NOT NULL,
            status        TEXT NOT NULL DEFAULT 'available'
                CHECK (status IN ('available', 'reserved', 'sold')),
            image_url     TEXT,
            description   TEXT,
            vin           TEXT,
            color         TEXT,
            engine_volume REAL,
            engine_power  INTEGER
        );
        CREATE INDEX idx_cars_status ON cars(status);
        CREATE INDEX idx_cars_make ON cars(make);

        CREATE TABLE clients (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name    TEXT,
            last_name     TEXT,
            email         TEXT NOT NULL UNIQUE,
            phone         TEXT,
            address       TEXT,
            password_hash TEXT NOT NULL,
            created_at    TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE orders (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            car_id           INTEGER NOT NULL REFERENCES cars(id),
            client_id        INTEGER NOT NULL REFERENCES clients(id),
            order_date       TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            status           TEXT NOT NULL DEFAULT 'pending'
                CHECK (status IN ('pending', 'confirmed', 'completed', 'cancelled')),
            total_price      REAL NOT NULL,
            delivery_address TEXT,
            delivery_date    TEXT
        );
        CREATE INDEX idx_orders_client ON orders(client_id);

        CREATE TABLE test_drives (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            car_id    INTEGER NOT NULL REFERENCES cars(id),
            client_id INTEGER NOT NULL REFERENCES clients(id),
            date      TEXT NOT NULL,
            time      TEXT NOT NULL,
            notes     TEXT,
            status    TEXT NOT NULL DEFAULT 'scheduled'
                CHECK (status IN ('scheduled', 'completed', 'cancelled'))
        );
        CREATE INDEX idx_test_drives_client ON test_drives(client_id);
        ",
    )
    .map_err(sqe)
}
