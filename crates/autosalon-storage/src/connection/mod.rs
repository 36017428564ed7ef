//! `DatabaseManager`: one writer plus a round-robin pool of read-only readers.
//!
//! The only place in the crate that holds `Mutex<Connection>`.
//! Everything else goes through [`DatabaseManager::with_writer`] and
//! [`DatabaseManager::with_reader`].

pub mod pragmas;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use rusqlite::{Connection, OpenFlags};
use tracing::{debug, info};

use autosalon_core::config::StorageConfig;
use autosalon_core::errors::StorageError;

use crate::migrations;
use crate::queries::sqe;

/// Default number of reader connections.
const DEFAULT_READ_POOL_SIZE: usize = 2;

/// 1 writer + N read-only readers. WAL lets readers run alongside the writer.
pub struct DatabaseManager {
    writer: Mutex<Connection>,
    readers: Vec<Mutex<Connection>>,
    read_index: AtomicUsize,
    path: Option<PathBuf>,
}

impl DatabaseManager {
    /// Open a file-backed pool, creating the file and running migrations.
    pub fn open(path: &Path, config: &StorageConfig) -> Result<Self, StorageError> {
        let busy_timeout = Duration::from_millis(config.busy_timeout_ms);
        let pool_size = if config.read_pool_size == 0 {
            DEFAULT_READ_POOL_SIZE
        } else {
            config.read_pool_size
        };

        let writer = Connection::open(path).map_err(sqe)?;
        pragmas::configure_connection(&writer, busy_timeout)?;
        migrations::run_migrations(&writer)?;

        // Readers open after migrations so they never see a half-built schema.
        let mut readers = Vec::with_capacity(pool_size);
        for i in 0..pool_size {
            let reader = Connection::open_with_flags(
                path,
                OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )
            .map_err(|e| StorageError::SqliteError {
                message: format!("failed to open reader {i}: {e}"),
            })?;
            pragmas::configure_readonly_connection(&reader, busy_timeout)?;
            readers.push(Mutex::new(reader));
        }

        info!(path = %path.display(), readers = pool_size, "database opened");
        Ok(Self {
            writer: Mutex::new(writer),
            readers,
            read_index: AtomicUsize::new(0),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database. There are no readers; reads fall back
    /// to the writer so they see its data.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let writer = Connection::open_in_memory().map_err(sqe)?;
        pragmas::configure_connection(&writer, Duration::from_millis(5_000))?;
        migrations::run_migrations(&writer)?;
        debug!("in-memory database opened");

        Ok(Self {
            writer: Mutex::new(writer),
            readers: Vec::new(),
            read_index: AtomicUsize::new(0),
            path: None,
        })
    }

    /// Execute a closure with the writer connection.
    pub fn with_writer<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let conn = self.writer.lock().map_err(|e| StorageError::LockPoisoned {
            message: format!("writer: {e}"),
        })?;
        f(&conn)
    }

    /// Execute a closure with a reader connection (round-robin).
    pub fn with_reader<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        if self.readers.is_empty() {
            return self.with_writer(f);
        }

        let index = self.read_index.fetch_add(1, Ordering::Relaxed) % self.readers.len();
        let conn = self.readers[index].lock().map_err(|e| StorageError::LockPoisoned {
            message: format!("reader {index}: {e}"),
        })?;
        f(&conn)
    }

    /// Database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn reader_count(&self) -> usize {
        self.readers.len()
    }

    /// Check WAL mode on the writer connection.
    pub fn is_wal_mode(&self) -> bool {
        self.with_writer(|conn| {
            let mode: String = conn
                .query_row("PRAGMA journal_mode", [], |row| row.get(0))
                .map_err(sqe)?;
            Ok(mode.eq_ignore_ascii_case("wal"))
        })
        .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_reads_fall_back_to_writer() {
        let db = DatabaseManager::open_in_memory().unwrap();
        assert_eq!(db.reader_count(), 0);
        assert!(db.path().is_none());
        db.with_writer(|c| {
            c.execute_batch("CREATE TABLE t (x INTEGER); INSERT INTO t VALUES (7);")
                .map_err(sqe)
        })
        .unwrap();
        let x: i64 = db
            .with_reader(|c| c.query_row("SELECT x FROM t", [], |r| r.get(0)).map_err(sqe))
            .unwrap();
        assert_eq!(x, 7);
    }

    #[test]
    fn file_backed_pool_uses_wal_and_readers() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            read_pool_size: 3,
            ..Default::default()
        };
        let db = DatabaseManager::open(&dir.path().join("cars.db"), &config).unwrap();
        assert!(db.is_wal_mode());
        assert_eq!(db.reader_count(), 3);
        assert_eq!(db.path(), Some(dir.path().join("cars.db").as_path()));

        let writes = db.with_reader(|c| {
            Ok(c.execute_batch("CREATE TABLE scratch (x INTEGER)").is_err())
        });
        assert!(writes.unwrap(), "readers must be read-only");
    }
}
