use std::time::Duration;
use rusqlite::Connection;
use crate::core::library::{LibraryError, LibraryResult};

// Single-table schema, created at process start and kept idempotent so
// repository factories can re-run it on fresh stores.
const BOOKS_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    isbn TEXT NOT NULL,
    published_at TEXT NOT NULL
);";

pub(crate) fn open_connection(path: &str) -> LibraryResult<Connection> {
    let conn = Connection::open(path)?;
    conn.busy_timeout(Duration::from_secs(5))?;
    Ok(conn)
}

pub(crate) fn open_in_memory() -> LibraryResult<Connection> {
    let conn = Connection::open_in_memory()?;
    conn.busy_timeout(Duration::from_secs(5))?;
    Ok(conn)
}

pub(crate) fn create_books_table(conn: &Connection) -> LibraryResult<()> {
    conn.execute_batch(BOOKS_TABLE_SQL)?;
    Ok(())
}

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .json()
        .init();
}

impl From<rusqlite::Error> for LibraryError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(failure, message) => {
                let reason = Some(format!("{:?}", failure.code));
                match failure.code {
                    rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked => {
                        LibraryError::database(
                            format!("sqlite busy {:?} {:?}", message, failure).as_str(), reason, true)
                    }
                    rusqlite::ErrorCode::ConstraintViolation => {
                        LibraryError::duplicate_key(
                            format!("sqlite constraint violation {:?}", message).as_str())
                    }
                    _ => {
                        LibraryError::database(
                            format!("sqlite failure {:?} {:?}", message, failure).as_str(), reason, false)
                    }
                }
            }
            _ => {
                LibraryError::database(format!("sqlite error {:?}", err).as_str(), None, false)
            }
        }
    }
}
