// src/db/mod.rs

//! Database layer for the recipe book
//!
//! All recipe state lives in a single SQLite file. Connections are opened
//! per unit of work and always enforce foreign keys, so the ingredient
//! cascade is honoured by the store itself.

pub mod models;
pub mod schema;

use crate::error::Result;
use rusqlite::{Connection, Transaction};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// How long a connection waits on a locked database before failing
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Create the database file if needed and bring its schema up to date
pub fn init(db_path: &str) -> Result<()> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    info!("Initializing database at {}", db_path);
    let conn = open(db_path)?;
    schema::migrate(&conn)?;
    Ok(())
}

/// Open a connection to an existing database
pub fn open(db_path: &str) -> Result<Connection> {
    debug!("Opening database {}", db_path);
    let conn = Connection::open(db_path)?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    Ok(conn)
}

/// Run `f` inside a transaction
///
/// Commits when `f` returns `Ok`. On `Err` the transaction is dropped
/// without committing, which rolls every write back.
pub fn transaction<T, F>(conn: &mut Connection, f: F) -> Result<T>
where
    F: FnOnce(&Transaction) -> Result<T>,
{
    let tx = conn.transaction()?;
    let value = f(&tx)?;
    tx.commit()?;
    Ok(value)
}
