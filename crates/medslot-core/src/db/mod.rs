//! SQLite persistence for users, appointments and the credit ledger.
//!
//! This module owns the database connection and the embedded schema. Queries
//! are grouped by table in the submodules, each adding methods to
//! [`Database`].

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod appointment_queries;
pub mod ledger_queries;
mod schema;
pub mod seed;
pub mod user_queries;
mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
