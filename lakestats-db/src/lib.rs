//! SQLite-backed store for lake monitoring records.
//!
//! This crate persists the three-records-per-lake layout the rest of the
//! system is built around: a top-level settings row, a details document
//! (pool elevations, regions, access points), and the published
//! current-conditions document, plus the raw daily readings the
//! collection run derives those documents from. The three records are
//! fetched independently and may be differently stale; nothing here
//! reconciles timestamps across them.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper, cheaply cloneable in a
//!   single-threaded process
//! - Schema applied as one batch at open time
//! - Typed query methods returning domain structs from `lakestats-model`
//! - Nested documents (regions, access points, conditions) stored as JSON
//!   text, mirroring the key-document layout of the hosted store this
//!   replaces in tests and the CLI
//!
//! # Ordering guarantees
//!
//! Every listing query orders by `(sort_order, lake_name)` so display
//! order is deterministic even when sort keys collide.
//! [`Database::apply_sort_assignments`] runs inside one transaction:
//! either the whole reorder batch lands or none of it does.

pub mod schema;
mod loader;
mod queries;

use rusqlite::Connection;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

/// Handle to the lake store.
///
/// Cheaply cloneable via `Rc`; clones share the underlying connection.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    /// Used by tests and one-shot tooling.
    pub fn new() -> anyhow::Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    /// Open (creating if needed) a database file with the schema applied.
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    fn from_connection(conn: Connection) -> anyhow::Result<Self> {
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.add_lake("powell", "Lake Powell", "Powell Stats", None)
            .unwrap();
        let lakes = db2.all_lakes().unwrap();
        assert_eq!(lakes.len(), 1, "Clone should see same data via shared Rc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        assert!(db.all_lakes().unwrap().is_empty(), "New database should have no lakes");
    }
}
