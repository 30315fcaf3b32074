//! SQLite persistence for field configuration and order metadata.
//!
//! The store keeps one JSON document per product (its field-definition
//! list), one document per order line item (the frozen field records), and
//! an append-only notes table for order audit messages. Connections are
//! opened per operation; durability and isolation are SQLite's problem.

use crate::config;
use rusqlite::{params, Connection};

pub fn open() -> Result<Connection, String> {
    Connection::open(config::database_path()).map_err(|e| e.to_string())
}

/// Creates the schema on startup. Safe to run on an existing database.
pub fn init_schema() -> Result<(), String> {
    let conn = open()?;
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS product_fields (
            product_id TEXT PRIMARY KEY,
            fields     TEXT NOT NULL
        );
        CREATE TABLE IF NOT EXISTS order_items (
            item_id    TEXT PRIMARY KEY,
            order_id   TEXT NOT NULL,
            product_id TEXT NOT NULL,
            quantity   INTEGER NOT NULL,
            unit_price REAL NOT NULL,
            total      REAL NOT NULL,
            fields     TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_order_items_order ON order_items(order_id);
        CREATE TABLE IF NOT EXISTS order_notes (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            order_id   TEXT NOT NULL,
            note       TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );",
    )
        .map_err(|e| e.to_string())
}

/// Fetches the stored field-definition document for a product, if any.
pub fn load_product_fields(conn: &Connection, product_id: &str) -> Result<Option<String>, String> {
    let mut stmt = conn
        .prepare("SELECT fields FROM product_fields WHERE product_id = ?1")
        .map_err(|e| e.to_string())?;
    let mut rows = stmt
        .query_map(params![product_id], |row| row.get::<_, String>(0))
        .map_err(|e| e.to_string())?;

    match rows.next() {
        Some(Ok(blob)) => Ok(Some(blob)),
        Some(Err(e)) => Err(e.to_string()),
        None => Ok(None),
    }
}

/// Replaces the stored field-definition document for a product wholesale.
/// Last write wins; there is no merge and no conflict detection.
pub fn store_product_fields(
    conn: &Connection,
    product_id: &str,
    fields_json: &str,
) -> Result<(), String> {
    conn.execute(
        "INSERT OR REPLACE INTO product_fields (product_id, fields) VALUES (?1, ?2)",
        params![product_id, fields_json],
    )
        .map_err(|e| e.to_string())?;
    Ok(())
}
