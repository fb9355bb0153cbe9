use crate::config::{DbTarget, StoreConfig};
use crate::error::Result;
use crate::table_name::TableName;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use tracing::debug;

/// One `(x, y)` row of an integer-pair table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Row {
    pub x: i64,
    pub y: i64,
}

impl Row {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Row {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Row> for (i64, i64) {
    fn from(row: Row) -> Self {
        (row.x, row.y)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {} y: {}", self.x, self.y)
    }
}

/// Owns a single SQLite connection and stores `(x, y)` rows in named tables.
///
/// Tables are created on first insert with the schema `(x INTEGER, y INTEGER)`
/// and are never altered or dropped. Every statement runs in a scope that ends
/// before the method returns.
pub struct TableStore {
    conn: Connection,
}

impl TableStore {
    /// Open a store on the configured target
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let conn = match &config.target {
            DbTarget::InMemory => Connection::open_in_memory()?,
            DbTarget::File(path) => Connection::open(path)?,
        };
        debug!(db = ?config.target, "opened table store");

        Ok(Self { conn })
    }

    /// Open a store on a fresh private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Self::open(&StoreConfig::in_memory())
    }

    /// Echo `message` back through the database to confirm it answers queries.
    pub fn probe(&self, message: &str) -> Result<String> {
        let echoed: String = self.conn.query_row("SELECT ?1", [message], |row| row.get(0))?;
        Ok(echoed)
    }

    pub fn table_exists(&self, name: &str) -> Result<bool> {
        let table = TableName::new(name)?;
        Ok(has_table(&self.conn, &table)?)
    }

    /// Append `row` to table `name`, creating the table first if needed.
    ///
    /// Creation and insert share one transaction: if either fails, neither is
    /// kept.
    pub fn insert(&mut self, name: &str, row: Row) -> Result<()> {
        let table = TableName::new(name)?;

        let tx = self.conn.transaction()?;
        if !has_table(&tx, &table)? {
            debug!(table = %table, "creating table");
            tx.execute(
                &format!("CREATE TABLE {} (x INTEGER, y INTEGER)", table.quoted()),
                [],
            )?;
        }
        tx.execute(
            &format!("INSERT INTO {} (x, y) VALUES (?1, ?2)", table.quoted()),
            params![row.x, row.y],
        )?;
        tx.commit()?;

        debug!(table = %table, x = row.x, y = row.y, "inserted row");
        Ok(())
    }

    /// All rows of table `name` in insertion order.
    ///
    /// A table that does not exist yields an empty `Vec`.
    pub fn fetch_all(&self, name: &str) -> Result<Vec<Row>> {
        let table = TableName::new(name)?;
        if !has_table(&self.conn, &table)? {
            debug!(table = %table, "table does not exist, no rows");
            return Ok(Vec::new());
        }

        let mut stmt = self
            .conn
            .prepare(&format!("SELECT x, y FROM {} ORDER BY rowid", table.quoted()))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Row {
                    x: row.get(0)?,
                    y: row.get(1)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(rows)
    }
}

// SQLite identifiers are case-insensitive, so `Coords` and `coords` name the
// same table.
fn has_table(conn: &Connection, table: &TableName) -> rusqlite::Result<bool> {
    let found = conn
        .query_row(
            r#"
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1 COLLATE NOCASE
            "#,
            [table.as_str()],
            |_| Ok(()),
        )
        .optional()?;

    Ok(found.is_some())
}

/// Write each row as `x: <x> y: <y>` on its own line
pub fn write_rows<W: Write>(out: &mut W, rows: &[Row]) -> Result<()> {
    for row in rows {
        writeln!(out, "{row}")?;
    }
    out.flush()?;
    Ok(())
}

/// Print each row to stdout as `x: <x> y: <y>`
pub fn print_rows(rows: &[Row]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_rows(&mut out, rows)
}
