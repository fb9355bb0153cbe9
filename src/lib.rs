//! SQLite table store for integer-pair tables.
//!
//! # Intention
//!
//! - Provide a small, explicit API over one SQLite connection: probe, table
//!   existence, insert-with-create, fetch-all and row printing.
//! - Encapsulate SQLite-specific logic, types, and error handling.
//!
//! # Architectural Boundaries
//!
//! - Only SQLite/database code belongs here.
//! - No pooling, migrations or query building.

pub mod config;
pub mod error;
pub mod sqlite;
pub mod table_name;

pub use config::{DbTarget, StoreConfig};
pub use error::{Error, Result};
pub use sqlite::{print_rows, write_rows, Row, TableStore};
pub use table_name::TableName;
