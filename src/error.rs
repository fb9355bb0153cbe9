use thiserror::Error;

/// Result type for table store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the table store
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Invalid table name {name:?}: {reason}")]
    InvalidTableName { name: String, reason: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
