use crate::error::{Error, Result};
use std::fmt;

const MAX_LEN: usize = 64;
const RESERVED_PREFIX: &str = "sqlite_";

/// A table name that is safe to place in statement text.
///
/// Accepted names match `[A-Za-z_][A-Za-z0-9_]*`, are at most 64 bytes long and
/// do not use SQLite's reserved `sqlite_` prefix. [`TableName::quoted`] wraps the
/// name in double quotes for use as an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(String);

impl TableName {
    pub fn new(name: &str) -> Result<Self> {
        let invalid = |reason| Error::InvalidTableName {
            name: name.to_string(),
            reason,
        };

        let first = name.chars().next().ok_or_else(|| invalid("name is empty"))?;
        if name.len() > MAX_LEN {
            return Err(invalid("name is longer than 64 bytes"));
        }
        if !(first.is_ascii_alphabetic() || first == '_') {
            return Err(invalid("name must start with a letter or underscore"));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(invalid("contains characters outside [A-Za-z0-9_]"));
        }
        if name
            .get(..RESERVED_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(RESERVED_PREFIX))
        {
            return Err(invalid("names starting with sqlite_ are reserved"));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Double-quoted identifier form, e.g. `"coords"`
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TableName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for TableName {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        Self::new(name)
    }
}
