//! Data access layer over the property store.
//!
//! # Responsibility
//! - Define read contracts per aggregate (elements, isotopes, whole tables).
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - The store is never mutated through this layer.
//! - Read paths reject invalid persisted state (`InvalidData`) instead of
//!   masking it.
//! - Lookup keys and attribute names outside the closed registries yield
//!   semantic errors (`NotFound`, `AmbiguousKey`, `UnknownAttribute`).

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod element_repo;
pub mod isotope_repo;
pub mod table_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for property-store lookups and row decoding.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// The lookup key matched no row; carries the offending identifier.
    NotFound(String),
    /// A key that must be unique matched more than one row.
    AmbiguousKey { identifier: String, matches: usize },
    /// The requested attribute does not exist for this entity kind.
    UnknownAttribute {
        entity: &'static str,
        name: String,
    },
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(identifier) => write!(f, "no entry found for `{identifier}`"),
            Self::AmbiguousKey {
                identifier,
                matches,
            } => write!(
                f,
                "identifier `{identifier}` matches {matches} entries where exactly one is required"
            ),
            Self::UnknownAttribute { entity, name } => {
                write!(f, "unknown {entity} attribute `{name}`")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

pub(crate) fn decode_bool(value: i64, context: &str) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid boolean value `{other}` in {context}"
        ))),
    }
}

pub(crate) fn decode_opt_bool(value: Option<i64>, context: &str) -> RepoResult<Option<bool>> {
    value.map(|v| decode_bool(v, context)).transpose()
}
