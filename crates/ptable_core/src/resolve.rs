//! Lookup resolver: one identifier in, exactly one element out.
//!
//! # Responsibility
//! - Disambiguate a user-supplied identifier (atomic number, symbol, or
//!   element name) into one canonical element proxy.
//!
//! # Invariants
//! - Resolution order is fixed: integer parse, then symbol, then name.
//! - Matching is exact and case-insensitive; no fuzzy or partial
//!   matching, ever. Zero matches echo the identifier in `NotFound`.

use crate::entity::element::Element;
use crate::repo::element_repo::{ElementRepository, SqliteElementRepository};
use crate::repo::{RepoError, RepoResult};
use rusqlite::Connection;
use std::fmt::{Display, Formatter};

/// A user-supplied element identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    AtomicNumber(u32),
    Text(String),
}

impl From<u32> for Identifier {
    fn from(value: u32) -> Self {
        Self::AtomicNumber(value)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomicNumber(z) => write!(f, "{z}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

/// Resolves an identifier into exactly one element proxy.
///
/// Strings are tried as an atomic number first, then as a symbol, then as
/// an element name.
pub fn resolve<'c>(
    conn: &'c Connection,
    identifier: impl Into<Identifier>,
) -> RepoResult<Element<'c>> {
    let identifier = identifier.into();
    let repo = SqliteElementRepository::new(conn);

    let header = match &identifier {
        Identifier::AtomicNumber(z) => repo.header_by_number(*z)?,
        Identifier::Text(text) => {
            let text = text.trim();
            if let Ok(z) = text.parse::<u32>() {
                repo.header_by_number(z)?
            } else if let Some(header) = repo.header_by_symbol(text)? {
                Some(header)
            } else {
                repo.header_by_name(text)?
            }
        }
    };

    header
        .map(|header| Element::new(conn, header))
        .ok_or_else(|| RepoError::NotFound(identifier.to_string()))
}
