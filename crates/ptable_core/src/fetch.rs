//! Bulk fetch surface for downstream consumers.
//!
//! # Responsibility
//! - Expose whole store tables and per-element scale sweeps as plain
//!   typed rows.
//!
//! Bulk presentation tolerates data gaps: a scale that cannot be computed
//! for one element becomes `None` in its row. Single-element calls keep
//! the strict `InsufficientData` contract.

use crate::entity::element::Element;
use crate::repo::element_repo::{ElementRepository, SqliteElementRepository};
use crate::repo::table_repo::{SqliteTableRepository, Table, TableRepository};
use crate::repo::{RepoError, RepoResult};
use crate::scales::{Scale, ScaleError};
use rusqlite::Connection;
use serde::Serialize;
use std::collections::BTreeMap;

/// Returns a whitelisted store table as columns plus rows.
pub fn fetch_table(conn: &Connection, name: &str) -> RepoResult<Table> {
    SqliteTableRepository::new(conn).fetch_table(name)
}

/// Electronegativities of one element on every scalar scale.
#[derive(Debug, Clone, Serialize)]
pub struct ElectronegativityRow {
    pub atomic_number: u32,
    pub symbol: String,
    /// Scale name to value; `None` where the element lacks a required
    /// base attribute for that scale.
    pub scales: BTreeMap<&'static str, Option<f64>>,
}

/// Sweeps every scalar electronegativity scale over all elements.
pub fn fetch_electronegativities(conn: &Connection) -> RepoResult<Vec<ElectronegativityRow>> {
    let repo = SqliteElementRepository::new(conn);
    let mut rows = Vec::new();

    for atomic_number in repo.atomic_numbers()? {
        let header = repo
            .header_by_number(atomic_number)?
            .ok_or_else(|| RepoError::NotFound(format!("element {atomic_number}")))?;
        let element = Element::new(conn, header);

        let mut scales = BTreeMap::new();
        for scale in Scale::ALL {
            let value = match element.electronegativity(scale) {
                Ok(value) => Some(value),
                Err(ScaleError::InsufficientData { .. }) => None,
                Err(ScaleError::Repo(err)) => return Err(err),
                // Parsing and charge errors cannot arise from a fixed
                // scale sweep at neutral charge.
                Err(other) => {
                    return Err(RepoError::InvalidData(format!(
                        "unexpected scale error for {}: {other}",
                        element.symbol()
                    )))
                }
            };
            scales.insert(scale.name(), value);
        }

        rows.push(ElectronegativityRow {
            atomic_number: element.atomic_number(),
            symbol: element.symbol().to_string(),
            scales,
        });
    }

    Ok(rows)
}
