//! Whole-table fetches for the bulk query surface.
//!
//! # Responsibility
//! - Return whitelisted store tables as typed column/row data.
//! - Return the property metadata rows used for display.
//!
//! # Invariants
//! - Table names outside `TABLE_NAMES` never reach SQL; they are
//!   `NotFound` with the offending name echoed.

use crate::model::meta::{PropertyMetadata, ValueOrigin};
use crate::model::value::ScalarValue;
use crate::repo::{decode_opt_bool, RepoError, RepoResult};
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use serde::Serialize;

/// Tables exposed through `fetch_table`.
pub const TABLE_NAMES: &[&str] = &[
    "elements",
    "groups",
    "ionicradii",
    "ionizationenergies",
    "isotopedecaymodes",
    "isotopes",
    "oxidationstates",
    "phasetransitions",
    "propertymetadata",
    "scattering_factors",
    "screeningconstants",
    "series",
];

/// Column-major description plus row-major cells of one store table.
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<ScalarValue>>>,
}

impl Table {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Read contract for bulk table access.
pub trait TableRepository {
    fn fetch_table(&self, name: &str) -> RepoResult<Table>;
    fn property_metadata(&self) -> RepoResult<Vec<PropertyMetadata>>;
}

/// SQLite-backed table repository.
pub struct SqliteTableRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTableRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TableRepository for SqliteTableRepository<'_> {
    fn fetch_table(&self, name: &str) -> RepoResult<Table> {
        if !TABLE_NAMES.contains(&name) {
            return Err(RepoError::NotFound(format!("table {name}")));
        }

        let mut stmt = self.conn.prepare(&format!("SELECT * FROM {name};"))?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
        let column_count = columns.len();

        let mut rows = Vec::new();
        let mut raw = stmt.query([])?;
        while let Some(row) = raw.next()? {
            let mut cells = Vec::with_capacity(column_count);
            for idx in 0..column_count {
                cells.push(decode_cell(row.get_ref(idx)?, name, &columns[idx])?);
            }
            rows.push(cells);
        }

        Ok(Table {
            name: name.to_string(),
            columns,
            rows,
        })
    }

    fn property_metadata(&self) -> RepoResult<Vec<PropertyMetadata>> {
        let mut stmt = self.conn.prepare(
            "SELECT attribute_name, class_name, column_name, table_name, category,
                    unit, description, citation_keys, annotations, value_origin
             FROM propertymetadata
             ORDER BY class_name, attribute_name;",
        )?;
        let mut raw = stmt.query([])?;

        let mut entries = Vec::new();
        while let Some(row) = raw.next()? {
            let origin_text: String = row.get(9)?;
            let value_origin = ValueOrigin::parse(&origin_text).ok_or_else(|| {
                RepoError::InvalidData(format!(
                    "invalid value origin `{origin_text}` in propertymetadata.value_origin"
                ))
            })?;
            entries.push(PropertyMetadata {
                attribute_name: row.get(0)?,
                class_name: row.get(1)?,
                column_name: row.get(2)?,
                table_name: row.get(3)?,
                category: row.get(4)?,
                unit: row.get(5)?,
                description: row.get(6)?,
                citation_keys: row.get(7)?,
                annotations: row.get(8)?,
                value_origin,
            });
        }
        Ok(entries)
    }
}

fn decode_cell(
    value: ValueRef<'_>,
    table: &str,
    column: &str,
) -> RepoResult<Option<ScalarValue>> {
    let decoded = match value {
        ValueRef::Null => None,
        ValueRef::Integer(v) => {
            // Boolean columns follow the is_/most_ naming convention and
            // store strict 0/1; everything else stays an integer.
            if column.starts_with("is_") || column == "most_reliable" {
                decode_opt_bool(Some(v), &format!("{table}.{column}"))?.map(ScalarValue::Bool)
            } else {
                Some(ScalarValue::Int(v))
            }
        }
        ValueRef::Real(v) => Some(ScalarValue::Real(v)),
        ValueRef::Text(v) => Some(ScalarValue::Text(
            std::str::from_utf8(v)
                .map_err(|_| {
                    RepoError::InvalidData(format!("non-utf8 text in {table}.{column}"))
                })?
                .to_string(),
        )),
        ValueRef::Blob(_) => {
            return Err(RepoError::InvalidData(format!(
                "unexpected blob value in {table}.{column}"
            )))
        }
    };
    Ok(decoded)
}
