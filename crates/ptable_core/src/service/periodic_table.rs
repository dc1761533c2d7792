//! The periodic table service: one owned store handle, many cheap proxies.

use crate::db::migrations::current_user_version;
use crate::db::{open_db, open_db_in_memory, DbResult};
use crate::entity::element::Element;
use crate::entity::ion::Ion;
use crate::entity::isotope::Isotope;
use crate::fetch::{fetch_electronegativities, ElectronegativityRow};
use crate::model::meta::PropertyMetadata;
use crate::repo::element_repo::{ElementRepository, SqliteElementRepository};
use crate::repo::isotope_repo::{IsotopeRepository, SqliteIsotopeRepository};
use crate::repo::table_repo::{SqliteTableRepository, Table, TableRepository};
use crate::repo::{RepoError, RepoResult};
use crate::resolve::{resolve, Identifier};
use crate::scales::ScaleResult;
use rusqlite::Connection;
use std::path::Path;

/// Owns the read-only connection to the property store.
///
/// Opened once at startup and dropped at shutdown; proxies returned by
/// the query methods borrow the handle, so the table outlives every
/// proxy it hands out. There is deliberately no global instance: callers
/// construct one and pass it where it is needed.
#[derive(Debug)]
pub struct PeriodicTable {
    conn: Connection,
}

impl PeriodicTable {
    /// Opens the shipped store read-only. Failure here is fatal to
    /// initialization: without the store no operation is possible.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens an empty in-memory store with the schema applied. Substrate
    /// for tests and offline population; the connection is writable.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Wraps an already-bootstrapped connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Direct access to the underlying connection, e.g. for offline
    /// population of an in-memory store.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Resolves an atomic number, symbol, or element name.
    pub fn resolve(&self, identifier: impl Into<Identifier>) -> RepoResult<Element<'_>> {
        resolve(&self.conn, identifier)
    }

    /// Fetches one element by atomic number.
    pub fn element(&self, atomic_number: u32) -> RepoResult<Element<'_>> {
        self.resolve(atomic_number)
    }

    /// Fetches one isotope by `(atomic_number, mass_number)`.
    pub fn isotope(&self, atomic_number: u32, mass_number: u32) -> RepoResult<Isotope<'_>> {
        let element = self.element(atomic_number)?;
        let record = SqliteIsotopeRepository::new(&self.conn)
            .get(atomic_number, mass_number)?
            .ok_or_else(|| {
                RepoError::NotFound(format!("isotope {}-{mass_number}", element.symbol()))
            })?;
        Ok(Isotope::preloaded(
            &self.conn,
            element.symbol().to_string(),
            record,
        ))
    }

    /// Builds the ion view of an element at the given charge.
    pub fn ion(&self, identifier: impl Into<Identifier>, charge: i32) -> ScaleResult<Ion<'_>> {
        let element = self.resolve(identifier)?;
        Ion::new(element, charge)
    }

    /// Returns a whitelisted store table.
    pub fn fetch_table(&self, name: &str) -> RepoResult<Table> {
        SqliteTableRepository::new(&self.conn).fetch_table(name)
    }

    /// All scalar electronegativity scales for all elements.
    pub fn electronegativities(&self) -> RepoResult<Vec<ElectronegativityRow>> {
        fetch_electronegativities(&self.conn)
    }

    /// Display metadata for stored and computed properties.
    pub fn property_metadata(&self) -> RepoResult<Vec<PropertyMetadata>> {
        SqliteTableRepository::new(&self.conn).property_metadata()
    }

    /// Atomic numbers present in the store, ascending.
    pub fn atomic_numbers(&self) -> RepoResult<Vec<u32>> {
        SqliteElementRepository::new(&self.conn).atomic_numbers()
    }

    pub fn element_count(&self) -> RepoResult<u64> {
        SqliteElementRepository::new(&self.conn).count_elements()
    }

    /// Schema version stamped into the opened store.
    pub fn schema_version(&self) -> DbResult<u32> {
        current_user_version(&self.conn)
    }
}
