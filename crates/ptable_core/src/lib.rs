//! Core library for the ptable reference-data store.
//!
//! Ships a typed query layer over a pre-populated SQLite database of
//! chemical element, isotope, and physical-property data: identifier
//! resolution, lazy element/isotope/ion proxies, and a derived-property
//! engine for scale-dependent quantities.

pub mod db;
pub mod econf;
pub mod entity;
pub mod fetch;
pub mod logging;
pub mod model;
pub mod repo;
pub mod resolve;
pub mod scales;
pub mod service;

pub use db::{open_db, open_db_in_memory, open_db_maintenance, DbError, DbResult};
pub use econf::{ElectronicConfiguration, Subshell};
pub use entity::element::{Element, LiXueElectronegativity};
pub use entity::ion::Ion;
pub use entity::isotope::Isotope;
pub use fetch::{fetch_electronegativities, fetch_table, ElectronegativityRow};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::element::{AttributeSpec, ElementHeader, ELEMENT_ATTRIBUTES};
pub use model::isotope::{IsotopeDecayModeRecord, IsotopeRecord};
pub use model::meta::{PropertyMetadata, ValueOrigin};
pub use model::records::{
    GroupRecord, IonicRadiusRecord, OxidationCategory, OxidationStateRecord,
    PhaseTransitionRecord, ScatteringFactorRecord, ScreeningConstantRecord, SeriesRecord,
};
pub use model::value::{ScalarValue, ValueKind};
pub use repo::element_repo::{ElementRepository, SqliteElementRepository};
pub use repo::isotope_repo::{IsotopeRepository, SqliteIsotopeRepository};
pub use repo::table_repo::{SqliteTableRepository, Table, TableRepository};
pub use repo::{RepoError, RepoResult};
pub use resolve::{resolve, Identifier};
pub use scales::{RadiusKind, Scale, ScaleError, ScaleResult, ZeffMethod};
pub use service::periodic_table::PeriodicTable;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
