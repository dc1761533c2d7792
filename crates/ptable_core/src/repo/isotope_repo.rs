//! Isotope lookups.
//!
//! # Responsibility
//! - Fetch isotope rows by `(atomic_number, mass_number)` and per element.
//! - Fetch decay modes for one isotope.

use crate::model::isotope::{IsotopeDecayModeRecord, IsotopeRecord};
use crate::repo::{decode_bool, decode_opt_bool, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const ISOTOPE_SELECT_SQL: &str = "SELECT
    atomic_number,
    mass_number,
    mass,
    mass_uncertainty,
    abundance,
    abundance_uncertainty,
    half_life,
    half_life_uncertainty,
    half_life_unit,
    is_radioactive,
    spin,
    parity,
    g_factor,
    g_factor_uncertainty,
    quadrupole_moment,
    quadrupole_moment_uncertainty,
    discovery_year
FROM isotopes";

/// Read contract for isotope rows.
pub trait IsotopeRepository {
    fn get(&self, atomic_number: u32, mass_number: u32) -> RepoResult<Option<IsotopeRecord>>;
    /// All isotopes of one element, ordered by mass number.
    fn for_element(&self, atomic_number: u32) -> RepoResult<Vec<IsotopeRecord>>;
    fn decay_modes(
        &self,
        atomic_number: u32,
        mass_number: u32,
    ) -> RepoResult<Vec<IsotopeDecayModeRecord>>;
}

/// SQLite-backed isotope repository.
pub struct SqliteIsotopeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteIsotopeRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl IsotopeRepository for SqliteIsotopeRepository<'_> {
    fn get(&self, atomic_number: u32, mass_number: u32) -> RepoResult<Option<IsotopeRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ISOTOPE_SELECT_SQL} WHERE atomic_number = ?1 AND mass_number = ?2;"
        ))?;
        let mut rows = stmt.query(params![atomic_number, mass_number])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_isotope_row(row)?));
        }
        Ok(None)
    }

    fn for_element(&self, atomic_number: u32) -> RepoResult<Vec<IsotopeRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ISOTOPE_SELECT_SQL} WHERE atomic_number = ?1 ORDER BY mass_number;"
        ))?;
        let mut rows = stmt.query(params![atomic_number])?;

        let mut isotopes = Vec::new();
        while let Some(row) = rows.next()? {
            isotopes.push(parse_isotope_row(row)?);
        }
        Ok(isotopes)
    }

    fn decay_modes(
        &self,
        atomic_number: u32,
        mass_number: u32,
    ) -> RepoResult<Vec<IsotopeDecayModeRecord>> {
        let isotope_id = self
            .conn
            .query_row(
                "SELECT id FROM isotopes WHERE atomic_number = ?1 AND mass_number = ?2;",
                params![atomic_number, mass_number],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;
        let Some(isotope_id) = isotope_id else {
            return Ok(Vec::new());
        };

        let mut stmt = self.conn.prepare(
            "SELECT mode, relation, intensity, is_allowed_not_observed,
                    is_observed_intensity_unknown
             FROM isotopedecaymodes
             WHERE isotope_id = ?1
             ORDER BY id;",
        )?;
        let mut rows = stmt.query(params![isotope_id])?;

        let mut modes = Vec::new();
        while let Some(row) = rows.next()? {
            modes.push(IsotopeDecayModeRecord {
                mode: row.get(0)?,
                relation: row.get(1)?,
                intensity: row.get(2)?,
                is_allowed_not_observed: decode_opt_bool(
                    row.get(3)?,
                    "isotopedecaymodes.is_allowed_not_observed",
                )?,
                is_observed_intensity_unknown: decode_opt_bool(
                    row.get(4)?,
                    "isotopedecaymodes.is_observed_intensity_unknown",
                )?,
            });
        }
        Ok(modes)
    }
}

fn parse_isotope_row(row: &Row<'_>) -> RepoResult<IsotopeRecord> {
    Ok(IsotopeRecord {
        atomic_number: row.get(0)?,
        mass_number: row.get(1)?,
        mass: row.get(2)?,
        mass_uncertainty: row.get(3)?,
        abundance: row.get(4)?,
        abundance_uncertainty: row.get(5)?,
        half_life: row.get(6)?,
        half_life_uncertainty: row.get(7)?,
        half_life_unit: row.get(8)?,
        is_radioactive: decode_bool(row.get(9)?, "isotopes.is_radioactive")?,
        spin: row.get(10)?,
        parity: row.get(11)?,
        g_factor: row.get(12)?,
        g_factor_uncertainty: row.get(13)?,
        quadrupole_moment: row.get(14)?,
        quadrupole_moment_uncertainty: row.get(15)?,
        discovery_year: row.get(16)?,
    })
}
