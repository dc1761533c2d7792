//! Element lookups and per-element relation fetches.
//!
//! # Responsibility
//! - Resolve element headers by atomic number, symbol, or name.
//! - Fetch single stored attributes and per-element relation tables.
//!
//! # Invariants
//! - Attribute fetches go through the closed registry in
//!   `model::element`; arbitrary column names never reach SQL.
//! - Symbol and name matching is exact and case-insensitive; a name
//!   matching several rows is `AmbiguousKey`, never a silent pick.

use crate::model::element::{element_attribute, ElementHeader};
use crate::model::records::{
    GroupRecord, IonicRadiusRecord, OxidationCategory, OxidationStateRecord,
    PhaseTransitionRecord, ScatteringFactorRecord, ScreeningConstantRecord, SeriesRecord,
};
use crate::model::value::{ScalarValue, ValueKind};
use crate::repo::{decode_opt_bool, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::BTreeMap;

const HEADER_SELECT_SQL: &str = "SELECT atomic_number, symbol, name FROM elements";

/// Read contract for element identity, attributes, and relations.
pub trait ElementRepository {
    fn header_by_number(&self, atomic_number: u32) -> RepoResult<Option<ElementHeader>>;
    fn header_by_symbol(&self, symbol: &str) -> RepoResult<Option<ElementHeader>>;
    fn header_by_name(&self, name: &str) -> RepoResult<Option<ElementHeader>>;
    fn atomic_numbers(&self) -> RepoResult<Vec<u32>>;
    fn count_elements(&self) -> RepoResult<u64>;

    /// Fetches one stored attribute for one element. `Ok(None)` means the
    /// stored value is NULL; an unregistered attribute name is
    /// `UnknownAttribute`.
    fn scalar(&self, atomic_number: u32, attribute: &str) -> RepoResult<Option<ScalarValue>>;

    /// Ionization energies as degree (`ion_charge + 1`) to energy in eV.
    fn ionization_energies(&self, atomic_number: u32) -> RepoResult<BTreeMap<u32, f64>>;
    fn ionic_radii(&self, atomic_number: u32) -> RepoResult<Vec<IonicRadiusRecord>>;
    fn oxidation_states(&self, atomic_number: u32) -> RepoResult<Vec<OxidationStateRecord>>;
    fn screening_constants(&self, atomic_number: u32)
        -> RepoResult<Vec<ScreeningConstantRecord>>;
    fn phase_transitions(&self, atomic_number: u32) -> RepoResult<Vec<PhaseTransitionRecord>>;
    fn scattering_factors(&self, atomic_number: u32) -> RepoResult<Vec<ScatteringFactorRecord>>;
    fn group_of(&self, atomic_number: u32) -> RepoResult<Option<GroupRecord>>;
    fn series_of(&self, atomic_number: u32) -> RepoResult<Option<SeriesRecord>>;

    /// `(atomic_number, value)` pairs of one real-valued attribute across a
    /// periodic-table group, ordered by atomic number. Input to the
    /// noble-gas radius interpolation.
    fn group_attribute(
        &self,
        group_id: u32,
        attribute: &str,
    ) -> RepoResult<Vec<(u32, Option<f64>)>>;
}

/// SQLite-backed element repository.
pub struct SqliteElementRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteElementRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ElementRepository for SqliteElementRepository<'_> {
    fn header_by_number(&self, atomic_number: u32) -> RepoResult<Option<ElementHeader>> {
        let header = self
            .conn
            .query_row(
                &format!("{HEADER_SELECT_SQL} WHERE atomic_number = ?1;"),
                params![atomic_number],
                parse_header_row,
            )
            .optional()?;
        Ok(header)
    }

    fn header_by_symbol(&self, symbol: &str) -> RepoResult<Option<ElementHeader>> {
        let header = self
            .conn
            .query_row(
                &format!("{HEADER_SELECT_SQL} WHERE LOWER(symbol) = LOWER(?1);"),
                params![symbol],
                parse_header_row,
            )
            .optional()?;
        Ok(header)
    }

    fn header_by_name(&self, name: &str) -> RepoResult<Option<ElementHeader>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{HEADER_SELECT_SQL} WHERE LOWER(name) = LOWER(?1);"))?;
        let mut rows = stmt.query(params![name])?;

        let Some(first) = rows.next()? else {
            return Ok(None);
        };
        let header = parse_header_row(first)?;

        let mut matches = 1;
        while rows.next()?.is_some() {
            matches += 1;
        }
        if matches > 1 {
            return Err(RepoError::AmbiguousKey {
                identifier: name.to_string(),
                matches,
            });
        }

        Ok(Some(header))
    }

    fn atomic_numbers(&self) -> RepoResult<Vec<u32>> {
        let mut stmt = self
            .conn
            .prepare("SELECT atomic_number FROM elements ORDER BY atomic_number;")?;
        let numbers = stmt
            .query_map([], |row| row.get::<_, u32>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(numbers)
    }

    fn count_elements(&self) -> RepoResult<u64> {
        let count =
            self.conn
                .query_row("SELECT COUNT(*) FROM elements;", [], |row| row.get::<_, i64>(0))?;
        Ok(count as u64)
    }

    fn scalar(&self, atomic_number: u32, attribute: &str) -> RepoResult<Option<ScalarValue>> {
        let spec = element_attribute(attribute).ok_or_else(|| RepoError::UnknownAttribute {
            entity: "element",
            name: attribute.to_string(),
        })?;

        let value = self
            .conn
            .query_row(
                &format!(
                    "SELECT {} FROM elements WHERE atomic_number = ?1;",
                    spec.column
                ),
                params![atomic_number],
                |row| row.get::<_, Value>(0),
            )
            .optional()?
            .ok_or_else(|| RepoError::NotFound(format!("element {atomic_number}")))?;

        decode_scalar(value, spec.kind, spec.name)
    }

    fn ionization_energies(&self, atomic_number: u32) -> RepoResult<BTreeMap<u32, f64>> {
        let mut stmt = self.conn.prepare(
            "SELECT ion_charge, ionization_energy
             FROM ionizationenergies
             WHERE atomic_number = ?1
             ORDER BY ion_charge;",
        )?;
        let mut rows = stmt.query(params![atomic_number])?;

        let mut energies = BTreeMap::new();
        while let Some(row) = rows.next()? {
            let ion_charge: u32 = row.get(0)?;
            if let Some(energy) = row.get::<_, Option<f64>>(1)? {
                energies.insert(ion_charge + 1, energy);
            }
        }
        Ok(energies)
    }

    fn ionic_radii(&self, atomic_number: u32) -> RepoResult<Vec<IonicRadiusRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT atomic_number, charge, electronic_configuration, coordination, spin,
                    crystal_radius, ionic_radius, origin, most_reliable
             FROM ionicradii
             WHERE atomic_number = ?1
             ORDER BY charge, coordination, spin;",
        )?;
        let mut rows = stmt.query(params![atomic_number])?;

        let mut radii = Vec::new();
        while let Some(row) = rows.next()? {
            radii.push(IonicRadiusRecord {
                atomic_number: row.get(0)?,
                charge: row.get(1)?,
                electronic_configuration: row.get(2)?,
                coordination: row.get(3)?,
                spin: row.get(4)?,
                crystal_radius: row.get(5)?,
                ionic_radius: row.get(6)?,
                origin: row.get(7)?,
                most_reliable: decode_opt_bool(row.get(8)?, "ionicradii.most_reliable")?,
            });
        }
        Ok(radii)
    }

    fn oxidation_states(&self, atomic_number: u32) -> RepoResult<Vec<OxidationStateRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT atomic_number, oxidation_state, category
             FROM oxidationstates
             WHERE atomic_number = ?1
             ORDER BY oxidation_state;",
        )?;
        let mut rows = stmt.query(params![atomic_number])?;

        let mut states = Vec::new();
        while let Some(row) = rows.next()? {
            let category_text: String = row.get(2)?;
            let category = OxidationCategory::parse(&category_text).ok_or_else(|| {
                RepoError::InvalidData(format!(
                    "invalid oxidation category `{category_text}` in oxidationstates.category"
                ))
            })?;
            states.push(OxidationStateRecord {
                atomic_number: row.get(0)?,
                oxidation_state: row.get(1)?,
                category,
            });
        }
        Ok(states)
    }

    fn screening_constants(
        &self,
        atomic_number: u32,
    ) -> RepoResult<Vec<ScreeningConstantRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT atomic_number, n, s, screening
             FROM screeningconstants
             WHERE atomic_number = ?1
             ORDER BY n, s;",
        )?;
        let mut rows = stmt.query(params![atomic_number])?;

        let mut constants = Vec::new();
        while let Some(row) = rows.next()? {
            constants.push(ScreeningConstantRecord {
                atomic_number: row.get(0)?,
                n: row.get(1)?,
                subshell: row.get(2)?,
                screening: row.get(3)?,
            });
        }
        Ok(constants)
    }

    fn phase_transitions(&self, atomic_number: u32) -> RepoResult<Vec<PhaseTransitionRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT atomic_number, allotrope, melting_point, boiling_point,
                    critical_temperature, critical_pressure, triple_point_temperature,
                    triple_point_pressure, is_sublimation_point, is_transition
             FROM phasetransitions
             WHERE atomic_number = ?1
             ORDER BY id;",
        )?;
        let mut rows = stmt.query(params![atomic_number])?;

        let mut transitions = Vec::new();
        while let Some(row) = rows.next()? {
            transitions.push(PhaseTransitionRecord {
                atomic_number: row.get(0)?,
                allotrope: row.get(1)?,
                melting_point: row.get(2)?,
                boiling_point: row.get(3)?,
                critical_temperature: row.get(4)?,
                critical_pressure: row.get(5)?,
                triple_point_temperature: row.get(6)?,
                triple_point_pressure: row.get(7)?,
                is_sublimation_point: decode_opt_bool(
                    row.get(8)?,
                    "phasetransitions.is_sublimation_point",
                )?,
                is_transition: decode_opt_bool(row.get(9)?, "phasetransitions.is_transition")?,
            });
        }
        Ok(transitions)
    }

    fn scattering_factors(&self, atomic_number: u32) -> RepoResult<Vec<ScatteringFactorRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT atomic_number, energy, f1, f2
             FROM scattering_factors
             WHERE atomic_number = ?1
             ORDER BY energy;",
        )?;
        let mut rows = stmt.query(params![atomic_number])?;

        let mut factors = Vec::new();
        while let Some(row) = rows.next()? {
            factors.push(ScatteringFactorRecord {
                atomic_number: row.get(0)?,
                energy: row.get(1)?,
                f1: row.get(2)?,
                f2: row.get(3)?,
            });
        }
        Ok(factors)
    }

    fn group_of(&self, atomic_number: u32) -> RepoResult<Option<GroupRecord>> {
        let group = self
            .conn
            .query_row(
                "SELECT g.group_id, g.symbol, g.name
                 FROM groups g JOIN elements e ON e.group_id = g.group_id
                 WHERE e.atomic_number = ?1;",
                params![atomic_number],
                |row| {
                    Ok(GroupRecord {
                        group_id: row.get(0)?,
                        symbol: row.get(1)?,
                        name: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(group)
    }

    fn series_of(&self, atomic_number: u32) -> RepoResult<Option<SeriesRecord>> {
        let series = self
            .conn
            .query_row(
                "SELECT s.id, s.name, s.color
                 FROM series s JOIN elements e ON e.series_id = s.id
                 WHERE e.atomic_number = ?1;",
                params![atomic_number],
                |row| {
                    Ok(SeriesRecord {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        color: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(series)
    }

    fn group_attribute(
        &self,
        group_id: u32,
        attribute: &str,
    ) -> RepoResult<Vec<(u32, Option<f64>)>> {
        let spec = element_attribute(attribute).ok_or_else(|| RepoError::UnknownAttribute {
            entity: "element",
            name: attribute.to_string(),
        })?;
        if spec.kind != ValueKind::Real {
            return Err(RepoError::UnknownAttribute {
                entity: "element",
                name: format!("{attribute} (not a real-valued attribute)"),
            });
        }

        let mut stmt = self.conn.prepare(&format!(
            "SELECT atomic_number, {} FROM elements WHERE group_id = ?1 ORDER BY atomic_number;",
            spec.column
        ))?;
        let pairs = stmt
            .query_map(params![group_id], |row| {
                Ok((row.get::<_, u32>(0)?, row.get::<_, Option<f64>>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(pairs)
    }
}

fn parse_header_row(row: &Row<'_>) -> rusqlite::Result<ElementHeader> {
    Ok(ElementHeader {
        atomic_number: row.get(0)?,
        symbol: row.get(1)?,
        name: row.get(2)?,
    })
}

fn decode_scalar(
    value: Value,
    kind: ValueKind,
    attribute: &str,
) -> RepoResult<Option<ScalarValue>> {
    let decoded = match (kind, value) {
        (_, Value::Null) => None,
        (ValueKind::Int, Value::Integer(v)) => Some(ScalarValue::Int(v)),
        (ValueKind::Real, Value::Real(v)) => Some(ScalarValue::Real(v)),
        // SQLite integer affinity: REAL columns may store exact integers.
        (ValueKind::Real, Value::Integer(v)) => Some(ScalarValue::Real(v as f64)),
        (ValueKind::Text, Value::Text(v)) => Some(ScalarValue::Text(v)),
        (ValueKind::Bool, Value::Integer(v)) => {
            Some(ScalarValue::Bool(crate::repo::decode_bool(v, attribute)?))
        }
        (_, other) => {
            return Err(RepoError::InvalidData(format!(
                "attribute `{attribute}` holds a value of unexpected storage type: {other:?}"
            )))
        }
    };
    Ok(decoded)
}
