//! Isotope proxy.

use crate::model::isotope::{IsotopeDecayModeRecord, IsotopeRecord};
use crate::model::value::ScalarValue;
use crate::model::with_uncertainty;
use crate::repo::element_repo::{ElementRepository, SqliteElementRepository};
use crate::repo::isotope_repo::{IsotopeRepository, SqliteIsotopeRepository};
use crate::repo::{RepoError, RepoResult};
use once_cell::unsync::OnceCell;
use rusqlite::Connection;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use super::element::Element;

/// Lazy proxy for one nuclide, keyed by `(atomic_number, mass_number)`.
///
/// The whole row is fetched once on first attribute access and memoized;
/// individual attributes are then served from the cached record.
pub struct Isotope<'c> {
    conn: &'c Connection,
    atomic_number: u32,
    mass_number: u32,
    symbol: String,
    record: OnceCell<IsotopeRecord>,
}

impl<'c> Isotope<'c> {
    pub(crate) fn lazy(
        conn: &'c Connection,
        symbol: String,
        atomic_number: u32,
        mass_number: u32,
    ) -> Self {
        Self {
            conn,
            atomic_number,
            mass_number,
            symbol,
            record: OnceCell::new(),
        }
    }

    pub(crate) fn preloaded(conn: &'c Connection, symbol: String, record: IsotopeRecord) -> Self {
        let proxy = Self::lazy(conn, symbol, record.atomic_number, record.mass_number);
        let _ = proxy.record.set(record);
        proxy
    }

    fn record(&self) -> RepoResult<&IsotopeRecord> {
        self.record.get_or_try_init(|| {
            SqliteIsotopeRepository::new(self.conn)
                .get(self.atomic_number, self.mass_number)?
                .ok_or_else(|| {
                    RepoError::NotFound(format!("isotope {}-{}", self.symbol, self.mass_number))
                })
        })
    }

    // -- identity ---------------------------------------------------------

    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    pub fn mass_number(&self) -> u32 {
        self.mass_number
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The element this nuclide belongs to.
    pub fn element(&self) -> RepoResult<Element<'c>> {
        let header = SqliteElementRepository::new(self.conn)
            .header_by_number(self.atomic_number)?
            .ok_or_else(|| RepoError::NotFound(format!("element {}", self.atomic_number)))?;
        Ok(Element::new(self.conn, header))
    }

    // -- attributes -------------------------------------------------------

    /// Nuclide mass in Da.
    pub fn mass(&self) -> RepoResult<f64> {
        Ok(self.record()?.mass)
    }

    pub fn mass_uncertainty(&self) -> RepoResult<Option<f64>> {
        Ok(self.record()?.mass_uncertainty)
    }

    /// Natural abundance in percent, `None` for purely synthetic nuclides.
    pub fn abundance(&self) -> RepoResult<Option<f64>> {
        Ok(self.record()?.abundance)
    }

    pub fn half_life(&self) -> RepoResult<Option<f64>> {
        Ok(self.record()?.half_life)
    }

    pub fn half_life_unit(&self) -> RepoResult<Option<String>> {
        Ok(self.record()?.half_life_unit.clone())
    }

    pub fn is_radioactive(&self) -> RepoResult<bool> {
        Ok(self.record()?.is_radioactive)
    }

    pub fn is_stable(&self) -> RepoResult<bool> {
        Ok(self.record()?.is_stable())
    }

    pub fn spin(&self) -> RepoResult<Option<String>> {
        Ok(self.record()?.spin.clone())
    }

    pub fn parity(&self) -> RepoResult<Option<String>> {
        Ok(self.record()?.parity.clone())
    }

    pub fn g_factor(&self) -> RepoResult<Option<f64>> {
        Ok(self.record()?.g_factor)
    }

    pub fn quadrupole_moment(&self) -> RepoResult<Option<f64>> {
        Ok(self.record()?.quadrupole_moment)
    }

    pub fn discovery_year(&self) -> RepoResult<Option<i32>> {
        Ok(self.record()?.discovery_year)
    }

    /// Dynamic attribute access by name.
    pub fn attribute(&self, name: &str) -> RepoResult<Option<ScalarValue>> {
        let record = self.record()?;
        let value = match name {
            "mass" => Some(ScalarValue::Real(record.mass)),
            "mass_uncertainty" => record.mass_uncertainty.map(ScalarValue::Real),
            "abundance" => record.abundance.map(ScalarValue::Real),
            "abundance_uncertainty" => record.abundance_uncertainty.map(ScalarValue::Real),
            "half_life" => record.half_life.map(ScalarValue::Real),
            "half_life_uncertainty" => record.half_life_uncertainty.map(ScalarValue::Real),
            "half_life_unit" => record.half_life_unit.clone().map(ScalarValue::Text),
            "is_radioactive" => Some(ScalarValue::Bool(record.is_radioactive)),
            "spin" => record.spin.clone().map(ScalarValue::Text),
            "parity" => record.parity.clone().map(ScalarValue::Text),
            "g_factor" => record.g_factor.map(ScalarValue::Real),
            "g_factor_uncertainty" => record.g_factor_uncertainty.map(ScalarValue::Real),
            "quadrupole_moment" => record.quadrupole_moment.map(ScalarValue::Real),
            "quadrupole_moment_uncertainty" => {
                record.quadrupole_moment_uncertainty.map(ScalarValue::Real)
            }
            "discovery_year" => record.discovery_year.map(|y| ScalarValue::Int(y.into())),
            _ => {
                return Err(RepoError::UnknownAttribute {
                    entity: "isotope",
                    name: name.to_string(),
                })
            }
        };
        Ok(value)
    }

    /// Decay channels of this nuclide.
    pub fn decay_modes(&self) -> RepoResult<Vec<IsotopeDecayModeRecord>> {
        SqliteIsotopeRepository::new(self.conn).decay_modes(self.atomic_number, self.mass_number)
    }

    /// Human-readable summary including mass and abundance with
    /// uncertainties. Separate from `Display`, which stays key-only.
    pub fn describe(&self) -> RepoResult<String> {
        let record = self.record()?;
        Ok(format!(
            "{}-{}: Z={}, A={}, mass={}, abundance={}",
            self.symbol,
            self.mass_number,
            self.atomic_number,
            self.mass_number,
            with_uncertainty(Some(record.mass), record.mass_uncertainty, 5),
            with_uncertainty(record.abundance, record.abundance_uncertainty, 3),
        ))
    }
}

impl std::fmt::Debug for Isotope<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Isotope")
            .field("atomic_number", &self.atomic_number)
            .field("mass_number", &self.mass_number)
            .field("symbol", &self.symbol)
            .finish_non_exhaustive()
    }
}

impl Display for Isotope<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} (Z={})", self.symbol, self.mass_number, self.atomic_number)
    }
}

impl PartialEq for Isotope<'_> {
    fn eq(&self, other: &Self) -> bool {
        (self.atomic_number, self.mass_number) == (other.atomic_number, other.mass_number)
    }
}

impl Eq for Isotope<'_> {}

impl PartialOrd for Isotope<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Isotope<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.atomic_number, self.mass_number).cmp(&(other.atomic_number, other.mass_number))
    }
}

impl Hash for Isotope<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.atomic_number, self.mass_number).hash(state);
    }
}
