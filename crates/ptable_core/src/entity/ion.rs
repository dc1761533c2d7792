//! Ion view: an element at a fixed charge state.
//!
//! Ions are not persisted; every attribute is a lookup against the ionic
//! radii table or a charge-shifted derived quantity on the parent element.

use crate::model::records::IonicRadiusRecord;
use crate::repo::{RepoError, RepoResult};
use crate::scales::{RadiusKind, ScaleError, ScaleResult};
use std::fmt::{Display, Formatter};

use super::element::{Element, LiXueElectronegativity};

/// Derived view of an element at a specific nonzero charge.
pub struct Ion<'c> {
    element: Element<'c>,
    charge: i32,
}

impl<'c> Ion<'c> {
    /// Creates the ion view. The charge must be nonzero and a cation
    /// cannot shed more electrons than the atom has.
    pub fn new(element: Element<'c>, charge: i32) -> ScaleResult<Self> {
        if charge == 0 || charge > element.atomic_number() as i32 {
            return Err(ScaleError::InvalidCharge { charge });
        }
        Ok(Self { element, charge })
    }

    pub fn element(&self) -> &Element<'c> {
        &self.element
    }

    pub fn charge(&self) -> i32 {
        self.charge
    }

    /// Number of electrons after ionization.
    pub fn electrons(&self) -> u32 {
        (self.element.atomic_number() as i32 - self.charge) as u32
    }

    /// All tabulated radius entries for this charge state.
    pub fn radii(&self) -> RepoResult<Vec<IonicRadiusRecord>> {
        Ok(self
            .element
            .ionic_radii()?
            .iter()
            .filter(|record| record.charge == self.charge)
            .cloned()
            .collect())
    }

    /// Radius in pm for one coordination. More than one matching entry
    /// (e.g. distinct spin states) is ambiguous and must be narrowed via
    /// `radii()`.
    pub fn radius(&self, kind: RadiusKind, coordination: &str) -> RepoResult<Option<f64>> {
        let matching: Vec<&IonicRadiusRecord> = self
            .element
            .ionic_radii()?
            .iter()
            .filter(|record| {
                record.charge == self.charge && record.coordination == coordination
            })
            .collect();

        match matching.as_slice() {
            [] => Ok(None),
            [record] => Ok(match kind {
                RadiusKind::Crystal => record.crystal_radius,
                RadiusKind::Ionic => record.ionic_radius,
            }),
            records => Err(RepoError::AmbiguousKey {
                identifier: format!("{self} coordination {coordination}"),
                matches: records.len(),
            }),
        }
    }

    pub fn ionic_radius(&self, coordination: &str) -> RepoResult<Option<f64>> {
        self.radius(RadiusKind::Ionic, coordination)
    }

    pub fn crystal_radius(&self, coordination: &str) -> RepoResult<Option<f64>> {
        self.radius(RadiusKind::Crystal, coordination)
    }

    /// Absolute hardness of this charge state in eV.
    pub fn hardness(&self) -> ScaleResult<f64> {
        self.element.hardness(self.charge)
    }

    /// Absolute softness of this charge state in 1/eV.
    pub fn softness(&self) -> ScaleResult<f64> {
        self.element.softness(self.charge)
    }

    /// Mulliken electronegativity of this charge state.
    pub fn electronegativity_mulliken(&self) -> ScaleResult<f64> {
        self.element.electronegativity_mulliken(self.charge)
    }

    /// Li-Xue electronegativities for this charge state.
    pub fn electronegativity_li_xue(
        &self,
        radius_kind: RadiusKind,
    ) -> ScaleResult<Vec<LiXueElectronegativity>> {
        self.element.electronegativity_li_xue(self.charge, radius_kind)
    }
}

impl std::fmt::Debug for Ion<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ion")
            .field("atomic_number", &self.element.atomic_number())
            .field("symbol", &self.element.symbol())
            .field("charge", &self.charge)
            .finish()
    }
}

impl Display for Ion<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let magnitude = self.charge.unsigned_abs();
        let sign = if self.charge > 0 { '+' } else { '-' };
        if magnitude == 1 {
            write!(f, "{}{sign}", self.element.symbol())
        } else {
            write!(f, "{}{magnitude}{sign}", self.element.symbol())
        }
    }
}
