//! Isotope records.

use serde::Serialize;

/// One row of the `isotopes` table.
///
/// The canonical key is `(atomic_number, mass_number)`; all nuclear
/// properties are nullable because not every nuclide has measured values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IsotopeRecord {
    pub atomic_number: u32,
    pub mass_number: u32,
    pub mass: f64,
    pub mass_uncertainty: Option<f64>,
    pub abundance: Option<f64>,
    pub abundance_uncertainty: Option<f64>,
    pub half_life: Option<f64>,
    pub half_life_uncertainty: Option<f64>,
    pub half_life_unit: Option<String>,
    pub is_radioactive: bool,
    pub spin: Option<String>,
    pub parity: Option<String>,
    pub g_factor: Option<f64>,
    pub g_factor_uncertainty: Option<f64>,
    pub quadrupole_moment: Option<f64>,
    pub quadrupole_moment_uncertainty: Option<f64>,
    pub discovery_year: Option<i32>,
}

impl IsotopeRecord {
    pub fn is_stable(&self) -> bool {
        !self.is_radioactive
    }
}

/// One decay channel of an isotope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IsotopeDecayModeRecord {
    /// ASCII symbol for the decay mode, e.g. `B-` or `A`.
    pub mode: String,
    /// One of `=`, `~`, `<`, `>` qualifying the intensity value.
    pub relation: Option<String>,
    pub intensity: Option<f64>,
    pub is_allowed_not_observed: Option<bool>,
    pub is_observed_intensity_unknown: Option<bool>,
}
