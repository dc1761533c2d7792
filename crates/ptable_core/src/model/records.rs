//! Per-element relation records.

use serde::Serialize;

/// Effective ionic and crystal radii (Shannon 1976), keyed by charge and
/// coordination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IonicRadiusRecord {
    pub atomic_number: u32,
    pub charge: i32,
    pub electronic_configuration: Option<String>,
    pub coordination: String,
    /// `HS` or `LS` where the spin state matters, otherwise `None`.
    pub spin: Option<String>,
    pub crystal_radius: Option<f64>,
    pub ionic_radius: Option<f64>,
    pub origin: Option<String>,
    pub most_reliable: Option<bool>,
}

/// Category of an oxidation state entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OxidationCategory {
    Main,
    Extended,
}

impl OxidationCategory {
    pub fn as_db(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Extended => "extended",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "main" => Some(Self::Main),
            "extended" => Some(Self::Extended),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OxidationStateRecord {
    pub atomic_number: u32,
    pub oxidation_state: i32,
    pub category: OxidationCategory,
}

/// Clementi-Raimondi screening constant for one `(n, subshell)` pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreeningConstantRecord {
    pub atomic_number: u32,
    pub n: u32,
    pub subshell: String,
    pub screening: f64,
}

/// Phase transition conditions for one allotrope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseTransitionRecord {
    pub atomic_number: u32,
    pub allotrope: Option<String>,
    pub melting_point: Option<f64>,
    pub boiling_point: Option<f64>,
    pub critical_temperature: Option<f64>,
    pub critical_pressure: Option<f64>,
    pub triple_point_temperature: Option<f64>,
    pub triple_point_pressure: Option<f64>,
    pub is_sublimation_point: Option<bool>,
    pub is_transition: Option<bool>,
}

/// Atomic forward scattering factors on an energy mesh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatteringFactorRecord {
    pub atomic_number: u32,
    pub energy: f64,
    pub f1: Option<f64>,
    pub f2: Option<f64>,
}

/// Periodic-table group name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupRecord {
    pub group_id: u32,
    pub symbol: String,
    pub name: String,
}

/// Chemical series (alkali metals, noble gases, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesRecord {
    pub id: u32,
    pub name: String,
    pub color: Option<String>,
}
