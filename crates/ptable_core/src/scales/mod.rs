//! Derived-property engine: named scales over stored base attributes.
//!
//! # Responsibility
//! - Enumerate the closed set of electronegativity scales.
//! - Declare, per scale, which stored attributes the formula requires.
//! - Surface missing inputs as `InsufficientData`, never as a default.
//!
//! # Invariants
//! - `Scale` is closed; scale dispatch never goes through dynamic lookup.
//! - Formulas in [`formulas`] are pure and deterministic.

use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod formulas;

pub type ScaleResult<T> = Result<T, ScaleError>;

/// Error for derived-property evaluation.
#[derive(Debug)]
pub enum ScaleError {
    Repo(RepoError),
    /// A required base attribute is null for this element.
    InsufficientData {
        symbol: String,
        attribute: String,
    },
    /// The scale name does not identify a known scale.
    UnknownScale { name: String },
    /// Charge outside the domain of the requested quantity.
    InvalidCharge { charge: i32 },
}

impl Display for ScaleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::InsufficientData { symbol, attribute } => write!(
                f,
                "insufficient data for {symbol}: required attribute `{attribute}` is null"
            ),
            Self::UnknownScale { name } => write!(
                f,
                "scale `{name}` not found, available scales are: {}",
                Scale::ALL
                    .iter()
                    .map(|s| s.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            Self::InvalidCharge { charge } => {
                write!(f, "charge has to be a non-negative integer, got: {charge}")
            }
        }
    }
}

impl Error for ScaleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ScaleError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Method for computing the effective nuclear charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeffMethod {
    /// Slater's rules applied to the parsed electronic configuration.
    #[default]
    Slater,
    /// Stored Clementi-Raimondi SCF screening constants.
    Clementi,
}

/// Which radius column of the ionic radii table to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RadiusKind {
    #[default]
    Crystal,
    Ionic,
}

/// Scalar electronegativity scales.
///
/// Li-Xue is deliberately absent: its result is keyed by coordination and
/// spin, so it lives on `Element::electronegativity_li_xue` instead of the
/// scalar dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    Allen,
    AllredRochow,
    CottrellSutton,
    Ghosh,
    Gordy,
    GunnarssonLundqvist,
    MartynovBatsanov,
    Miedema,
    Mullay,
    Mulliken,
    Nagle,
    Pauling,
    RoblesBartolotti,
    Sanderson,
}

impl Scale {
    /// Every scale, sorted by name.
    pub const ALL: [Scale; 14] = [
        Scale::Allen,
        Scale::AllredRochow,
        Scale::CottrellSutton,
        Scale::Ghosh,
        Scale::Gordy,
        Scale::GunnarssonLundqvist,
        Scale::MartynovBatsanov,
        Scale::Miedema,
        Scale::Mullay,
        Scale::Mulliken,
        Scale::Nagle,
        Scale::Pauling,
        Scale::RoblesBartolotti,
        Scale::Sanderson,
    ];

    /// Canonical kebab-case scale name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Allen => "allen",
            Self::AllredRochow => "allred-rochow",
            Self::CottrellSutton => "cottrell-sutton",
            Self::Ghosh => "ghosh",
            Self::Gordy => "gordy",
            Self::GunnarssonLundqvist => "gunnarsson-lundqvist",
            Self::MartynovBatsanov => "martynov-batsanov",
            Self::Miedema => "miedema",
            Self::Mullay => "mullay",
            Self::Mulliken => "mulliken",
            Self::Nagle => "nagle",
            Self::Pauling => "pauling",
            Self::RoblesBartolotti => "robles-bartolotti",
            Self::Sanderson => "sanderson",
        }
    }

    /// Parses a case-insensitive scale name.
    pub fn parse(name: &str) -> ScaleResult<Self> {
        let lowered = name.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|scale| scale.name() == lowered)
            .ok_or(ScaleError::UnknownScale {
                name: name.to_string(),
            })
    }

    /// Stored base attributes this scale's formula reads.
    ///
    /// Relation-backed inputs are spelled with their table, e.g.
    /// `ionization_energies[1]` for the first ionization energy.
    pub fn required_inputs(self) -> &'static [&'static str] {
        match self {
            Self::Allen => &["en_allen"],
            Self::Ghosh => &["en_ghosh"],
            Self::GunnarssonLundqvist => &["en_gunnarsson_lundqvist"],
            Self::Miedema => &["en_miedema"],
            Self::Mullay => &["en_mullay"],
            Self::Pauling => &["en_pauling"],
            Self::RoblesBartolotti => &["en_robles_bartolotti"],
            Self::AllredRochow | Self::CottrellSutton | Self::Gordy => {
                &["econf", "covalent_radius_pyykko"]
            }
            Self::MartynovBatsanov => &["econf", "ionization_energies[1..n_valence]"],
            Self::Mulliken => &["ionization_energies[1]", "electron_affinity"],
            Self::Nagle => &["econf", "dipole_polarizability"],
            Self::Sanderson => &["covalent_radius_pyykko"],
        }
    }

    /// Whether the value is read from a stored column rather than computed.
    pub fn is_stored(self) -> bool {
        matches!(
            self,
            Self::Allen
                | Self::Ghosh
                | Self::GunnarssonLundqvist
                | Self::Miedema
                | Self::Mullay
                | Self::Pauling
                | Self::RoblesBartolotti
        )
    }

    /// Column backing a stored scale.
    pub(crate) fn stored_attribute(self) -> Option<&'static str> {
        match self {
            Self::Allen => Some("en_allen"),
            Self::Ghosh => Some("en_ghosh"),
            Self::GunnarssonLundqvist => Some("en_gunnarsson_lundqvist"),
            Self::Miedema => Some("en_miedema"),
            Self::Mullay => Some("en_mullay"),
            Self::Pauling => Some("en_pauling"),
            Self::RoblesBartolotti => Some("en_robles_bartolotti"),
            _ => None,
        }
    }
}

impl Display for Scale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{Scale, ScaleError};

    #[test]
    fn names_round_trip_through_parse() {
        for scale in Scale::ALL {
            assert_eq!(Scale::parse(scale.name()).unwrap(), scale);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Scale::parse("Allred-Rochow").unwrap(), Scale::AllredRochow);
        assert_eq!(Scale::parse(" PAULING ").unwrap(), Scale::Pauling);
    }

    #[test]
    fn unknown_scale_lists_available_names() {
        let err = Scale::parse("li-xue").unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, ScaleError::UnknownScale { .. }));
        assert!(message.contains("sanderson"));
        assert!(message.contains("pauling"));
    }

    #[test]
    fn all_is_sorted_by_name() {
        let names: Vec<_> = Scale::ALL.iter().map(|s| s.name()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn stored_scales_declare_their_column() {
        for scale in Scale::ALL {
            assert_eq!(scale.is_stored(), scale.stored_attribute().is_some());
        }
    }
}
