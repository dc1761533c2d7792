//! Element header record and the closed attribute registry.
//!
//! # Responsibility
//! - Define the eagerly-loaded identity of an element (key + display name).
//! - Enumerate every stored element attribute reachable by name.
//!
//! # Invariants
//! - `ELEMENT_ATTRIBUTES` is the only bridge between attribute names and
//!   SQL column names; lookups outside it are `UnknownAttribute`.
//! - Registry column names must exist in the `elements` table schema.

use super::value::ValueKind;
use serde::Serialize;

/// The part of an element row loaded eagerly: canonical key plus display
/// identity. Everything else is fetched lazily, one attribute at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementHeader {
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
}

/// One entry of the closed element-attribute registry.
#[derive(Debug, Clone, Copy)]
pub struct AttributeSpec {
    /// Public attribute name used by callers.
    pub name: &'static str,
    /// Column in the `elements` table backing the attribute.
    pub column: &'static str,
    pub kind: ValueKind,
}

/// Stored element attributes reachable through `Element::attribute`.
///
/// Presentation-only metadata (units, citations) lives in the
/// `propertymetadata` table and deliberately does not appear here.
pub const ELEMENT_ATTRIBUTES: &[AttributeSpec] = &[
    attr("abundance_crust", ValueKind::Real),
    attr("abundance_sea", ValueKind::Real),
    attr("atomic_radius", ValueKind::Real),
    attr("atomic_radius_rahm", ValueKind::Real),
    attr("atomic_weight", ValueKind::Real),
    attr("atomic_weight_uncertainty", ValueKind::Real),
    attr("block", ValueKind::Text),
    attr("c6_gb", ValueKind::Real),
    attr("cas", ValueKind::Text),
    attr("covalent_radius_bragg", ValueKind::Real),
    attr("covalent_radius_cordero", ValueKind::Real),
    attr("covalent_radius_pyykko", ValueKind::Real),
    attr("covalent_radius_pyykko_double", ValueKind::Real),
    attr("covalent_radius_pyykko_triple", ValueKind::Real),
    attr("density", ValueKind::Real),
    attr("dipole_polarizability", ValueKind::Real),
    attr("dipole_polarizability_unc", ValueKind::Real),
    attr("discovery_year", ValueKind::Int),
    attr("electron_affinity", ValueKind::Real),
    AttributeSpec {
        name: "econf",
        column: "electronic_configuration",
        kind: ValueKind::Text,
    },
    attr("en_allen", ValueKind::Real),
    attr("en_ghosh", ValueKind::Real),
    attr("en_gunnarsson_lundqvist", ValueKind::Real),
    attr("en_miedema", ValueKind::Real),
    attr("en_mullay", ValueKind::Real),
    attr("en_pauling", ValueKind::Real),
    attr("en_robles_bartolotti", ValueKind::Real),
    attr("evaporation_heat", ValueKind::Real),
    attr("fusion_heat", ValueKind::Real),
    attr("gas_basicity", ValueKind::Real),
    attr("geochemical_class", ValueKind::Text),
    attr("glawe_number", ValueKind::Int),
    attr("goldschmidt_class", ValueKind::Text),
    attr("group_id", ValueKind::Int),
    attr("heat_of_formation", ValueKind::Real),
    attr("is_monoisotopic", ValueKind::Bool),
    attr("is_radioactive", ValueKind::Bool),
    attr("lattice_constant", ValueKind::Real),
    attr("lattice_structure", ValueKind::Text),
    attr("mendeleev_number", ValueKind::Int),
    attr("metallic_radius", ValueKind::Real),
    attr("metallic_radius_c12", ValueKind::Real),
    attr("molar_heat_capacity", ValueKind::Real),
    attr("name_origin", ValueKind::Text),
    attr("period", ValueKind::Int),
    attr("pettifor_number", ValueKind::Int),
    attr("proton_affinity", ValueKind::Real),
    attr("specific_heat_capacity", ValueKind::Real),
    attr("thermal_conductivity", ValueKind::Real),
    attr("vdw_radius", ValueKind::Real),
    attr("vdw_radius_alvarez", ValueKind::Real),
    attr("vdw_radius_batsanov", ValueKind::Real),
    attr("vdw_radius_bondi", ValueKind::Real),
    attr("vdw_radius_mm3", ValueKind::Real),
    attr("vdw_radius_rt", ValueKind::Real),
    attr("vdw_radius_truhlar", ValueKind::Real),
    attr("vdw_radius_uff", ValueKind::Real),
];

const fn attr(name: &'static str, kind: ValueKind) -> AttributeSpec {
    AttributeSpec {
        name,
        column: name,
        kind,
    }
}

/// Looks up an attribute by public name.
pub fn element_attribute(name: &str) -> Option<&'static AttributeSpec> {
    ELEMENT_ATTRIBUTES.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::{element_attribute, ELEMENT_ATTRIBUTES};

    #[test]
    fn registry_names_are_unique() {
        for (i, spec) in ELEMENT_ATTRIBUTES.iter().enumerate() {
            assert!(
                !ELEMENT_ATTRIBUTES[i + 1..].iter().any(|s| s.name == spec.name),
                "duplicate attribute name {}",
                spec.name
            );
        }
    }

    #[test]
    fn econf_maps_to_storage_column() {
        let spec = element_attribute("econf").unwrap();
        assert_eq!(spec.column, "electronic_configuration");
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(element_attribute("symbol").is_none());
        assert!(element_attribute("no_such_property").is_none());
    }
}
