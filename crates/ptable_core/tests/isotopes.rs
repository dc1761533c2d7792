use ptable_core::RepoError;

mod common;

#[test]
fn isotope_lookup_by_key() {
    let table = common::fixture_table();
    let deuterium = table.isotope(1, 2).unwrap();
    assert_eq!(deuterium.atomic_number(), 1);
    assert_eq!(deuterium.mass_number(), 2);
    assert!((deuterium.mass().unwrap() - 2.01410177811).abs() < 1e-9);
    assert_eq!(deuterium.spin().unwrap().as_deref(), Some("1"));
}

#[test]
fn element_lists_isotopes_ordered_by_mass_number() {
    let table = common::fixture_table();
    let hydrogen = table.resolve("H").unwrap();
    let isotopes = hydrogen.isotopes().unwrap();
    assert_eq!(isotopes.len(), 3);
    let mass_numbers: Vec<u32> = isotopes.iter().map(|i| i.mass_number()).collect();
    assert_eq!(mass_numbers, vec![1, 2, 3]);
    assert!(isotopes.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn element_isotope_accessor_and_not_found() {
    let table = common::fixture_table();
    let hydrogen = table.resolve("H").unwrap();

    let tritium = hydrogen.isotope(3).unwrap();
    assert!(tritium.is_radioactive().unwrap());
    assert_eq!(tritium.half_life().unwrap(), Some(12.32));
    assert_eq!(tritium.half_life_unit().unwrap().as_deref(), Some("y"));

    let err = hydrogen.isotope(9).unwrap_err();
    match err {
        RepoError::NotFound(identifier) => assert_eq!(identifier, "isotope H-9"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn missing_isotope_key_is_not_found() {
    let table = common::fixture_table();
    assert!(matches!(
        table.isotope(26, 99).unwrap_err(),
        RepoError::NotFound(_)
    ));
}

#[test]
fn mass_number_is_never_below_atomic_number() {
    let table = common::fixture_table();
    for &z in common::FIXTURE_ATOMIC_NUMBERS {
        let element = table.resolve(z).unwrap();
        for isotope in element.isotopes().unwrap() {
            assert!(
                isotope.mass_number() >= isotope.atomic_number(),
                "{isotope} violates A >= Z"
            );
        }
    }
}

#[test]
fn isotope_back_references_its_element() {
    let table = common::fixture_table();
    let iron56 = table.isotope(26, 56).unwrap();
    let element = iron56.element().unwrap();
    assert_eq!(element.atomic_number(), 26);
    assert_eq!(element.symbol(), "Fe");
}

#[test]
fn decay_modes_for_radioactive_nuclides() {
    let table = common::fixture_table();
    let tritium = table.isotope(1, 3).unwrap();
    let modes = tritium.decay_modes().unwrap();
    assert_eq!(modes.len(), 1);
    assert_eq!(modes[0].mode, "B-");
    assert_eq!(modes[0].intensity, Some(100.0));

    let stable = table.isotope(1, 1).unwrap();
    assert!(stable.decay_modes().unwrap().is_empty());
}

#[test]
fn attribute_by_name_and_unknown_attribute() {
    let table = common::fixture_table();
    let c13 = table.isotope(6, 13).unwrap();

    let abundance = c13.attribute("abundance").unwrap().unwrap();
    assert_eq!(abundance.as_f64(), Some(1.07));
    assert_eq!(c13.attribute("half_life").unwrap(), None);

    match c13.attribute("flavor").unwrap_err() {
        RepoError::UnknownAttribute { entity, name } => {
            assert_eq!(entity, "isotope");
            assert_eq!(name, "flavor");
        }
        other => panic!("expected UnknownAttribute, got {other:?}"),
    }
}

#[test]
fn equality_and_display_follow_the_canonical_key() {
    let table = common::fixture_table();
    let a = table.isotope(6, 12).unwrap();
    let b = table.resolve("C").unwrap().isotope(12).unwrap();
    assert_eq!(a, b);
    assert_eq!(format!("{a}"), "C-12 (Z=6)");

    let describe = a.describe().unwrap();
    assert!(describe.starts_with("C-12"));
    assert!(describe.contains("abundance"));
}

#[test]
fn stability_flags_are_consistent() {
    let table = common::fixture_table();
    let c12 = table.isotope(6, 12).unwrap();
    assert!(c12.is_stable().unwrap());
    assert!(!c12.is_radioactive().unwrap());

    let og294 = table.isotope(118, 294).unwrap();
    assert!(og294.is_radioactive().unwrap());
    assert_eq!(og294.abundance().unwrap(), None);
}
