use ptable_core::{RepoError, ScaleError};

mod common;

#[test]
fn ion_requires_a_sensible_charge() {
    let table = common::fixture_table();
    assert!(matches!(
        table.ion("Na", 0).unwrap_err(),
        ScaleError::InvalidCharge { charge: 0 }
    ));
    // Hydrogen cannot lose two electrons.
    assert!(matches!(
        table.ion("H", 2).unwrap_err(),
        ScaleError::InvalidCharge { charge: 2 }
    ));
}

#[test]
fn ionic_radius_lookup_by_charge_and_coordination() {
    let table = common::fixture_table();
    let sodium_ion = table.ion("Na", 1).unwrap();

    assert_eq!(sodium_ion.ionic_radius("VI").unwrap(), Some(102.0));
    assert_eq!(sodium_ion.crystal_radius("VI").unwrap(), Some(116.0));
    assert_eq!(sodium_ion.ionic_radius("VIII").unwrap(), None);

    let radii = sodium_ion.radii().unwrap();
    assert_eq!(radii.len(), 2);
    assert!(radii.iter().all(|r| r.charge == 1));
}

#[test]
fn spin_split_entries_make_the_lookup_ambiguous() {
    let table = common::fixture_table();
    let iron_ii = table.ion("Fe", 2).unwrap();

    match iron_ii.ionic_radius("VI").unwrap_err() {
        RepoError::AmbiguousKey { matches, .. } => assert_eq!(matches, 2),
        other => panic!("expected AmbiguousKey, got {other:?}"),
    }

    // The unambiguous Fe(3+) entry still resolves directly.
    let iron_iii = table.ion("Fe", 3).unwrap();
    assert_eq!(iron_iii.ionic_radius("VI").unwrap(), Some(64.5));
}

#[test]
fn charge_state_quantities_delegate_to_the_element() {
    let table = common::fixture_table();
    let iron_ii = table.ion("Fe", 2).unwrap();

    // (IE3 - IE2) / 2 for the Fe(2+) cation.
    let expected = (30.651 - 16.19921) / 2.0;
    assert!((iron_ii.hardness().unwrap() - expected).abs() < 1e-9);
    assert!((iron_ii.softness().unwrap() - 1.0 / (2.0 * expected)).abs() < 1e-12);

    let mulliken = iron_ii.electronegativity_mulliken().unwrap();
    assert!((mulliken - (30.651 + 16.19921) / 2.0).abs() < 1e-9);
}

#[test]
fn electron_count_reflects_the_charge() {
    let table = common::fixture_table();
    let iron_iii = table.ion("Fe", 3).unwrap();
    assert_eq!(iron_iii.electrons(), 23);
    assert_eq!(iron_iii.charge(), 3);
    assert_eq!(iron_iii.element().symbol(), "Fe");
}

#[test]
fn display_uses_chemical_notation() {
    let table = common::fixture_table();
    assert_eq!(format!("{}", table.ion("Na", 1).unwrap()), "Na+");
    assert_eq!(format!("{}", table.ion("Fe", 2).unwrap()), "Fe2+");
    assert_eq!(format!("{}", table.ion("Cl", -1).unwrap()), "Cl-");
}
