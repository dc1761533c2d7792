use ptable_core::RepoError;

mod common;

#[test]
fn resolves_atomic_number_symbol_and_name_to_the_same_key() {
    let table = common::fixture_table();

    for &z in common::FIXTURE_ATOMIC_NUMBERS {
        let by_number = table.resolve(z).unwrap();
        let by_symbol = table.resolve(by_number.symbol()).unwrap();
        let by_name = table.resolve(by_number.name()).unwrap();

        assert_eq!(by_number.atomic_number(), z);
        assert_eq!(by_symbol.atomic_number(), z);
        assert_eq!(by_name.atomic_number(), z);
        assert_eq!(by_number, by_symbol);
        assert_eq!(by_symbol, by_name);
    }
}

#[test]
fn resolves_hydrogen_by_number() {
    let table = common::fixture_table();
    let h = table.resolve(1u32).unwrap();
    assert_eq!(h.symbol(), "H");
    assert_eq!(h.atomic_number(), 1);
    assert_eq!(h.name(), "Hydrogen");
}

#[test]
fn symbol_matching_is_case_insensitive() {
    let table = common::fixture_table();
    assert_eq!(table.resolve("he").unwrap().atomic_number(), 2);
    assert_eq!(table.resolve("HE").unwrap().atomic_number(), 2);
    assert_eq!(table.resolve("fe").unwrap().atomic_number(), 26);
}

#[test]
fn name_matching_is_case_insensitive() {
    let table = common::fixture_table();
    assert_eq!(table.resolve("oganesson").unwrap().atomic_number(), 118);
    assert_eq!(table.resolve("IRON").unwrap().atomic_number(), 26);
}

#[test]
fn numeric_strings_resolve_as_atomic_numbers() {
    let table = common::fixture_table();
    assert_eq!(table.resolve("1").unwrap().symbol(), "H");
    assert_eq!(table.resolve(" 26 ").unwrap().symbol(), "Fe");
}

#[test]
fn unknown_symbol_is_not_found_and_echoes_the_identifier() {
    let table = common::fixture_table();
    let err = table.resolve("Xx").unwrap_err();
    match err {
        RepoError::NotFound(identifier) => assert_eq!(identifier, "Xx"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn unknown_atomic_number_is_not_found() {
    let table = common::fixture_table();
    assert!(matches!(
        table.resolve(42u32).unwrap_err(),
        RepoError::NotFound(_)
    ));
}

#[test]
fn partial_names_are_rejected_not_guessed() {
    let table = common::fixture_table();
    assert!(matches!(
        table.resolve("Hydro").unwrap_err(),
        RepoError::NotFound(_)
    ));
    assert!(matches!(
        table.resolve("Oxy").unwrap_err(),
        RepoError::NotFound(_)
    ));
}

#[test]
fn duplicate_names_are_ambiguous_not_guessed() {
    let table = common::fixture_table();
    table
        .connection()
        .execute(
            "INSERT INTO elements (atomic_number, symbol, name, block, period)
             VALUES (119, 'Uue', 'Hydrogen', 's', 8);",
            [],
        )
        .unwrap();

    match table.resolve("hydrogen").unwrap_err() {
        RepoError::AmbiguousKey {
            identifier,
            matches,
        } => {
            assert_eq!(identifier, "hydrogen");
            assert_eq!(matches, 2);
        }
        other => panic!("expected AmbiguousKey, got {other:?}"),
    }

    // The symbol path is unaffected by the name collision.
    assert_eq!(table.resolve("H").unwrap().atomic_number(), 1);
}

#[test]
fn sparse_elements_resolve_fine() {
    let table = common::fixture_table();
    let og = table.resolve(118u32).unwrap();
    assert_eq!(og.symbol(), "Og");
    // Most physical properties are null for Og, which is data, not an error.
    assert_eq!(og.density().unwrap(), None);
    assert_eq!(og.dipole_polarizability().unwrap(), None);
}

#[test]
fn proxies_order_and_display_by_canonical_key() {
    let table = common::fixture_table();
    let h = table.resolve("H").unwrap();
    let fe = table.resolve("Fe").unwrap();

    assert!(h < fe);
    assert_eq!(format!("{h}"), "1 H Hydrogen");
    assert_eq!(format!("{fe}"), "26 Fe Iron");
}
