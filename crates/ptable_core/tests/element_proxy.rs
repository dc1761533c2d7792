use ptable_core::{OxidationCategory, RepoError, ScalarValue};

mod common;

#[test]
fn attribute_access_is_memoized_per_instance() {
    let table = common::fixture_table();
    let carbon = table.resolve("C").unwrap();

    let first = carbon.density().unwrap().unwrap();
    assert!((first - 2.267).abs() < 1e-12);

    // Mutate the row behind the proxy's back; the writable fixture store
    // makes the cache observable without counting queries.
    table
        .connection()
        .execute("UPDATE elements SET density = 99.9 WHERE atomic_number = 6;", [])
        .unwrap();

    let second = carbon.density().unwrap().unwrap();
    assert_eq!(first, second, "cached value must not be re-fetched");

    // A fresh proxy reads the updated row: caching is per instance, not
    // process-wide.
    let fresh = table.resolve("C").unwrap();
    assert!((fresh.density().unwrap().unwrap() - 99.9).abs() < 1e-12);
}

#[test]
fn relation_access_is_memoized_per_instance() {
    let table = common::fixture_table();
    let carbon = table.resolve("C").unwrap();

    let first = carbon.ionization_energy(1).unwrap().unwrap();
    table
        .connection()
        .execute(
            "UPDATE ionizationenergies SET ionization_energy = 1.0
             WHERE atomic_number = 6 AND ion_charge = 0;",
            [],
        )
        .unwrap();
    assert_eq!(carbon.ionization_energy(1).unwrap().unwrap(), first);
}

#[test]
fn null_attributes_are_absent_not_errors() {
    let table = common::fixture_table();
    let helium = table.resolve("He").unwrap();
    assert_eq!(helium.attribute("en_pauling").unwrap(), None);
    assert_eq!(helium.electron_affinity().unwrap(), None);
}

#[test]
fn unknown_attributes_are_rejected_by_name() {
    let table = common::fixture_table();
    let carbon = table.resolve("C").unwrap();
    let err = carbon.attribute("electron_mood").unwrap_err();
    match err {
        RepoError::UnknownAttribute { entity, name } => {
            assert_eq!(entity, "element");
            assert_eq!(name, "electron_mood");
        }
        other => panic!("expected UnknownAttribute, got {other:?}"),
    }
}

#[test]
fn attribute_by_name_matches_typed_getter() {
    let table = common::fixture_table();
    let carbon = table.resolve("C").unwrap();

    let by_name = carbon.attribute("covalent_radius_pyykko").unwrap().unwrap();
    assert_eq!(by_name, ScalarValue::Real(75.0));
    assert_eq!(carbon.covalent_radius().unwrap(), Some(75.0));

    let econf = carbon.attribute("econf").unwrap().unwrap();
    assert_eq!(econf.as_str(), Some("[He] 2s2 2p2"));
}

#[test]
fn block_period_and_group_are_available() {
    let table = common::fixture_table();
    let iron = table.resolve("Fe").unwrap();
    assert_eq!(iron.block().unwrap(), "d");
    assert_eq!(iron.period().unwrap(), 4);
    assert_eq!(iron.group_id().unwrap(), Some(8));

    let group = iron.group().unwrap().unwrap();
    assert_eq!(group.name, "Iron group");
    let series = iron.series().unwrap().unwrap();
    assert_eq!(series.name, "Transition metals");
}

#[test]
fn mass_number_prefers_the_most_abundant_isotope() {
    let table = common::fixture_table();
    let iron = table.resolve("Fe").unwrap();
    assert_eq!(iron.mass_number().unwrap(), 56);
    assert_eq!(iron.neutrons().unwrap(), 30);
    assert_eq!(iron.protons(), 26);
    assert_eq!(iron.electrons(), 26);
}

#[test]
fn mass_number_falls_back_without_abundance_data() {
    let table = common::fixture_table();
    // Og-294 has no abundance; the lightest listed isotope wins.
    let og = table.resolve("Og").unwrap();
    assert_eq!(og.mass_number().unwrap(), 294);
    // He has no isotopes in the fixture at all: rounded atomic weight.
    let he = table.resolve("He").unwrap();
    assert_eq!(he.mass_number().unwrap(), 4);
}

#[test]
fn oxidation_state_categories_filter_correctly() {
    let table = common::fixture_table();
    let iron = table.resolve("Fe").unwrap();
    assert_eq!(iron.oxistates().unwrap(), vec![2, 3]);
    assert_eq!(
        iron.oxidation_states(Some(OxidationCategory::Extended)).unwrap(),
        vec![4, 6]
    );
    assert_eq!(iron.oxidation_states(None).unwrap(), vec![2, 3, 4, 6]);
}

#[test]
fn oxides_follow_positive_main_oxidation_states() {
    let table = common::fixture_table();
    let carbon = table.resolve("C").unwrap();
    assert_eq!(carbon.oxides().unwrap(), vec!["CO2".to_string()]);
    let sodium = table.resolve("Na").unwrap();
    assert_eq!(sodium.oxides().unwrap(), vec!["Na2O".to_string()]);
}

#[test]
fn phase_transition_proxies_handle_allotropes() {
    let table = common::fixture_table();

    let oxygen = table.resolve("O").unwrap();
    assert_eq!(oxygen.melting_point().unwrap(), Some(54.36));
    assert_eq!(oxygen.boiling_point().unwrap(), Some(90.188));

    // Carbon's two allotropes disagree by more than 1%: no single value.
    let carbon = table.resolve("C").unwrap();
    assert_eq!(carbon.melting_point().unwrap(), None);
    assert_eq!(carbon.boiling_point().unwrap(), None);

    // No phase transition rows at all.
    let og = table.resolve("Og").unwrap();
    assert_eq!(og.melting_point().unwrap(), None);
}

#[test]
fn mass_str_formats_weight_and_radioactivity() {
    let table = common::fixture_table();
    assert_eq!(table.resolve("H").unwrap().mass_str().unwrap(), "1.008");
    assert_eq!(table.resolve("Og").unwrap().mass_str().unwrap(), "[294]");
}

#[test]
fn inchi_derives_from_the_symbol() {
    let table = common::fixture_table();
    assert_eq!(table.resolve("Fe").unwrap().inchi(), "InChI=1S/Fe");
}

#[test]
fn scattering_factors_come_back_ordered_by_energy() {
    let table = common::fixture_table();
    let carbon = table.resolve("C").unwrap();
    let factors = carbon.scattering_factors().unwrap();
    assert_eq!(factors.len(), 3);
    assert!(factors.windows(2).all(|w| w[0].energy <= w[1].energy));
}
