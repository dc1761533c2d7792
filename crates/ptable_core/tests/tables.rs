use ptable_core::{RepoError, ScalarValue, ValueOrigin};

mod common;

#[test]
fn elements_table_row_count_matches_resolvable_atomic_numbers() {
    let table = common::fixture_table();

    let elements = table.fetch_table("elements").unwrap();
    let atomic_numbers = table.atomic_numbers().unwrap();

    assert_eq!(elements.row_count(), atomic_numbers.len());
    assert_eq!(table.element_count().unwrap() as usize, atomic_numbers.len());

    for z in atomic_numbers {
        assert!(table.resolve(z).is_ok(), "element {z} must resolve");
    }
}

#[test]
fn unknown_table_names_are_not_found() {
    let table = common::fixture_table();
    match table.fetch_table("secrets").unwrap_err() {
        RepoError::NotFound(identifier) => assert_eq!(identifier, "table secrets"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn fetched_tables_carry_typed_cells() {
    let table = common::fixture_table();
    let elements = table.fetch_table("elements").unwrap();

    let z_idx = elements
        .columns
        .iter()
        .position(|c| c == "atomic_number")
        .unwrap();
    let symbol_idx = elements.columns.iter().position(|c| c == "symbol").unwrap();
    let radio_idx = elements
        .columns
        .iter()
        .position(|c| c == "is_radioactive")
        .unwrap();

    let hydrogen = elements
        .rows
        .iter()
        .find(|row| row[z_idx] == Some(ScalarValue::Int(1)))
        .unwrap();
    assert_eq!(hydrogen[symbol_idx], Some(ScalarValue::Text("H".into())));
    assert_eq!(hydrogen[radio_idx], Some(ScalarValue::Bool(false)));
}

#[test]
fn every_whitelisted_table_is_fetchable() {
    let table = common::fixture_table();
    for name in ptable_core::repo::table_repo::TABLE_NAMES {
        let fetched = table.fetch_table(name).unwrap();
        assert_eq!(&fetched.name, name);
        assert!(!fetched.columns.is_empty());
    }
}

#[test]
fn property_metadata_separates_stored_from_computed() {
    let table = common::fixture_table();
    let metadata = table.property_metadata().unwrap();
    assert_eq!(metadata.len(), 4);

    let density = metadata
        .iter()
        .find(|m| m.attribute_name == "density")
        .unwrap();
    assert_eq!(density.value_origin, ValueOrigin::Stored);
    assert_eq!(density.unit.as_deref(), Some("g/cm^3"));

    let mulliken = metadata
        .iter()
        .find(|m| m.attribute_name == "electronegativity_mulliken")
        .unwrap();
    assert_eq!(mulliken.value_origin, ValueOrigin::Computed);
    assert_eq!(mulliken.column_name, None);
}

#[test]
fn electronegativity_sweep_covers_every_element_and_tolerates_gaps() {
    let table = common::fixture_table();
    let rows = table.electronegativities().unwrap();
    assert_eq!(rows.len(), common::FIXTURE_ATOMIC_NUMBERS.len());

    let fluorine = rows.iter().find(|row| row.symbol == "F").unwrap();
    assert!(fluorine.scales["mulliken"].is_some());
    assert!(fluorine.scales["pauling"].is_some());

    // Sparse element: gaps become None in bulk output instead of errors.
    let og = rows.iter().find(|row| row.symbol == "Og").unwrap();
    assert_eq!(og.scales["nagle"], None);
    assert_eq!(og.scales["mulliken"], None);
    // Every scalar scale appears as a column.
    assert_eq!(og.scales.len(), ptable_core::Scale::ALL.len());
}

#[test]
fn records_serialize_to_json_for_downstream_consumers() {
    let table = common::fixture_table();

    let header = table.resolve("Fe").unwrap().header().clone();
    let json = serde_json::to_value(&header).unwrap();
    assert_eq!(json["atomic_number"], 26);
    assert_eq!(json["symbol"], "Fe");

    let fetched = table.fetch_table("groups").unwrap();
    let json = serde_json::to_value(&fetched).unwrap();
    assert_eq!(json["name"], "groups");
    assert!(json["rows"].as_array().unwrap().len() >= 6);
}
