use ptable_core::PeriodicTable;

/// Builds an in-memory store seeded with a representative slice of the
/// periodic table. The connection stays writable so tests can probe
/// memoization by mutating rows behind a proxy's back.
pub fn fixture_table() -> PeriodicTable {
    let table = PeriodicTable::open_in_memory().expect("open in-memory store");
    table
        .connection()
        .execute_batch(include_str!("fixture.sql"))
        .expect("seed fixture data");
    table
}

/// Atomic numbers present in the fixture, ascending.
pub const FIXTURE_ATOMIC_NUMBERS: &[u32] =
    &[1, 2, 3, 6, 8, 9, 10, 11, 17, 18, 26, 36, 54, 86, 118];
