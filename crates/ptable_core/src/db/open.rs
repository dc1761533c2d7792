//! Connection bootstrap for the property store.
//!
//! # Responsibility
//! - Open the shipped store read-only for runtime queries.
//! - Open writable connections for offline maintenance and tests.
//! - Emit `db_open` logging events with duration and status.
//!
//! # Invariants
//! - Runtime connections carry `SQLITE_OPEN_READ_ONLY` and a verified
//!   schema version; they never apply migrations.
//! - Maintenance connections have `foreign_keys=ON` and all migrations
//!   applied before they are returned.

use super::migrations::{apply_migrations, verify_version};
use super::DbResult;
use log::{error, info};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::time::{Duration, Instant};

/// Opens the property store read-only.
///
/// This is the runtime entry point: the store is an immutable shipped
/// asset, so a missing file or a schema version other than the one this
/// binary supports aborts initialization.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=read_only");

    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = match Connection::open_with_flags(path, flags) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=read_only duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match configure_read_only(&conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode=read_only duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=read_only duration_ms={} error_code=db_verify_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Opens the property store writable for offline population.
///
/// The caller must be the only writer; this path exists for the data
/// maintenance pipeline and is never used at runtime.
pub fn open_db_maintenance(path: impl AsRef<Path>) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=maintenance");

    let mut conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=maintenance duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_writable(&mut conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode=maintenance duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=maintenance duration_ms={} error_code=db_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Opens an in-memory store with the full schema applied.
///
/// Substrate for test fixtures and ETL staging; behaves like a
/// maintenance connection.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let mut conn = Connection::open_in_memory()?;
    bootstrap_writable(&mut conn)?;
    Ok(conn)
}

fn configure_read_only(conn: &Connection) -> DbResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    verify_version(conn)?;
    Ok(())
}

fn bootstrap_writable(conn: &mut Connection) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(conn)?;
    Ok(())
}
