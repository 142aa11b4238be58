//! SQLite bootstrap for the learned-override store.
//!
//! # Responsibility
//! - Open and configure SQLite connections for the planner core.
//! - Bring the override schema up to date before any application read/write.
//!
//! # Invariants
//! - The installed schema version is tracked via `PRAGMA user_version`.
//! - Returned connections always carry the current schema.
//! - A store written by a newer build is rejected, never altered.

use log::{error, info};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Version stamped into `PRAGMA user_version` once the schema is installed.
const SCHEMA_VERSION: u32 = 1;

const OVERRIDES_SCHEMA: &str = include_str!("overrides_schema.sql");

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "override store schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Opens the override store file, installing the schema when absent.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let mut conn = Connection::open(path)?;
    match ensure_schema(&mut conn) {
        Ok(()) => {
            info!("event=db_open module=db status=ok mode=file");
            Ok(conn)
        }
        Err(err) => {
            error!("event=db_open module=db status=error mode=file error={err}");
            Err(err)
        }
    }
}

/// Opens an in-memory override store, mainly for tests.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let mut conn = Connection::open_in_memory()?;
    ensure_schema(&mut conn)?;
    Ok(conn)
}

/// Installs the override schema when the store is fresh; a no-op on a store
/// already at the current version. Schema and version stamp commit in one
/// transaction.
fn ensure_schema(conn: &mut Connection) -> DbResult<()> {
    let installed: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if installed > SCHEMA_VERSION {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: installed,
            latest_supported: SCHEMA_VERSION,
        });
    }
    if installed == SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.transaction()?;
    tx.execute_batch(OVERRIDES_SCHEMA)?;
    tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    tx.commit()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ensure_schema, open_db_in_memory, DbError, SCHEMA_VERSION};
    use rusqlite::Connection;

    #[test]
    fn fresh_store_lands_on_the_current_schema_version() {
        let conn = open_db_in_memory().unwrap();
        let version: u32 = conn
            .query_row("PRAGMA user_version;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn reapplying_the_schema_is_a_no_op() {
        let mut conn = open_db_in_memory().unwrap();
        conn.execute(
            "INSERT INTO overrides (name, category) VALUES ('rice', 'Pantry');",
            [],
        )
        .unwrap();

        ensure_schema(&mut conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM overrides;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn newer_on_disk_schema_is_rejected() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA user_version = 99;").unwrap();

        let err = ensure_schema(&mut conn).unwrap_err();
        assert!(matches!(
            err,
            DbError::UnsupportedSchemaVersion {
                db_version: 99,
                latest_supported: SCHEMA_VERSION,
            }
        ));
    }
}
