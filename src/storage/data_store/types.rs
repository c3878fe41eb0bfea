use std::str::FromStr;

use sqlx::{Pool, Postgres, Sqlite};

use crate::storage::StorageError;

/// An already-open handle to a SQLite database
#[derive(Clone, Debug)]
pub struct SqliteDataStore {
    pool: sqlx::SqlitePool,
}

/// An already-open handle to a PostgreSQL database
#[derive(Clone, Debug)]
pub struct PostgresDataStore {
    pool: sqlx::PgPool,
}

impl SqliteDataStore {
    /// Open a lazy connection pool for the database at `url`.
    ///
    /// The database file is created if it does not exist. Connections are
    /// established on first use, so a bad URL fails here but an unreachable
    /// database fails at the first query.
    pub fn connect(url: &str) -> Result<Self, StorageError> {
        let opts = sqlx::sqlite::SqliteConnectOptions::from_str(url)
            .map_err(|e| StorageError::Config(format!("Invalid SQLite URL: {e}")))?
            .create_if_missing(true);

        Ok(Self {
            pool: sqlx::sqlite::SqlitePool::connect_lazy_with(opts),
        })
    }
}

impl PostgresDataStore {
    /// Open a lazy connection pool for the database at `url`.
    pub fn connect(url: &str) -> Result<Self, StorageError> {
        let pool = sqlx::PgPool::connect_lazy(url)
            .map_err(|e| StorageError::Config(format!("Invalid PostgreSQL URL: {e}")))?;

        Ok(Self { pool })
    }
}

/// Backend access for components that issue SQL against an injected store.
///
/// Exactly one accessor returns `Some` for a given store.
pub trait DataStore: Send + Sync {
    fn as_sqlite(&self) -> Option<&Pool<Sqlite>>;
    fn as_postgres(&self) -> Option<&Pool<Postgres>>;
}

impl DataStore for SqliteDataStore {
    fn as_sqlite(&self) -> Option<&Pool<Sqlite>> {
        Some(&self.pool)
    }

    fn as_postgres(&self) -> Option<&Pool<Postgres>> {
        None
    }
}

impl DataStore for PostgresDataStore {
    fn as_sqlite(&self) -> Option<&Pool<Sqlite>> {
        None
    }

    fn as_postgres(&self) -> Option<&Pool<Postgres>> {
        Some(&self.pool)
    }
}
