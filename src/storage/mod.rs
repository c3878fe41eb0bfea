mod data_store;
mod errors;
mod schema_validation;

pub use data_store::{DataStore, PostgresDataStore, SqliteDataStore, data_store_from_env};
pub use errors::StorageError;

// Re-export schema validation functions for internal use
pub(crate) use schema_validation::{validate_postgres_table_schema, validate_sqlite_table_schema};
