//! Environment-driven data store construction

use std::env;

use super::types::{DataStore, PostgresDataStore, SqliteDataStore};
use crate::storage::StorageError;

/// Build a data store from `DATA_STORE_TYPE` and `DATA_STORE_URL`.
///
/// The returned store is owned by the caller and handed to repositories by
/// injection; this crate never holds a process-wide connection singleton.
pub fn data_store_from_env() -> Result<Box<dyn DataStore>, StorageError> {
    let store_type = env::var("DATA_STORE_TYPE")
        .map_err(|_| StorageError::Config("DATA_STORE_TYPE must be set".to_string()))?;
    let store_url = env::var("DATA_STORE_URL")
        .map_err(|_| StorageError::Config("DATA_STORE_URL must be set".to_string()))?;

    tracing::info!("Initializing data store with type: {}", store_type);

    match store_type.as_str() {
        "sqlite" => Ok(Box::new(SqliteDataStore::connect(&store_url)?)),
        "postgres" => Ok(Box::new(PostgresDataStore::connect(&store_url)?)),
        t => Err(StorageError::Config(format!(
            "Unsupported store type: {t}. Supported types are 'sqlite' and 'postgres'"
        ))),
    }
}
