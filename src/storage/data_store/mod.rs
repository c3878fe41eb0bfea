mod config;
mod types;

pub use config::data_store_from_env;
pub use types::{DataStore, PostgresDataStore, SqliteDataStore};
