//! userdb - User persistence over SQLite and PostgreSQL
//!
//! This crate provides a small repository over a single `users` table,
//! together with a JSON pretty-printing helper used for test fixtures.
//! It supports two storage backends:
//! - SQLite
//! - PostgreSQL
//!
//! # Getting Started
//!
//! ```no_run
//! use userdb::{NewUser, UserRepository, data_store_from_env};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // The connection handle is owned by the caller and injected here.
//!     let store = data_store_from_env()?;
//!     let repo = UserRepository::new(store);
//!     repo.init().await?;
//!
//!     repo.create(&NewUser::new(
//!         "ken@unix.org".to_string(),
//!         "Ken Thompson".to_string(),
//!     ))
//!     .await?;
//!
//!     let user = repo.get("ken@unix.org").await?;
//!     println!("{}", user.full_name);
//!     Ok(())
//! }
//! ```
//!
//! # Configuration
//!
//! The crate uses environment variables for configuration:
//! - `DATA_STORE_TYPE`: Type of store to use ("sqlite" or "postgres")
//! - `DATA_STORE_URL`: Database connection URL
//! - `DB_TABLE_USERS`: Users table name (optional)
//! - `DB_TABLE_PREFIX`: Prefix applied to default table names (optional)

mod fixtures;
mod storage;
mod users;

#[cfg(test)]
mod test_utils;

pub use fixtures::{FixtureError, pretty_print_json};
pub use storage::{
    DataStore, PostgresDataStore, SqliteDataStore, StorageError, data_store_from_env,
};
pub use users::{NewUser, User, UserError, UserRepository};
