//! Shared test initialization and helpers
//!
//! Database tests run against private in-memory SQLite databases. Each
//! helper call opens a uniquely-named shared-cache memory database so that
//! every connection in the pool sees the same data and tests stay isolated
//! from each other.

use std::sync::Once;

use crate::storage::SqliteDataStore;
use crate::users::UserRepository;

/// Load test environment variables from .env_test (with fallback to .env),
/// once per process.
pub(crate) fn init_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }
    });
}

/// Open a fresh in-memory SQLite store private to the calling test.
pub(crate) fn memory_store() -> SqliteDataStore {
    init_test_environment();

    let db_name = uuid::Uuid::new_v4().simple().to_string();
    let url = format!("sqlite:file:{db_name}?mode=memory&cache=shared");
    SqliteDataStore::connect(&url).expect("Failed to open in-memory SQLite store")
}

/// Build a repository over a fresh in-memory store with the schema applied.
pub(crate) async fn test_repository() -> UserRepository {
    let repo = UserRepository::new(Box::new(memory_store()));
    repo.init()
        .await
        .expect("Failed to initialize users table");
    repo
}

/// An email address unique to the calling test.
pub(crate) fn unique_email(suffix: &str) -> String {
    format!("{}-{}@example.com", suffix, uuid::Uuid::new_v4().simple())
}
