mod config;
mod postgres;
mod sqlite;

use crate::storage::DataStore;
use crate::users::{
    errors::UserError,
    types::{NewUser, User},
};

use postgres::*;
use sqlite::*;

/// Repository over the users table.
///
/// Wraps an already-open data store owned by the caller and translates the
/// two user operations into parameterized SQL. It performs no pooling,
/// retries, or caching of its own.
pub struct UserRepository {
    store: Box<dyn DataStore>,
}

impl UserRepository {
    /// Wrap an injected data store
    pub fn new(store: Box<dyn DataStore>) -> Self {
        Self { store }
    }

    /// Create the users table if missing and validate its schema.
    ///
    /// Idempotent. Deployments that own the schema through an external
    /// migration mechanism can skip this and rely on validation failing
    /// fast at the first operation instead.
    pub async fn init(&self) -> Result<(), UserError> {
        match (self.store.as_sqlite(), self.store.as_postgres()) {
            (Some(pool), _) => {
                create_tables_sqlite(pool).await?;
                validate_users_table_sqlite(pool).await?;
                Ok(())
            }
            (_, Some(pool)) => {
                create_tables_postgres(pool).await?;
                validate_users_table_postgres(pool).await?;
                Ok(())
            }
            _ => Err(UserError::Storage("Unsupported database type".to_string())),
        }
    }

    /// Look up exactly one user by exact email match.
    ///
    /// Fails with [`UserError::NotFound`] when no row matches. No side
    /// effects; repeated calls return identical data.
    #[tracing::instrument(skip(self), fields(email = %email))]
    pub async fn get(&self, email: &str) -> Result<User, UserError> {
        let result = if let Some(pool) = self.store.as_sqlite() {
            get_user_by_email_sqlite(pool, email).await
        } else if let Some(pool) = self.store.as_postgres() {
            get_user_by_email_postgres(pool, email).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        };

        match &result {
            Ok(_) => {
                tracing::info!(found = true, "User lookup completed");
            }
            Err(UserError::NotFound) => {
                tracing::info!(found = false, "User lookup completed - not found");
            }
            Err(e) => {
                tracing::error!(error = %e, "User lookup failed");
            }
        }

        result
    }

    /// Insert a new user; the id is assigned by the storage engine.
    ///
    /// Fails with [`UserError::ConstraintViolation`] when the email already
    /// exists. Side effect: one new persisted row.
    #[tracing::instrument(skip(self, new_user), fields(email = %new_user.email))]
    pub async fn create(&self, new_user: &NewUser) -> Result<(), UserError> {
        let result = if let Some(pool) = self.store.as_sqlite() {
            create_user_sqlite(pool, new_user).await
        } else if let Some(pool) = self.store.as_postgres() {
            create_user_postgres(pool, new_user).await
        } else {
            Err(UserError::Storage("Unsupported database type".to_string()))
        };

        match &result {
            Ok(()) => {
                tracing::info!("User created");
            }
            Err(UserError::ConstraintViolation(_)) => {
                tracing::info!("User creation rejected - email already exists");
            }
            Err(e) => {
                tracing::error!(error = %e, "User creation failed");
            }
        }

        result
    }
}
