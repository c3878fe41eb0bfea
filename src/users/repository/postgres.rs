use sqlx::{Pool, Postgres};

use crate::storage::validate_postgres_table_schema;
use crate::users::{
    errors::UserError,
    types::{NewUser, User},
};

use super::config::DB_TABLE_USERS;

// PostgreSQL implementations
pub(super) async fn create_tables_postgres(pool: &Pool<Postgres>) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    // Create users table; the id default keeps generation on the engine side
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            id TEXT PRIMARY KEY DEFAULT (gen_random_uuid()::text),
            email TEXT NOT NULL UNIQUE,
            full_name TEXT NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await?;

    Ok(())
}

/// Validates that the users table schema matches what we expect
pub(super) async fn validate_users_table_postgres(pool: &Pool<Postgres>) -> Result<(), UserError> {
    let users_table = DB_TABLE_USERS.as_str();

    // Define expected schema (column name, data type)
    let expected_columns = vec![("id", "text"), ("email", "text"), ("full_name", "text")];

    validate_postgres_table_schema(pool, users_table, &expected_columns, UserError::Storage).await
}

pub(super) async fn get_user_by_email_postgres(
    pool: &Pool<Postgres>,
    email: &str,
) -> Result<User, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT id, email, full_name FROM {table_name} WHERE email = $1
        "#
    ))
    .bind(email)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub(super) async fn create_user_postgres(
    pool: &Pool<Postgres>,
    new_user: &NewUser,
) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        INSERT INTO {table_name} (email, full_name)
        VALUES ($1, $2)
        "#
    ))
    .bind(&new_user.email)
    .bind(&new_user.full_name)
    .execute(pool)
    .await?;

    Ok(())
}
