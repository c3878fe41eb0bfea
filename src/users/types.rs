use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted user row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct User {
    /// Engine-assigned unique identifier, generated on insert
    pub id: String,
    /// Email address, unique across the table and used as the lookup key
    pub email: String,
    /// Display name
    pub full_name: String,
}

/// The caller-supplied fields of a user to be created.
///
/// The id is assigned by the storage engine on insert and is deliberately
/// absent here, so a caller cannot supply one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub full_name: String,
}

impl NewUser {
    /// Create a new user record for insertion
    pub fn new(email: String, full_name: String) -> Self {
        Self { email, full_name }
    }
}
