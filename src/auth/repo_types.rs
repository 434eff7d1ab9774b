use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,          // unique user ID
    pub email: String,    // login email
    #[serde(skip_serializing)]
    pub password: String, // Argon2 PHC hash, not exposed in JSON
}
