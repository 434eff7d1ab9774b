use serde::{Deserialize, Serialize};

/// JWT payload issued at login and checked on protected routes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub id: i64,       // user ID
    pub email: String, // user email
    pub iat: u64,      // issued at (unix timestamp)
    pub exp: u64,      // expires at (unix timestamp)
}
