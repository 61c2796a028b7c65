use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A directory profile. Every column except the id is nullable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProfileRecord {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
}
