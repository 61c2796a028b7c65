use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The singleton showcase profile (id = 1).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProfileRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub education: Option<String>,
    pub work: Option<String>,
}

/// The singleton external-links row (id = 1). Absent fields are omitted
/// from the JSON, so a missing row renders as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct LinksRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
}

/// A project as stored: `links` is the raw JSON text column.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub links: Option<String>,
}

/// One row of the cross-table search. Column names follow the first branch
/// of the union: for projects `name` is the title and `email` the
/// description, for skills `email` is empty.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SearchHit {
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillUsage {
    pub name: String,
    pub project_count: i64,
}
