//! Serialization boundary for the per-project link list, which is stored as
//! JSON text in `projects.links`.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectLinks(pub Vec<String>);

impl ProjectLinks {
    /// Encodes the list as the JSON array text written to the column.
    pub fn encode(&self) -> Result<String, AppError> {
        serde_json::to_string(&self.0).map_err(|e| AppError::Internal(e.into()))
    }

    /// Decodes a stored column value. NULL reads as an empty list; anything
    /// that is not a JSON array of strings is a corrupt record.
    pub fn decode(project_id: i64, raw: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = raw else {
            return Ok(Self::default());
        };
        serde_json::from_str(raw).map(Self).map_err(|e| {
            AppError::CorruptRecord(format!("project {project_id} has invalid links JSON: {e}"))
        })
    }
}

impl From<Vec<String>> for ProjectLinks {
    fn from(links: Vec<String>) -> Self {
        Self(links)
    }
}
