use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::directory::store::ProfileFields;
use crate::errors::AppError;
use crate::models::directory::ProfileRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
}

impl From<ProfileRequest> for ProfileFields {
    fn from(req: ProfileRequest) -> Self {
        ProfileFields {
            name: req.name,
            email: req.email,
            bio: req.bio,
        }
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Profile not found".to_string())
}

/// Ids that do not parse as integers cannot match a row.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| not_found())
}

fn record(id: i64, fields: ProfileFields) -> ProfileRecord {
    ProfileRecord {
        id,
        name: fields.name,
        email: fields.email,
        bio: fields.bio,
    }
}

/// POST /profile
pub async fn handle_create_profile(
    State(state): State<AppState>,
    Json(req): Json<ProfileRequest>,
) -> Result<Json<ProfileRecord>, AppError> {
    let fields = ProfileFields::from(req);
    let id = state.directory.insert(&fields).await?;
    info!("Created directory profile {id}");
    Ok(Json(record(id, fields)))
}

/// GET /profile/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProfileRecord>, AppError> {
    let id = parse_id(&id)?;
    let profile = state.directory.get(id).await?.ok_or_else(not_found)?;
    Ok(Json(profile))
}

/// PUT /profile/:id
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ProfileRequest>,
) -> Result<Json<ProfileRecord>, AppError> {
    let id = parse_id(&id)?;
    let fields = ProfileFields::from(req);
    if state.directory.update(id, &fields).await? == 0 {
        return Err(not_found());
    }
    Ok(Json(record(id, fields)))
}

/// DELETE /profile/:id
pub async fn handle_delete_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(&id)?;
    if state.directory.delete(id).await? == 0 {
        return Err(not_found());
    }
    info!("Deleted directory profile {id}");
    Ok(Json(json!({
        "message": format!("Profile with id {id} deleted successfully")
    })))
}

/// GET /profiles
pub async fn handle_list_profiles(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProfileRecord>>, AppError> {
    Ok(Json(state.directory.list().await?))
}
