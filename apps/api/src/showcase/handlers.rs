use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::models::showcase::{LinksRow, SearchHit, SkillUsage};
use crate::showcase::links::ProjectLinks;
use crate::showcase::store::{NewProject, ProfileUpdate, ShowcaseStore};
use crate::state::AppState;

const TOP_SKILLS_LIMIT: i64 = 5;

#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub education: Option<String>,
    pub work: Option<String>,
    pub skills: Vec<String>,
    pub links: LinksRow,
}

/// Reads profile, then skill names, then links. Each step starts only after
/// the previous one succeeded.
pub async fn load_profile_view(store: &dyn ShowcaseStore) -> Result<ProfileView, AppError> {
    let profile = store
        .profile()
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;
    let skills = store.skill_names().await?;
    let links = store.links().await?.unwrap_or_default();

    Ok(ProfileView {
        name: profile.name,
        email: profile.email,
        education: profile.education,
        work: profile.work,
        skills,
        links,
    })
}

/// GET /profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
) -> Result<Json<ProfileView>, AppError> {
    Ok(Json(load_profile_view(state.showcase.as_ref()).await?))
}

#[derive(Debug, Deserialize)]
pub struct ProfileUpdateRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub education: Option<String>,
    pub work: Option<String>,
}

/// PUT /profile
/// No existence check: succeeds even when no row matched.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Json(req): Json<ProfileUpdateRequest>,
) -> Result<Json<Value>, AppError> {
    let update = ProfileUpdate {
        name: req.name,
        email: req.email,
        education: req.education,
        work: req.work,
    };
    let matched = state.showcase.update_profile(&update).await?;
    info!("Showcase profile updated ({matched} row(s) matched)");
    Ok(Json(json!({ "message": "Profile updated successfully" })))
}

#[derive(Debug, Deserialize)]
pub struct ProjectsQuery {
    pub skill: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProjectView {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub links: ProjectLinks,
}

/// GET /projects?skill=
pub async fn handle_list_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectsQuery>,
) -> Result<Json<Vec<ProjectView>>, AppError> {
    let skill = params.skill.as_deref().filter(|s| !s.is_empty());
    let rows = state.showcase.projects(skill).await?;

    let projects = rows
        .into_iter()
        .map(|row| {
            Ok(ProjectView {
                links: ProjectLinks::decode(row.id, row.links.as_deref())?,
                id: row.id,
                title: row.title,
                description: row.description,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;
    Ok(Json(projects))
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub links: ProjectLinks,
    pub skills: Option<Vec<String>>,
}

/// Echo of the request plus the generated id. `skills` is echoed as given.
#[derive(Debug, Serialize)]
pub struct CreatedProject {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub links: ProjectLinks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

/// POST /projects
pub async fn handle_create_project(
    State(state): State<AppState>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<CreatedProject>), AppError> {
    let project = NewProject {
        title: req.title.clone(),
        description: req.description.clone(),
        links: req.links.encode()?,
        skills: req.skills.clone().unwrap_or_default(),
    };
    let id = state.showcase.create_project(&project).await?;
    info!("Created project {id}");

    Ok((
        StatusCode::CREATED,
        Json(CreatedProject {
            id,
            title: req.title,
            description: req.description,
            links: req.links,
            skills: req.skills.filter(|s| !s.is_empty()),
        }),
    ))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// GET /search?q=
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<SearchHit>>, AppError> {
    let term = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::Validation("Query parameter 'q' is required.".to_string()))?;
    Ok(Json(state.showcase.search(&term).await?))
}

/// GET /skills/top
pub async fn handle_top_skills(
    State(state): State<AppState>,
) -> Result<Json<Vec<SkillUsage>>, AppError> {
    Ok(Json(state.showcase.top_skills(TOP_SKILLS_LIMIT).await?))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::models::showcase::{ProfileRow, ProjectRow};

    /// Scripted store that records which reads ran.
    #[derive(Default)]
    struct ScriptedStore {
        profile: Option<ProfileRow>,
        fail_skills: bool,
        links: Option<LinksRow>,
        calls: Mutex<Vec<&'static str>>,
    }

    impl ScriptedStore {
        fn record(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ShowcaseStore for ScriptedStore {
        async fn profile(&self) -> Result<Option<ProfileRow>, AppError> {
            self.record("profile");
            Ok(self.profile.clone())
        }

        async fn skill_names(&self) -> Result<Vec<String>, AppError> {
            self.record("skills");
            if self.fail_skills {
                return Err(AppError::Database(sqlx::Error::PoolClosed));
            }
            Ok(vec!["Rust".to_string()])
        }

        async fn links(&self) -> Result<Option<LinksRow>, AppError> {
            self.record("links");
            Ok(self.links.clone())
        }

        async fn update_profile(&self, _update: &ProfileUpdate) -> Result<u64, AppError> {
            Ok(0)
        }

        async fn projects(&self, _skill: Option<&str>) -> Result<Vec<ProjectRow>, AppError> {
            Ok(vec![])
        }

        async fn create_project(&self, _project: &NewProject) -> Result<i64, AppError> {
            Ok(1)
        }

        async fn search(&self, _term: &str) -> Result<Vec<SearchHit>, AppError> {
            Ok(vec![])
        }

        async fn top_skills(&self, _limit: i64) -> Result<Vec<SkillUsage>, AppError> {
            Ok(vec![])
        }
    }

    fn profile_row() -> ProfileRow {
        ProfileRow {
            id: 1,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            education: None,
            work: Some("Engineer".into()),
        }
    }

    #[tokio::test]
    async fn test_missing_profile_stops_before_other_reads() {
        let store = ScriptedStore::default();
        let err = load_profile_view(&store).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(store.calls(), vec!["profile"]);
    }

    #[tokio::test]
    async fn test_failed_skill_read_skips_links() {
        let store = ScriptedStore {
            profile: Some(profile_row()),
            fail_skills: true,
            ..Default::default()
        };
        let err = load_profile_view(&store).await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
        assert_eq!(store.calls(), vec!["profile", "skills"]);
    }

    #[tokio::test]
    async fn test_missing_links_render_as_empty_object() {
        let store = ScriptedStore {
            profile: Some(profile_row()),
            ..Default::default()
        };
        let view = load_profile_view(&store).await.unwrap();
        assert_eq!(store.calls(), vec!["profile", "skills", "links"]);
        assert_eq!(view.skills, vec!["Rust".to_string()]);
        assert_eq!(serde_json::to_value(&view.links).unwrap(), json!({}));
    }
}
