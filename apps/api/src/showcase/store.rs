//! Storage seam for the showcase routes.
//!
//! Handlers only see `ShowcaseStore`; `AppState` carries it as
//! `Arc<dyn ShowcaseStore>`. `SqliteShowcaseStore` is the production backend.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::warn;

use crate::errors::AppError;
use crate::models::showcase::{LinksRow, ProfileRow, ProjectRow, SearchHit, SkillUsage};

/// Fields written by `PUT /profile`. Presence is not validated; the store's
/// NOT NULL constraints decide.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub education: Option<String>,
    pub work: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Already-encoded JSON array text.
    pub links: String,
    pub skills: Vec<String>,
}

#[async_trait]
pub trait ShowcaseStore: Send + Sync {
    /// The singleton profile row (id = 1), if present.
    async fn profile(&self) -> Result<Option<ProfileRow>, AppError>;

    /// Every skill name, in storage order.
    async fn skill_names(&self) -> Result<Vec<String>, AppError>;

    /// The singleton links row (id = 1), if present.
    async fn links(&self) -> Result<Option<LinksRow>, AppError>;

    /// Overwrites profile id 1 and returns the number of rows matched.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<u64, AppError>;

    /// Projects with at least one associated skill, once each. With a filter,
    /// only projects having a skill whose name contains it.
    async fn projects(&self, skill: Option<&str>) -> Result<Vec<ProjectRow>, AppError>;

    /// Inserts the project and its skill associations; returns the new id.
    async fn create_project(&self, project: &NewProject) -> Result<i64, AppError>;

    /// Substring search across profile, projects and skills.
    async fn search(&self, term: &str) -> Result<Vec<SearchHit>, AppError>;

    /// Skills ranked by how many projects use them.
    async fn top_skills(&self, limit: i64) -> Result<Vec<SkillUsage>, AppError>;
}

#[derive(Clone)]
pub struct SqliteShowcaseStore {
    pool: SqlitePool,
}

impl SqliteShowcaseStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShowcaseStore for SqliteShowcaseStore {
    async fn profile(&self) -> Result<Option<ProfileRow>, AppError> {
        Ok(sqlx::query_as::<_, ProfileRow>(
            "SELECT id, name, email, education, work FROM profile WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn skill_names(&self) -> Result<Vec<String>, AppError> {
        Ok(sqlx::query_scalar("SELECT name FROM skills")
            .fetch_all(&self.pool)
            .await?)
    }

    async fn links(&self) -> Result<Option<LinksRow>, AppError> {
        Ok(sqlx::query_as::<_, LinksRow>(
            "SELECT github, linkedin, portfolio FROM links WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<u64, AppError> {
        let result = sqlx::query(
            "UPDATE profile SET name = ?, email = ?, education = ?, work = ? WHERE id = 1",
        )
        .bind(&update.name)
        .bind(&update.email)
        .bind(&update.education)
        .bind(&update.work)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn projects(&self, skill: Option<&str>) -> Result<Vec<ProjectRow>, AppError> {
        let mut sql = String::from(
            r#"
            SELECT p.id, p.title, p.description, p.links
            FROM projects p
            JOIN project_skills ps ON p.id = ps.project_id
            JOIN skills s ON ps.skill_id = s.id
            "#,
        );
        if skill.is_some() {
            sql.push_str(" WHERE s.name LIKE ?");
        }
        sql.push_str(" GROUP BY p.id");

        let mut query = sqlx::query_as::<_, ProjectRow>(&sql);
        if let Some(skill) = skill {
            query = query.bind(format!("%{skill}%"));
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn create_project(&self, project: &NewProject) -> Result<i64, AppError> {
        let project_id = sqlx::query(
            "INSERT INTO projects (title, description, links) VALUES (?, ?, ?)",
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.links)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        // Unknown skill names and repeated names insert nothing.
        for skill in &project.skills {
            let inserted = sqlx::query(
                r#"
                INSERT OR IGNORE INTO project_skills (project_id, skill_id)
                SELECT ?, id FROM skills WHERE name = ?
                "#,
            )
            .bind(project_id)
            .bind(skill)
            .execute(&self.pool)
            .await?
            .rows_affected();

            if inserted == 0 {
                warn!("Project {project_id}: skill '{skill}' not associated (unknown or duplicate)");
            }
        }

        Ok(project_id)
    }

    async fn search(&self, term: &str) -> Result<Vec<SearchHit>, AppError> {
        let pattern = format!("%{term}%");
        Ok(sqlx::query_as::<_, SearchHit>(
            r#"
            SELECT 'profile' AS type, name, email FROM profile WHERE name LIKE ?1 OR email LIKE ?1
            UNION ALL
            SELECT 'projects' AS type, title, description FROM projects WHERE title LIKE ?1 OR description LIKE ?1
            UNION ALL
            SELECT 'skills' AS type, name, '' AS description FROM skills WHERE name LIKE ?1
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn top_skills(&self, limit: i64) -> Result<Vec<SkillUsage>, AppError> {
        Ok(sqlx::query_as::<_, SkillUsage>(
            r#"
            SELECT s.name, COUNT(DISTINCT ps.project_id) AS project_count
            FROM skills s
            JOIN project_skills ps ON s.id = ps.skill_id
            GROUP BY s.name
            ORDER BY project_count DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_store;
    use crate::showcase::schema::{reset_and_seed, SEED_SKILLS};

    async fn seeded() -> SqliteShowcaseStore {
        let pool = memory_store().await;
        reset_and_seed(&pool).await.unwrap();
        SqliteShowcaseStore::new(pool)
    }

    fn titles(rows: &[ProjectRow]) -> Vec<&str> {
        rows.iter().map(|r| r.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_skill_names_returns_seed() {
        let store = seeded().await;
        let mut names = store.skill_names().await.unwrap();
        names.sort();
        let mut expected: Vec<String> = SEED_SKILLS.iter().map(|s| s.to_string()).collect();
        expected.sort();
        assert_eq!(names, expected);
    }

    #[tokio::test]
    async fn test_projects_filter_groups_multiple_matches() {
        let store = seeded().await;
        // "S" matches JavaScript, Node.js, Express and SQLite on project 1.
        let rows = store.projects(Some("S")).await.unwrap();
        assert_eq!(rows.iter().filter(|r| r.id == 1).count(), 1);

        let rows = store.projects(Some("Python")).await.unwrap();
        assert_eq!(titles(&rows), vec!["Data Analysis Project"]);

        let rows = store.projects(Some("Haskell")).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_projects_without_skills_are_not_listed() {
        let store = seeded().await;
        store
            .create_project(&NewProject {
                title: Some("Lonely".into()),
                description: None,
                links: "[]".into(),
                skills: vec![],
            })
            .await
            .unwrap();
        let rows = store.projects(None).await.unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn test_create_project_skips_unknown_and_duplicate_skills() {
        let store = seeded().await;
        let id = store
            .create_project(&NewProject {
                title: Some("CLI".into()),
                description: Some("tooling".into()),
                links: "[]".into(),
                skills: vec!["React".into(), "Cobol".into(), "React".into()],
            })
            .await
            .unwrap();
        assert_eq!(id, 3);

        let associations: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM project_skills WHERE project_id = ?")
                .bind(id)
                .fetch_one(&store.pool)
                .await
                .unwrap();
        assert_eq!(associations, 1);
    }

    #[tokio::test]
    async fn test_update_profile_reports_rows_matched() {
        let store = seeded().await;
        let update = ProfileUpdate {
            name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            education: None,
            work: Some("Engineer".into()),
        };
        assert_eq!(store.update_profile(&update).await.unwrap(), 1);
        let profile = store.profile().await.unwrap().unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.education, None);

        sqlx::query("DELETE FROM profile").execute(&store.pool).await.unwrap();
        assert_eq!(store.update_profile(&update).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_profile_missing_name_violates_constraint() {
        let store = seeded().await;
        let update = ProfileUpdate {
            name: None,
            email: Some("x@example.com".into()),
            education: None,
            work: None,
        };
        assert!(matches!(
            store.update_profile(&update).await,
            Err(AppError::Database(_))
        ));
    }

    #[tokio::test]
    async fn test_search_tags_each_table() {
        let store = seeded().await;
        let hits = store.search("python").await.unwrap();
        let kinds: Vec<&str> = hits.iter().map(|h| h.kind.as_str()).collect();
        assert_eq!(kinds, vec!["projects", "skills"]);
        assert_eq!(hits[1].name.as_deref(), Some("Python"));
        assert_eq!(hits[1].email.as_deref(), Some(""));

        let hits = store.search("example.com").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, "profile");
    }

    #[tokio::test]
    async fn test_top_skills_ranked_and_limited() {
        let store = seeded().await;
        store
            .create_project(&NewProject {
                title: Some("Second JS".into()),
                description: None,
                links: "[]".into(),
                skills: vec!["JavaScript".into()],
            })
            .await
            .unwrap();

        let top = store.top_skills(5).await.unwrap();
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].name, "JavaScript");
        assert_eq!(top[0].project_count, 2);
        assert!(top.iter().all(|s| s.project_count >= 1));
        assert!(top.windows(2).all(|w| w[0].project_count >= w[1].project_count));
    }
}
