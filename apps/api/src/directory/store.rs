use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::models::directory::ProfileRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
}

/// Storage seam for the directory routes. Mutations report the affected-row
/// count; callers derive "not found" from a zero.
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    async fn insert(&self, fields: &ProfileFields) -> Result<i64, AppError>;
    async fn get(&self, id: i64) -> Result<Option<ProfileRecord>, AppError>;
    async fn update(&self, id: i64, fields: &ProfileFields) -> Result<u64, AppError>;
    async fn delete(&self, id: i64) -> Result<u64, AppError>;
    async fn list(&self) -> Result<Vec<ProfileRecord>, AppError>;
}

#[derive(Clone)]
pub struct SqliteDirectoryStore {
    pool: SqlitePool,
}

impl SqliteDirectoryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DirectoryStore for SqliteDirectoryStore {
    async fn insert(&self, fields: &ProfileFields) -> Result<i64, AppError> {
        let result = sqlx::query("INSERT INTO profile (name, email, bio) VALUES (?, ?, ?)")
            .bind(&fields.name)
            .bind(&fields.email)
            .bind(&fields.bio)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    async fn get(&self, id: i64) -> Result<Option<ProfileRecord>, AppError> {
        Ok(sqlx::query_as::<_, ProfileRecord>(
            "SELECT id, name, email, bio FROM profile WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn update(&self, id: i64, fields: &ProfileFields) -> Result<u64, AppError> {
        let result = sqlx::query("UPDATE profile SET name = ?, email = ?, bio = ? WHERE id = ?")
            .bind(&fields.name)
            .bind(&fields.email)
            .bind(&fields.bio)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM profile WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn list(&self) -> Result<Vec<ProfileRecord>, AppError> {
        Ok(
            sqlx::query_as::<_, ProfileRecord>("SELECT id, name, email, bio FROM profile")
                .fetch_all(&self.pool)
                .await?,
        )
    }
}
