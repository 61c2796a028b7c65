use anyhow::Result;
use sqlx::SqlitePool;
use tracing::info;

/// `skills` and `projects` are part of the directory schema but no route
/// reads or writes them yet.
const CREATE_TABLES: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS profile (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        email TEXT,
        bio TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS skills (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        level TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS projects (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT,
        description TEXT,
        link TEXT
    )
    "#,
];

/// Creates any missing directory table. Existing rows are left alone.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    let mut conn = pool.acquire().await?;
    for ddl in CREATE_TABLES {
        sqlx::query(ddl).execute(&mut *conn).await?;
    }
    info!("Directory schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_store;

    #[tokio::test]
    async fn test_rows_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.db");
        let path = path.to_str().unwrap();

        let pool = open_store(path).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        sqlx::query("INSERT INTO profile (name, email, bio) VALUES ('A', 'a@x.com', 'b')")
            .execute(&pool)
            .await
            .unwrap();
        pool.close().await;

        let pool = open_store(path).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM profile")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
        pool.close().await;
    }
}
