use anyhow::Result;
use sqlx::SqlitePool;
use tracing::info;

use crate::showcase::links::ProjectLinks;

/// Drop order: dependents first.
const DROP_TABLES: [&str; 5] = ["links", "project_skills", "projects", "skills", "profile"];

const CREATE_TABLES: [&str; 5] = [
    r#"
    CREATE TABLE profile (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        education TEXT,
        work TEXT
    )
    "#,
    r#"
    CREATE TABLE skills (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE projects (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT,
        links TEXT
    )
    "#,
    r#"
    CREATE TABLE project_skills (
        project_id INTEGER,
        skill_id INTEGER,
        FOREIGN KEY (project_id) REFERENCES projects(id),
        FOREIGN KEY (skill_id) REFERENCES skills(id),
        PRIMARY KEY (project_id, skill_id)
    )
    "#,
    r#"
    CREATE TABLE links (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        github TEXT,
        linkedin TEXT,
        portfolio TEXT
    )
    "#,
];

pub const SEED_SKILLS: [&str; 7] = [
    "JavaScript",
    "Node.js",
    "Express",
    "React",
    "SQLite",
    "Python",
    "Machine Learning",
];

pub const SEED_GITHUB: &str = "https://github.com/shrish1217";
const SEED_LINKEDIN: &str = "https://linkedin.com/in/shrish-vats-855678313";
const SEED_PORTFOLIO: &str = "https://your-portfolio.com";

struct SeedProject {
    title: &'static str,
    description: &'static str,
    links: &'static [&'static str],
}

const SEED_PROJECTS: [SeedProject; 2] = [
    SeedProject {
        title: "Project 1: Me-API Playground",
        description: "A backend API for managing a candidate's profile.",
        links: &["http://project1.com", "http://github.com/project1"],
    },
    SeedProject {
        title: "Data Analysis Project",
        description: "A project using Python for data analysis.",
        links: &["http://data-project.com"],
    },
];

/// (project_id, skill_id) pairs; ids follow insertion order above.
const SEED_PROJECT_SKILLS: [(i64, i64); 5] = [(1, 1), (1, 2), (1, 3), (1, 5), (2, 6)];

/// Drops every showcase table, recreates the schema and inserts the sample
/// data. Statements run one at a time on a single connection, in order.
pub async fn reset_and_seed(pool: &SqlitePool) -> Result<()> {
    let mut conn = pool.acquire().await?;

    for table in DROP_TABLES {
        sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
            .execute(&mut *conn)
            .await?;
    }
    for ddl in CREATE_TABLES {
        sqlx::query(ddl).execute(&mut *conn).await?;
    }

    sqlx::query("INSERT INTO profile (id, name, email, education, work) VALUES (?, ?, ?, ?, ?)")
        .bind(1_i64)
        .bind("Your Name")
        .bind("your.email@example.com")
        .bind("B.S. in Computer Science, University of XYZ")
        .bind("Software Engineer at Company ABC")
        .execute(&mut *conn)
        .await?;

    for skill in SEED_SKILLS {
        sqlx::query("INSERT INTO skills (name) VALUES (?)")
            .bind(skill)
            .execute(&mut *conn)
            .await?;
    }

    for project in &SEED_PROJECTS {
        let links: Vec<String> = project.links.iter().map(|l| l.to_string()).collect();
        let links = ProjectLinks::from(links).encode()?;
        sqlx::query("INSERT INTO projects (title, description, links) VALUES (?, ?, ?)")
            .bind(project.title)
            .bind(project.description)
            .bind(links)
            .execute(&mut *conn)
            .await?;
    }

    for (project_id, skill_id) in SEED_PROJECT_SKILLS {
        sqlx::query("INSERT INTO project_skills (project_id, skill_id) VALUES (?, ?)")
            .bind(project_id)
            .bind(skill_id)
            .execute(&mut *conn)
            .await?;
    }

    sqlx::query("INSERT INTO links (github, linkedin, portfolio) VALUES (?, ?, ?)")
        .bind(SEED_GITHUB)
        .bind(SEED_LINKEDIN)
        .bind(SEED_PORTFOLIO)
        .execute(&mut *conn)
        .await?;

    info!("Showcase database seeded with sample data");
    Ok(())
}
