//! Postgres sink. Each collection is a table of JSONB documents keyed by
//! natural name; a run swaps the whole contents inside one transaction so
//! readers never observe a half-written rebuild.

use async_trait::async_trait;
use serde::Serialize;
use sqlx::PgPool;
use tracing::info;

use crate::errors::PipelineError;
use crate::models::entities::Snapshot;
use crate::sink::Sink;

pub struct PgSink {
    pool: PgPool,
}

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS industries (
        name TEXT PRIMARY KEY,
        doc JSONB NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS roles (
        name TEXT PRIMARY KEY,
        doc JSONB NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS skills (
        name TEXT PRIMARY KEY,
        doc JSONB NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS companies (
        name TEXT PRIMARY KEY,
        doc JSONB NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS job_postings (
        title TEXT NOT NULL,
        company TEXT NOT NULL,
        url TEXT NOT NULL,
        doc JSONB NOT NULL,
        PRIMARY KEY (title, company, url)
    )",
    "CREATE TABLE IF NOT EXISTS salary_analysis (
        kind TEXT NOT NULL,
        name TEXT NOT NULL,
        doc JSONB NOT NULL,
        PRIMARY KEY (kind, name)
    )",
];

impl PgSink {
    pub async fn new(pool: PgPool) -> Result<Self, PipelineError> {
        for ddl in SCHEMA {
            sqlx::query(ddl).execute(&pool).await?;
        }
        Ok(Self { pool })
    }
}

fn doc<T: Serialize>(value: &T) -> Result<serde_json::Value, PipelineError> {
    serde_json::to_value(value).map_err(|e| PipelineError::Internal(e.into()))
}

#[async_trait]
impl Sink for PgSink {
    async fn replace_all(&self, snapshot: &Snapshot) -> Result<(), PipelineError> {
        let mut tx = self.pool.begin().await?;

        for table in [
            "industries",
            "roles",
            "skills",
            "companies",
            "job_postings",
            "salary_analysis",
        ] {
            sqlx::query(&format!("DELETE FROM {table}"))
                .execute(&mut *tx)
                .await?;
        }

        sqlx::query("INSERT INTO industries (name, doc) VALUES ($1, $2)")
            .bind(&snapshot.industry.industry)
            .bind(doc(&snapshot.industry)?)
            .execute(&mut *tx)
            .await?;

        for role in &snapshot.roles {
            sqlx::query("INSERT INTO roles (name, doc) VALUES ($1, $2)")
                .bind(&role.role_name)
                .bind(doc(role)?)
                .execute(&mut *tx)
                .await?;
        }

        for skill in &snapshot.skills {
            sqlx::query("INSERT INTO skills (name, doc) VALUES ($1, $2)")
                .bind(&skill.skill_name)
                .bind(doc(skill)?)
                .execute(&mut *tx)
                .await?;
        }

        for company in &snapshot.companies {
            sqlx::query("INSERT INTO companies (name, doc) VALUES ($1, $2)")
                .bind(&company.name)
                .bind(doc(company)?)
                .execute(&mut *tx)
                .await?;
        }

        for posting in &snapshot.job_postings {
            // Re-scraped duplicates share the natural key; last write wins.
            sqlx::query(
                "INSERT INTO job_postings (title, company, url, doc) VALUES ($1, $2, $3, $4)
                 ON CONFLICT (title, company, url) DO UPDATE SET doc = EXCLUDED.doc",
            )
            .bind(&posting.title)
            .bind(&posting.company)
            .bind(&posting.url)
            .bind(doc(posting)?)
            .execute(&mut *tx)
            .await?;
        }

        for entry in &snapshot.salary_analysis {
            sqlx::query("INSERT INTO salary_analysis (kind, name, doc) VALUES ($1, $2, $3)")
                .bind(entry.kind.as_str())
                .bind(&entry.name)
                .bind(doc(entry)?)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        info!(
            "persisted snapshot: {} roles, {} skills, {} companies, {} postings",
            snapshot.roles.len(),
            snapshot.skills.len(),
            snapshot.companies.len(),
            snapshot.job_postings.len()
        );
        Ok(())
    }
}
