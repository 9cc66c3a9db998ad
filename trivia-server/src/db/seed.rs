//! Bulk loading of categories and questions
//!
//! Used by the CLI `seed` command. Records whose id already exists are
//! skipped, so seeding the same file twice is harmless.

use serde::Deserialize;
use sqlx::SqlitePool;

use super::DbError;
use crate::models::Category;

/// Seed file contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<SeedQuestion>,
}

/// Question entry in a seed file; `id` is assigned by the store when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedQuestion {
    #[serde(default)]
    pub id: Option<i64>,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Rows actually written by [`seed`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: u64,
    pub questions: u64,
}

/// Load `data` in a single transaction.
pub async fn seed(pool: &SqlitePool, data: &SeedData) -> Result<SeedReport, DbError> {
    let mut tx = pool.begin().await?;
    let mut report = SeedReport::default();

    for category in &data.categories {
        let result = sqlx::query(
            "INSERT INTO categories (id, type) VALUES (?, ?) ON CONFLICT (id) DO NOTHING",
        )
        .bind(category.id)
        .bind(&category.kind)
        .execute(&mut *tx)
        .await?;
        report.categories += result.rows_affected();
    }

    for question in &data.questions {
        let result = sqlx::query(
            "INSERT INTO questions (id, question, answer, category, difficulty) \
             VALUES (?, ?, ?, ?, ?) ON CONFLICT (id) DO NOTHING",
        )
        .bind(question.id)
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .execute(&mut *tx)
        .await?;
        report.questions += result.rows_affected();
    }

    tx.commit().await?;
    tracing::info!(
        categories = report.categories,
        questions = report.questions,
        "seed data loaded"
    );

    Ok(report)
}
