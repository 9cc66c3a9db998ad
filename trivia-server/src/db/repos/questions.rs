//! Question repository
//!
//! - create: INSERT ... RETURNING, NOT NULL columns reject incomplete records
//! - delete: single DELETE, zero affected rows means not found

use sqlx::SqlitePool;

use super::DbError;
use crate::models::{NewQuestion, Question};

const COLUMNS: &str = "id, question, answer, category, difficulty";

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every question ordered by id.
    pub async fn list(&self) -> Result<Vec<Question>, DbError> {
        let sql = format!("SELECT {COLUMNS} FROM questions ORDER BY id");
        let questions = sqlx::query_as::<_, Question>(&sql)
            .fetch_all(self.pool)
            .await?;
        Ok(questions)
    }

    /// Total number of stored questions.
    pub async fn count(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// Get a single question by id.
    pub async fn get(&self, id: i64) -> Result<Question, DbError> {
        let sql = format!("SELECT {COLUMNS} FROM questions WHERE id = ?");
        sqlx::query_as::<_, Question>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("question", id))
    }

    /// Case-insensitive substring search over the question text.
    ///
    /// Both sides are Unicode-lowercased before matching, so `"école"` finds
    /// `"ÉCOLE"`. The term is matched literally and an empty term matches
    /// everything.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let needle = term.to_lowercase();
        let questions = self
            .list()
            .await?
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .collect();
        Ok(questions)
    }

    /// Questions whose category equals `category` exactly.
    pub async fn list_for_category(&self, category: i64) -> Result<Vec<Question>, DbError> {
        let sql = format!("SELECT {COLUMNS} FROM questions WHERE category = ? ORDER BY id");
        let questions = sqlx::query_as::<_, Question>(&sql)
            .bind(category)
            .fetch_all(self.pool)
            .await?;
        Ok(questions)
    }

    /// Quiz candidates: every question, or one category's questions.
    pub async fn candidates(&self, category: Option<i64>) -> Result<Vec<Question>, DbError> {
        match category {
            Some(category) => self.list_for_category(category).await,
            None => self.list().await,
        }
    }

    /// Persist a new question and return the stored record.
    pub async fn create(&self, new: &NewQuestion) -> Result<Question, DbError> {
        let sql = format!(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES (?, ?, ?, ?) RETURNING {COLUMNS}"
        );
        let question = sqlx::query_as::<_, Question>(&sql)
            .bind(new.question.as_deref())
            .bind(new.answer.as_deref())
            .bind(new.category)
            .bind(new.difficulty)
            .fetch_one(self.pool)
            .await?;
        Ok(question)
    }

    /// Delete a question by id.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("question", id));
        }
        Ok(())
    }
}
