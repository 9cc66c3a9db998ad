//! Category repository

use sqlx::SqlitePool;

use super::DbError;
use crate::models::Category;

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every category ordered by id.
    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let categories = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(categories)
    }

    /// Get a single category by id.
    pub async fn get(&self, id: i64) -> Result<Category, DbError> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("category", id))
    }
}
