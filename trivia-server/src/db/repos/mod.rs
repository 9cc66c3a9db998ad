//! Repository implementations for database access
//!
//! Each repository borrows the pool for the duration of one request and
//! returns records ordered by id.

pub mod categories;
pub mod questions;

pub use categories::CategoryRepo;
pub use questions::QuestionRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}
