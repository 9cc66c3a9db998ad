//! Question endpoints
//!
//! Status codes follow the contract the existing web client relies on:
//! deleting an unknown question is a 422, a failed create is a 405 and a
//! failed search is a 404.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;

use crate::db::{CategoryRepo, DbError, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, RecordId};
use crate::http::server::AppState;
use crate::models::{
    category_map, CategoryMap, NewQuestion, Pagination, PaginationParams, Question, SearchRequest,
};

/// Question listing response
#[derive(Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    /// Always null: the listing is not scoped to a category
    pub current_category: Option<String>,
    pub categories: CategoryMap,
}

/// Delete response
#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i64,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

/// Create response
#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i64,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

/// Search response
///
/// `total_questions` counts the whole store, not the matches.
#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
}

/// Requested page of the full listing plus the total count.
async fn refreshed_page(
    repo: &QuestionRepo<'_>,
    page: Pagination,
) -> Result<(Vec<Question>, i64), DbError> {
    let all = repo.list().await?;
    let total = all.len() as i64;
    Ok((page.slice(all), total))
}

/// GET /questions - paginated questions with the category map
async fn list_questions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let page = Pagination::from(params);
    let (questions, total_questions) =
        refreshed_page(&QuestionRepo::new(&state.pool), page).await?;

    if questions.is_empty() {
        return Err(ApiError::not_found("questions page", page.page));
    }

    let categories = CategoryRepo::new(&state.pool).list().await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions,
        total_questions,
        current_category: None,
        categories: category_map(categories),
    }))
}

/// DELETE /questions/{id} - delete a question, return the refreshed page
async fn delete_question(
    State(state): State<Arc<AppState>>,
    RecordId(id): RecordId,
    Query(params): Query<PaginationParams>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let repo = QuestionRepo::new(&state.pool);
    repo.delete(id).await.map_err(ApiError::unprocessable)?;
    tracing::info!(question_id = id, "question deleted");

    let (questions, total_questions) = refreshed_page(&repo, Pagination::from(params))
        .await
        .map_err(ApiError::unprocessable)?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
        questions,
        total_questions,
    }))
}

/// POST /questions - create a question, return the refreshed page
///
/// The body only has to be JSON to get past the extractor. Fields of the
/// wrong type fail the create like any other unwritable record (405).
async fn create_question(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
    JsonBody(body): JsonBody<serde_json::Value>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let new: NewQuestion = serde_json::from_value(body).map_err(ApiError::method_not_allowed)?;
    let repo = QuestionRepo::new(&state.pool);
    let created = repo.create(&new).await.map_err(ApiError::method_not_allowed)?;
    tracing::info!(question_id = created.id, category = created.category, "question created");

    let (questions, total_questions) = refreshed_page(&repo, Pagination::from(params))
        .await
        .map_err(ApiError::method_not_allowed)?;

    Ok(Json(CreatedResponse {
        success: true,
        created: created.id,
        questions,
        total_questions,
    }))
}

/// POST /questions/search - case-insensitive substring search
async fn search_questions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
    JsonBody(req): JsonBody<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let repo = QuestionRepo::new(&state.pool);
    let term = req.search_term;

    let storage_failure = |e: DbError| {
        tracing::error!(search_term = %term, "search failed: {}", e);
        ApiError::not_found("search results", &term)
    };

    let matches = repo.search(&term).await.map_err(storage_failure)?;
    if matches.is_empty() {
        return Err(ApiError::not_found("search results", &term));
    }
    let total_questions = repo.count().await.map_err(storage_failure)?;

    Ok(Json(SearchResponse {
        success: true,
        questions: Pagination::from(params).slice(matches),
        total_questions,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
}
