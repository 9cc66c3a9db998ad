//! Category endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::db::{CategoryRepo, DbError, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::extractors::RecordId;
use crate::http::server::AppState;
use crate::models::{category_map, CategoryMap, Pagination, PaginationParams, Question};

/// Category listing response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// Questions in one category
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: String,
}

/// GET /categories - every category as an id -> type map
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = CategoryRepo::new(&state.pool).list().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

/// GET /categories/{id}/questions - paginated questions of one category
///
/// An unknown category is a 422, a known category without questions a 404.
async fn list_category_questions(
    State(state): State<Arc<AppState>>,
    RecordId(category_id): RecordId,
    Query(params): Query<PaginationParams>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let category = match CategoryRepo::new(&state.pool).get(category_id).await {
        Ok(category) => category,
        Err(e @ DbError::NotFound { .. }) => return Err(ApiError::unprocessable(e)),
        Err(e) => return Err(e.into()),
    };

    let matches = QuestionRepo::new(&state.pool)
        .list_for_category(category_id)
        .await?;
    if matches.is_empty() {
        return Err(ApiError::not_found("questions in category", category_id));
    }

    let total_questions = matches.len() as i64;
    let page = Pagination::from(params);

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: page.slice(matches),
        total_questions,
        current_category: category.kind,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(list_category_questions))
}
