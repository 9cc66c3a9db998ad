//! Quiz endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::db::QuestionRepo;
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{Question, QuizRequest};
use crate::quiz::{self, QuizOutcome};

/// Quiz round response
///
/// `question` is null once every question of the category has been shown.
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// POST /quizzes - next unseen question for a quiz round
async fn play_quiz(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let (Some(category), Some(previous)) = (req.quiz_category, req.previous_questions) else {
        return Err(ApiError::bad_request(
            "quiz_category and previous_questions are required",
        ));
    };
    let Some(category_id) = category.id else {
        return Err(ApiError::bad_request("quiz_category.id is required"));
    };

    let candidates = QuestionRepo::new(&state.pool)
        .candidates(quiz::category_filter(category_id))
        .await?;

    let outcome = quiz::pick_next(candidates, &previous, &mut rand::thread_rng());
    match outcome {
        QuizOutcome::Next(question) => Ok(Json(QuizResponse {
            success: true,
            question: Some(question),
        })),
        QuizOutcome::Exhausted => {
            tracing::debug!(category_id, seen = previous.len(), "quiz exhausted");
            Ok(Json(QuizResponse {
                success: true,
                question: None,
            }))
        }
        QuizOutcome::NoCandidates => Err(ApiError::not_found("quiz questions", category_id)),
    }
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(play_quiz))
}
