//! Router-level tests for every endpoint, each against its own in-memory
//! database.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::ServiceExt;

use trivia_server::db::{seed, SeedData};
use trivia_server::{build_router, create_pool, ServerConfig};

// =============================================================================
// Test Helpers
// =============================================================================

async fn empty_app() -> (Router, SqlitePool) {
    let pool = create_pool("sqlite::memory:").await.expect("pool creation failed");
    let app = build_router(pool.clone(), &ServerConfig::default());
    (app, pool)
}

/// Six categories; category 6 has no questions. Question ids are 1..=15,
/// question 1 mentions "Title".
async fn seeded_app() -> (Router, SqlitePool) {
    let (app, pool) = empty_app().await;

    let mut questions = vec![json!({
        "id": 1,
        "question": "What is the Title of the first Harry Potter book?",
        "answer": "Philosopher's Stone",
        "category": 5,
        "difficulty": 2
    })];
    for id in 2..=15 {
        questions.push(json!({
            "id": id,
            "question": format!("Science question {id}"),
            "answer": format!("Answer {id}"),
            "category": if id <= 4 { 1 } else { 2 },
            "difficulty": id % 5 + 1
        }));
    }

    let data: SeedData = serde_json::from_value(json!({
        "categories": [
            {"id": 1, "type": "Science"},
            {"id": 2, "type": "Art"},
            {"id": 3, "type": "Geography"},
            {"id": 4, "type": "History"},
            {"id": 5, "type": "Entertainment"},
            {"id": 6, "type": "Sports"}
        ],
        "questions": questions
    }))
    .unwrap();
    seed(&pool, &data).await.expect("seed failed");

    (app, pool)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

fn ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .expect("questions array")
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}

fn assert_error(status: StatusCode, body: &Value, code: u16, message: &str) {
    assert_eq!(status.as_u16(), code);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], code);
    assert_eq!(body["message"], message);
}

// =============================================================================
// Categories
// =============================================================================

#[tokio::test]
async fn categories_are_mapped_by_id() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = get(&app, "/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["categories"]["1"], "Science");
    assert_eq!(body["categories"]["6"], "Sports");
    assert_eq!(body["categories"].as_object().unwrap().len(), 6);
}

#[tokio::test]
async fn categories_on_empty_store() {
    let (app, _pool) = empty_app().await;

    let (status, body) = get(&app, "/categories").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "categories": {}}));
}

// =============================================================================
// Question listing
// =============================================================================

#[tokio::test]
async fn questions_first_page() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = get(&app, "/questions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), (1..=10).collect::<Vec<_>>());
    assert_eq!(body["total_questions"], 15);
    assert!(body["current_category"].is_null());
    assert_eq!(body["categories"]["2"], "Art");

    let first = &body["questions"][0];
    assert_eq!(first["answer"], "Philosopher's Stone");
    assert_eq!(first["category"], 5);
    assert_eq!(first["difficulty"], 2);
}

#[tokio::test]
async fn questions_second_page() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = get(&app, "/questions?page=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), (11..=15).collect::<Vec<_>>());
    assert_eq!(body["total_questions"], 15);
}

#[tokio::test]
async fn questions_page_past_end_is_404() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = get(&app, "/questions?page=1000").await;
    assert_error(status, &body, 404, "resource not found");

    let (status, body) = get(&app, "/questions?page=0").await;
    assert_error(status, &body, 404, "resource not found");
}

#[tokio::test]
async fn questions_bad_page_falls_back_to_first() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = get(&app, "/questions?page=abc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body)[0], 1);
}

#[tokio::test]
async fn questions_on_empty_store_is_404() {
    let (app, _pool) = empty_app().await;

    let (status, body) = get(&app, "/questions").await;

    assert_error(status, &body, 404, "resource not found");
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn delete_existing_question() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = send(&app, Method::DELETE, "/questions/3", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["deleted"], 3);
    assert_eq!(body["total_questions"], 14);
    assert!(!ids(&body).contains(&3));

    let (_, listing) = get(&app, "/questions?page=1").await;
    assert!(!ids(&listing).contains(&3));
    assert_eq!(listing["total_questions"], 14);
}

#[tokio::test]
async fn delete_missing_question_is_422() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = send(&app, Method::DELETE, "/questions/1000", None).await;
    assert_error(status, &body, 422, "unprocessable");

    let (_, listing) = get(&app, "/questions").await;
    assert_eq!(listing["total_questions"], 15);
}

#[tokio::test]
async fn delete_non_numeric_id_is_404() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = send(&app, Method::DELETE, "/questions/abc", None).await;

    assert_error(status, &body, 404, "resource not found");
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn create_question_is_retrievable() {
    let (app, pool) = seeded_app().await;

    let (status, body) = post(
        &app,
        "/questions",
        json!({
            "question": "What is the largest planet?",
            "answer": "Jupiter",
            "category": "1",
            "difficulty": 3
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 16);
    assert_eq!(ids(&body).len(), 10);

    let id = body["created"].as_i64().unwrap();
    let stored = trivia_server::db::QuestionRepo::new(&pool).get(id).await.unwrap();
    assert_eq!(stored.question, "What is the largest planet?");
    assert_eq!(stored.answer, "Jupiter");
    assert_eq!(stored.category, 1);
    assert_eq!(stored.difficulty, 3);
}

#[tokio::test]
async fn create_incomplete_question_is_405() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = post(&app, "/questions", json!({"question": "No answer?"})).await;
    assert_error(status, &body, 405, "method is not allowed");

    let (_, listing) = get(&app, "/questions").await;
    assert_eq!(listing["total_questions"], 15);
}

#[tokio::test]
async fn create_with_mistyped_field_is_405() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = post(
        &app,
        "/questions",
        json!({"question": "Q?", "answer": "A", "category": "Science", "difficulty": 1}),
    )
    .await;
    assert_error(status, &body, 405, "method is not allowed");

    let (_, listing) = get(&app, "/questions").await;
    assert_eq!(listing["total_questions"], 15);
}

#[tokio::test]
async fn create_without_json_body_is_400() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = send(&app, Method::POST, "/questions", None).await;

    assert_error(status, &body, 400, "bad request error");
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn search_is_case_insensitive() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = post(&app, "/questions/search", json!({"searchTerm": "title"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1]);
    // Counts the whole store, not the matches.
    assert_eq!(body["total_questions"], 15);
}

#[tokio::test]
async fn search_folds_non_ascii_case() {
    let (app, _pool) = seeded_app().await;

    let (status, created) = post(
        &app,
        "/questions",
        json!({"question": "Où est l'ÉCOLE?", "answer": "Ici", "category": 3, "difficulty": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post(&app, "/questions/search", json!({"searchTerm": "école"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![created["created"].as_i64().unwrap()]);
}

#[tokio::test]
async fn search_without_matches_is_404() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = post(&app, "/questions/search", json!({"searchTerm": "zzzyzx"})).await;

    assert_error(status, &body, 404, "resource not found");
}

#[tokio::test]
async fn search_empty_term_matches_everything() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = post(&app, "/questions/search?page=2", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), (11..=15).collect::<Vec<_>>());
}

// =============================================================================
// Questions by category
// =============================================================================

#[tokio::test]
async fn category_questions() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = get(&app, "/categories/1/questions").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![2, 3, 4]);
    assert_eq!(body["total_questions"], 3);
    assert_eq!(body["current_category"], "Science");
}

#[tokio::test]
async fn unknown_category_is_422() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = get(&app, "/categories/1000/questions").await;

    assert_error(status, &body, 422, "unprocessable");
}

#[tokio::test]
async fn empty_category_is_404() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = get(&app, "/categories/6/questions").await;

    assert_error(status, &body, 404, "resource not found");
}

// =============================================================================
// Quizzes
// =============================================================================

#[tokio::test]
async fn quiz_all_categories() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = post(
        &app,
        "/quizzes",
        json!({"quiz_category": {"type": "click", "id": 0}, "previous_questions": []}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let id = body["question"]["id"].as_i64().unwrap();
    assert!((1..=15).contains(&id));
}

#[tokio::test]
async fn quiz_skips_previous_questions() {
    let (app, _pool) = seeded_app().await;

    for _ in 0..20 {
        let (status, body) = post(
            &app,
            "/quizzes",
            json!({"quiz_category": {"type": "Science", "id": "1"}, "previous_questions": [2, 4]}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"]["id"], 3);
        assert_eq!(body["question"]["category"], 1);
    }
}

#[tokio::test]
async fn quiz_exhausted_category_returns_no_question() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = post(
        &app,
        "/quizzes",
        json!({"quiz_category": {"type": "Science", "id": 1}, "previous_questions": [2, 3, 4]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "question": null}));
}

#[tokio::test]
async fn quiz_empty_category_is_404() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = post(
        &app,
        "/quizzes",
        json!({"quiz_category": {"type": "Sports", "id": 6}, "previous_questions": []}),
    )
    .await;

    assert_error(status, &body, 404, "resource not found");
}

#[tokio::test]
async fn quiz_missing_fields_is_400() {
    let (app, _pool) = seeded_app().await;

    let (status, body) = post(&app, "/quizzes", json!({"previous_questions": []})).await;
    assert_error(status, &body, 400, "bad request error");

    let (status, body) = post(
        &app,
        "/quizzes",
        json!({"quiz_category": {"id": 1}, "previous_questions": null}),
    )
    .await;
    assert_error(status, &body, 400, "bad request error");

    let (status, body) = post(
        &app,
        "/quizzes",
        json!({"quiz_category": {"type": "Science"}, "previous_questions": []}),
    )
    .await;
    assert_error(status, &body, 400, "bad request error");
}

// =============================================================================
// Plumbing
// =============================================================================

#[tokio::test]
async fn health_reports_ready_store() {
    let (app, _pool) = empty_app().await;

    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ready");
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let (app, _pool) = empty_app().await;

    let (status, body) = get(&app, "/nope").await;

    assert_error(status, &body, 404, "resource not found");
}

#[tokio::test]
async fn wrong_method_is_json_405() {
    let (app, _pool) = empty_app().await;

    let (status, body) = send(&app, Method::PATCH, "/categories", None).await;

    assert_error(status, &body, 405, "method is not allowed");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let (app, _pool) = seeded_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/categories")
                .header(header::ORIGIN, "http://localhost:3000")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
