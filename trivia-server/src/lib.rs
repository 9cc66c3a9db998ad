//! trivia-server: REST API for trivia questions
//!
//! Serves categories, paginated question listings, question creation,
//! deletion and search, and a quiz endpoint that hands out unseen
//! questions one round at a time. Storage is SQLite through sqlx.

pub mod db;
pub mod http;
pub mod models;
pub mod quiz;

pub use db::{create_pool, create_pool_with_options, DbError};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
