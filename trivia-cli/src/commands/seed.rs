//! Seed command - bulk load categories and questions from a JSON file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use trivia_server::db::{seed, SeedData};
use trivia_server::create_pool;

use crate::config::TriviaConfig;

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// JSON file with `categories` and `questions` arrays
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: PathBuf,

    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

pub async fn run_seed(args: SeedArgs, config: TriviaConfig) -> Result<()> {
    let content = std::fs::read_to_string(&args.file)
        .context(format!("Failed to read seed file: {:?}", args.file))?;
    let data: SeedData = serde_json::from_str(&content)
        .context(format!("Failed to parse seed file: {:?}", args.file))?;

    let database_url = args.database_url.unwrap_or(config.database.url);
    let pool = create_pool(&database_url)
        .await
        .context(format!("Failed to open database: {}", database_url))?;

    let report = seed(&pool, &data).await.context("Failed to load seed data")?;
    pool.close().await;

    let submitted = (data.categories.len() + data.questions.len()) as u64;
    let skipped = submitted.saturating_sub(report.categories + report.questions);
    println!(
        "Seeded {} categories and {} questions ({} skipped)",
        report.categories, report.questions, skipped
    );

    Ok(())
}
