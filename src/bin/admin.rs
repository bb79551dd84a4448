//! CLI administration tool for news-api.
//!
//! Provides commands for viewing content statistics and performing database
//! checks without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # View row counts
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Server version and applied migrations
//! cargo run --bin admin -- db info
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server: `DATABASE_URL`, or `DB_HOST`,
//! `DB_PORT`, `DB_USER`, `DB_PASSWORD` and `DB_NAME`.

use news_api::config::{Config, mask_connection_string};
use news_api::domain::repositories::{
    AuthorRepository, CommentRepository, NewsRepository, TagRepository,
};
use news_api::infrastructure::persistence::{
    PgAuthorRepository, PgCommentRepository, PgNewsRepository, PgTagRepository,
};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing news-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show row counts per resource
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show server version and applied migrations
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = PgPool::connect(&config.database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to {}",
                mask_connection_string(&config.database_url)
            )
        })?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays the number of authors, news, tags and comments.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let pool = Arc::new(pool.clone());
    let authors = PgAuthorRepository::new(pool.clone());
    let news = PgNewsRepository::new(pool.clone());
    let tags = PgTagRepository::new(pool.clone());
    let comments = PgCommentRepository::new(pool);

    let (authors, news, tags, comments) = tokio::try_join!(
        authors.count(),
        news.count(),
        tags.count(),
        comments.count()
    )
    .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    for (label, count) in [
        ("Authors:", authors),
        ("News:", news),
        ("Tags:", tags),
        ("Comments:", comments),
    ] {
        println!(
            "  {:<10} {}",
            label,
            count.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();

            let migrations: Vec<(i64, String, DateTime<Utc>)> = sqlx::query_as(
                "SELECT version, description, installed_on FROM _sqlx_migrations ORDER BY version",
            )
            .fetch_all(pool)
            .await
            .context("Failed to read migrations table (has the server run yet?)")?;

            println!("  Migrations:");
            if migrations.is_empty() {
                println!("    {}", "none applied".yellow());
            }
            for (version, description, installed_on) in migrations {
                println!(
                    "    {} {} {}",
                    version.to_string().cyan(),
                    description,
                    installed_on.to_rfc3339().bright_black()
                );
            }
            println!();
        }
    }

    Ok(())
}
