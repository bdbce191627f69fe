//! CLI administration tool for the domain blocklist.
//!
//! Runs the same batch and membership logic as the HTTP service directly
//! against the database, without going through the API.
//!
//! # Usage
//!
//! ```bash
//! # Block one or more domains
//! cargo run --bin admin -- domains add ads.example.com tracker.example.net
//!
//! # Unblock domains (asks for confirmation unless -y)
//! cargo run --bin admin -- domains remove ads.example.com
//!
//! # Check a single domain
//! cargo run --bin admin -- domains check ads.example.com
//!
//! # List every blocked domain
//! cargo run --bin admin -- domains list
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` or `DB_PATH`, plus the `DB_*` pool settings.

use domain_blocklist::application::services::BlocklistService;
use domain_blocklist::config::{self, Config};
use domain_blocklist::domain::entities::{BatchResult, ItemOutcome};
use domain_blocklist::domain::repositories::BlocklistRepository;
use domain_blocklist::infrastructure::persistence::{PoolSettings, SqliteBlocklistRepository, pool};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for managing the domain blocklist.
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
    /// Manage blocked domains
    Domains {
        #[command(subcommand)]
        action: DomainAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Blocklist subcommands.
#[derive(Subcommand)]
enum DomainAction {
    /// Block one or more domains
    Add {
        /// Domain names, applied in order within one transaction
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Unblock one or more domains
    Remove {
        /// Domain names, applied in order within one transaction
        #[arg(required = true)]
        names: Vec<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check whether a domain is blocked
    Check {
        /// Domain name to look up
        name: String,
    },

    /// List all blocked domains
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

type Service = BlocklistService<SqliteBlocklistRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = pool::connect(&config.database_url, &PoolSettings::from(&config))
        .await
        .context("Failed to connect to database")?;

    let service = build_service(&config, &pool).await?;

    match cli.command {
        Commands::Domains { action } => handle_domain_action(action, &service).await?,
        Commands::Stats => handle_stats(&service).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;

    Ok(())
}

async fn build_service(config: &Config, pool: &SqlitePool) -> Result<Service> {
    let repository = Arc::new(SqliteBlocklistRepository::new(Arc::new(pool.clone())));
    repository
        .ensure_schema()
        .await
        .context("Failed to prepare database schema")?;

    Ok(BlocklistService::new(repository)
        .with_check_timeout(Duration::from_millis(config.check_timeout_ms)))
}

/// Dispatches blocklist commands.
async fn handle_domain_action(action: DomainAction, service: &Service) -> Result<()> {
    match action {
        DomainAction::Add { names } => add_domains(service, names).await,
        DomainAction::Remove { names, yes } => remove_domains(service, names, yes).await,
        DomainAction::Check { name } => check_domain(service, &name).await,
        DomainAction::List => list_domains(service).await,
    }
}

async fn add_domains(service: &Service, names: Vec<String>) -> Result<()> {
    println!("{}", "🚫 Block Domains".bright_blue().bold());
    println!();

    let result = service
        .append(names)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to add domains: {}", e))?;

    print_batch(&result, "blocked", "already blocked");

    Ok(())
}

/// Removes domains after confirmation.
///
/// Confirmation defaults to No, as with any destructive admin action.
async fn remove_domains(service: &Service, names: Vec<String>, skip_confirm: bool) -> Result<()> {
    println!("{}", "🔓 Unblock Domains".bright_blue().bold());
    println!();

    for name in &names {
        println!("  {}", name.cyan());
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove {} domain(s)?", names.len()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let result = service
        .remove(names)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to remove domains: {}", e))?;

    print_batch(&result, "removed", "not blocked");

    Ok(())
}

async fn check_domain(service: &Service, name: &str) -> Result<()> {
    let blocked = service
        .check_exists(name)
        .await
        .map_err(|e| anyhow::anyhow!("Check failed: {}", e))?;

    if blocked {
        println!("  {} {}", name.cyan(), "BLOCKED".red().bold());
    } else {
        println!("  {} {}", name.cyan(), "not blocked".green());
    }

    Ok(())
}

/// Lists all blocked domains in name order.
///
/// # Output Format
///
/// ```text
/// 📋 Blocked Domains
///
///   ads.example.com
///   tracker.example.net
///
///   Total: 2
/// ```
async fn list_domains(service: &Service) -> Result<()> {
    println!("{}", "📋 Blocked Domains".bright_blue().bold());
    println!();

    let domains = service
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list domains: {}", e))?;

    if domains.is_empty() {
        println!("{}", "  No domains blocked".yellow());
        println!();
        println!(
            "  Add one with: {} admin domains add <name>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    for domain in &domains {
        println!("  {}", domain.name.cyan());
    }

    println!();
    println!(
        "  Total: {}",
        domains.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints applied and failed items of a committed batch.
fn print_batch(result: &BatchResult, applied_label: &str, failed_label: &str) {
    for outcome in &result.applied {
        println!("  {} {}", "✅".green(), outcome.name().cyan());
    }
    for outcome in &result.failed {
        println!(
            "  {} {} {}",
            "⚠️ ".yellow(),
            outcome.name().cyan(),
            describe_failure(outcome, failed_label).bright_black()
        );
    }

    println!();
    println!(
        "  {} {}, {} {}",
        result.applied.len().to_string().bright_green().bold(),
        applied_label,
        result.failed.len().to_string().yellow().bold(),
        failed_label
    );
    println!();
}

fn describe_failure(outcome: &ItemOutcome, label: &str) -> String {
    format!("({}, item {})", label, outcome.index())
}

/// Displays blocklist statistics.
async fn handle_stats(service: &Service) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let count = service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count domains: {}", e))?;

    println!(
        "  Blocked domains: {}",
        count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  SQLite: {}", version.bright_white());
        }
    }

    Ok(())
}
