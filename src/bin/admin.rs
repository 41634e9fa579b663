//! CLI administration tool for smol-url.
//!
//! Runs the same services as the HTTP server against the configured store.
//!
//! # Usage
//!
//! ```bash
//! # Create a link with a generated code
//! cargo run --bin admin -- link create https://example.com/page
//!
//! # Create a link with an explicit code
//! cargo run --bin admin -- link create https://example.com/sale --code promo
//!
//! # Show a stored link
//! cargo run --bin admin -- link show promo
//!
//! # Check the store
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `smol_url::config`.

use smol_url::AppState;
use smol_url::AppError;
use smol_url::config;
use smol_url::infrastructure::persistence;
use smol_url::utils::validation::LinkDraft;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for managing smol-url.
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
    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Store operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a short link
    Create {
        /// Destination URL
        url: String,

        /// Explicit code (generated if omitted)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Show a stored link and where it redirects
    Show {
        /// Short code
        code: String,
    },
}

/// Store operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check store connectivity and count links
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let store = persistence::connect(&config).await?;
    let state = AppState::new(store.repository.clone(), &config);

    let result = match cli.command {
        Commands::Link { action } => handle_link_action(action, &state).await,
        Commands::Db { action } => handle_db_action(action, &state).await,
    };

    store.close().await;
    result
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, state: &AppState) -> Result<()> {
    match action {
        LinkAction::Create { url, code } => {
            let draft = LinkDraft::new(&url, code.as_deref());
            let created = state.link_service.create_short_link(draft).await?;

            println!("{}", "✨ Short link created".green().bold());
            println!("  {} {}", "Code:".bold(), created.link.code.cyan());
            println!("  {} {}", "URL: ".bold(), created.link.target_url);
            println!("  {} {}", "Link:".bold(), created.short_url.bright_blue());
        }
        LinkAction::Show { code } => match state.link_service.get_link_by_code(&code).await {
            Ok(link) => {
                println!("{}", "🔗 Short link".green().bold());
                println!("  {} {}", "Code:   ".bold(), link.code.cyan());
                println!("  {} {}", "URL:    ".bold(), link.target_url);
                println!(
                    "  {} {}",
                    "Link:   ".bold(),
                    state.link_service.get_short_url(&link.code).bright_blue()
                );
                println!("  {} {}", "Created:".bold(), link.created_at.to_rfc3339());
            }
            Err(AppError::NotFound { .. }) => {
                let target = state.resolver.resolve(&code).await?;
                println!(
                    "{} {} {}",
                    "⚠️  No link for".yellow(),
                    code.bold(),
                    format!("(falls back to {})", target.location()).dimmed()
                );
            }
            Err(e) => return Err(e.into()),
        },
    }

    Ok(())
}

/// Dispatches store commands.
async fn handle_db_action(action: DbAction, state: &AppState) -> Result<()> {
    match action {
        DbAction::Check => {
            state.link_service.check_store().await?;
            let count = state.link_service.count_links().await?;

            println!("{}", "✓ Store reachable".green().bold());
            println!("  {} {}", "Links:".bold(), count);
        }
    }

    Ok(())
}
