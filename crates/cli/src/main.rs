//! Woodash CLI - inspect and manage a WooCommerce store from the shell.
//!
//! # Usage
//!
//! ```bash
//! # Verify credentials
//! woodash test-connection
//!
//! # List products (newest first)
//! woodash products list --search widget --page 1 --per-page 20
//!
//! # Fetch one product or order
//! woodash products get 101
//! woodash orders get 5001
//!
//! # Store health and diagnostics
//! woodash status
//! woodash info
//! ```
//!
//! Connection settings come from the environment (or a `.env` file);
//! see `config.rs` for the variable list.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use woodash_client::WooClient;

mod commands;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "woodash")]
#[command(author, version, about = "WooCommerce store administration")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify the store connection and credentials
    TestConnection,
    /// Inspect products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Inspect orders
    Orders {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Quick online check with a product count
    Status,
    /// Full store diagnostics (versions, environment)
    Info,
}

#[derive(Subcommand)]
enum ProductAction {
    /// List products
    List {
        /// Filter by name
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by status (`publish`, `draft`, ...)
        #[arg(long)]
        status: Option<String>,

        /// Page number (1-based)
        #[arg(short, long)]
        page: Option<u32>,

        /// Items per page
        #[arg(long)]
        per_page: Option<u32>,
    },
    /// Fetch a single product
    Get {
        /// Product ID
        id: i64,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// List orders
    List {
        /// Filter by status (`processing`, `completed`, ...)
        #[arg(long)]
        status: Option<String>,

        /// Page number (1-based)
        #[arg(short, long)]
        page: Option<u32>,

        /// Items per page
        #[arg(long)]
        per_page: Option<u32>,
    },
    /// Fetch a single order
    Get {
        /// Order ID
        id: i64,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = CliConfig::load()?;
    let client = WooClient::new(config.connection)?;

    match cli.command {
        Commands::TestConnection => commands::store::test_connection(&client).await?,
        Commands::Status => commands::store::status(&client).await?,
        Commands::Info => commands::store::info(&client).await?,
        Commands::Products { action } => match action {
            ProductAction::List {
                search,
                status,
                page,
                per_page,
            } => commands::products::list(&client, search, status, page, per_page).await?,
            ProductAction::Get { id } => commands::products::get(&client, id).await?,
        },
        Commands::Orders { action } => match action {
            OrderAction::List {
                status,
                page,
                per_page,
            } => commands::orders::list(&client, status, page, per_page).await?,
            OrderAction::Get { id } => commands::orders::get(&client, id).await?,
        },
    }
    Ok(())
}
