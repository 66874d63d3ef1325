// src/main.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use recipe_book::server::{self, BookConfig};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "recipe-book")]
#[command(author, version, about = "Recipe book REST API", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Database connection string (e.g. sqlite://recipes.db)
    #[arg(long, env = "DATABASE_URL", global = true)]
    database_url: Option<String>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database and apply schema migrations
    Init,
    /// Run the HTTP server
    Serve {
        /// Address to bind to (default: 0.0.0.0:5000)
        #[arg(short, long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = BookConfig::load_or_default(cli.config.as_deref())?
        .with_database_url(cli.database_url);

    match cli.command {
        Some(Commands::Init) => {
            let db_path = config.db_path()?;
            info!("Initializing recipe database at: {}", db_path);
            recipe_book::db::init(&db_path)?;
            println!("Database initialized successfully at: {}", db_path);
            Ok(())
        }
        Some(Commands::Serve { bind }) => {
            let config = config.with_bind(bind);
            config.validate()?;
            server::run_server(config.to_server_config()?).await
        }
        None => {
            println!("Recipe Book v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'recipe-book --help' for usage information");
            Ok(())
        }
    }
}
