mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "insights")]
#[command(about = "Brand-tagged insight notes backed by SQLite", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the REST API server
    Serve {
        #[arg(short, long, env = "SERVER_PORT", default_value = "8080")]
        port: u16,
        #[arg(short = 'H', long, env = "INSIGHTS_HOST", default_value = "127.0.0.1")]
        host: String,
        /// SQLite database file (created if missing)
        #[arg(long, env = "INSIGHTS_DB_PATH")]
        db_path: Option<PathBuf>,
    },
    /// List all insights
    List {
        #[command(flatten)]
        api: ApiArgs,
    },
    /// Show one insight
    Get {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        #[command(flatten)]
        api: ApiArgs,
    },
    /// Record a new insight
    Add {
        #[arg(short, long, allow_negative_numbers = true)]
        brand: i64,
        #[arg(short, long)]
        text: String,
        #[command(flatten)]
        api: ApiArgs,
    },
    /// Delete an insight
    Delete {
        #[arg(allow_negative_numbers = true)]
        id: i64,
        #[command(flatten)]
        api: ApiArgs,
    },
}

#[derive(Args)]
pub(crate) struct ApiArgs {
    /// Prefix for every API call
    #[arg(long, env = "INSIGHTS_API_BASE", default_value = "http://127.0.0.1:8080")]
    api_base: String,
}

pub(crate) fn get_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("insights")
        .join("db.sqlite3")
}

pub(crate) fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host, db_path } => {
            commands::serve::run(host, port, db_path.unwrap_or_else(get_db_path)).await
        },
        Commands::List { api } => commands::client::run_list(&api.api_base).await,
        Commands::Get { id, api } => commands::client::run_get(&api.api_base, id).await,
        Commands::Add { brand, text, api } => {
            commands::client::run_add(&api.api_base, brand, &text).await
        },
        Commands::Delete { id, api } => commands::client::run_delete(&api.api_base, id).await,
    }
}
