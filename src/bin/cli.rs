use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use trivia_api::db::transfer::{export_data, import_data};
use trivia_api::db::{establish_connection, run_migrations};
use trivia_api::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Database path
    db_path: PathBuf,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load categories.csv and questions.csv from a directory, keeping ids
    Import { path: PathBuf },
    /// Write categories.csv and questions.csv to a directory
    Export { path: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let db_path = cli.db_path.display().to_string();
    let create_if_missing = matches!(cli.command, Commands::Import { .. });
    let pool = establish_connection(&db_path, create_if_missing)
        .await
        .with_context(|| format!("Cannot connect to {db_path}"))?;
    match cli.command {
        Commands::Import { path } => {
            run_migrations(&pool).await?;
            import_data(&pool, &path).await.context("Cannot import")?
        }
        Commands::Export { path } => export_data(&pool, &path).await.context("Cannot export")?,
    }
    Ok(())
}
