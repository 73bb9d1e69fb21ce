use anyhow::Context;
use trivia_api::configuration::get_configuration;
use trivia_api::db::{self, run_migrations};
use trivia_api::server::app::run_server;
use trivia_api::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let settings = get_configuration().context("Failed to read configuration")?;
    let pool = db::establish_connection(
        &settings.database.path,
        settings.database.create_if_missing,
    )
    .await
    .with_context(|| format!("Cannot open database {}", settings.database.path))?;

    tracing::info!("Running db migrations...");
    run_migrations(&pool).await?;

    run_server(pool, &settings.application.address()).await
}
