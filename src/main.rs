use anyhow::Context;
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod common;
mod config;
mod docs;
mod infrastructure;
mod modules;
mod routes;
mod state;
#[cfg(test)]
mod test_utils;

use config::settings::{AppConfig, VIDEO_BUCKET};
use infrastructure::db::pool::connect_to_db;
use infrastructure::http::fetcher::HttpVideoSource;
use infrastructure::storage::s3::StorageService;
use modules::callback::repository::QuestionRepository;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting server...");

    let config = AppConfig::new()?;

    let db = connect_to_db(&config.database_url)
        .await
        .context("failed to connect to PostgreSQL")?;
    let storage = StorageService::new(
        &config.storage_endpoint,
        &config.storage_region,
        VIDEO_BUCKET,
        &config.storage_access_key,
        &config.storage_secret_key,
    );
    let http = reqwest::Client::builder()
        .build()
        .context("failed to build HTTP client")?;

    if config.default_question_id.is_none() {
        info!("No default question id configured; callbacks must name their question");
    }

    let port = config.server_port;
    let state = AppState::new(
        config,
        Arc::new(HttpVideoSource::new(http)),
        Arc::new(storage),
        Arc::new(QuestionRepository::new(db)),
    );

    let app = app::create_app(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
