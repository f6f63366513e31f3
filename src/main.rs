use std::sync::Arc;

use relay_service::config::{AppConfig, UpstreamMode};
use relay_service::relay::{CannedUpstream, HttpUpstream, UpstreamClient, RAPID_API_URL};
use relay_service::{build_app, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();

    let upstream: Arc<dyn UpstreamClient> = match config.upstream {
        UpstreamMode::RapidApi => Arc::new(HttpUpstream::new()),
        UpstreamMode::Canned => Arc::new(CannedUpstream),
    };
    tracing::info!(mode = ?config.upstream, "initialized upstream client");

    let state = AppState {
        upstream,
        upstream_url: RAPID_API_URL.to_string(),
        rapid_api_key: config.rapid_api_key,
    };

    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("bind failed");

    tracing::info!("listening on 0.0.0.0:{}", config.port);

    axum::serve(listener, app).await.expect("server failed");
}
