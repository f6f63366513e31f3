mod handlers;
mod models;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::AppState;

pub use models::{AiRequest, ErrorResponse, GraphData, GraphSeries};

/// Browser origins allowed to call the API.
const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:3000"];

pub fn build_app(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = ALLOWED_ORIGINS
        .iter()
        .map(|origin| {
            origin
                .parse()
                .expect("allowed origin must be a valid header value")
        })
        .collect();

    // tower-http rejects wildcard methods/headers combined with credentials;
    // mirroring the request grants the same allowance per request.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    Router::new()
        .route(
            "/generate-ai-response/",
            post(handlers::generate_ai_response),
        )
        .route("/graph-data", get(handlers::graph_data))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(cors)
        .with_state(state)
}
