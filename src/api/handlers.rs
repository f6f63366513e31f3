use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::{json, Value};
use tokio::time::{sleep, Duration};

use crate::relay::RAPID_API_HOST;
use crate::AppState;

use super::models::{AiRequest, ErrorResponse, GraphData};

const GRAPH_DELAY: Duration = Duration::from_secs(1);

pub async fn generate_ai_response(
    State(state): State<AppState>,
    Json(request): Json<AiRequest>,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    let payload = json!({ "message": request.prompt });

    let api_key = HeaderValue::from_str(&state.rapid_api_key)
        .map_err(|e| internal_error(format!("Invalid RAPID_API_KEY header value: {e}")))?;

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert("x-rapidapi-key", api_key);
    headers.insert("x-rapidapi-host", HeaderValue::from_static(RAPID_API_HOST));

    tracing::debug!(payload = %payload, "forwarding prompt upstream");
    let response = state
        .upstream
        .send(&state.upstream_url, &payload, headers)
        .await
        .map_err(|e| internal_error(e.to_string()))?;
    tracing::debug!(response = %response, "upstream answered");

    Ok(Json(response))
}

pub async fn graph_data() -> Json<GraphData> {
    sleep(GRAPH_DELAY).await;
    Json(GraphData::total_addressable_market())
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "route not found".to_string(),
        }),
    )
        .into_response()
}

fn internal_error(error: String) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error }))
}
