pub mod api;
pub mod config;
pub mod relay;

use std::sync::Arc;

use crate::relay::UpstreamClient;

pub use api::build_app;

/// Shared, read-only state handed to every handler invocation.
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn UpstreamClient>,
    pub upstream_url: String,
    pub rapid_api_key: String,
}
