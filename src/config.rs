use std::env;

/// Which upstream client the server talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamMode {
    /// Fixed-latency stub answer, no network I/O.
    Canned,
    /// Real POST to the RapidAPI provider.
    RapidApi,
}

/// Immutable process configuration, read from the environment once at
/// startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub rapid_api_key: String,
    pub upstream: UpstreamMode,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(6000);

        let rapid_api_key = env::var("RAPID_API_KEY").unwrap_or_default();

        let upstream = match env::var("RELAY_UPSTREAM").as_deref() {
            Ok("rapidapi") => UpstreamMode::RapidApi,
            _ => UpstreamMode::Canned,
        };

        Self {
            port,
            rapid_api_key,
            upstream,
        }
    }
}
