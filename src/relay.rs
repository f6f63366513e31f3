use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use serde_json::Value;
use thiserror::Error;
use tokio::time::{sleep, Duration};

/// Chat completion endpoint of the RapidAPI provider.
pub const RAPID_API_URL: &str = "https://meta-llama-fast-api.p.rapidapi.com/mistralchat";

/// Host identifier the provider expects in the `X-RapidAPI-Host` header.
pub const RAPID_API_HOST: &str = "meta-llama-fast-api.p.rapidapi.com";

/// Fixed answer returned by [`CannedUpstream`] regardless of the prompt.
pub const CANNED_ANSWER: &str = "The sky appears blue because of a phenomenon called Rayleigh scattering. Blue light has shorter wavelengths than other colors in the visible spectrum, and it scatters more easily when it collides with particles or gas molecules in the atmosphere. This scattering effect causes blue light to be scattered in all directions throughout the sky, creating a blue appearance during the daytime hours. At sunrise and sunset, red light is more prominent due to its longer wavelength, which allows it to travel farther through the atmosphere without being scattered as much. This creates a reddish color in the sky.";

const CANNED_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Connection error: {0}")]
    Connection(#[from] reqwest::Error),
}

/// A single outbound POST to the text-generation provider.
///
/// Implemented by [`HttpUpstream`] for the real network path and by
/// [`CannedUpstream`] for the fixed-latency stub; which one a server uses
/// is decided once at startup from configuration.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn send(
        &self,
        url: &str,
        payload: &Value,
        headers: HeaderMap,
    ) -> Result<Value, UpstreamError>;
}

/// Network-backed upstream client.
pub struct HttpUpstream {
    client: reqwest::Client,
}

impl HttpUpstream {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpUpstream {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstream {
    async fn send(
        &self,
        url: &str,
        payload: &Value,
        headers: HeaderMap,
    ) -> Result<Value, UpstreamError> {
        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(payload)
            .send()
            .await?;

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("application/json"));

        if is_json {
            Ok(response.json().await?)
        } else {
            Ok(Value::String(response.text().await?))
        }
    }
}

/// Stub upstream: simulates provider latency, ignores its inputs and
/// answers with [`CANNED_ANSWER`].
pub struct CannedUpstream;

#[async_trait]
impl UpstreamClient for CannedUpstream {
    async fn send(
        &self,
        _url: &str,
        _payload: &Value,
        _headers: HeaderMap,
    ) -> Result<Value, UpstreamError> {
        sleep(CANNED_DELAY).await;
        Ok(Value::String(CANNED_ANSWER.to_string()))
    }
}

/// Strips the single space some providers emit before punctuation.
///
/// Not applied on the response path today; kept for callers that want to
/// clean up provider output.
pub fn format_answer(answer: &str) -> String {
    answer
        .replace(" '", "'")
        .replace(" ,", ",")
        .replace(" .", ".")
        .replace(" -", "-")
}
