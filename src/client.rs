use std::env;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, header};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::extract;
use crate::observability::{CLIENT_REQUEST_ERRORS, CLIENT_REQUESTS};
use crate::types::GenerationRequest;

const DEFAULT_API_URL: &str = "https://api-inference.huggingface.co/models/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default model queried when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "HuggingFaceH4/zephyr-7b-beta";

/// Client for the Hugging Face Inference API.
///
/// Each call is fully independent given its arguments: the endpoint is
/// stateless, nothing is shared across calls, and no retries are performed.
/// Retry policy, if any, belongs to the caller.
#[derive(Debug, Clone)]
pub struct HuggingFace {
    api_key: String,
    client: ReqwestClient,
    base_url: String,
    timeout: Duration,
}

impl HuggingFace {
    /// Create a new Hugging Face client.
    ///
    /// The API key can be provided directly or read from the
    /// HUGGINGFACE_API_KEY environment variable.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Self::with_options(api_key, None, None)
    }

    /// Create a new client with custom settings.
    ///
    /// The base URL override is how tests inject a fake endpoint.
    pub fn with_options(
        api_key: Option<String>,
        base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let api_key = match api_key {
            Some(key) => key,
            None => env::var("HUGGINGFACE_API_KEY").map_err(|_| {
                Error::authentication(
                    "API key not provided and HUGGINGFACE_API_KEY environment variable not set",
                )
            })?,
        };

        let base_url = base_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        url::Url::parse(&base_url)?;

        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::unexpected(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            client,
            base_url,
            timeout,
        })
    }

    /// Returns the configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Create and return default headers for API requests.
    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .expect("API key should be valid"),
        );
        headers
    }

    /// Send one completion request and return the cleaned reply.
    ///
    /// Exactly one synchronous exchange: the prompt goes out with the fixed
    /// generation parameters, and the call blocks until the server responds
    /// or the timeout elapses. Transport failures map onto the error
    /// taxonomy; a successful transport delegates payload interpretation to
    /// [`extract::extract`].
    pub async fn complete(&self, model: &str, prompt: &str) -> Result<String> {
        CLIENT_REQUESTS.click();
        let url = format!("{}{}", self.base_url, model);
        let request = GenerationRequest::new(prompt);

        let response = self
            .client
            .post(&url)
            .headers(self.default_headers())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                CLIENT_REQUEST_ERRORS.click();
                if e.is_timeout() {
                    Error::timeout(
                        format!("Request timed out: {}", e),
                        Some(self.timeout.as_secs_f64()),
                    )
                } else if e.is_connect() {
                    Error::connection(format!("Connection error: {}", e), Some(Box::new(e)))
                } else {
                    Error::unexpected(format!("Request failed: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            CLIENT_REQUEST_ERRORS.click();
            let body = response
                .text()
                .await
                .map_err(|e| Error::unexpected(format!("Failed to read error response: {}", e)))?;
            return Err(Error::http_status(status.as_u16(), body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::unexpected(format!("Failed to read response: {}", e)))?;
        let payload: Value = match serde_json::from_str(&body) {
            Ok(payload) => payload,
            // A 2xx body that is not JSON at all is an unrecognized shape.
            Err(_) => return Err(Error::malformed(body)),
        };
        extract::extract(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        // Test with explicit API key
        let client = HuggingFace::new(Some("test-key".to_string())).unwrap();
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.base_url, DEFAULT_API_URL);
        assert_eq!(client.timeout, DEFAULT_TIMEOUT);

        // Test with custom options
        let client = HuggingFace::with_options(
            Some("test-key".to_string()),
            Some("https://custom-api.example.com/".to_string()),
            Some(Duration::from_secs(30)),
        )
        .unwrap();
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.base_url, "https://custom-api.example.com/");
        assert_eq!(client.timeout, Duration::from_secs(30));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = HuggingFace::with_options(
            Some("test-key".to_string()),
            Some("not a url".to_string()),
            None,
        );
        assert!(result.is_err());
    }
}
