//! Status API client: authenticated fetch plus response validation.

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::error::ApiError;

/// Where the poller gets raw status data from.
///
/// The poller only needs this one call, so the seam is a single-method
/// trait; tests substitute scripted responses.
pub trait StatusSource {
    /// Fetch the raw response for the window starting at `since` (Unix seconds).
    fn fetch(&self, since: i64) -> Result<Value, ApiError>;
}

/// HTTP client for the homework status endpoint.
pub struct StatusClient {
    endpoint: Url,
    token: String,
    client: Client,
}

impl StatusClient {
    /// Build a client with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(
        endpoint: Url,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint,
            token: token.into(),
            client,
        })
    }
}

impl StatusSource for StatusClient {
    fn fetch(&self, since: i64) -> Result<Value, ApiError> {
        let response = tokio::runtime::Handle::current().block_on(
            self.client
                .get(self.endpoint.clone())
                .header("Authorization", format!("OAuth {}", self.token))
                .query(&[("from_date", since)])
                .send(),
        )?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(ApiError::Unavailable {
                status: response.status().as_u16(),
            });
        }

        tokio::runtime::Handle::current()
            .block_on(response.json::<Value>())
            .map_err(|e| ApiError::Shape(format!("body is not valid JSON: {e}")))
    }
}

/// Check the response shape and extract the `homeworks` list.
///
/// The body must be a JSON object carrying a `homeworks` array. An empty
/// array is valid and simply yields no status change.
pub fn validate_response(raw: &Value) -> Result<&[Value], ApiError> {
    let object = raw
        .as_object()
        .ok_or_else(|| ApiError::Shape("response is not a JSON object".to_string()))?;

    let homeworks = object
        .get("homeworks")
        .ok_or_else(|| ApiError::Shape("response has no 'homeworks' key".to_string()))?;

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ApiError::Shape("'homeworks' is not a list".to_string()))
}
