//! API utilities for frontend-backend communication
//!
//! Provides the error type shared by all API clients and the helpers that
//! build URLs and perform JSON requests.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Failure of a web API call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("HTTP error {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to encode query: {0}")]
    Query(String),
}

/// Build a full API URL from the server context path and an API path
///
/// # Example
/// ```ignore
/// let url = api_url("/sonar", "/api/rules/search");
/// assert_eq!(url, "/sonar/api/rules/search");
/// ```
pub fn api_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Append a serialized query string to `url`
pub fn with_query<Q: Serialize>(url: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Query(e.to_string()))?;
    if qs.is_empty() {
        Ok(url.to_string())
    } else {
        Ok(format!("{}?{}", url, qs))
    }
}

/// GET `url` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST `params` to `url`; the response body is not read
pub async fn post(url: &str, params: &[(&str, &str)]) -> Result<(), ApiError> {
    let response = Request::post(url)
        .query(params.iter().copied())
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }
    Ok(())
}
