//! reqwest client for the search-recommendations endpoints

use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::{RequestBuilder, Response, Url};

use super::types::{RecordPayload, SuggestionsPayload};
use super::{ApiError, SuggestBackend};
use crate::config::ApiConfig;

const SUGGEST_PATH: &str = "search-recommendations/suggest";
const RECORD_PATH: &str = "search-recommendations/record";

/// HTTP client for the suggestion endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client from the `[api]` config section
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = parse_base_url(&config.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            token: config
                .token
                .as_ref()
                .filter(|t| !t.trim().is_empty())
                .cloned(),
        })
    }

    /// Resolve an endpoint path relative to the base URL
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// `GET /search-recommendations/suggest?q=<query>`
    pub async fn fetch_suggestions(&self, query: &str) -> Result<Vec<String>, ApiError> {
        let url = self.endpoint(SUGGEST_PATH)?;
        let request = self.authorize(self.http.get(url).query(&[("q", query)]));

        let response = check_status(request.send().await.map_err(network_error)?).await?;
        let payload: SuggestionsPayload = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        Ok(payload.suggestions)
    }

    /// `POST /search-recommendations/record` with `{ "term": ... }`
    ///
    /// The response body is ignored.
    pub async fn record_term(&self, term: &str) -> Result<(), ApiError> {
        let url = self.endpoint(RECORD_PATH)?;
        let request = self.authorize(self.http.post(url).json(&RecordPayload { term }));

        check_status(request.send().await.map_err(network_error)?).await?;
        Ok(())
    }
}

impl SuggestBackend for ApiClient {
    fn suggest<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<String>, ApiError>> {
        Box::pin(self.fetch_suggestions(query))
    }

    fn record<'a>(&'a self, term: &'a str) -> BoxFuture<'a, Result<(), ApiError>> {
        Box::pin(self.record_term(term))
    }
}

/// Parse the configured base URL, making sure relative joins keep its path
///
/// `Url::join` replaces the last path segment unless the base ends with `/`.
pub fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };

    let url = Url::parse(&with_slash).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ApiError::InvalidUrl(format!(
            "unsupported scheme '{}'",
            other
        ))),
    }
}

fn network_error(e: reqwest::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .ok()
        .filter(|body| !body.trim().is_empty())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

    Err(ApiError::Status {
        code: status.as_u16(),
        message,
    })
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
