//! HTTP adapter for the interview service
//!
//! Every call goes through [`ApiClient::request`], which joins the path onto
//! the configured base address, sends JSON, and decodes the JSON reply.
//! Failures are logged here once and handed back unchanged, classified as
//! [`InterviewerError::Server`], [`InterviewerError::Network`],
//! [`InterviewerError::Request`] or [`InterviewerError::Decode`].

use crate::config::ApiConfig;
use crate::error::{InterviewerError, Result};

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Thin wrapper around a configured `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
    log_requests: bool,
}

impl ApiClient {
    /// Create a client for the profile-resolved base address
    ///
    /// # Errors
    ///
    /// Returns [`InterviewerError::Request`] if the base address is not a
    /// valid URL or the HTTP client cannot be built.
    ///
    /// # Examples
    ///
    /// ```
    /// use interviewer::api::ApiClient;
    /// use interviewer::config::ApiConfig;
    ///
    /// let client = ApiClient::new(&ApiConfig::default()).unwrap();
    /// assert_eq!(client.base_url(), "http://localhost:8000");
    /// ```
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base = config.resolved_base_url().trim_end_matches('/').to_string();
        Url::parse(&base).map_err(|e| {
            InterviewerError::Request(format!("Invalid base URL {}: {}", base, e))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .user_agent(concat!("interviewer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                InterviewerError::Request(format!("Failed to create HTTP client: {}", e))
            })?;

        tracing::info!(
            "Initialized API client: base_url={}, timeout={}s",
            base,
            config.timeout_seconds
        );

        Ok(Self {
            client,
            base_url: base,
            timeout: config.timeout(),
            log_requests: config.request_logging(),
        })
    }

    /// Base address without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the absolute URL for a path and query pairs
    pub fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url> {
        let joined = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&joined)
            .map_err(|e| InterviewerError::Request(format!("Invalid URL {}: {}", joined, e)))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// `GET` a path and decode the JSON body
    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        self.request::<(), T>(Method::GET, path, query, None).await
    }

    /// `POST` a JSON body and decode the JSON reply
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, &[], Some(body)).await
    }

    /// `POST` without a body, parameters in the query string
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        self.request::<(), T>(Method::POST, path, query, None).await
    }

    /// Send a request and decode the JSON reply
    ///
    /// # Errors
    ///
    /// * [`InterviewerError::Server`] when the response status is not 2xx
    /// * [`InterviewerError::Network`] when no response was received
    /// * [`InterviewerError::Request`] when the request could not be built
    /// * [`InterviewerError::Decode`] when the body has the wrong shape
    pub async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path, query).map_err(|e| {
            tracing::error!("Request error: {}", e);
            e
        })?;

        if self.log_requests {
            let payload = body
                .map(|b| serde_json::to_string(b).unwrap_or_default())
                .unwrap_or_default();
            tracing::debug!("{} {} {}", method, url, payload);
        }

        let mut builder = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            let classified = self.classify_send_error(e);
            log_failure(&method, &url, &classified);
            classified
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            let classified = InterviewerError::Network(format!("Failed to read response: {}", e));
            log_failure(&method, &url, &classified);
            classified
        })?;

        if !status.is_success() {
            let error = InterviewerError::Server {
                status: status.as_u16(),
                body: text,
            };
            log_failure(&method, &url, &error);
            return Err(error.into());
        }

        tracing::debug!("{} {} -> {}", method, url, status);

        serde_json::from_str(&text).map_err(|e| {
            let classified = InterviewerError::Decode(format!("{} {}: {}", method, url, e));
            log_failure(&method, &url, &classified);
            classified.into()
        })
    }

    fn classify_send_error(&self, error: reqwest::Error) -> InterviewerError {
        if error.is_builder() {
            InterviewerError::Request(error.to_string())
        } else if error.is_timeout() {
            InterviewerError::Network(format!(
                "No response within {}s: {}",
                self.timeout.as_secs(),
                error
            ))
        } else {
            InterviewerError::Network(error.to_string())
        }
    }
}

/// Log a failed call once, by category
fn log_failure(method: &Method, url: &Url, error: &InterviewerError) {
    tracing::error!("API error on {} {}: {}", method, url, error);
    match error {
        InterviewerError::Server { status, body } => {
            match StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR) {
                StatusCode::BAD_REQUEST => tracing::error!("Bad Request: {}", body),
                StatusCode::NOT_FOUND => tracing::error!("Not Found: {}", body),
                StatusCode::INTERNAL_SERVER_ERROR => tracing::error!("Server Error: {}", body),
                other => tracing::error!("HTTP Error {}: {}", other.as_u16(), body),
            }
        }
        InterviewerError::Network(_) => {
            tracing::error!("Network Error: No response received")
        }
        InterviewerError::Decode(msg) => tracing::error!("Response Error: {}", msg),
        other => tracing::error!("Request Error: {}", other),
    }
}
