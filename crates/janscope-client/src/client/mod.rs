//! HTTP client for the product-search service's `GET /search` endpoint.

mod endpoint;

use std::future::Future;
use std::time::Duration;

use janscope_core::{AppConfig, ProductRecord, ProductSearch};
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::ClientError;
use crate::options::SearchOptions;
use crate::retry::retry_with_backoff;

use endpoint::{extract_domain, normalize_base_url};

/// Error body the service returns alongside 4xx/5xx statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Client for the aggregated product-search service.
///
/// One call to [`SearchClient::search`] returns the complete result set for
/// a keyword or an error; partial bodies are never returned. Transient
/// failures (network errors, 429, 5xx) are retried with exponential backoff
/// up to `max_retries` additional attempts.
pub struct SearchClient {
    client: Client,
    base_url: Url,
    options: SearchOptions,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl SearchClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if `api_url` cannot be used as
    /// a base endpoint, or [`ClientError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, ClientError> {
        Self::with_base_url(
            &config.api_url,
            config.request_timeout_secs,
            &config.user_agent,
            config.max_retries,
            config.retry_backoff_base_secs,
        )
    }

    /// Creates a client pointed at `base_url` (for tests against wiremock).
    ///
    /// # Errors
    ///
    /// Same as [`SearchClient::new`].
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, ClientError> {
        let base_url = normalize_base_url(base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url,
            options: SearchOptions::default(),
            max_retries,
            backoff_base_secs,
        })
    }

    /// Attaches service tuning options sent with every search.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidOption`] if an option is out of range.
    pub fn with_options(mut self, options: SearchOptions) -> Result<Self, ClientError> {
        options.validate()?;
        self.options = options;
        Ok(self)
    }

    #[must_use]
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Searches every marketplace for `keyword` and returns the merged records.
    ///
    /// # Errors
    ///
    /// - [`ClientError::BadRequest`]: HTTP 400, e.g. blank keyword (not retried).
    /// - [`ClientError::RateLimited`]: HTTP 429 after all retries exhausted.
    /// - [`ClientError::UnexpectedStatus`]: any other non-2xx status (5xx retried).
    /// - [`ClientError::Http`]: network or timeout failure after all retries.
    /// - [`ClientError::Deserialize`]: body is not a JSON array of records.
    pub async fn search(&self, keyword: &str) -> Result<Vec<ProductRecord>, ClientError> {
        let url = self.search_url(keyword)?;
        tracing::debug!(
            host = %extract_domain(&self.base_url),
            keyword,
            "requesting product search"
        );

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let response = self
                    .client
                    .get(url.clone())
                    .header(reqwest::header::ACCEPT, "application/json")
                    .send()
                    .await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);
                    return Err(ClientError::RateLimited { retry_after_secs });
                }

                if status == reqwest::StatusCode::BAD_REQUEST {
                    let body = response.text().await?;
                    return Err(ClientError::BadRequest {
                        detail: error_detail(&body),
                    });
                }

                if !status.is_success() {
                    return Err(ClientError::UnexpectedStatus {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }

                let body = response.text().await?;
                serde_json::from_str::<Vec<ProductRecord>>(&body).map_err(|e| {
                    ClientError::Deserialize {
                        context: format!("search results for \"{keyword}\""),
                        source: e,
                    }
                })
            }
        })
        .await
    }

    /// Builds `<base>/search?keyword=...` plus any configured options.
    fn search_url(&self, keyword: &str) -> Result<Url, ClientError> {
        let mut url = self
            .base_url
            .join("search")
            .map_err(|e| ClientError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("keyword", keyword);
            for (name, value) in self.options.query_pairs() {
                pairs.append_pair(name, &value);
            }
        }

        Ok(url)
    }
}

/// Pulls the `detail` message out of an error body, falling back to the raw text.
fn error_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(s),
        }) => s,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) => body.trim().to_owned(),
    }
}

impl ProductSearch for SearchClient {
    type Error = ClientError;

    fn search(
        &self,
        keyword: &str,
    ) -> impl Future<Output = Result<Vec<ProductRecord>, Self::Error>> + Send {
        SearchClient::search(self, keyword)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
