use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("rate limited by search service (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    /// The service rejected the query, e.g. a blank keyword.
    #[error("search service rejected the request: {detail}")]
    BadRequest { detail: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("invalid search option {name}: {reason}")]
    InvalidOption { name: &'static str, reason: String },
}
