//! Base-URL handling for the search service endpoint.

use reqwest::Url;

use crate::error::ClientError;

/// Parses the configured base endpoint, forcing exactly one trailing slash
/// so that joining `search` appends to the path instead of replacing its
/// last segment.
///
/// `"http://host/api"` and `"http://host/api/"` both become `"http://host/api/"`.
pub(super) fn normalize_base_url(base_url: &str) -> Result<Url, ClientError> {
    let normalised = format!("{}/", base_url.trim().trim_end_matches('/'));
    let url = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: "base URL must not carry a query or fragment".to_owned(),
        });
    }
    Ok(url)
}

/// Host of the configured endpoint, for log fields.
pub(super) fn extract_domain(base_url: &Url) -> String {
    base_url
        .host_str()
        .map_or_else(|| base_url.to_string(), str::to_owned)
}
