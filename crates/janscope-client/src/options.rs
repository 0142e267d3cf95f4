//! Optional tuning parameters accepted by the search service.
//!
//! Each option is sent only when set; otherwise the service applies its own
//! default (product-code grouping, translated keyword, 30 items per
//! marketplace, 0.45 similarity).

use crate::error::ClientError;

/// How the service groups listings into products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Group by comparing translated product names.
    Keyword,
    /// Look up product codes first, then search every marketplace by code.
    ProductCode,
}

impl SearchType {
    fn as_param(self) -> &'static str {
        match self {
            SearchType::Keyword => "0",
            SearchType::ProductCode => "1",
        }
    }
}

/// Which form of the keyword the service searches with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateKeyword {
    Original,
    Translated,
    Both,
}

impl TranslateKeyword {
    fn as_param(self) -> &'static str {
        match self {
            TranslateKeyword::Original => "0",
            TranslateKeyword::Translated => "1",
            TranslateKeyword::Both => "2",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    pub search_type: Option<SearchType>,
    pub translate_keyword: Option<TranslateKeyword>,
    /// Items fetched from each marketplace before grouping.
    pub result_limit: Option<u32>,
    /// Name similarity needed to merge listings in keyword grouping.
    pub similarity_threshold: Option<f64>,
}

impl SearchOptions {
    /// Checks ranges the service would otherwise reject or misinterpret.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidOption`] for a zero result limit or a
    /// similarity threshold outside `0.0..=1.0`.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.result_limit == Some(0) {
            return Err(ClientError::InvalidOption {
                name: "search_result_limit",
                reason: "must be greater than zero".to_string(),
            });
        }
        if let Some(threshold) = self.similarity_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ClientError::InvalidOption {
                    name: "similarity_threshold",
                    reason: format!("{threshold} is outside 0.0..=1.0"),
                });
            }
        }
        Ok(())
    }

    /// Query pairs for the options that are set, in a stable order.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(t) = self.search_type {
            pairs.push(("search_type", t.as_param().to_string()));
        }
        if let Some(t) = self.translate_keyword {
            pairs.push(("translate_keyword", t.as_param().to_string()));
        }
        if let Some(limit) = self.result_limit {
            pairs.push(("search_result_limit", limit.to_string()));
        }
        if let Some(threshold) = self.similarity_threshold {
            pairs.push(("similarity_threshold", threshold.to_string()));
        }
        pairs
    }
}
