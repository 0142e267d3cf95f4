//! View state for one interactive search session.
//!
//! The session owns the current keyword, the result set, and the loading
//! flag. A completed search replaces the result set wholesale; a failed one
//! leaves it untouched. When several searches overlap, only the most
//! recently issued one may apply its outcome.

use std::fmt::Display;
use std::future::Future;

use crate::comparison::{assemble_rows, ComparisonRow};
use crate::products::ProductRecord;

/// The remote product-search collaborator.
pub trait ProductSearch {
    type Error: Display;

    /// Runs one search for `keyword`, returning the complete result set.
    fn search(
        &self,
        keyword: &str,
    ) -> impl Future<Output = Result<Vec<ProductRecord>, Self::Error>> + Send;
}

/// Handle for an issued search; pass it back to [`SearchSession::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    id: u64,
    keyword: String,
}

impl SearchTicket {
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }
}

/// What [`SearchSession::complete`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The result set was replaced.
    Applied,
    /// The search failed; prior results were kept.
    Failed,
    /// A newer search was issued since this one; the outcome was dropped.
    Stale,
}

#[derive(Debug, Default)]
pub struct SearchSession {
    keyword: String,
    records: Vec<ProductRecord>,
    rows: Vec<ComparisonRow>,
    loading: bool,
    last_error: Option<String>,
    issued: u64,
}

impl SearchSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a search as in flight and returns its ticket.
    ///
    /// A blank keyword issues nothing and leaves the session unchanged.
    pub fn begin(&mut self, keyword: &str) -> Option<SearchTicket> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            tracing::debug!("blank keyword; search not issued");
            return None;
        }

        self.issued += 1;
        keyword.clone_into(&mut self.keyword);
        self.loading = true;
        tracing::debug!(ticket = self.issued, keyword, "search issued");

        Some(SearchTicket {
            id: self.issued,
            keyword: self.keyword.clone(),
        })
    }

    /// Applies the outcome of the search identified by `ticket`.
    pub fn complete<E: Display>(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<Vec<ProductRecord>, E>,
    ) -> CompletionOutcome {
        if ticket.id != self.issued {
            tracing::debug!(
                ticket = ticket.id,
                latest = self.issued,
                keyword = %ticket.keyword,
                "dropping outcome of superseded search"
            );
            return CompletionOutcome::Stale;
        }

        self.loading = false;
        match outcome {
            Ok(records) => {
                tracing::info!(keyword = %ticket.keyword, hits = records.len(), "search completed");
                self.rows = assemble_rows(&records);
                self.records = records;
                self.last_error = None;
                CompletionOutcome::Applied
            }
            Err(e) => {
                tracing::warn!(
                    keyword = %ticket.keyword,
                    error = %e,
                    "search failed; keeping previous results"
                );
                self.last_error = Some(e.to_string());
                CompletionOutcome::Failed
            }
        }
    }

    /// Issues a search through `searcher` and applies its outcome.
    ///
    /// Returns `None` when the keyword is blank and nothing was sent.
    pub async fn run<S: ProductSearch>(
        &mut self,
        searcher: &S,
        keyword: &str,
    ) -> Option<CompletionOutcome> {
        let ticket = self.begin(keyword)?;
        let outcome = searcher.search(ticket.keyword()).await;
        Some(self.complete(&ticket, outcome))
    }

    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    #[must_use]
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    #[must_use]
    pub fn rows(&self) -> &[ComparisonRow] {
        &self.rows
    }

    #[must_use]
    pub fn hit_count(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message from the most recent failed search, cleared on success.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
