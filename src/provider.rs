//! Search provider abstraction
//!
//! A provider turns a text query into a ranked list of candidates. Ranking is
//! entirely the provider's business; the typeahead controller only decides
//! which lookup's answer is allowed to reach the screen.

use std::future::Future;

use thiserror::Error;

mod candidate;
mod catalog;
mod fallback;
mod http;

pub use candidate::{AssetKind, Candidate};
pub use catalog::CatalogSearchProvider;
pub use fallback::FallbackSearchProvider;
pub use http::HttpSearchProvider;

/// Errors a lookup can end with
///
/// None of these ever reach the host field: the controller degrades every one
/// of them to "no results".
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SearchError {
    /// Connection refused, DNS failure, TLS failure, ...
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// The endpoint answered, but not with `{"results": [...]}`
    #[error("Malformed search response: {0}")]
    Malformed(String),

    /// The lookup took longer than the configured timeout
    #[error("Search request timed out")]
    Timeout,

    /// The lookup worker is gone (thread panicked or was torn down)
    #[error("Lookup worker unavailable")]
    WorkerUnavailable,
}

impl SearchError {
    /// Malformed responses are treated exactly like empty results
    pub fn is_malformed(&self) -> bool {
        matches!(self, SearchError::Malformed(_))
    }
}

/// Something that answers text queries with candidates
///
/// The returned future must be `Send` so lookups can run as independent tasks
/// on the lookup worker, completing in whatever order the backend answers.
/// Providers are never asked to cancel anything.
pub trait SearchProvider: Send + Sync + 'static {
    /// Short name used in log lines
    fn name(&self) -> &'static str;

    fn search(&self, query: String)
    -> impl Future<Output = Result<Vec<Candidate>, SearchError>> + Send;
}
