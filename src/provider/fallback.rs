//! Provider combinator: primary source with an offline fallback

use super::{Candidate, SearchError, SearchProvider};

/// Asks `primary` first and answers from `fallback` when the primary fails
/// or comes back empty.
#[derive(Debug, Clone)]
pub struct FallbackSearchProvider<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackSearchProvider<P, F>
where
    P: SearchProvider,
    F: SearchProvider,
{
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P, F> SearchProvider for FallbackSearchProvider<P, F>
where
    P: SearchProvider,
    F: SearchProvider,
{
    fn name(&self) -> &'static str {
        self.primary.name()
    }

    async fn search(&self, query: String) -> Result<Vec<Candidate>, SearchError> {
        match self.primary.search(query.clone()).await {
            Ok(results) if !results.is_empty() => Ok(results),
            Ok(_) => {
                log::debug!(
                    "{} returned no results for {:?}, trying {}",
                    self.primary.name(),
                    query,
                    self.fallback.name()
                );
                self.fallback.search(query).await
            }
            Err(e) => {
                log::warn!(
                    "{} lookup failed ({}), answering from {}",
                    self.primary.name(),
                    e,
                    self.fallback.name()
                );
                self.fallback.search(query).await
            }
        }
    }
}
