//! Offline search provider backed by an in-memory instrument list
//!
//! Ships with a list of popular US stocks so the typeahead stays useful when
//! the search endpoint is unreachable or out of quota.

use std::collections::HashSet;

use super::{Candidate, SearchError, SearchProvider};

/// Maximum number of candidates a catalog lookup returns
pub const MAX_CATALOG_RESULTS: usize = 10;

const POPULAR_STOCKS: &[(&str, &str)] = &[
    ("AAPL", "Apple Inc."),
    ("MSFT", "Microsoft Corporation"),
    ("GOOGL", "Alphabet Inc."),
    ("AMZN", "Amazon.com Inc."),
    ("TSLA", "Tesla, Inc."),
    ("META", "Meta Platforms Inc."),
    ("NVDA", "NVIDIA Corporation"),
    ("JPM", "JPMorgan Chase & Co."),
    ("V", "Visa Inc."),
    ("JNJ", "Johnson & Johnson"),
    ("WMT", "Walmart Inc."),
    ("PG", "Procter & Gamble Co."),
    ("MA", "Mastercard Inc."),
    ("UNH", "UnitedHealth Group Inc."),
    ("HD", "The Home Depot, Inc."),
    ("DIS", "The Walt Disney Company"),
    ("PYPL", "PayPal Holdings, Inc."),
    ("BAC", "Bank of America Corp."),
    ("NFLX", "Netflix, Inc."),
    ("ADBE", "Adobe Inc."),
];

#[derive(Debug, Clone)]
pub struct CatalogSearchProvider {
    entries: Vec<Candidate>,
}

impl Default for CatalogSearchProvider {
    fn default() -> Self {
        Self::popular()
    }
}

impl CatalogSearchProvider {
    /// Catalog of popular US stocks
    pub fn popular() -> Self {
        Self {
            entries: POPULAR_STOCKS
                .iter()
                .map(|(symbol, name)| Candidate::stock(*symbol, *name))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Synchronous lookup: case-insensitive substring match on symbol or
    /// name, first occurrence of a symbol wins, capped at
    /// [`MAX_CATALOG_RESULTS`].
    pub fn lookup(&self, query: &str) -> Vec<Candidate> {
        let needle = query.trim().to_uppercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        self.entries
            .iter()
            .filter(|c| {
                c.symbol.to_uppercase().contains(&needle) || c.name.to_uppercase().contains(&needle)
            })
            .filter(|c| seen.insert(c.symbol.clone()))
            .take(MAX_CATALOG_RESULTS)
            .cloned()
            .collect()
    }
}

impl SearchProvider for CatalogSearchProvider {
    fn name(&self) -> &'static str {
        "catalog"
    }

    async fn search(&self, query: String) -> Result<Vec<Candidate>, SearchError> {
        Ok(self.lookup(&query))
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod catalog_tests;
