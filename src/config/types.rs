// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::typeahead::{DEFAULT_BLUR_GRACE_MS, DEFAULT_DEBOUNCE_MS};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_MAX_VISIBLE_ROWS: usize = 8;

/// Typeahead timing and layout section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeaheadConfig {
    /// Quiet period after the last keystroke before a lookup is sent
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Delay between losing focus and hiding the panel
    #[serde(default = "default_blur_grace_ms")]
    pub blur_grace_ms: u64,
    /// Rows the results panel shows before it scrolls
    #[serde(default = "default_max_visible_rows")]
    pub max_visible_rows: usize,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_blur_grace_ms() -> u64 {
    DEFAULT_BLUR_GRACE_MS
}

fn default_max_visible_rows() -> usize {
    DEFAULT_MAX_VISIBLE_ROWS
}

impl Default for TypeaheadConfig {
    fn default() -> Self {
        TypeaheadConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            blur_grace_ms: DEFAULT_BLUR_GRACE_MS,
            max_visible_rows: DEFAULT_MAX_VISIBLE_ROWS,
        }
    }
}

impl TypeaheadConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn blur_grace(&self) -> Duration {
        Duration::from_millis(self.blur_grace_ms)
    }

    /// Raise `max_visible_rows` to 1 when it is 0; returns a warning if it did
    pub fn clamp_visible_rows(&mut self) -> Option<String> {
        if self.max_visible_rows > 0 {
            return None;
        }
        self.max_visible_rows = 1;
        Some("Invalid config: max_visible_rows must be at least 1, using 1".to_string())
    }
}

/// Search endpoint section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    /// API base URL; the search path is appended
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-lookup timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Answer from the built-in catalog when the endpoint fails
    #[serde(default = "default_offline_fallback")]
    pub offline_fallback: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_offline_fallback() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            base_url: default_base_url(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            offline_fallback: true,
        }
    }
}

impl SearchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub typeahead: TypeaheadConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
