//! tickahead library - search-as-you-type ticker lookup
//!
//! The typeahead core (debounce, lookup dispatch, selection state) is
//! independent of the terminal UI and can drive any host field.

pub mod app;
pub mod config;
pub mod error;
pub mod layout;
pub mod provider;
pub mod theme;
pub mod typeahead;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use error::TickaheadError;
pub use provider::{Candidate, SearchError, SearchProvider};
pub use typeahead::{HostField, TypeaheadController, TypeaheadKey, TypeaheadView};
