use std::path::PathBuf;

use thiserror::Error;

use crate::provider::SearchError;

#[derive(Debug, Error)]
pub enum TickaheadError {
    #[error("Config file not found: {}", .0.display())]
    Config(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Search failed: {0}")]
    Search(#[from] SearchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TickaheadError::Config(PathBuf::from("/nope/config.toml"));
        assert_eq!(err.to_string(), "Config file not found: /nope/config.toml");

        let err: TickaheadError = SearchError::Timeout.into();
        assert!(err.to_string().starts_with("Search failed:"));
    }
}
