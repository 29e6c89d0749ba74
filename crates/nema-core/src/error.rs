//! Error Types

use thiserror::Error;

/// Result type alias for site operations
pub type Result<T> = std::result::Result<T, SiteError>;

/// Site error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    /// An agent graph edge points at a node index that does not exist
    #[error("Edge {edge} references missing node {node}")]
    DanglingEdge { edge: usize, node: usize },

    /// A browser API call failed (observer, timer, ...)
    #[error("Browser error: {0}")]
    Browser(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SiteError {
    /// Whether the page can keep rendering after this error
    pub fn is_cosmetic(&self) -> bool {
        matches!(self, SiteError::Browser(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SiteError::DanglingEdge { edge: 2, node: 9 };
        assert_eq!(err.to_string(), "Edge 2 references missing node 9");
        assert_eq!(
            SiteError::Config("bad port".into()).to_string(),
            "Configuration error: bad port"
        );
    }

    #[test]
    fn test_cosmetic() {
        assert!(SiteError::Browser("no observer".into()).is_cosmetic());
        assert!(!SiteError::Config("x".into()).is_cosmetic());
    }
}
