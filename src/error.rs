/// Custom error type for the listmarks library
///
/// Using `thiserror` crate for automatic `Error` trait implementation and
/// `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ListmarksError {
    /// I/O errors (configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A contributor failed inside one of its extension points
    #[error("Contributor '{0}' failed: {1}")]
    Contributor(String, String),

    /// A contributor returned an RSS item that breaks the minimum shape the
    /// host requires
    #[error("Contributor '{contributor}' violated the feed item contract: {reason}")]
    ContractViolation { contributor: String, reason: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Export handler errors
    #[error("Export error: {0}")]
    Export(String),

    /// YAML parsing/serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Generic error for cases that don't fit other categories
    #[error("{0}")]
    Other(String),
}

/// Result type alias using ListmarksError
pub type Result<T> = std::result::Result<T, ListmarksError>;

impl From<String> for ListmarksError {
    fn from(s: String) -> Self {
        ListmarksError::Other(s)
    }
}

impl From<&str> for ListmarksError {
    fn from(s: &str) -> Self {
        ListmarksError::Other(s.to_string())
    }
}

impl From<serde_yaml::Error> for ListmarksError {
    fn from(err: serde_yaml::Error) -> Self {
        ListmarksError::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for ListmarksError {
    fn from(err: serde_json::Error) -> Self {
        ListmarksError::Json(err.to_string())
    }
}
