//! Catalog Errors
//!
//! Failures surfaced by the data source. The UI shows `user_message()` in
//! place of the data region; nothing is retried automatically.

use thiserror::Error;

/// Common result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Network failure or non-2xx response
    #[error("request to {url} failed: {message}")]
    Fetch {
        url: String,
        status: Option<u16>,
        message: String,
    },

    /// Single-item lookup miss
    #[error("product {0} not found")]
    NotFound(u32),

    /// Body did not match the expected shape
    #[error("malformed response: {0}")]
    Parse(String),
}

impl CatalogError {
    pub fn fetch(url: impl Into<String>, status: Option<u16>, message: impl Into<String>) -> Self {
        CatalogError::Fetch {
            url: url.into(),
            status,
            message: message.into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Fetch { status, .. } => *status,
            CatalogError::NotFound(_) => Some(404),
            CatalogError::Parse(_) => None,
        }
    }

    /// Message suitable for display next to the failed region
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Fetch { status: Some(code), .. } => {
                format!("The catalog service responded with HTTP {}", code)
            }
            CatalogError::Fetch { message, .. } => {
                format!("Could not reach the catalog service: {}", message)
            }
            CatalogError::NotFound(_) => "Product not found".to_string(),
            CatalogError::Parse(_) => "The catalog service returned an unexpected response".to_string(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_status() {
        let err = CatalogError::fetch("https://x/products", Some(503), "Service Unavailable");
        assert_eq!(err.user_message(), "The catalog service responded with HTTP 503");
        assert_eq!(err.status(), Some(503));

        let err = CatalogError::fetch("https://x/products", None, "connection refused");
        assert!(err.user_message().contains("connection refused"));
    }

    #[test]
    fn test_parse_error_from_serde() {
        let err: CatalogError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert_eq!(err.status(), None);
    }
}
