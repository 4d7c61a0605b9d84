//! Error type for fetching posts.

use thiserror::Error;

/// Message shown to the user for any failed fetch.
pub const FETCH_FAILED_MESSAGE: &str = "Error fetching posts";

/// Why a posts fetch failed.
///
/// The variants exist for logging only. The page shows the same banner for
/// all of them, see [`FetchError::banner`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, CORS, offline, ...).
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status code.
    #[error("server responded with status {0}")]
    Status(u16),

    /// The response body was not a posts payload.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl FetchError {
    /// User-facing message for the error banner.
    pub fn banner(&self) -> &'static str {
        FETCH_FAILED_MESSAGE
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_is_uniform() {
        let errors = [
            FetchError::Network("offline".to_string()),
            FetchError::Status(503),
            FetchError::Decode("missing field `posts`".to_string()),
        ];
        for e in &errors {
            assert_eq!(e.banner(), "Error fetching posts");
        }
    }

    #[test]
    fn test_display_keeps_detail() {
        assert_eq!(
            FetchError::Status(404).to_string(),
            "server responded with status 404"
        );
        assert_eq!(
            FetchError::Network("timed out".to_string()).to_string(),
            "request failed: timed out"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(FetchError::from(err), FetchError::Decode(_)));
    }
}
