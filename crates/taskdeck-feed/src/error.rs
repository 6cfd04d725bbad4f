/*
[INPUT]:  Error sources (HTTP transport, API status codes, URL parsing)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error type for the feed crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the blog feed client
#[derive(Error, Debug)]
pub enum FeedError {
    /// HTTP request failed (connect error, timeout, decode failure)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed service returned a non-success status
    #[error("feed API error (code {code}): {message}")]
    Api { code: i32, message: String },

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl FeedError {
    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        FeedError::Api {
            code: i32::from(status.as_u16()),
            message: message.into(),
        }
    }
}

/// Result type alias for feed operations
pub type Result<T> = std::result::Result<T, FeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = FeedError::api_error(StatusCode::INTERNAL_SERVER_ERROR, "upstream down");
        match err {
            FeedError::Api { code, message } => {
                assert_eq!(code, 500);
                assert_eq!(message, "upstream down");
            }
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_url_parse_error_conversion() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err = FeedError::from(parse_err);
        assert!(matches!(err, FeedError::UrlParse(_)));
    }
}
