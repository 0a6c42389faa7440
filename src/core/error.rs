use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PerplexityError {
    /// The request was rejected before anything was sent
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// The round trip did not complete within the configured timeout
    #[error("Request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("API error: {message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Provider configuration error: {0}")]
    ProviderConfiguration(String),
}

impl PerplexityError {
    /// Whether a caller could sensibly try the same request again.
    ///
    /// The client never retries on its own; this only classifies the failure.
    pub fn is_retryable(&self) -> bool {
        match self {
            PerplexityError::Network { .. } | PerplexityError::Timeout { .. } => true,
            PerplexityError::Api {
                status_code: Some(code),
                ..
            } => *code == 429 || (500..600).contains(code),
            _ => false,
        }
    }

    /// HTTP status returned by the API, if the failure came from one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PerplexityError::Api { status_code, .. } => *status_code,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("not json").unwrap_err()
    }

    #[test]
    fn test_validation_error_is_terminal() {
        let err = PerplexityError::Validation("no messages".to_string());
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "Validation error: no messages");
    }

    #[test]
    fn test_timeout_is_retryable() {
        let err = PerplexityError::Timeout {
            timeout: Duration::from_millis(300),
        };
        assert!(err.is_retryable());
        assert_eq!(err.to_string(), "Request timed out after 300ms");
    }

    #[test]
    fn test_api_error_classification() {
        let rate_limited = PerplexityError::Api {
            message: "slow down".to_string(),
            status_code: Some(429),
        };
        let server = PerplexityError::Api {
            message: "boom".to_string(),
            status_code: Some(503),
        };
        let unauthorized = PerplexityError::Api {
            message: "bad key".to_string(),
            status_code: Some(401),
        };

        assert!(rate_limited.is_retryable());
        assert!(server.is_retryable());
        assert!(!unauthorized.is_retryable());
        assert_eq!(unauthorized.status_code(), Some(401));
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let err = PerplexityError::Parse {
            message: "Failed to parse completion response".to_string(),
            source: parse_error(),
        };
        assert!(!err.is_retryable());
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(err.status_code(), None);
    }
}
