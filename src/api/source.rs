use std::fmt;

use async_trait::async_trait;

use super::types::CountryRecord;

/// Errors that can occur while looking up countries.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    /// Client misconfigured (bad base URL, client build failure).
    Config(String),
    /// Search term cannot be expressed as a request.
    Request(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API answered with a non-2xx status.
    Api { status: u16, message: String },
    /// Body was not a JSON array of countries.
    Parse(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Config(msg) => write!(f, "config error: {msg}"),
            QueryError::Request(msg) => write!(f, "request error: {msg}"),
            QueryError::Network(msg) => write!(f, "network error: {msg}"),
            QueryError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            QueryError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for QueryError {}

impl From<serde_json::Error> for QueryError {
    fn from(e: serde_json::Error) -> Self {
        QueryError::Parse(e.to_string())
    }
}

#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Returns the name of the source, for logging.
    fn name(&self) -> &str;

    /// Looks up every country whose name matches `term`, in API order.
    async fn fetch_by_name(&self, term: &str) -> Result<Vec<CountryRecord>, QueryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_status() {
        let err = QueryError::Api {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 404): Not Found");
    }

    #[test]
    fn test_serde_error_becomes_parse() {
        let err: QueryError = serde_json::from_str::<Vec<u8>>("{}").unwrap_err().into();
        assert!(matches!(err, QueryError::Parse(_)));
    }
}
