use thiserror::Error;

/// Failure of a single catalog lookup.
///
/// Every variant displays only the message it carries, so callers can prefix
/// it with their own label.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Non-2xx response; carries the server-supplied message or a generic fallback
    #[error("{0}")]
    Rejected(String),

    /// The request never produced a response
    #[error("{0}")]
    Transport(String),

    /// The response body could not be decoded
    #[error("{0}")]
    Decode(String),
}

impl SearchError {
    /// Message used when the server gives no usable `error` field
    pub const GENERIC_MESSAGE: &'static str = "Search failed";

    pub fn message(&self) -> &str {
        match self {
            SearchError::Rejected(msg) | SearchError::Transport(msg) | SearchError::Decode(msg) => {
                msg
            }
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SearchError::Decode(err.to_string())
        } else {
            SearchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Decode(err.to_string())
    }
}
