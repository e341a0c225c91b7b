//! Errors produced when talking to the mock API.

use thiserror::Error;

/// An error raised by a [`Backend`](crate::client::Backend) call.
///
/// The `Display` text is what the dashboard shows inline, so each variant
/// renders as a complete, human-readable sentence.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response (DNS, TLS, connection refused...).
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("Request failed with status code {0}")]
    Status(u16),

    /// The response body was not the JSON we expected.
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Network(e)
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_matches_dashboard_text() {
        assert_eq!(
            ApiError::Status(500).to_string(),
            "Request failed with status code 500"
        );
    }

    #[test]
    fn json_errors_become_decode_errors() {
        let err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::Decode(_)));
    }
}
