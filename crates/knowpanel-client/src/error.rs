//! Fetch error kinds
//!
//! Every failure of the retrieval boundary maps to one of three kinds.
//! None propagate past the session controller; each is surfaced to the
//! user as a localized message looked up by [`FetchError::message_key`].

/// Failure of a single retrieval
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Remote resource absent for the given identifier (HTTP 404)
    #[error("product not found: {barcode}")]
    NotFound {
        /// The identifier that produced no document
        barcode: String,
    },

    /// Network failure or non-2xx/non-404 status
    #[error("transport or server failure: {0}")]
    TransportOrServer(String),

    /// Success status but the response lacks the expected panel-graph shape
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl FetchError {
    /// Message key for localized display of this error
    #[inline]
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match self {
            FetchError::NotFound { .. } => "error.product_not_found",
            FetchError::TransportOrServer(_) => "error.fetch_failed",
            FetchError::MalformedResponse(_) => "error.malformed_response",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        // Body decode failures surface as malformed content, everything
        // else is a transport problem
        if err.is_decode() {
            FetchError::MalformedResponse(err.to_string())
        } else {
            FetchError::TransportOrServer(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::MalformedResponse(err.to_string())
    }
}
