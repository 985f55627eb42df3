//! Failure taxonomy for calls to the authentication service.
//!
//! ERROR HANDLING
//! ==============
//! A non-200 reply and a request that never got a reply are different
//! failures. The first carries server text meant for the user; the second
//! gets a fixed message so a dropped connection is never silent.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Shown when the service could not be reached at all.
pub const NETWORK_UNAVAILABLE_MESSAGE: &str = "Serveur injoignable, réessayez plus tard.";

/// The request did not complete at the transport level (offline, DNS
/// failure, refused connection, unreadable body).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self(detail.into())
    }
}

/// Errors produced by [`AuthClient`](super::api::AuthClient) operations.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The service answered with a status other than `200`.
    #[error("request rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// No reply was received.
    #[error("network unavailable: {0}")]
    NetworkUnavailable(#[from] TransportError),

    /// A JSON document could not be encoded or decoded.
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl SubmitError {
    /// Text to place in the form's feedback element.
    ///
    /// Rejections surface the server's body verbatim.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { body, .. } => body.clone(),
            Self::NetworkUnavailable(_) => NETWORK_UNAVAILABLE_MESSAGE.to_owned(),
            Self::Json(e) => e.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::NetworkUnavailable(_) | Self::Json(_) => None,
        }
    }
}
