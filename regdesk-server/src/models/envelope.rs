//! JSON envelope used by every registration response

use serde::Serialize;

/// `{status, message}` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope {
    pub status: String,
    pub message: String,
}

impl Envelope {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_owned(),
            message: message.into(),
        }
    }

    /// Error envelopes carry the literal string "400" as their status.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: "400".to_owned(),
            message: message.into(),
        }
    }
}
