// web_app/error.rs - Error type shared by the loader, the REST client and the pages
//
// Two kinds come from the remote service: transport failures (Network) and
// non-2xx replies (Service / Unauthorized). The rest guard our own inputs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown when "your items" is requested without a session
pub const LOGIN_REQUIRED: &str = "Please log in to view your items.";

#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinderError {
    /// Transport or connectivity failure, or a body we could not decode
    #[error("network error: {0}")]
    Network(String),

    /// Non-success reply; the message is shown to the user as-is
    #[error("{message}")]
    Service { status: u16, message: String },

    /// 401 from an authenticated endpoint
    #[error("{0}")]
    Unauthorized(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl FinderError {
    pub fn service(status: u16, message: impl Into<String>) -> Self {
        FinderError::Service {
            status,
            message: message.into(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, FinderError::Unauthorized(_))
    }

    /// Build the error for a non-success reply from the service body.
    ///
    /// The service puts its text under `message` (auth routes) or `error`
    /// (item routes); anything else falls back to a generic line.
    pub fn from_reply(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            message: Option<String>,
            error: Option<String>,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("request failed with status {}", status));

        if status == 401 {
            FinderError::Unauthorized(message)
        } else {
            FinderError::service(status, message)
        }
    }
}
