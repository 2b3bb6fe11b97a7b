//! Request failure taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Validation errors are local and collected as a list. Transport, application
//! and decode errors all end up as a single "failed" state for the request
//! that produced them; they differ only in the message shown. `Unauthorized`
//! is split out of the application errors so callers can drop the session.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::transport::TransportError;

/// Shown when a failure carries nothing more specific.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again later.";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Local form rules failed; no request was made.
    #[error("{}", .0.join("; "))]
    Validation(Vec<String>),
    /// No response was received.
    #[error("network error: {0}")]
    Transport(String),
    /// The backend answered 401.
    #[error("{message}")]
    Unauthorized { message: String },
    /// The backend answered with another non-2xx status.
    #[error("{}", .messages.join("; "))]
    Application { status: u16, messages: Vec<String> },
    /// A 2xx body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// HTTP status for errors that came with one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Application { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable lines for a form's error list.
    #[must_use]
    pub fn user_messages(&self) -> Vec<String> {
        match self {
            Self::Validation(messages) | Self::Application { messages, .. } if !messages.is_empty() => {
                messages.clone()
            }
            Self::Unauthorized { message } => vec![message.clone()],
            Self::Transport(_) => vec!["Unable to reach the server. Please try again later.".to_owned()],
            _ => vec![GENERIC_FAILURE.to_owned()],
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        Self::Transport(err.to_string())
    }
}
