//! Failure taxonomy for calls to the backend.

use thiserror::Error;

use crate::models::ErrorResponse;

/// Everything that can go wrong talking to the backend.
///
/// None of these are retried; call sites turn them into a message for the
/// user with [`ApiError::user_message`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("unable to reach the server: {0}")]
    Transport(String),

    /// 401 or 403: no session, or the session is not allowed here.
    #[error("not authorized (HTTP {status})")]
    Unauthorized { status: u16, detail: Option<String> },

    /// Any other non-success status, usually a backend validation failure.
    #[error("request rejected (HTTP {status})")]
    Rejected { status: u16, detail: Option<String> },

    /// A success response whose body was not the expected JSON.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds the error for a non-success response from its status and raw body.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = ErrorResponse::parse(body).and_then(|error| error.message());
        match status {
            401 | 403 => Self::Unauthorized { status, detail },
            _ => Self::Rejected { status, detail },
        }
    }

    /// The backend's own `detail` message, when it sent one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { detail, .. } | Self::Rejected { detail, .. } => detail.as_deref(),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// HTTP status of the failed response, if there was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status, .. } | Self::Rejected { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Message to display: the backend `detail` if present, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }

    /// Like [`ApiError::user_message`], but a transport failure shows its own
    /// text before falling back.
    #[must_use]
    pub fn reason_or(&self, fallback: &str) -> String {
        match self {
            Self::Transport(reason) if !reason.trim().is_empty() => reason.clone(),
            _ => self.user_message(fallback),
        }
    }
}
