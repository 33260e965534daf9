//! Unified relay error handling with Sentry integration.
//!
//! Every failure in the mail relay is one of three kinds - validation,
//! provider, or network - so callers branch on the type instead of
//! inspecting message strings. All kinds surface to the HTTP client as a
//! JSON error body with a server-error status, per the relay contract.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::models::ValidationErrors;
use crate::services::resend::ResendError;

/// Classification of a relay failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Provider,
    Network,
}

/// Error type for the mail relay endpoint.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The submission failed field-level validation.
    #[error("Invalid submission: {0}")]
    Validation(#[from] ValidationErrors),

    /// The payload could not be parsed at all.
    #[error("Invalid request body: {0}")]
    Malformed(String),

    /// The email provider rejected a send.
    #[error("Email provider error: {0}")]
    Provider(ResendError),

    /// The provider could not be reached.
    #[error("Email delivery failed: {0}")]
    Network(reqwest::Error),
}

impl RelayError {
    /// The kind of failure, for branching without string inspection.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) | Self::Malformed(_) => ErrorKind::Validation,
            Self::Provider(_) => ErrorKind::Provider,
            Self::Network(_) => ErrorKind::Network,
        }
    }
}

impl From<ResendError> for RelayError {
    fn from(err: ResendError) -> Self {
        match err {
            ResendError::Http(e) => Self::Network(e),
            other => Self::Provider(other),
        }
    }
}

/// JSON error body returned to the caller.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        // Capture server-side failures to Sentry; validation noise stays out
        if matches!(self.kind(), ErrorKind::Provider | ErrorKind::Network) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Mail relay error"
            );
        } else {
            tracing::warn!(error = %self, "Rejected submission");
        }

        // The relay contract reports every failure shape as a server error
        // with a JSON description.
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
