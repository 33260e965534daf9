//! Mail relay route handler.
//!
//! Receives a contact/inquiry submission as JSON, validates it, and
//! dispatches the business notification plus customer confirmation emails.
//! Stateless: each invocation is independent and nothing is persisted.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use serde::Serialize;
use tracing::instrument;

use crate::error::RelayError;
use crate::models::SubmissionRequest;
use crate::state::AppState;

/// Success response: both provider-assigned message ids.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayResponse {
    pub success: bool,
    pub business_email_id: String,
    pub customer_email_id: String,
}

/// Relay a contact/inquiry submission as two outbound emails.
///
/// POST /api/send-contact-email
///
/// Responds `200` with both message ids on full success, or `500` with a
/// JSON error description on any failure (validation, provider, network).
///
/// # Errors
///
/// Returns `RelayError` when the payload is malformed, a field fails
/// validation, or either send fails.
#[instrument(skip_all)]
pub async fn send_contact_email(
    State(state): State<AppState>,
    payload: Result<Json<SubmissionRequest>, JsonRejection>,
) -> Result<Json<RelayResponse>, RelayError> {
    let Json(request) = payload.map_err(|e| RelayError::Malformed(e.body_text()))?;

    tracing::info!(
        email = %request.email,
        kind = ?request.kind,
        product = request.product_name.as_deref().unwrap_or(""),
        "Received email request"
    );

    let submission = request.validate()?;
    let receipt = state.mailer().dispatch(&submission).await?;

    tracing::info!(
        business_email_id = %receipt.business_email_id,
        customer_email_id = %receipt.customer_email_id,
        "Submission relayed"
    );

    Ok(Json(RelayResponse {
        success: true,
        business_email_id: receipt.business_email_id,
        customer_email_id: receipt.customer_email_id,
    }))
}

/// Answer CORS preflight unconditionally.
///
/// The permissive CORS headers themselves are attached by the `CorsLayer`
/// wrapping the API routes; this handler only guarantees that a bare
/// `OPTIONS` gets an immediate empty 200 regardless of body content.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
