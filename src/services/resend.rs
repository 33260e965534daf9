//! Resend API client for transactional email delivery.
//!
//! The relay treats Resend as an opaque dependency: one send operation
//! taking a composed email and returning the provider-assigned message id,
//! or an error. Exactly one attempt is made per call; retries are the
//! caller's concern (and this application makes none).

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ResendConfig;

/// Errors that can occur when interacting with the Resend API.
#[derive(Debug, Error)]
pub enum ResendError {
    /// HTTP request failed (network-level).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response or build the client.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// A composed outbound email.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

/// Send response payload: the provider-assigned message identifier.
#[derive(Debug, Deserialize)]
struct SendResponse {
    id: String,
}

/// Resend API client.
#[derive(Clone)]
pub struct ResendClient {
    client: reqwest::Client,
    api_base: String,
}

impl ResendClient {
    /// Create a new Resend API client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &ResendConfig) -> Result<Self, ResendError> {
        let mut headers = HeaderMap::new();

        // Authorization header
        let auth_value = format!("Bearer {}", config.api_key.expose_secret());
        headers.insert(
            "Authorization",
            HeaderValue::from_str(&auth_value)
                .map_err(|e| ResendError::Parse(format!("Invalid API key format: {e}")))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Send one email, returning the provider-assigned message id.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails at the network level, the API
    /// rejects the send, or the response cannot be parsed.
    pub async fn send(&self, email: &OutboundEmail) -> Result<String, ResendError> {
        let url = format!("{}/emails", self.api_base);

        let response = self.client.post(&url).json(email).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ResendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let send_response: SendResponse = response
            .json()
            .await
            .map_err(|e| ResendError::Parse(e.to_string()))?;

        Ok(send_response.id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_outbound_email_serializes_reply_to_only_when_present() {
        let email = OutboundEmail {
            from: "Island Time Tactical <onboarding@resend.dev>".to_string(),
            to: vec!["paul@islandtimetactical.com".to_string()],
            subject: "New Contact Form Submission - Island Time Tactical".to_string(),
            html: "<p>Hi</p>".to_string(),
            reply_to: Some("jane@x.com".to_string()),
        };
        let json = serde_json::to_value(&email).unwrap();
        assert_eq!(json["reply_to"], "jane@x.com");
        assert_eq!(json["to"][0], "paul@islandtimetactical.com");

        let email = OutboundEmail {
            reply_to: None,
            ..email
        };
        let json = serde_json::to_value(&email).unwrap();
        assert!(json.get("reply_to").is_none());
    }

    #[test]
    fn test_api_error_display() {
        let err = ResendError::Api {
            status: 422,
            message: "invalid from".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 422 - invalid from");
    }
}
