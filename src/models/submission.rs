//! Contact/inquiry submission model and validation.
//!
//! A submission exists only for the duration of a single request: it is
//! parsed from the wire, validated, turned into two outbound emails, and
//! discarded. Nothing is persisted.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminator between a general contact message and a product inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionKind {
    Contact,
    Inquiry,
}

/// Raw submission payload as posted by the form controller.
///
/// The text fields default to empty so that a missing field surfaces as a
/// field-level validation error rather than an opaque parse failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: SubmissionKind,
}

/// A validated submission, ready to be composed into outbound emails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    /// Present only for `SubmissionKind::Inquiry`.
    pub product_name: Option<String>,
    pub kind: SubmissionKind,
}

/// Field-level validation errors, keyed by the wire name of the field.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<&'static str, Vec<String>>,
}

impl ValidationErrors {
    fn add(&mut self, field: &'static str, message: &str) {
        self.fields
            .entry(field)
            .or_default()
            .push(message.to_string());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Error messages for a single field, if any.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Iterate over `(field, messages)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        self.fields.iter().map(|(k, v)| (*k, v.as_slice()))
    }
}

impl std::error::Error for ValidationErrors {}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.fields {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl SubmissionRequest {
    /// Validate the raw payload into a `Submission`.
    ///
    /// Any invalid field blocks the submission; errors are reported per
    /// field, never as a single flattened message.
    ///
    /// # Errors
    ///
    /// Returns `ValidationErrors` mapping field names to messages when any
    /// required field is missing or malformed.
    pub fn validate(self) -> Result<Submission, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = self.name.trim().to_string();
        if name.is_empty() {
            errors.add("name", "Name is required.");
        }

        let email = self.email.trim().to_lowercase();
        if email.is_empty() {
            errors.add("email", "Email is required.");
        } else if !is_valid_email(&email) {
            errors.add("email", "Please enter a valid email address.");
        }

        let message = self.message.trim().to_string();
        if message.is_empty() {
            errors.add("message", "Message is required.");
        }

        let phone = self
            .phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        let product_name = self
            .product_name
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());

        // A product inquiry without a product would render a nameless
        // subject line, so it is rejected up front.
        let product_name = match self.kind {
            SubmissionKind::Inquiry => {
                if product_name.is_none() {
                    errors.add("productName", "Product name is required for an inquiry.");
                }
                product_name
            }
            SubmissionKind::Contact => None,
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Submission {
            name,
            email,
            phone,
            message,
            product_name,
            kind: self.kind,
        })
    }
}

/// Basic email validation.
fn is_valid_email(email: &str) -> bool {
    // Simple validation: contains @, has content before and after @
    let mut parts = email.splitn(2, '@');
    let Some(local) = parts.next() else {
        return false;
    };
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty() && !domain.is_empty() && domain.contains('.')
}
