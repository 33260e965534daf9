//! Composes and dispatches the two contact-flow emails.
//!
//! One validated submission produces a business-facing notification and a
//! customer-facing confirmation, sent as two independent Resend calls.

use crate::config::ResendConfig;
use crate::models::{Submission, SubmissionKind};
use crate::services::resend::{OutboundEmail, ResendClient, ResendError};

/// Callback number included in every customer confirmation.
const CALLBACK_PHONE: &str = "(713) 553-7419";

/// Subject of the customer confirmation email.
const CONFIRMATION_SUBJECT: &str = "We received your message - Island Time Tactical";

/// Subject of a business notification for a general contact message.
const CONTACT_SUBJECT: &str = "New Contact Form Submission - Island Time Tactical";

/// Provider message ids for the two dispatched emails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReceipt {
    pub business_email_id: String,
    pub customer_email_id: String,
}

/// Mail dispatch service for contact submissions.
#[derive(Clone)]
pub struct Mailer {
    client: ResendClient,
    from_address: String,
    business_email: String,
}

impl Mailer {
    /// Create a mailer from the Resend configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the underlying HTTP client fails to build.
    pub fn new(config: &ResendConfig) -> Result<Self, ResendError> {
        Ok(Self {
            client: ResendClient::new(config)?,
            from_address: config.from_address.clone(),
            business_email: config.business_email.clone(),
        })
    }

    /// Dispatch both emails for a validated submission.
    ///
    /// The business notification is sent first with reply-to set to the
    /// submitter; the customer confirmation follows. The pair is not
    /// atomic: a failure of the first short-circuits before the second is
    /// attempted, and a failure of the second reports overall failure even
    /// though the business email was already delivered.
    ///
    /// # Errors
    ///
    /// Returns the first provider or network error encountered.
    pub async fn dispatch(&self, submission: &Submission) -> Result<DispatchReceipt, ResendError> {
        let business = OutboundEmail {
            from: self.from_address.clone(),
            to: vec![self.business_email.clone()],
            subject: business_subject(submission),
            html: business_html(submission),
            reply_to: Some(submission.email.clone()),
        };
        let business_email_id = self.client.send(&business).await?;
        tracing::info!(id = %business_email_id, "Business email sent");

        let customer = OutboundEmail {
            from: self.from_address.clone(),
            to: vec![submission.email.clone()],
            subject: CONFIRMATION_SUBJECT.to_string(),
            html: customer_html(submission),
            reply_to: None,
        };
        let customer_email_id = self.client.send(&customer).await?;
        tracing::info!(id = %customer_email_id, "Customer confirmation email sent");

        Ok(DispatchReceipt {
            business_email_id,
            customer_email_id,
        })
    }
}

/// Subject line for the business notification.
#[must_use]
pub fn business_subject(submission: &Submission) -> String {
    match (&submission.kind, submission.product_name.as_deref()) {
        (SubmissionKind::Inquiry, Some(product)) => format!("Product Inquiry: {product}"),
        _ => CONTACT_SUBJECT.to_string(),
    }
}

/// HTML body of the business notification.
///
/// Lists all provided fields; phone and product lines appear only when
/// present. User-supplied text is escaped.
#[must_use]
pub fn business_html(submission: &Submission) -> String {
    let heading = match submission.kind {
        SubmissionKind::Inquiry => "New Product Inquiry",
        SubmissionKind::Contact => "New Contact Form Submission",
    };

    let mut html = format!("<h2>{heading}</h2>\n");
    if let Some(product) = submission.product_name.as_deref() {
        html.push_str(&format!(
            "<p><strong>Product:</strong> {}</p>\n",
            escape_html(product)
        ));
    }
    html.push_str(&format!(
        "<p><strong>Name:</strong> {}</p>\n",
        escape_html(&submission.name)
    ));
    html.push_str(&format!(
        "<p><strong>Email:</strong> {}</p>\n",
        escape_html(&submission.email)
    ));
    if let Some(phone) = submission.phone.as_deref() {
        html.push_str(&format!(
            "<p><strong>Phone:</strong> {}</p>\n",
            escape_html(phone)
        ));
    }
    html.push_str(&format!(
        "<p><strong>Message:</strong></p>\n<p>{}</p>\n",
        escape_html(&submission.message)
    ));
    html.push_str(
        "<hr />\n<p style=\"color: #666; font-size: 12px;\">\
         This email was sent from the Island Time Tactical website contact form.</p>",
    );
    html
}

/// HTML body of the customer confirmation, worded per submission kind.
#[must_use]
pub fn customer_html(submission: &Submission) -> String {
    let name = escape_html(&submission.name);
    let opening = match (&submission.kind, submission.product_name.as_deref()) {
        (SubmissionKind::Inquiry, Some(product)) => format!(
            "<h1>Thank you for your inquiry, {name}!</h1>\n\
             <p>We received your inquiry about <strong>{}</strong>.</p>\n\
             <p>We'll review your message and get back to you as soon as possible.</p>",
            escape_html(product)
        ),
        _ => format!(
            "<h1>Thank you for contacting us, {name}!</h1>\n\
             <p>We have received your message and will get back to you as soon as possible.</p>"
        ),
    };

    format!(
        "{opening}\n\
         <p>If you need immediate assistance, please call us at <strong>{CALLBACK_PHONE}</strong>.</p>\n\
         <p>Best regards,<br>Island Time Tactical Team</p>"
    )
}

/// Minimal HTML escaping for user-supplied text embedded in email bodies.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
