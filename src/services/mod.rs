//! Business logic services for the site.
//!
//! # Services
//!
//! - `resend` - Resend API client (one send operation, no retries)
//! - `mailer` - Email composition and two-email dispatch for submissions

pub mod mailer;
pub mod resend;

pub use mailer::Mailer;
pub use resend::ResendClient;
