//! Domain models for the site.

pub mod submission;

pub use submission::{Submission, SubmissionKind, SubmissionRequest, ValidationErrors};
