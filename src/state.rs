//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::services::Mailer;
use crate::services::resend::ResendError;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Holds only immutable resources; nothing is
/// shared mutably across invocations.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    mailer: Mailer,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the mail client cannot be constructed.
    pub fn new(config: SiteConfig) -> Result<Self, ResendError> {
        let mailer = Mailer::new(&config.resend)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, mailer }),
        })
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the mail dispatch service.
    #[must_use]
    pub fn mailer(&self) -> &Mailer {
        &self.inner.mailer
    }
}
