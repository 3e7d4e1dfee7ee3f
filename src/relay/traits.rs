//! Trait abstraction for the mail relay to enable mocking in tests

use super::payload::EmailParams;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Anything that can go wrong delivering a message through the relay
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("unexpected relay response: {0}")]
    MalformedResponse(String),

    #[error("relay did not answer within {0:?}")]
    Timeout(Duration),

    #[error("relay credentials are not configured")]
    NotConfigured,
}

/// Third-party service that turns a template payload into an email
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailRelay: Send + Sync {
    /// Deliver one message. Resolves once the relay has accepted it.
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &EmailParams,
        account_id: &str,
    ) -> Result<(), RelayError>;
}
