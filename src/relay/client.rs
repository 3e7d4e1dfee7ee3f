//! HTTP client for the EmailJS mail relay
//!
//! Posts template parameters to the EmailJS REST endpoint. The relay answers
//! a plain-text `OK` on success and a non-2xx status with a reason otherwise.

use super::payload::EmailParams;
use super::traits::{MailRelay, RelayError};
use async_trait::async_trait;
use serde::Serialize;

/// Default relay endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Request body for the send endpoint
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailParams,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

/// Client for the EmailJS REST API
#[derive(Clone)]
pub struct EmailJsRelay {
    client: reqwest::Client,
    endpoint: String,
    access_token: Option<String>,
}

impl EmailJsRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            access_token: None,
        }
    }

    /// Attach the account's private key, required when strict mode is on
    pub fn with_access_token(mut self, access_token: Option<String>) -> Self {
        self.access_token = access_token;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Classify a relay reply
fn interpret_response(status: u16, body: &str) -> Result<(), RelayError> {
    if !(200..300).contains(&status) {
        return Err(RelayError::Rejected {
            status,
            body: body.trim().to_string(),
        });
    }
    if body.trim() == "OK" {
        Ok(())
    } else {
        Err(RelayError::MalformedResponse(body.trim().to_string()))
    }
}

#[async_trait]
impl MailRelay for EmailJsRelay {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &EmailParams,
        account_id: &str,
    ) -> Result<(), RelayError> {
        let request = SendRequest {
            service_id,
            template_id,
            user_id: account_id,
            template_params: params,
            access_token: self.access_token.as_deref(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        interpret_response(status, &body)
    }
}

/// Stand-in used when no credentials were supplied; every send fails
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredRelay;

#[async_trait]
impl MailRelay for UnconfiguredRelay {
    async fn send(
        &self,
        _service_id: &str,
        _template_id: &str,
        _params: &EmailParams,
        _account_id: &str,
    ) -> Result<(), RelayError> {
        Err(RelayError::NotConfigured)
    }
}
