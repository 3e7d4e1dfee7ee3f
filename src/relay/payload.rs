//! Template parameters sent to the relay

use crate::state::FormDraft;
use serde::Serialize;

/// Outbound message in the shape the relay template expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_email: String,
}

impl EmailParams {
    /// Map a draft onto template parameters addressed to `to_email`
    pub fn from_draft(draft: &FormDraft, to_email: &str) -> Self {
        Self {
            from_name: draft.name.clone(),
            from_email: draft.email.clone(),
            subject: draft.subject.clone(),
            message: draft.message.clone(),
            to_email: to_email.to_string(),
        }
    }
}
