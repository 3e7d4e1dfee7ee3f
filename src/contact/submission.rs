//! Contact form submission: payload construction, relay dispatch, outcome handling
//!
//! One attempt moves `Idle → Sending → {Succeeded, Failed}`. The relay call is
//! the only suspend point; everything before and after it is synchronous so
//! the UI task can spawn [`dispatch`] and apply the result with
//! [`SubmissionController::finish`] when it arrives.

use crate::config::RelayCredentials;
use crate::content::CONTACT_EMAIL;
use crate::relay::{EmailParams, MailRelay, RelayError};
use crate::state::{ContactForm, FormDraft, NotificationKind, NotificationState, Notifier};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::Instrument;
use uuid::Uuid;

const SUCCESS_TITLE: &str = "Message sent successfully!";
const SUCCESS_DESCRIPTION: &str = "Thank you for your message. I'll get back to you soon.";
const FAILURE_TITLE: &str = "Error sending message";
const FAILURE_DESCRIPTION: &str = "Please try again or contact me directly via email.";

/// The single failure kind a submission can end in
#[derive(Debug, Error)]
#[error("message delivery failed: {0}")]
pub struct DeliveryFailure(#[from] pub RelayError);

/// Result of one relay call
#[derive(Debug)]
pub enum SubmissionOutcome {
    Success,
    Failure(DeliveryFailure),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// The notification the visitor sees for this outcome
    pub fn notification(&self) -> NotificationState {
        match self {
            Self::Success => NotificationState::new(
                NotificationKind::Informational,
                SUCCESS_TITLE,
                SUCCESS_DESCRIPTION,
            ),
            Self::Failure(_) => NotificationState::new(
                NotificationKind::Destructive,
                FAILURE_TITLE,
                FAILURE_DESCRIPTION,
            ),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("A message is already being sent")]
    AlreadySending,
}

/// Where the current (or last) attempt stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Sending => "Sending…",
            Self::Succeeded => "Sent",
            Self::Failed => "Not sent",
        }
    }
}

/// An attempt that has left `Idle` and awaits the relay
#[derive(Debug, Clone)]
pub struct Submission {
    pub attempt_id: Uuid,
    pub params: EmailParams,
}

/// Drives one submission attempt at a time
#[derive(Debug, Default)]
pub struct SubmissionController {
    phase: SubmissionPhase,
    attempt_id: Option<Uuid>,
    started_at: Option<Instant>,
}

impl SubmissionController {
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_sending(&self) -> bool {
        self.phase == SubmissionPhase::Sending
    }

    /// Id of the attempt in flight, if any
    pub fn attempt_id(&self) -> Option<Uuid> {
        self.attempt_id.filter(|_| self.is_sending())
    }

    /// Start an attempt from the given draft.
    ///
    /// Rejected while another attempt is in flight; the rejected call has no
    /// other effect.
    pub fn begin(&mut self, draft: &FormDraft) -> Result<Submission, SubmitError> {
        if self.is_sending() {
            tracing::debug!(attempt_id = ?self.attempt_id, "Submit ignored, send in flight");
            return Err(SubmitError::AlreadySending);
        }

        let attempt_id = Uuid::new_v4();
        self.phase = SubmissionPhase::Sending;
        self.attempt_id = Some(attempt_id);
        self.started_at = Some(Instant::now());

        tracing::info!(
            %attempt_id,
            name_len = draft.name.len(),
            email_len = draft.email.len(),
            subject_len = draft.subject.len(),
            message_len = draft.message.len(),
            "Sending contact message"
        );

        Ok(Submission {
            attempt_id,
            params: EmailParams::from_draft(draft, CONTACT_EMAIL),
        })
    }

    /// Apply an outcome: exactly one notification, and a reset on success only.
    pub fn finish(
        &mut self,
        outcome: SubmissionOutcome,
        form: &mut ContactForm,
        notifier: &mut dyn Notifier,
    ) {
        if !self.is_sending() {
            tracing::warn!(phase = ?self.phase, "Submission result arrived with no send in flight");
            return;
        }

        let elapsed_ms = self
            .started_at
            .take()
            .map(|t| t.elapsed().as_millis() as u64)
            .unwrap_or_default();
        let attempt_id = self.attempt_id;

        notifier.notify(outcome.notification());
        match outcome {
            SubmissionOutcome::Success => {
                tracing::info!(?attempt_id, elapsed_ms, "Contact message sent");
                self.phase = SubmissionPhase::Succeeded;
                form.reset();
            }
            SubmissionOutcome::Failure(failure) => {
                tracing::warn!(?attempt_id, elapsed_ms, error = %failure, "Contact message failed");
                self.phase = SubmissionPhase::Failed;
            }
        }
    }
}

/// Call the relay for one submission, bounded by `timeout`.
///
/// Every failure, including the timeout, collapses into [`DeliveryFailure`].
pub async fn dispatch(
    relay: &dyn MailRelay,
    credentials: &RelayCredentials,
    submission: &Submission,
    timeout: Duration,
) -> SubmissionOutcome {
    let span = tracing::info_span!("relay_send", attempt_id = %submission.attempt_id);
    let send = relay.send(
        &credentials.service_id,
        &credentials.template_id,
        &submission.params,
        &credentials.account_id,
    );

    let result = match tokio::time::timeout(timeout, send.instrument(span)).await {
        Ok(result) => result,
        Err(_) => Err(RelayError::Timeout(timeout)),
    };

    match result {
        Ok(()) => SubmissionOutcome::Success,
        Err(e) => SubmissionOutcome::Failure(DeliveryFailure(e)),
    }
}
