//! Contact workflow: turns a completed draft into a relay call and reports the outcome

mod submission;

pub use submission::{dispatch, SubmissionController, SubmissionOutcome, SubmissionPhase};
