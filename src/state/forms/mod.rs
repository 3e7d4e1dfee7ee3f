//! Form domain layer
//!
//! Field descriptors and the draft holder for the contact form.

mod field;
mod form_state;

pub use field::ContactField;
pub use form_state::{ContactForm, Form, FormDraft};
