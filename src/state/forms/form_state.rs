//! Contact form draft and the state holder that mediates edits

use super::field::ContactField;
use serde::Serialize;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// The not-yet-submitted contents of the contact form.
///
/// All four fields are always present; an untouched field is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormDraft {
    /// Read a field by key
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    /// First required field that is still empty, in display order
    pub fn first_missing(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|f| self.get(*f).is_empty())
    }

    /// True when no field has been written to (or all were cleared)
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        ContactField::ALL.into_iter().all(|f| self.get(f).is_empty())
    }
}

/// Holds the contact form draft and which input has focus.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    draft: FormDraft,
    active_field_index: usize,
}

impl ContactForm {
    /// Replace one field of the draft. Any string is accepted, including empty.
    pub fn update(&mut self, field: ContactField, value: impl Into<String>) {
        *self.draft.get_mut(field) = value.into();
    }

    /// Clear all four fields
    pub fn reset(&mut self) {
        self.draft = FormDraft::default();
    }

    /// Current draft, for rendering and submission
    pub fn current(&self) -> &FormDraft {
        &self.draft
    }

    /// Field that currently receives keystrokes
    pub fn active(&self) -> ContactField {
        ContactField::from_index(self.active_field_index).unwrap_or(ContactField::Name)
    }

    /// Move focus to a specific field
    pub fn focus(&mut self, field: ContactField) {
        self.active_field_index = field.index();
    }

    /// Append a character to the focused field
    pub fn push_char(&mut self, c: char) {
        let field = self.active();
        let mut value = self.draft.get(field).to_string();
        value.push(c);
        self.update(field, value);
    }

    /// Remove the last character from the focused field
    pub fn pop_char(&mut self) {
        let field = self.active();
        let mut value = self.draft.get(field).to_string();
        if value.pop().is_some() {
            self.update(field, value);
        }
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        ContactField::ALL.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_draft() -> FormDraft {
        FormDraft {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        }
    }

    mod form_draft {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_has_all_fields_empty() {
            let draft = FormDraft::default();
            for field in ContactField::ALL {
                assert_eq!(draft.get(field), "");
            }
            assert!(draft.is_empty());
        }

        #[test]
        fn test_first_missing_follows_display_order() {
            let mut draft = filled_draft();
            assert_eq!(draft.first_missing(), None);
            assert_eq!(draft.first_missing(), None);

            draft.message.clear();
            draft.email.clear();
            assert_eq!(draft.first_missing(), Some(ContactField::Email));
        }

        #[test]
        fn test_whitespace_counts_as_filled() {
            let mut draft = filled_draft();
            draft.subject = " ".to_string();
            assert_eq!(draft.first_missing(), None);
        }

        #[test]
        fn test_serializes_with_input_names() {
            let json = serde_json::to_value(filled_draft()).unwrap();
            assert_eq!(json["name"], "Ann");
            assert_eq!(json["email"], "a@x.com");
            assert_eq!(json["subject"], "Hi");
            assert_eq!(json["message"], "Hello");
        }
    }

    mod contact_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_starts_empty_on_name() {
            let form = ContactForm::default();
            assert_eq!(form.current(), &FormDraft::default());
            assert_eq!(form.active(), ContactField::Name);
        }

        #[test]
        fn test_update_writes_only_the_named_field() {
            let mut form = ContactForm::default();
            form.update(ContactField::Email, "a@x.com");
            assert_eq!(form.current().email, "a@x.com");
            assert_eq!(form.current().name, "");
            assert_eq!(form.current().subject, "");
            assert_eq!(form.current().message, "");
        }

        #[test]
        fn test_last_write_wins_per_field() {
            let mut form = ContactForm::default();
            form.update(ContactField::Subject, "New");
            form.update(ContactField::Subject, "Newer");
            assert_eq!(form.current().subject, "Newer");
        }

        #[test]
        fn test_interleaved_updates_keep_last_value_per_field() {
            let mut form = ContactForm::default();
            form.update(ContactField::Name, "A");
            form.update(ContactField::Message, "first");
            form.update(ContactField::Name, "Ann");
            form.update(ContactField::Message, "");
            assert_eq!(
                form.current(),
                &FormDraft {
                    name: "Ann".to_string(),
                    ..Default::default()
                }
            );
        }

        #[test]
        fn test_reset_clears_everything() {
            let mut form = ContactForm::default();
            for field in ContactField::ALL {
                form.update(field, "x");
            }
            form.reset();
            assert_eq!(form.current(), &FormDraft::default());
        }

        #[test]
        fn test_reset_twice_is_same_as_once() {
            let mut form = ContactForm::default();
            form.update(ContactField::Name, "Ann");
            form.reset();
            let once = form.current().clone();
            form.reset();
            assert_eq!(form.current(), &once);
            assert!(form.current().is_empty());
        }

        #[test]
        fn test_push_and_pop_char_edit_active_field() {
            let mut form = ContactForm::default();
            form.focus(ContactField::Subject);
            form.push_char('H');
            form.push_char('i');
            form.push_char('!');
            form.pop_char();
            assert_eq!(form.current().subject, "Hi");
            assert_eq!(form.current().name, "");
        }

        #[test]
        fn test_pop_char_on_empty_field_is_noop() {
            let mut form = ContactForm::default();
            form.pop_char();
            assert_eq!(form.current(), &FormDraft::default());
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = ContactForm::default();
            for _ in 0..4 {
                form.next_field();
            }
            assert_eq!(form.active(), ContactField::Name);
        }

        #[test]
        fn test_prev_field_wraps_to_message() {
            let mut form = ContactForm::default();
            form.prev_field();
            assert_eq!(form.active(), ContactField::Message);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ContactForm::default();
            form.set_active_field(100);
            assert_eq!(form.active(), ContactField::Message);
        }

        #[test]
        fn test_field_count_is_four() {
            assert_eq!(ContactForm::default().field_count(), 4);
        }
    }
}
