//! Contact form field descriptors

/// The four fields of the contact form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// All fields in display order
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Position of the field in the form
    pub fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Subject => 2,
            Self::Message => 3,
        }
    }

    /// Field at a position, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Input name of the field
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// Border label shown around the input
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Subject => "Subject",
            Self::Message => "Your Message",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Self::Message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips_for_every_field() {
        for field in ContactField::ALL {
            assert_eq!(ContactField::from_index(field.index()), Some(field));
        }
        assert_eq!(ContactField::from_index(4), None);
    }

    #[test]
    fn test_only_message_is_multiline() {
        let multiline: Vec<_> = ContactField::ALL
            .into_iter()
            .filter(|f| f.is_multiline())
            .collect();
        assert_eq!(multiline, vec![ContactField::Message]);
    }

    #[test]
    fn test_placeholders_match_page_copy() {
        assert_eq!(ContactField::Name.placeholder(), "Your Name");
        assert_eq!(ContactField::Email.placeholder(), "Your Email");
        assert_eq!(ContactField::Message.placeholder(), "Your Message");
    }
}
