//! Shared types for the Model
//!
//! These types are used across multiple sub-models and by the renderers.

/// A keyboard-focusable control
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Focus {
    ThemeToggle,
    CallToAction,
    Reactor,
    Field(ContactField),
    Submit,
}

/// One of the three contact-form inputs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    /// Placeholder text shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }

    /// Whether the field accepts multiple lines
    pub fn is_multiline(&self) -> bool {
        matches!(self, ContactField::Message)
    }
}

/// Outcome message shown under the contact form
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    None,
    Success,
    Failure,
}

impl SubmissionStatus {
    pub const SUCCESS_MESSAGE: &'static str = "Message sent successfully!";
    pub const FAILURE_MESSAGE: &'static str = "Failed to send message.";

    /// Status text; empty when there is nothing to show
    pub fn message(&self) -> &'static str {
        match self {
            SubmissionStatus::None => "",
            SubmissionStatus::Success => Self::SUCCESS_MESSAGE,
            SubmissionStatus::Failure => Self::FAILURE_MESSAGE,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, SubmissionStatus::None)
    }
}

/// Required fields that were empty when the user tried to submit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingFields(pub Vec<ContactField>);

impl std::fmt::Display for MissingFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.0.iter().map(|field| field.placeholder()).collect();
        write!(f, "missing required fields: {}", names.join(", "))
    }
}

impl std::error::Error for MissingFields {}
