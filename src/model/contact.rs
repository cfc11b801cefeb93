//! Contact Model
//!
//! Form fields, the outcome status line and its auto-clear timer.
//!
//! Submissions are not serialized. A second submit while the first is in
//! flight sends again; outcomes are applied in the order they arrive.

use std::time::{Duration, Instant};

use super::timer::Timer;
use super::types::{ContactField, MissingFields, SubmissionStatus};
use crate::relay::ContactPayload;

/// How long the outcome status stays visible
pub const STATUS_DURATION: Duration = Duration::from_millis(3000);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// Required fields that are still empty, in form order
    pub fn missing(&self) -> Vec<ContactField> {
        ContactField::ALL
            .iter()
            .copied()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }

    pub fn to_payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ContactModel {
    pub form: ContactForm,
    status: SubmissionStatus,
    status_timer: Timer,
    /// Fields flagged by the last rejected submit attempt
    missing: Vec<ContactField>,
    /// Submissions sent but not yet answered (display only)
    in_flight: usize,
    next_submission_id: u64,
}

impl ContactModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a typed character to a field
    pub fn insert_char(&mut self, field: ContactField, ch: char) {
        if ch == '\n' && !field.is_multiline() {
            return;
        }
        self.form.get_mut(field).push(ch);
        self.missing.retain(|f| *f != field);
    }

    /// Delete the last character of a field
    pub fn backspace(&mut self, field: ContactField) {
        self.form.get_mut(field).pop();
    }

    /// Validate the required fields and hand out the payload to send.
    ///
    /// Empty fields reject the attempt locally; nothing is sent.
    pub fn submit(&mut self) -> Result<(u64, ContactPayload), MissingFields> {
        let missing = self.form.missing();
        if !missing.is_empty() {
            self.missing = missing.clone();
            return Err(MissingFields(missing));
        }

        self.missing.clear();
        self.in_flight += 1;
        self.next_submission_id += 1;
        Ok((self.next_submission_id, self.form.to_payload()))
    }

    /// Apply the relay's answer: show the status, clear fields on success,
    /// and schedule the status to disappear.
    pub fn apply_outcome<E>(&mut self, outcome: Result<(), E>, now: Instant) -> SubmissionStatus {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.status = match outcome {
            Ok(()) => {
                self.form.clear();
                SubmissionStatus::Success
            }
            Err(_) => SubmissionStatus::Failure,
        };
        self.status_timer.arm(now, STATUS_DURATION);
        self.status
    }

    /// Clear the status when its timer passes. Returns whether it changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.status_timer.fire(now).is_some() {
            self.status = SubmissionStatus::None;
            return true;
        }
        false
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn missing(&self) -> &[ContactField] {
        &self.missing
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.status_timer.deadline()
    }

    pub fn teardown(&mut self) {
        self.status_timer.cancel();
    }
}
