//! Relay Response Handler
//!
//! Applies the email relay's answer to the contact form.

use std::time::Instant;

use crate::App;
use foliotui::logic::errors::{classify_error, format_error_message};
use foliotui::services::relay::RelayResponse;

/// Handle a response from the relay background service
pub fn handle_relay_response(app: &mut App, response: RelayResponse, now: Instant) {
    match response {
        RelayResponse::SendResult {
            submission_id,
            result,
        } => {
            match &result {
                Ok(()) => tracing::info!(submission_id, "contact message delivered"),
                Err(e) => {
                    let kind = classify_error(e);
                    tracing::warn!(
                        submission_id,
                        kind = kind.as_str(),
                        "contact message failed: {}",
                        format_error_message(e)
                    );
                }
            }
            app.model.contact.apply_outcome(result, now);
        }
    }
}
