//! Contact form validation and outbound delivery.
//!
//! Validation runs synchronously and never touches the network. Delivery
//! errors collapse into two user-facing classes: a configuration problem
//! ("contact the administrator") and everything else ("try again later").

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use thiserror::Error;

/// Upper bound on the subject line.
pub const MAX_SUBJECT_LEN: usize = 120;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("all fields are required")]
    MissingField,
    #[error("subject must stay under {MAX_SUBJECT_LEN} characters")]
    SubjectTooLong,
    #[error("email is misconfigured, contact the administrator")]
    Configuration,
    #[error("sending failed, try again later")]
    Delivery,
}

/// Reject incomplete submissions before any network call is made.
pub fn validate(form: &ContactForm) -> Result<(), ContactError> {
    let required = [&form.name, &form.email, &form.subject, &form.message];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(ContactError::MissingField);
    }
    if form.subject.chars().count() > MAX_SUBJECT_LEN {
        return Err(ContactError::SubjectTooLong);
    }
    Ok(())
}

/// Transactional email sender backed by the Resend HTTP API.
#[derive(Clone)]
pub struct Mailer {
    client: Client,
    api_key: String,
    from: String,
    to: String,
}

impl Mailer {
    /// Build a mailer from `RESEND_API_KEY`, `RESEND_FROM_EMAIL` and
    /// `RESEND_TO_EMAIL`. `None` when any of them is missing; submitting
    /// without a mailer is reported as a configuration error.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("RESEND_API_KEY").ok()?;
        let from = std::env::var("RESEND_FROM_EMAIL").ok()?;
        let to = std::env::var("RESEND_TO_EMAIL").ok()?;
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build().ok()?;
        Some(Self {
            client,
            api_key,
            from,
            to,
        })
    }

    /// Validate and deliver one submission.
    pub fn send(&self, form: &ContactForm) -> Result<(), ContactError> {
        validate(form)?;
        let body = serde_json::json!({
            "from": self.from,
            "to": [self.to],
            "subject": format!("Portfolio: {}", form.subject),
            "text": format!(
                "From: {} <{}>\n\n{}",
                form.name, form.email, form.message
            ),
        });
        let response = self
            .client
            .post(RESEND_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|error| {
                tracing::debug!(%error, "contact delivery failed");
                ContactError::Delivery
            })?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            tracing::debug!(%status, "contact delivery rejected");
            Err(delivery_error(status))
        }
    }
}

/// Classify a rejected delivery response. Sender-identity rejections
/// (bad key, unverified from-domain) are the administrator's problem;
/// everything else is transient.
fn delivery_error(status: StatusCode) -> ContactError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::UNPROCESSABLE_ENTITY => {
            ContactError::Configuration
        }
        _ => ContactError::Delivery,
    }
}
