// SPDX-License-Identifier: MPL-2.0
//! Submission service port definition and the simulated backend.
//!
//! Every form in the application submits through the [`SubmissionService`]
//! trait. The bundled [`SimulatedBackend`] stands in for a real integration:
//! it applies a fixed latency and resolves with a kind-appropriate
//! confirmation, or takes the explicit error branch for payloads a real
//! backend would reject. Swapping in a production implementation means
//! implementing this trait, nothing else.

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::fmt;
use std::time::Duration;

// =============================================================================
// Payloads
// =============================================================================

/// The kind of form being submitted. Determines required fields and the
/// confirmation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Enrollment,
    Booking,
    Promotion,
    Newsletter,
    Login,
    Signup,
}

impl FormKind {
    /// Field names a backend requires for this kind.
    #[must_use]
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            FormKind::Contact => &["name", "email", "phone", "message"],
            FormKind::Enrollment => &["course", "first_name", "last_name", "email", "phone"],
            FormKind::Booking => &["course", "date", "first_name", "last_name", "email", "phone"],
            FormKind::Promotion => &["promotion", "name", "email", "phone"],
            FormKind::Newsletter => &["email"],
            FormKind::Login => &["email", "password"],
            FormKind::Signup => &["first_name", "last_name", "email", "phone", "password"],
        }
    }

    /// The i18n key of the confirmation message for this kind.
    #[must_use]
    pub fn confirmation_key(self) -> &'static str {
        match self {
            FormKind::Contact => "notification-contact-success",
            FormKind::Enrollment => "notification-enrollment-success",
            FormKind::Booking => "notification-booking-success",
            FormKind::Promotion => "notification-promotion-success",
            FormKind::Newsletter => "notification-newsletter-success",
            FormKind::Login => "notification-login-success",
            FormKind::Signup => "notification-signup-success",
        }
    }
}

/// A validated form ready to be handed to the backend.
#[derive(Debug, Clone)]
pub struct FormPayload {
    kind: FormKind,
    fields: Vec<(String, String)>,
}

impl FormPayload {
    #[must_use]
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            fields: Vec::new(),
        }
    }

    /// Adds a field value. Empty values are kept out of the payload so the
    /// backend's required-field check sees them as missing.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.trim().is_empty() {
            self.fields.push((name.into(), value));
        }
        self
    }

    #[must_use]
    pub fn kind(&self) -> FormKind {
        self.kind
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Names of required fields absent from this payload.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.kind
            .required_fields()
            .iter()
            .filter(|name| self.field(name).is_none())
            .copied()
            .collect()
    }
}

// =============================================================================
// Results
// =============================================================================

/// Successful submission outcome: the message the UI should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    /// The i18n key of the confirmation message.
    pub message_key: &'static str,
    /// Arguments interpolated into the message (e.g. the submitter's name).
    pub args: Vec<(String, String)>,
}

/// Errors a submission backend can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The backend rejected the payload (missing or inconsistent data).
    Rejected(String),
    /// The backend could not be reached.
    Unavailable,
}

impl SubmissionError {
    /// The i18n key for the user-facing error toast.
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match self {
            SubmissionError::Rejected(_) => "notification-submission-rejected",
            SubmissionError::Unavailable => "notification-submission-unavailable",
        }
    }
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::Rejected(detail) => write!(f, "submission rejected: {}", detail),
            SubmissionError::Unavailable => write!(f, "submission service unavailable"),
        }
    }
}

impl std::error::Error for SubmissionError {}

// =============================================================================
// SubmissionService Trait
// =============================================================================

/// Port for submitting form payloads to a backend.
///
/// Implementations must be `Send + Sync`; the application stores the service
/// behind an `Arc<dyn SubmissionService>` and calls it from async tasks.
pub trait SubmissionService: Send + Sync {
    /// Submits a payload, resolving with a confirmation or an explicit error.
    fn submit(
        &self,
        payload: FormPayload,
    ) -> BoxFuture<'static, Result<Confirmation, SubmissionError>>;
}

// =============================================================================
// SimulatedBackend
// =============================================================================

/// A stand-in backend that applies a fixed latency and always confirms
/// well-formed payloads.
///
/// Payloads missing required fields take the error branch, so callers must
/// handle both outcomes the way they would against a real service.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    latency: Duration,
}

impl SimulatedBackend {
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Builds the confirmation for a payload, personalizing it with the
    /// submitter's name and subject where available.
    fn confirm(payload: &FormPayload) -> Confirmation {
        let mut args = Vec::new();

        let name = payload
            .field("name")
            .or_else(|| payload.field("first_name"));
        if let Some(name) = name {
            args.push(("name".to_string(), name.to_string()));
        }
        for subject in ["course", "promotion", "date"] {
            if let Some(value) = payload.field(subject) {
                args.push((subject.to_string(), value.to_string()));
            }
        }

        Confirmation {
            message_key: payload.kind().confirmation_key(),
            args,
        }
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new(Duration::from_secs(
            crate::config::DEFAULT_SUBMISSION_LATENCY_SECS,
        ))
    }
}

impl SubmissionService for SimulatedBackend {
    fn submit(
        &self,
        payload: FormPayload,
    ) -> BoxFuture<'static, Result<Confirmation, SubmissionError>> {
        let latency = self.latency;
        async move {
            tokio::time::sleep(latency).await;

            let missing = payload.missing_fields();
            if !missing.is_empty() {
                return Err(SubmissionError::Rejected(format!(
                    "missing required fields: {}",
                    missing.join(", ")
                )));
            }

            Ok(Self::confirm(&payload))
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_payload() -> FormPayload {
        FormPayload::new(FormKind::Login)
            .with_field("email", "a@b.com")
            .with_field("password", "secret1")
    }

    #[test]
    fn empty_values_count_as_missing() {
        let payload = FormPayload::new(FormKind::Newsletter).with_field("email", "   ");
        assert_eq!(payload.missing_fields(), vec!["email"]);
    }

    #[test]
    fn complete_payload_has_no_missing_fields() {
        assert!(login_payload().missing_fields().is_empty());
    }

    #[tokio::test]
    async fn simulated_backend_confirms_complete_payload() {
        let backend = SimulatedBackend::new(Duration::from_millis(1));
        let result = backend.submit(login_payload()).await;

        let confirmation = result.expect("complete payload should confirm");
        assert_eq!(confirmation.message_key, "notification-login-success");
    }

    #[tokio::test]
    async fn simulated_backend_rejects_incomplete_payload() {
        let backend = SimulatedBackend::new(Duration::from_millis(1));
        let payload = FormPayload::new(FormKind::Login).with_field("email", "a@b.com");

        let result = backend.submit(payload).await;
        match result {
            Err(SubmissionError::Rejected(detail)) => assert!(detail.contains("password")),
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn confirmation_carries_submitter_name() {
        let backend = SimulatedBackend::new(Duration::from_millis(1));
        let payload = FormPayload::new(FormKind::Contact)
            .with_field("name", "Sipho")
            .with_field("email", "s@example.com")
            .with_field("phone", "0123456789")
            .with_field("message", "Tell me more about safety training");

        let confirmation = backend
            .submit(payload)
            .await
            .expect("contact payload should confirm");
        assert!(confirmation
            .args
            .iter()
            .any(|(k, v)| k == "name" && v == "Sipho"));
    }

    #[test]
    fn error_message_keys_cover_variants() {
        assert_eq!(
            SubmissionError::Rejected(String::new()).message_key(),
            "notification-submission-rejected"
        );
        assert_eq!(
            SubmissionError::Unavailable.message_key(),
            "notification-submission-unavailable"
        );
    }
}
