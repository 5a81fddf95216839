use std::{str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// How long a success or failure message stays on screen.
pub const STATUS_CLEAR_DELAY: Duration = Duration::from_millis(3000);

const CONTACT_PATH: &str = "/api/contact";

/// Backend origin baked in at compile time so the server and wasm builds agree.
pub const BACKEND_URL: Option<&str> = option_env!("BACKEND_URL");

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Couldn't send contact message: {reason}")]
    SubmissionFailed { reason: String },
}

impl ContactError {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::SubmissionFailed {
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for ContactError {
    fn from(err: reqwest::Error) -> Self {
        Self::failed(err.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 1, message = "Please fill in your name"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Please write a message"))]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// The form control `name` attribute for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl FromStr for ContactField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            other => Err(format!("unknown contact field: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    None,
    Pending,
    Success,
    Failure,
}

impl SubmitStatus {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Pending => Some("Sending..."),
            Self::Success => Some("Message sent successfully!"),
            Self::Failure => Some("Error sending message. Please try again."),
        }
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Self::Failure)
    }
}

/// Handed out when a submission resolves. A clear timer holding a ticket can
/// only reset the status it was armed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTicket(u64);

/// Contact form state: the fields being edited plus the transient status line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    submission: ContactSubmission,
    status: SubmitStatus,
    revision: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submission(&self) -> &ContactSubmission {
        &self.submission
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.submission.name,
            ContactField::Email => &self.submission.email,
            ContactField::Message => &self.submission.message,
        }
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.submission.name = value,
            ContactField::Email => self.submission.email = value,
            ContactField::Message => self.submission.message = value,
        }
    }

    /// Validates the fields and, when they pass, moves to `Pending` and returns
    /// the snapshot that must be sent. Invalid input leaves the form untouched.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, ValidationErrors> {
        self.submission.validate()?;
        self.set_status(SubmitStatus::Pending);
        Ok(self.submission.clone())
    }

    /// Applies the outcome of a dispatched submission.
    pub fn finish_submit(&mut self, outcome: Result<(), ContactError>) -> StatusTicket {
        match outcome {
            Ok(()) => {
                self.submission = ContactSubmission::default();
                self.set_status(SubmitStatus::Success);
            }
            Err(err) => {
                log::warn!("{err}");
                self.set_status(SubmitStatus::Failure);
            }
        }
        StatusTicket(self.revision)
    }

    /// Returns true if the status was cleared.
    pub fn clear_status(&mut self, ticket: StatusTicket) -> bool {
        if ticket.0 != self.revision {
            return false;
        }
        self.set_status(SubmitStatus::None);
        true
    }

    fn set_status(&mut self, status: SubmitStatus) {
        self.status = status;
        self.revision += 1;
    }
}

/// Delivers a submission snapshot to the backend.
#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), ContactError>;
}

#[derive(Debug, Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: Option<String>,
}

impl ContactClient {
    pub fn new(base_url: Option<&str>) -> Self {
        let endpoint = base_url
            .map(|s| s.trim().trim_end_matches('/'))
            .filter(|s| !s.is_empty())
            .map(|s| format!("{s}{CONTACT_PATH}"));
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn from_build_env() -> Self {
        Self::new(BACKEND_URL)
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

impl ContactTransport for ContactClient {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or_else(|| ContactError::failed("no BACKEND_URL configured"))?;
        log::debug!("posting contact message to {endpoint}");
        self.http
            .post(endpoint)
            .json(submission)
            .send()
            .await?
            .error_for_status()?;
        log::info!("contact message delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;
    use std::cell::RefCell;

    struct RecordingTransport {
        sent: RefCell<Vec<ContactSubmission>>,
        outcome: Result<(), ContactError>,
    }

    impl RecordingTransport {
        fn new(outcome: Result<(), ContactError>) -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                outcome,
            }
        }
    }

    impl ContactTransport for RecordingTransport {
        async fn send(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
            self.sent.borrow_mut().push(submission.clone());
            self.outcome.clone()
        }
    }

    fn alice() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "Alice");
        form.set_field(ContactField::Email, "a@example.com");
        form.set_field(ContactField::Message, "Hi");
        form
    }

    fn alice_submission() -> ContactSubmission {
        ContactSubmission {
            name: "Alice".to_string(),
            email: "a@example.com".to_string(),
            message: "Hi".to_string(),
        }
    }

    #[test]
    fn test_field_isolation() {
        let mut form = alice();
        let edits = [
            (ContactField::Message, "Hello there"),
            (ContactField::Name, "Bob"),
            (ContactField::Email, "bob@example.org"),
            (ContactField::Name, ""),
        ];
        for (field, value) in edits {
            let before = form.clone();
            form.set_field(field, value);
            assert_eq!(form.field(field), value);
            for other in [ContactField::Name, ContactField::Email, ContactField::Message] {
                if other != field {
                    assert_eq!(form.field(other), before.field(other));
                }
            }
        }
        assert_eq!(form.status(), SubmitStatus::None);
    }

    #[test]
    fn test_field_names() {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            assert_eq!(field.as_str().parse::<ContactField>(), Ok(field));
        }
        assert!("subject".parse::<ContactField>().is_err());
    }

    #[test]
    fn test_invalid_submit_is_blocked() {
        let mut form = ContactForm::new();
        let errs = form.begin_submit().expect_err("empty form should not submit");
        let fields = errs.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("message"));
        assert_eq!(form.status(), SubmitStatus::None);

        let mut form = alice();
        form.set_field(ContactField::Email, "not-an-email");
        let errs = form.begin_submit().expect_err("bad email should not submit");
        assert!(errs.field_errors().contains_key("email"));
        assert_eq!(form.status(), SubmitStatus::None);
        assert_eq!(form.field(ContactField::Email), "not-an-email");
    }

    #[test]
    fn test_success_lifecycle() {
        let mut form = alice();
        assert_eq!(form.status(), SubmitStatus::None);

        let snapshot = form.begin_submit().expect("valid form");
        assert_eq!(snapshot, alice_submission());
        assert_eq!(form.status(), SubmitStatus::Pending);
        assert_eq!(form.status().message(), Some("Sending..."));

        let ticket = form.finish_submit(Ok(()));
        assert_eq!(form.status(), SubmitStatus::Success);
        assert_eq!(form.status().message(), Some("Message sent successfully!"));
        assert_eq!(form.submission(), &ContactSubmission::default());

        assert!(form.clear_status(ticket));
        assert_eq!(form.status(), SubmitStatus::None);
        assert_eq!(form.status().message(), None);
    }

    #[test]
    fn test_failure_lifecycle() {
        let mut form = alice();
        let snapshot = form.begin_submit().expect("valid form");

        let ticket = form.finish_submit(Err(ContactError::failed("connection refused")));
        assert_eq!(form.status(), SubmitStatus::Failure);
        assert!(form.status().is_err());
        assert_eq!(
            form.status().message(),
            Some("Error sending message. Please try again.")
        );
        assert_eq!(form.submission(), &snapshot);

        assert!(form.clear_status(ticket));
        assert_eq!(form.status(), SubmitStatus::None);
        assert_eq!(form.submission(), &snapshot);
    }

    #[test]
    fn test_stale_ticket_keeps_newer_status() {
        let mut form = alice();
        form.begin_submit().expect("valid form");
        let stale = form.finish_submit(Err(ContactError::failed("timeout")));

        // retry before the first clear timer fires
        form.begin_submit().expect("input was preserved");
        assert!(!form.clear_status(stale));
        assert_eq!(form.status(), SubmitStatus::Pending);

        let fresh = form.finish_submit(Ok(()));
        assert!(!form.clear_status(stale));
        assert_eq!(form.status(), SubmitStatus::Success);
        assert!(form.clear_status(fresh));
        assert_eq!(form.status(), SubmitStatus::None);
    }

    #[tokio::test]
    async fn test_dispatches_snapshot_once() {
        let transport = RecordingTransport::new(Ok(()));
        let mut form = alice();

        let snapshot = form.begin_submit().expect("valid form");
        // edits while the request is in flight belong to the next submission
        form.set_field(ContactField::Message, "Hi again");
        let outcome = transport.send(&snapshot).await;
        form.finish_submit(outcome);

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], alice_submission());
        assert_eq!(form.status(), SubmitStatus::Success);
        assert_eq!(form.submission(), &ContactSubmission::default());
    }

    #[tokio::test]
    async fn test_failed_dispatch_does_not_retry() {
        let transport = RecordingTransport::new(Err(ContactError::failed("server error")));
        let mut form = alice();

        let snapshot = form.begin_submit().expect("valid form");
        let outcome = transport.send(&snapshot).await;
        form.finish_submit(outcome);

        assert_eq!(transport.sent.borrow().len(), 1);
        assert_eq!(form.status(), SubmitStatus::Failure);
        assert_eq!(form.submission(), &alice_submission());
    }

    #[test]
    fn test_endpoint_from_base_url() {
        let client = ContactClient::new(Some("https://api.example.com"));
        assert_eq!(client.endpoint(), Some("https://api.example.com/api/contact"));

        let client = ContactClient::new(Some("https://api.example.com/"));
        assert_eq!(client.endpoint(), Some("https://api.example.com/api/contact"));

        assert_eq!(ContactClient::new(Some("  ")).endpoint(), None);
        assert_eq!(ContactClient::new(None).endpoint(), None);
    }

    #[tokio::test]
    async fn test_missing_backend_fails() {
        let client = ContactClient::new(None);
        let mut form = alice();
        let snapshot = form.begin_submit().expect("valid form");
        let outcome = client.send(&snapshot).await;
        assert!(matches!(outcome, Err(ContactError::SubmissionFailed { .. })));
        form.finish_submit(outcome);
        assert_eq!(form.status(), SubmitStatus::Failure);
        assert_eq!(form.submission(), &alice_submission());
    }

    #[tokio::test]
    async fn test_post_success_resets_form() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/contact")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "name": "Alice",
                "email": "a@example.com",
                "message": "Hi",
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"1","status":"new"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = ContactClient::new(Some(&server.url()));
        let mut form = alice();
        let snapshot = form.begin_submit().expect("valid form");
        let outcome = client.send(&snapshot).await;
        form.finish_submit(outcome);

        mock.assert_async().await;
        assert_eq!(form.status().message(), Some("Message sent successfully!"));
        assert_eq!(form.field(ContactField::Name), "");
        assert_eq!(form.field(ContactField::Email), "");
        assert_eq!(form.field(ContactField::Message), "");
    }

    #[tokio::test]
    async fn test_post_server_error_keeps_input() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/contact")
            .with_status(500)
            .with_body(r#"{"detail":"Internal server error"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = ContactClient::new(Some(&server.url()));
        let mut form = alice();
        let snapshot = form.begin_submit().expect("valid form");
        let outcome = client.send(&snapshot).await;
        assert!(outcome.is_err());
        form.finish_submit(outcome);

        mock.assert_async().await;
        assert_eq!(form.status(), SubmitStatus::Failure);
        assert_eq!(form.field(ContactField::Name), "Alice");
        assert_eq!(form.field(ContactField::Email), "a@example.com");
        assert_eq!(form.field(ContactField::Message), "Hi");
    }

    #[tokio::test]
    async fn test_post_connection_refused_keeps_input() {
        // nothing listens on the discard port
        let client = ContactClient::new(Some("http://127.0.0.1:9"));
        let mut form = alice();
        let snapshot = form.begin_submit().expect("valid form");
        let outcome = client.send(&snapshot).await;
        assert!(outcome.is_err());
        form.finish_submit(outcome);

        assert_eq!(form.status(), SubmitStatus::Failure);
        assert_eq!(form.submission(), &alice_submission());
    }
}
