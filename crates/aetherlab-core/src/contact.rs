//! Contact drawer form: validation and the stubbed submission flow.
//!
//! Submissions never leave the process. A valid brief is handed back to the
//! caller (which logs it), the fields are cleared, and a short "sent"
//! acknowledgement is shown before the form returns to idle.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use thiserror::Error;

use crate::char_count::CharBudget;

/// Maximum length of the message body
pub const MESSAGE_LIMIT: usize = 500;

/// Below this many remaining characters the counter turns to a warning tone
pub const LOW_REMAINING: usize = 50;

/// How long the "sent" acknowledgement stays up
pub const SENT_ACK_DURATION: Duration = Duration::from_millis(2400);

/// Copy shown under the form when nothing is wrong
pub const DEFAULT_HINT: &str = "We reply within two business days.";

/// Permissive email shape: something, `@`, something, `.`, something, none
/// of it whitespace. Unanchored.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\s@]+@[^\s@]+\.[^\s@]+").expect("email pattern is a valid regex")
});

/// Why a submission was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("Enter a valid email address.")]
    InvalidEmail,

    #[error("Drop us a few lines so we can respond contextually.")]
    EmptyMessage,
}

/// Form lifecycle after submission.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sent,
}

/// Colour cue for the hint line and counter.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HintTone {
    Calm,
    Warning,
}

impl HintTone {
    pub fn class(&self) -> &'static str {
        match self {
            HintTone::Calm => "hint-calm",
            HintTone::Warning => "hint-warning",
        }
    }
}

/// An accepted brief. Nothing delivers it; the drawer logs and drops it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Submission {
    pub email: String,
    pub message: String,
    /// Pass back to [`ContactForm::acknowledge_elapsed`] when the
    /// acknowledgement timer for this submission runs out
    pub ticket: u64,
}

/// Whether `email` looks like an address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// State of the contact form inside the drawer.
#[derive(Clone, PartialEq, Debug)]
pub struct ContactForm {
    email: String,
    message: CharBudget,
    error: Option<ContactError>,
    status: SubmitStatus,
    /// Bumped on every accepted submit and every close, so a timer started
    /// for an older submission cannot end a newer acknowledgement
    ticket: u64,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            message: CharBudget::new(MESSAGE_LIMIT),
            error: None,
            status: SubmitStatus::Idle,
            ticket: 0,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    pub fn message(&self) -> &CharBudget {
        &self.message
    }

    pub fn set_message(&mut self, message: &str) {
        self.message.set_value(message);
    }

    pub fn error(&self) -> Option<ContactError> {
        self.error
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Validate and accept the brief.
    ///
    /// On rejection the fields are left as typed and the error is stored for
    /// display. On success the fields are cleared and the status becomes
    /// [`SubmitStatus::Sent`].
    pub fn submit(&mut self) -> Result<Submission, ContactError> {
        if let Err(err) = self.validate() {
            self.error = Some(err);
            return Err(err);
        }

        self.error = None;
        self.ticket = self.ticket.wrapping_add(1);
        let submission = Submission {
            email: std::mem::take(&mut self.email),
            message: self.message.value().to_string(),
            ticket: self.ticket,
        };
        self.message.reset();
        self.status = SubmitStatus::Sent;
        Ok(submission)
    }

    fn validate(&self) -> Result<(), ContactError> {
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.value().trim().is_empty() {
            return Err(ContactError::EmptyMessage);
        }
        Ok(())
    }

    /// The acknowledgement timer started for `ticket` ran out. Timers from
    /// earlier submissions are ignored.
    pub fn acknowledge_elapsed(&mut self, ticket: u64) {
        if self.status == SubmitStatus::Sent && self.ticket == ticket {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Drawer closed: drop everything typed and any pending feedback.
    pub fn close(&mut self) {
        self.email.clear();
        self.message.reset();
        self.error = None;
        self.status = SubmitStatus::Idle;
        self.ticket = self.ticket.wrapping_add(1);
    }

    /// Keep the form in step with the drawer flag. A closed drawer always
    /// holds an empty form, however it was closed.
    pub fn follow_drawer(&mut self, open: bool) {
        if !open {
            self.close();
        }
    }

    pub fn hint_tone(&self) -> HintTone {
        if self.error.is_some() || self.message.remaining() < LOW_REMAINING {
            HintTone::Warning
        } else {
            HintTone::Calm
        }
    }

    pub fn hint_text(&self) -> String {
        match self.error {
            Some(err) => err.to_string(),
            None => DEFAULT_HINT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("rowan.sato@studio.example"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn successful_submit_clears_fields() {
        let mut form = ContactForm::new();
        form.set_email("a@b.co");
        form.set_message("Let's build a motion system.");

        let submission = form.submit().unwrap();
        assert_eq!(submission.email, "a@b.co");
        assert_eq!(submission.message, "Let's build a motion system.");
        assert_eq!(form.email(), "");
        assert_eq!(form.message().value(), "");
        assert_eq!(form.status(), SubmitStatus::Sent);
        assert_eq!(form.error(), None);
    }

    #[test]
    fn acknowledgement_returns_to_idle() {
        let mut form = ContactForm::new();
        form.set_email("a@b.co");
        form.set_message("hi");
        let sent = form.submit().unwrap();
        form.acknowledge_elapsed(sent.ticket);
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn stale_timer_keeps_newer_acknowledgement() {
        let mut form = ContactForm::new();
        form.set_email("a@b.co");
        form.set_message("first");
        let first = form.submit().unwrap();
        form.close();

        form.set_email("a@b.co");
        form.set_message("second");
        let second = form.submit().unwrap();

        form.acknowledge_elapsed(first.ticket);
        assert_eq!(form.status(), SubmitStatus::Sent);

        form.acknowledge_elapsed(second.ticket);
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn close_resets_everything() {
        let mut form = ContactForm::new();
        form.set_email("bad");
        form.set_message("draft");
        let _ = form.submit();
        form.close();
        assert_eq!(form.email(), "");
        assert_eq!(form.message().value(), "");
        assert_eq!(form.error(), None);
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn following_an_open_drawer_keeps_the_draft() {
        let mut form = ContactForm::new();
        form.set_message("draft");
        form.follow_drawer(true);
        assert_eq!(form.message().value(), "draft");
        form.follow_drawer(false);
        assert_eq!(form.message().value(), "");
    }

    #[test]
    fn message_is_bounded() {
        let mut form = ContactForm::new();
        form.set_message(&"x".repeat(MESSAGE_LIMIT + 20));
        assert_eq!(form.message().count(), MESSAGE_LIMIT);
        assert_eq!(form.message().remaining(), 0);
    }

    #[test]
    fn hint_tone_warns_on_error_or_low_budget() {
        let mut form = ContactForm::new();
        assert_eq!(form.hint_tone(), HintTone::Calm);
        assert_eq!(form.hint_text(), DEFAULT_HINT);

        form.set_message(&"x".repeat(MESSAGE_LIMIT - 10));
        assert_eq!(form.hint_tone(), HintTone::Warning);

        let mut form = ContactForm::new();
        let _ = form.submit();
        assert_eq!(form.hint_tone(), HintTone::Warning);
        assert_eq!(form.hint_text(), "Enter a valid email address.");
    }
}
