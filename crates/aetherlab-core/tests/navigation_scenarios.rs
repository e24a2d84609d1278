//! End-to-end navigation scenarios
//!
//! These tests drive the overlay coordinator, the contact form and the case
//! library the way the site layout does, with a tiny router stand-in that
//! applies each returned command and reports the landing path back.

use aetherlab_core::route::{ABOUT_PATH, CONTACT_PATH, HOME_PATH, WORK_PATH};
use aetherlab_core::{
    CaseError, CaseLibrary, ContactError, ContactForm, FocusOwner, NavCommand, NavTarget,
    OverlayCoordinator, SubmitStatus,
};

/// Router stand-in: records history and feeds route changes back.
struct Harness {
    overlay: OverlayCoordinator,
    history: Vec<String>,
}

impl Harness {
    fn at(path: &str) -> Self {
        Self {
            overlay: OverlayCoordinator::new(path),
            history: vec![path.to_string()],
        }
    }

    fn apply(&mut self, command: Option<NavCommand>) {
        let Some(command) = command else { return };
        match &command {
            NavCommand::Push(path) => self.history.push(path.clone()),
            NavCommand::Replace(path) => {
                if let Some(last) = self.history.last_mut() {
                    *last = path.clone();
                }
            }
        }
        self.overlay.on_route_change(command.path());
    }

    fn location(&self) -> &str {
        self.history.last().map(String::as_str).unwrap_or(HOME_PATH)
    }
}

// ============================================================================
// Contact Drawer Routing
// ============================================================================

#[test]
fn test_contact_from_work_returns_to_work() {
    let mut h = Harness::at(WORK_PATH);

    let open = h.overlay.open_contact();
    assert_eq!(open, Some(NavCommand::Push(CONTACT_PATH.to_string())));
    h.apply(open);
    assert!(h.overlay.contact_open());
    assert_eq!(h.location(), CONTACT_PATH);

    let close = h.overlay.close_contact();
    assert_eq!(close, Some(NavCommand::Replace(WORK_PATH.to_string())));
    h.apply(close);

    assert_eq!(h.location(), WORK_PATH);
    assert!(!h.overlay.contact_open());
    // Replace means the drawer did not leave a history entry behind
    assert_eq!(h.history, vec![WORK_PATH.to_string(), WORK_PATH.to_string()]);
}

#[test]
fn test_contact_opened_directly_closes_to_root() {
    let mut h = Harness::at(CONTACT_PATH);
    assert!(h.overlay.contact_open());

    assert_eq!(h.overlay.open_contact(), None);
    assert!(h.overlay.contact_open());

    let close = h.overlay.close_contact();
    assert_eq!(close, Some(NavCommand::Replace(HOME_PATH.to_string())));
    h.apply(close);

    assert_eq!(h.location(), HOME_PATH);
    assert!(!h.overlay.contact_open());
}

#[test]
fn test_about_contact_escape_round_trip() {
    let mut h = Harness::at(ABOUT_PATH);

    let command = h.overlay.navigate(NavTarget::Contact);
    h.apply(command);
    assert_eq!(h.overlay.pathname(), CONTACT_PATH);
    assert!(h.overlay.contact_open());
    assert_eq!(h.overlay.last_route(), ABOUT_PATH);
    assert_eq!(h.overlay.focus_owner(), Some(FocusOwner::Drawer));

    // Escape inside the drawer
    let command = h.overlay.close_contact();
    h.apply(command);
    assert!(!h.overlay.contact_open());
    assert_eq!(h.overlay.pathname(), ABOUT_PATH);
    assert_eq!(h.overlay.focus_owner(), None);
}

#[test]
fn test_contact_from_menu_closes_menu() {
    let mut h = Harness::at(HOME_PATH);
    h.overlay.toggle_menu();
    assert_eq!(h.overlay.focus_owner(), Some(FocusOwner::Menu));
    assert!(h.overlay.scroll_locked());

    let command = h.overlay.navigate(NavTarget::Contact);
    h.apply(command);

    assert!(!h.overlay.menu_open());
    assert!(h.overlay.contact_open());
    assert!(h.overlay.scroll_locked());
}

// ============================================================================
// Active Section
// ============================================================================

#[test]
fn test_leaving_home_clears_active_section() {
    for target in [NavTarget::Work, NavTarget::Resume, NavTarget::About] {
        let mut h = Harness::at(HOME_PATH);
        h.overlay.set_active_section(Some("approach".to_string()));

        let command = h.overlay.navigate(target);
        h.apply(command);
        assert_eq!(h.overlay.active_section(), None, "navigating to {target:?}");
    }

    let mut h = Harness::at(HOME_PATH);
    h.overlay.set_active_section(Some("lab".to_string()));
    let command = h.overlay.navigate(NavTarget::Contact);
    h.apply(command);
    assert_eq!(h.overlay.active_section(), None);
}

#[test]
fn test_home_route_keeps_active_section() {
    let mut h = Harness::at(HOME_PATH);
    h.overlay.set_active_section(Some("lab".to_string()));
    let command = h.overlay.navigate(NavTarget::Home);
    h.apply(command);
    assert_eq!(h.overlay.active_section(), Some("lab"));
}

// ============================================================================
// Contact Form
// ============================================================================

#[test]
fn test_invalid_email_is_rejected() {
    let mut form = ContactForm::new();
    form.set_email("not-an-email");
    form.set_message("Hello there");

    assert_eq!(form.submit(), Err(ContactError::InvalidEmail));
    assert_eq!(form.error(), Some(ContactError::InvalidEmail));
    assert_eq!(form.hint_text(), "Enter a valid email address.");
    assert_eq!(form.email(), "not-an-email");
    assert_eq!(form.message().value(), "Hello there");
    assert_eq!(form.status(), SubmitStatus::Idle);
}

#[test]
fn test_blank_message_is_rejected() {
    let mut form = ContactForm::new();
    form.set_email("a@b.co");
    form.set_message("   ");

    assert_eq!(form.submit(), Err(ContactError::EmptyMessage));
    assert!(form.hint_text().starts_with("Drop us a few lines"));
    assert_eq!(form.email(), "a@b.co");
    assert_eq!(form.message().value(), "   ");
    assert_eq!(form.status(), SubmitStatus::Idle);
}

#[test]
fn test_successful_submit_then_acknowledge() {
    let mut form = ContactForm::new();
    form.set_email("crew@aetherlab.studio");
    form.set_message("Let's build a motion system.");

    let submission = form.submit().expect("valid form submits");
    assert_eq!(submission.email, "crew@aetherlab.studio");
    assert_eq!(form.status(), SubmitStatus::Sent);
    assert_eq!(form.email(), "");
    assert_eq!(form.message().count(), 0);

    form.acknowledge_elapsed(submission.ticket);
    assert_eq!(form.status(), SubmitStatus::Idle);
}

#[test]
fn test_reopened_drawer_keeps_its_own_acknowledgement() {
    let mut form = ContactForm::new();
    form.set_email("crew@aetherlab.studio");
    form.set_message("First brief");
    let first = form.submit().expect("valid form submits");

    // Drawer closed and reopened before the first timer fired
    form.close();
    form.set_email("crew@aetherlab.studio");
    form.set_message("Second brief");
    let second = form.submit().expect("valid form submits");

    form.acknowledge_elapsed(first.ticket);
    assert_eq!(form.status(), SubmitStatus::Sent);

    form.acknowledge_elapsed(second.ticket);
    assert_eq!(form.status(), SubmitStatus::Idle);
}

#[test]
fn test_route_change_away_from_contact_clears_the_form() {
    let mut h = Harness::at(ABOUT_PATH);
    let mut form = ContactForm::new();

    let open = h.overlay.open_contact();
    h.apply(open);
    form.follow_drawer(h.overlay.contact_open());
    form.set_email("crew@aetherlab.studio");
    form.set_message("Half a brief");
    assert!(form.submit().is_ok());
    form.set_message("A second thought");

    // A nav link, not the close button: the router lands on /work directly
    h.apply(Some(NavCommand::Push(WORK_PATH.to_string())));
    assert!(!h.overlay.contact_open());
    form.follow_drawer(h.overlay.contact_open());

    assert_eq!(form.email(), "");
    assert_eq!(form.message().value(), "");
    assert_eq!(form.error(), None);
    assert_eq!(form.status(), SubmitStatus::Idle);
}

// ============================================================================
// Case Library
// ============================================================================

#[test]
fn test_missing_case_shows_not_found_state() {
    let library = CaseLibrary::bundled();
    let err = library.resolve("missing-case").unwrap_err();

    assert_eq!(err, CaseError::NotFound("missing-case".to_string()));
    assert_eq!(err.description(), "We couldn't find that case study.");
    assert_eq!(err.action_label(), "Return to work index");
    assert_eq!(err.action_path(), WORK_PATH);
}

#[test]
fn test_bundled_cases_resolve() {
    let library = CaseLibrary::bundled();

    for slug in ["nebula-horizon", "Tempo-Channels", "lyra-signal"] {
        let case = library
            .resolve(slug)
            .unwrap_or_else(|e| panic!("{slug} should resolve: {e}"));
        assert!(!case.frontmatter.title.is_empty());
        assert!(!case.body_html().is_empty());
    }
}

#[test]
fn test_empty_slug_is_unspecified() {
    let library = CaseLibrary::bundled();
    assert_eq!(library.resolve("  ").unwrap_err(), CaseError::Unspecified);
}
