//! Contact drawer.
//!
//! A bottom sheet holding the contact form. It is open whenever the
//! coordinator says so, which includes every visit to `/contact`. Submitted
//! briefs are logged and dropped; nothing is sent anywhere.

use aetherlab_core::contact::{MESSAGE_LIMIT, SENT_ACK_DURATION};
use aetherlab_core::{ContactError, ContactForm, FocusOwner, MotionPreset, SubmitStatus};
use aetherlab_ui::{Button, ButtonVariant, CloseButton, Input, TextArea};
use dioxus::prelude::*;
use tracing::{info, warn};

use crate::context::use_layout;
use crate::hooks::trap_root;

#[component]
pub fn ContactDrawer() -> Element {
    let layout = use_layout();
    let mut form = use_signal(ContactForm::new);
    let mut ack = use_signal(|| None::<Task>);

    let open = layout.overlay.read().contact_open();
    let reduced = layout.reduced();

    // Any close resets the form, including route changes and Escape
    let contact_open = use_memo(move || layout.overlay.read().contact_open());
    use_effect(move || {
        let open = contact_open();
        if !open {
            if let Some(task) = ack.write().take() {
                task.cancel();
            }
        }
        if let Ok(mut form) = form.try_write() {
            form.follow_drawer(open);
        }
    });

    let close = move || layout.close_contact();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = form.write().submit();
        match result {
            Ok(submission) => {
                info!(
                    email = %submission.email,
                    chars = submission.message.chars().count(),
                    "Contact brief received"
                );
                let ticket = submission.ticket;
                let task = spawn(async move {
                    tokio::time::sleep(SENT_ACK_DURATION).await;
                    form.write().acknowledge_elapsed(ticket);
                });
                if let Some(previous) = ack.write().replace(task) {
                    previous.cancel();
                }
            }
            Err(e) => info!("Contact form rejected: {}", e),
        }
    };

    let current = form.read();
    let email = current.email().to_string();
    let message = current.message().value().to_string();
    let invalid = current.error();
    let sent = current.status() == SubmitStatus::Sent;
    let hint_class = format!("drawer-hint {}", current.hint_tone().class());
    let hint_text = current.hint_text();
    drop(current);

    let backdrop_style = MotionPreset::Backdrop.style(open, reduced);
    let sheet_style = MotionPreset::DrawerSheet.style(open, reduced);

    rsx! {
        div {
            id: trap_root(FocusOwner::Drawer),
            class: if open { "drawer-root open" } else { "drawer-root" },
            "aria-hidden": if open { "false" } else { "true" },
            div {
                class: "drawer-backdrop",
                style: "{backdrop_style}",
                onclick: move |_| close(),
            }
            section {
                class: "drawer-sheet",
                role: "dialog",
                "aria-modal": "true",
                "aria-labelledby": "contact-title",
                style: "{sheet_style}",
                if open {
                    div { class: "drawer-header",
                        div {
                            p { class: "drawer-eyebrow", "Contact" }
                            h2 { id: "contact-title", class: "drawer-title", "Tell us about the motion you need." }
                        }
                        CloseButton { onclick: move |_| close() }
                    }
                    if sent {
                        p { class: "drawer-sent", role: "status", "Thanks. Your brief is in; expect a reply soon." }
                    }
                    form { class: "drawer-form", novalidate: true, onsubmit: submit,
                        Input {
                            id: "contact-email".to_string(),
                            input_type: "email".to_string(),
                            label: "Email".to_string(),
                            placeholder: "you@studio.com".to_string(),
                            autocomplete: "email".to_string(),
                            required: true,
                            invalid: invalid.is_some_and(|e| e == ContactError::InvalidEmail),
                            value: email,
                            oninput: move |value: String| form.write().set_email(&value),
                            // Only mounted while open, so this runs on every opening
                            onmounted: move |evt: MountedEvent| {
                                let element = evt.data();
                                spawn(async move {
                                    if let Err(e) = element.set_focus(true).await {
                                        warn!("Could not focus email field: {:?}", e);
                                    }
                                });
                            },
                        }
                        TextArea {
                            id: "contact-message".to_string(),
                            label: "Project brief".to_string(),
                            placeholder: "Timeline, platforms, what should feel different...".to_string(),
                            rows: 5,
                            required: true,
                            invalid: invalid.is_some_and(|e| e == ContactError::EmptyMessage),
                            limit: MESSAGE_LIMIT,
                            value: message,
                            oninput: move |value: String| form.write().set_message(&value),
                        }
                        p { class: "{hint_class}", role: if invalid.is_some() { "alert" } else { "note" }, "{hint_text}" }
                        div { class: "drawer-actions",
                            Button { variant: ButtonVariant::Ghost, onclick: move |_| close(), "Cancel" }
                            Button { button_type: "submit".to_string(), "Send brief" }
                        }
                    }
                }
            }
        }
    }
}
