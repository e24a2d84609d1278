//! Input Field Components
//!
//! Text inputs and textareas. The textarea can carry a character budget and
//! shows a live `count/limit` counter that turns amber near the limit.

use aetherlab_core::contact::LOW_REMAINING;

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub invalid: bool,
    /// ID used for label association
    pub id: String,
    #[props(default)]
    pub autocomplete: Option<String>,
    /// Receives the mounted element, e.g. to move focus into it
    #[props(default)]
    pub onmounted: Option<EventHandler<MountedEvent>>,
}

/// Single-line text input
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         id: "contact-email".to_string(),
///         input_type: "email".to_string(),
///         label: "Email".to_string(),
///         value: form.read().email().to_string(),
///         oninput: move |s: String| form.write().set_email(&s),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{props.id}", "{label}" }
            }
            input {
                id: "{props.id}",
                class: "input-field",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                autocomplete: props.autocomplete.as_deref().unwrap_or("off"),
                required: props.required,
                "aria-invalid": if props.invalid { "true" } else { "false" },
                onmounted: move |evt| {
                    if let Some(handler) = &props.onmounted {
                        handler.call(evt);
                    }
                },
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Counter text and whether it should be highlighted.
pub fn counter_state(value: &str, limit: usize) -> (String, bool) {
    let count = value.chars().count();
    let remaining = limit.saturating_sub(count);
    (format!("{count}/{limit}"), remaining < LOW_REMAINING)
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default = 4)]
    pub rows: u32,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub invalid: bool,
    pub id: String,
    /// Character budget; renders a counter when set
    #[props(default)]
    pub limit: Option<usize>,
}

/// Multi-line text input with an optional counter
///
/// The component never truncates on its own; the owner of the value applies
/// its budget and passes the result back in.
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let counter = props.limit.map(|limit| counter_state(&props.value, limit));
    let counter_id = format!("{}-counter", props.id);
    let has_counter = counter.is_some();

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{props.id}", "{label}" }
            }
            textarea {
                id: "{props.id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                maxlength: props.limit.map(|l| l.to_string()),
                "aria-invalid": if props.invalid { "true" } else { "false" },
                "aria-describedby": if has_counter { Some(counter_id.clone()) } else { None },
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some((text, warning)) = counter {
                span {
                    id: "{counter_id}",
                    class: if warning { "input-counter hint-warning" } else { "input-counter" },
                    "aria-live": "polite",
                    "{text}"
                }
            }
        }
    }
}
