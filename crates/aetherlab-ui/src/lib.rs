//! AetherLab UI Components
//!
//! Dioxus building blocks shared by the site pages: buttons, form fields with
//! character counters, filter pills and metric chips.
//!
//! ## Visual Language
//!
//! - **Lavender (#c6b7ff)**: accents, focus rings, active pills
//! - **Ink (#05040a)**: page background
//! - **Amber (#ffb86b)**: warnings such as a nearly full message budget
//!
//! Components only emit class names; the stylesheet lives with the app theme.

pub mod components;

pub use components::*;
