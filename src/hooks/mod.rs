//! Browser bridges.
//!
//! Each hook installs listeners through `document::eval`, streams values back
//! with `dioxus.send`, and registers a teardown under `window.__aetherlab`
//! that a matching `use_drop` runs when the owning component unmounts.

mod keys;
mod media;
mod scroll_lock;
mod scroll_spy;
mod window;

pub use keys::{trap_root, use_overlay_keys};
pub use media::{use_coarse_pointer, use_reduced_motion};
pub use scroll_lock::use_scroll_lock;
pub use scroll_spy::use_scroll_spy;
pub use window::{client_bounds, use_window_metrics};

use dioxus::prelude::*;

/// Prelude for bridge scripts
pub(crate) const REGISTRY: &str = "window.__aetherlab = window.__aetherlab || {};";

/// Run and forget the teardown a bridge registered under `key`.
pub(crate) fn teardown(key: &str) {
    let script = format!(
        r#"if (window.__aetherlab && window.__aetherlab["{key}"]) {{
  window.__aetherlab["{key}"]();
  delete window.__aetherlab["{key}"];
}}"#
    );
    let _ = document::eval(&script);
}
