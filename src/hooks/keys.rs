use aetherlab_core::{FocusOwner, KeyAction, OverlayKey};
use dioxus::prelude::*;
use tracing::{debug, warn};

use super::{teardown, REGISTRY};
use crate::context::LayoutContext;

/// DOM id of the element that holds focus while `owner` is on top
pub fn trap_root(owner: FocusOwner) -> &'static str {
    match owner {
        FocusOwner::Menu => "menu-overlay",
        FocusOwner::Drawer => "contact-drawer",
    }
}

const KEYS_BRIDGE: &str = r#"const FOCUSABLE = 'a[href], button:not([disabled]), input:not([disabled]), textarea:not([disabled]), select:not([disabled]), [tabindex]:not([tabindex="-1"])';
const focusables = () => {
  const id = window.__aetherlab.trapRoot;
  const root = id ? document.getElementById(id) : null;
  return root ? Array.from(root.querySelectorAll(FOCUSABLE)) : [];
};
const onKey = (e) => {
  if (!window.__aetherlab.trapRoot) return;
  if (e.key === "Escape") {
    e.preventDefault();
    dioxus.send({ kind: "escape" });
  } else if (e.key === "Tab") {
    e.preventDefault();
    const items = focusables();
    const index = items.indexOf(document.activeElement);
    dioxus.send({ kind: "tab", backwards: e.shiftKey, index: index < 0 ? null : index, count: items.length });
  }
};
window.__aetherlab.focusTrapAt = (index) => {
  const target = focusables()[index];
  if (target) target.focus();
};
window.addEventListener("keydown", onKey);
window.__aetherlab["keys"] = () => {
  window.removeEventListener("keydown", onKey);
  delete window.__aetherlab.trapRoot;
  delete window.__aetherlab.focusTrapAt;
};"#;

/// Window-level Escape and Tab handling for the overlays.
///
/// Escape closes whichever overlay owns focus. Tab and Shift+Tab cycle through
/// that overlay's focusable elements and never leave it.
pub fn use_overlay_keys(layout: LayoutContext) {
    let owner = use_memo(move || layout.overlay.read().focus_owner());

    use_effect(move || {
        let root = match owner() {
            Some(owner) => format!("\"{}\"", trap_root(owner)),
            None => "null".to_string(),
        };
        let _ = document::eval(&format!("{REGISTRY}\nwindow.__aetherlab.trapRoot = {root};"));
    });

    use_hook(move || {
        spawn(async move {
            let mut eval = document::eval(&format!("{REGISTRY}\n{KEYS_BRIDGE}"));
            loop {
                match eval.recv::<OverlayKey>().await {
                    Ok(key) => {
                        let action = key.action(*owner.peek());
                        debug!(?key, ?action, "Overlay key");
                        match action {
                            Some(KeyAction::CloseDrawer) => layout.close_contact(),
                            Some(KeyAction::CloseMenu) => layout.close_menu(),
                            Some(KeyAction::Focus(index)) => {
                                let _ = document::eval(&format!(
                                    "window.__aetherlab.focusTrapAt && window.__aetherlab.focusTrapAt({index});"
                                ));
                            }
                            None => {}
                        }
                    }
                    Err(e) => {
                        warn!("Overlay key bridge closed: {:?}", e);
                        break;
                    }
                }
            }
        })
    });

    use_drop(|| teardown("keys"));
}
