use aetherlab_core::ScrollLock;
use dioxus::prelude::*;
use tracing::{debug, warn};

fn set_overflow(value: &str) {
    let literal = serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string());
    let _ = document::eval(&format!("document.body.style.overflow = {literal};"));
}

/// Suppress page scrolling while `locked` is true, restoring the previous
/// `body` overflow afterwards.
pub fn use_scroll_lock(locked: Memo<bool>) {
    let mut lock = use_signal(ScrollLock::new);

    use_effect(move || {
        let engage = locked();
        spawn(async move {
            if !engage {
                if let Some(previous) = lock.write().release() {
                    debug!("Scroll unlocked");
                    set_overflow(&previous);
                }
                return;
            }
            if lock.peek().is_engaged() {
                return;
            }

            let mut eval = document::eval(r#"dioxus.send(document.body.style.overflow || "");"#);
            match eval.recv::<String>().await {
                Ok(current) => {
                    if let Some(value) = lock.write().engage(&current) {
                        debug!(previous = %current, "Scroll locked");
                        set_overflow(value);
                    }
                }
                Err(e) => warn!("Could not read body overflow: {:?}", e),
            }
        });
    });

    use_drop(move || {
        if let Ok(mut lock) = lock.try_write() {
            if let Some(previous) = lock.release() {
                set_overflow(&previous);
            }
        }
    });
}
