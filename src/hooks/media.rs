use dioxus::prelude::*;
use tracing::{debug, warn};

use super::{teardown, REGISTRY};
use crate::context::launch_options;

/// Live result of a CSS media query. `key` names the listener for teardown.
pub fn use_media_query(key: &'static str, query: &'static str) -> Signal<bool> {
    let mut matches = use_signal(|| false);

    use_hook(move || {
        spawn(async move {
            let script = format!(
                r#"{REGISTRY}
const query = window.matchMedia("{query}");
const report = () => dioxus.send(query.matches);
query.addEventListener("change", report);
window.__aetherlab["{key}"] = () => query.removeEventListener("change", report);
report();"#
            );
            let mut eval = document::eval(&script);
            loop {
                match eval.recv::<bool>().await {
                    Ok(value) => {
                        debug!(query, value, "Media query changed");
                        matches.set(value);
                    }
                    Err(e) => {
                        warn!("Media query bridge for {} closed: {:?}", query, e);
                        break;
                    }
                }
            }
        })
    });

    use_drop(move || teardown(key));
    matches
}

/// `prefers-reduced-motion`, or always true with `--reduced-motion`.
pub fn use_reduced_motion() -> Memo<bool> {
    let forced = launch_options().force_reduced_motion;
    let prefers = use_media_query("reduced-motion", "(prefers-reduced-motion: reduce)");
    use_memo(move || forced || prefers())
}

/// Touch-first devices get no decorative cursor.
pub fn use_coarse_pointer() -> Signal<bool> {
    use_media_query("coarse-pointer", "(pointer: coarse)")
}
