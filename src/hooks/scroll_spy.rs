use aetherlab_core::scroll_spy::{DEFAULT_ROOT_MARGIN, THRESHOLDS};
use aetherlab_core::{ScrollSpy, SectionEntry};
use dioxus::prelude::*;
use tracing::{debug, warn};

use super::{teardown, REGISTRY};

fn observer_script(ids: &[&str]) -> String {
    let ids = serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string());
    let thresholds = serde_json::to_string(&THRESHOLDS).unwrap_or_else(|_| "0".to_string());
    format!(
        r#"{REGISTRY}
const observer = new IntersectionObserver((entries) => {{
  dioxus.send(entries.map((entry) => ({{
    id: entry.target.id,
    top: entry.boundingClientRect.top,
    isIntersecting: entry.isIntersecting,
  }})));
}}, {{ rootMargin: "{DEFAULT_ROOT_MARGIN}", threshold: {thresholds} }});
{ids}.map((id) => document.getElementById(id)).filter(Boolean).forEach((el) => observer.observe(el));
window.__aetherlab.spy = () => observer.disconnect();"#
    )
}

/// Id of the section currently in the reading band.
///
/// Starts on the first id before the observer reports anything.
pub fn use_scroll_spy(ids: &'static [&'static str]) -> Signal<Option<String>> {
    let mut spy = use_signal(|| ScrollSpy::new(ids.iter().copied()));
    let mut active = use_signal(|| spy.peek().active().map(str::to_string));

    // Runs after the first render so the sections exist
    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(&observer_script(ids));
            loop {
                match eval.recv::<Vec<SectionEntry>>().await {
                    Ok(entries) => {
                        if spy.write().observe(&entries) {
                            let next = spy.peek().active().map(str::to_string);
                            debug!(section = ?next, "Active section changed");
                            active.set(next);
                        }
                    }
                    Err(e) => {
                        warn!("Scroll spy bridge closed: {:?}", e);
                        break;
                    }
                }
            }
        });
    });

    use_drop(|| teardown("spy"));
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_observes_every_id() {
        let script = observer_script(&["work", "approach"]);
        assert!(script.contains(r#"["work","approach"].map"#));
        assert!(script.contains("-48% 0px -42% 0px"));
        assert!(script.contains("[0.0,0.2,0.4,0.6,0.8,1.0]"));
    }
}
