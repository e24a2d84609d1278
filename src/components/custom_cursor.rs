//! Decorative cursor ring that follows the pointer and grows over targets.

use aetherlab_core::CursorEvent;
use dioxus::prelude::*;
use tracing::warn;

use crate::context::use_layout;
use crate::hooks::use_coarse_pointer;

const CURSOR_BRIDGE: &str = r#"window.__aetherlab = window.__aetherlab || {};
const hint = (target) => {
  const el = target instanceof Element ? target : null;
  const marked = el ? el.closest("[data-cursor]") : null;
  return { tag: el ? el.tagName : "", cursor: marked ? marked.dataset.cursor : null };
};
const onMove = (e) => dioxus.send({ kind: "move", x: e.clientX, y: e.clientY });
const onOver = (e) => dioxus.send({ kind: "over", ...hint(e.target) });
const onDown = (e) => dioxus.send({ kind: "down", ...hint(e.target) });
const onUp = (e) => dioxus.send({ kind: "up", ...hint(e.target) });
const onLeave = () => dioxus.send({ kind: "leave" });
document.addEventListener("pointermove", onMove, { passive: true });
document.addEventListener("pointerover", onOver);
document.addEventListener("pointerdown", onDown);
document.addEventListener("pointerup", onUp);
document.documentElement.addEventListener("mouseleave", onLeave);
window.__aetherlab.cursor = () => {
  document.removeEventListener("pointermove", onMove);
  document.removeEventListener("pointerover", onOver);
  document.removeEventListener("pointerdown", onDown);
  document.removeEventListener("pointerup", onUp);
  document.documentElement.removeEventListener("mouseleave", onLeave);
};"#;

#[component]
pub fn CustomCursor() -> Element {
    let layout = use_layout();
    let coarse = use_coarse_pointer();
    let mut feed = use_signal(|| None::<Task>);

    use_effect(move || {
        let coarse = coarse();
        if let Some(task) = feed.write().take() {
            task.cancel();
        }
        crate::hooks::teardown("cursor");
        if coarse {
            return;
        }

        let mut cursor = layout.cursor;
        let task = spawn(async move {
            let mut eval = document::eval(CURSOR_BRIDGE);
            loop {
                match eval.recv::<CursorEvent>().await {
                    Ok(event) => {
                        let reduced = *layout.reduced_motion.peek();
                        cursor.write().apply(&event, reduced);
                    }
                    Err(e) => {
                        warn!("Cursor bridge closed: {:?}", e);
                        break;
                    }
                }
            }
        });
        feed.set(Some(task));
    });

    use_drop(|| crate::hooks::teardown("cursor"));

    if coarse() {
        return rsx! {};
    }

    let reduced = layout.reduced();
    let cursor = layout.cursor.read();
    let variant = cursor.active_variant(reduced);
    let style = cursor.style(reduced);

    rsx! {
        div {
            class: "cursor-ring {variant.class()}",
            style: "{style}",
            "aria-hidden": "true",
        }
    }
}
