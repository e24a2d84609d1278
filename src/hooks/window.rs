use aetherlab_core::{Bounds, Viewport};
use dioxus::prelude::*;
use serde::Deserialize;
use tracing::warn;

use super::teardown;

const WINDOW_BRIDGE: &str = r#"window.__aetherlab = window.__aetherlab || {};
let frame = 0;
const report = () => {
  if (frame) return;
  frame = requestAnimationFrame(() => {
    frame = 0;
    dioxus.send({ width: window.innerWidth, height: window.innerHeight, scroll_y: window.scrollY });
  });
};
window.addEventListener("scroll", report, { passive: true });
window.addEventListener("resize", report);
window.__aetherlab.window = () => {
  window.removeEventListener("scroll", report);
  window.removeEventListener("resize", report);
  cancelAnimationFrame(frame);
};
report();"#;

#[derive(Deserialize)]
struct WindowMetrics {
    width: f64,
    height: f64,
    scroll_y: f64,
}

/// Viewport size and vertical scroll offset, one animation frame at a time.
pub fn use_window_metrics() -> (Signal<Viewport>, Signal<f64>) {
    let mut viewport = use_signal(|| Viewport::new(1280.0, 860.0));
    let mut scroll_y = use_signal(|| 0.0);

    use_hook(move || {
        spawn(async move {
            let mut eval = document::eval(WINDOW_BRIDGE);
            loop {
                match eval.recv::<WindowMetrics>().await {
                    Ok(metrics) => {
                        let next = Viewport::new(metrics.width, metrics.height);
                        if *viewport.peek() != next {
                            viewport.set(next);
                        }
                        if *scroll_y.peek() != metrics.scroll_y {
                            scroll_y.set(metrics.scroll_y);
                        }
                    }
                    Err(e) => {
                        warn!("Window bridge closed: {:?}", e);
                        break;
                    }
                }
            }
        })
    });

    use_drop(|| teardown("window"));
    (viewport, scroll_y)
}

/// Client rectangle of a mounted element.
pub async fn client_bounds(element: &MountedData) -> Option<Bounds> {
    match element.get_client_rect().await {
        Ok(rect) => Some(Bounds::new(
            rect.origin.x,
            rect.origin.y,
            rect.size.width,
            rect.size.height,
        )),
        Err(e) => {
            warn!("Could not measure element: {:?}", e);
            None
        }
    }
}
