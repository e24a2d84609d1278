//! Auto-scrolling strip of process clips.
//!
//! The clips are rendered twice in a row and the track slides left at a
//! constant speed. Hovering or focusing the reel pauses it; the arrow buttons
//! page through it by hand.

use std::rc::Rc;
use std::time::{Duration, Instant};

use aetherlab_core::cases::ProcessClip;
use aetherlab_core::reel::duplicated;
use aetherlab_core::ReelScroller;
use aetherlab_ui::IconButton;
use dioxus::prelude::*;
use tracing::warn;

use crate::context::use_layout;

const FRAME: Duration = Duration::from_millis(16);

#[component]
pub fn ProcessReel(label: String, clips: Vec<ProcessClip>) -> Element {
    let layout = use_layout();
    let mut reel = use_signal(ReelScroller::new);
    let mut window = use_signal(|| None::<Rc<MountedData>>);
    let mut track = use_signal(|| None::<Rc<MountedData>>);
    // (visible width, scrollable width)
    let mut extent = use_signal(|| (0.0, 0.0));

    use_effect(move || {
        let _ = (layout.viewport)();
        let (Some(window), Some(track)) = (window(), track()) else {
            return;
        };
        spawn(async move {
            match (window.get_client_rect().await, track.get_client_rect().await) {
                (Ok(visible), Ok(full)) => {
                    let width = visible.size.width;
                    extent.set((width, (full.size.width - width).max(0.0)));
                }
                (Err(e), _) | (_, Err(e)) => warn!("Could not measure process reel: {:?}", e),
            }
        });
    });

    use_future(move || async move {
        let mut last = Instant::now();
        loop {
            tokio::time::sleep(FRAME).await;
            let now = Instant::now();
            let dt = now.duration_since(last).as_secs_f64();
            last = now;

            let (_, scrollable) = *extent.peek();
            let reduced = *layout.reduced_motion.peek();
            if reel.peek().paused() || reduced || scrollable <= 0.0 {
                continue;
            }
            reel.write().step(dt, scrollable, reduced);
        }
    });

    let offset = reel.read().offset();
    let track_style = format!("transform: translate3d({:.1}px, 0, 0);", -offset);
    let reduced = layout.reduced();
    let original = clips.len();
    let looped = duplicated(&clips);

    rsx! {
        section { class: "process-reel", "aria-label": "{label}",
            div { class: "reel-header",
                h2 { class: "section-title", "{label}" }
                div { class: "reel-controls",
                    IconButton {
                        aria_label: "Previous clips".to_string(),
                        onclick: move |_| {
                            let (width, scrollable) = *extent.peek();
                            reel.write().prev(width, scrollable);
                        },
                        "\u{2190}"
                    }
                    IconButton {
                        aria_label: "Next clips".to_string(),
                        onclick: move |_| {
                            let (width, scrollable) = *extent.peek();
                            reel.write().next(width, scrollable);
                        },
                        "\u{2192}"
                    }
                }
            }
            div {
                class: "reel-window",
                "data-cursor": "drag",
                onmounted: move |evt: MountedEvent| window.set(Some(evt.data())),
                onmouseenter: move |_| reel.write().set_paused(true),
                onmouseleave: move |_| reel.write().set_paused(false),
                onfocusin: move |_| reel.write().set_paused(true),
                onfocusout: move |_| reel.write().set_paused(false),
                div {
                    class: "reel-track",
                    style: "{track_style}",
                    onmounted: move |evt: MountedEvent| track.set(Some(evt.data())),
                    for (index, clip) in looped.into_iter().enumerate() {
                        figure {
                            key: "{index}",
                            class: "reel-clip",
                            "aria-hidden": if index >= original { "true" } else { "false" },
                            if clip.is_video() {
                                video {
                                    poster: clip.poster.clone().unwrap_or_default(),
                                    muted: true,
                                    autoplay: !reduced,
                                    r#loop: true,
                                    playsinline: true,
                                    "aria-label": "{clip.alt}",
                                    if clip.sources.is_empty() {
                                        source { src: "{clip.src}" }
                                    }
                                    for source in clip.sources.iter() {
                                        source { src: "{source.src}", r#type: "{source.mime}" }
                                    }
                                }
                            } else {
                                img { src: "{clip.src}", alt: "{clip.alt}", loading: "lazy" }
                            }
                            figcaption { "{clip.caption}" }
                        }
                    }
                }
            }
        }
    }
}
