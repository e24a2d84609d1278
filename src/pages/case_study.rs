//! Case study page.
//!
//! Resolves the slug against the bundled library and renders the document,
//! or the matching empty state when it cannot.

use aetherlab_core::cases::{HeroMedia, MediaType};
use aetherlab_core::{CaseLibrary, CaseStudy};
use aetherlab_ui::MetricChip;
use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::app::Route;
use crate::components::{EmptyState, MotionScore, ProcessReel};
use crate::context::use_layout;

#[component]
pub fn CaseStudyView(slug: String) -> Element {
    let library = use_hook(CaseLibrary::bundled);
    let lookup = library.clone();
    let case = use_memo(use_reactive(&slug, move |slug| {
        let resolved = lookup.resolve(&slug);
        match &resolved {
            Ok(case) => debug!(slug = %case.slug, "Case study resolved"),
            Err(e) => warn!(slug = %slug, "Case study unavailable: {}", e),
        }
        resolved
    }));

    let resolved = case.read().clone();
    match resolved {
        Ok(case) => {
            // A dangling next-case reference renders no teaser
            let next_available = case
                .frontmatter
                .next_case
                .as_ref()
                .is_some_and(|next| library.contains(&next.slug));
            rsx! { CaseStudyBody { case, next_available } }
        }
        Err(error) => rsx! {
            div { class: "page case-page",
                document::Title { "AetherLab" }
                EmptyState { error }
            }
        },
    }
}

#[component]
fn CaseStudyBody(case: CaseStudy, next_available: bool) -> Element {
    let front = &case.frontmatter;
    let title = case.document_title();
    let body = case.body_html();
    let clips = case.clips().to_vec();

    rsx! {
        article { class: "page case-page",
            document::Title { "{title}" }
            header { class: "case-header",
                p { class: "page-eyebrow", "{front.client} \u{00B7} {front.year}" }
                h1 { class: "page-title", "{front.title}" }
                p { class: "case-role", "{front.role}" }
                if let Some(summary) = &front.summary {
                    p { class: "page-lede", "{summary}" }
                }
            }
            HeroFigure { media: front.hero.clone() }
            if !front.outcomes.is_empty() {
                section { class: "case-outcomes", "aria-label": "Outcomes",
                    for outcome in front.outcomes.iter() {
                        MetricChip {
                            key: "{outcome.label}",
                            label: outcome.label.clone(),
                            value: outcome.value.clone(),
                        }
                    }
                }
            }
            MotionScore { tokens: front.motion_tokens.clone() }
            if !clips.is_empty() {
                ProcessReel { label: case.reel_label().to_string(), clips }
            }
            section { class: "case-body", dangerous_inner_html: "{body}" }
            if !front.credits.is_empty() {
                section { class: "case-credits",
                    h2 { class: "section-title", "Credits" }
                    dl {
                        for credit in front.credits.iter() {
                            div { key: "{credit.label}", class: "credit",
                                dt { "{credit.label}" }
                                dd {
                                    "{credit.person}"
                                    if let Some(contribution) = &credit.contribution {
                                        span { class: "credit-note", " \u{00B7} {contribution}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            if let Some(next) = front.next_case.as_ref().filter(|_| next_available) {
                nav { class: "case-next", "aria-label": "Next case study",
                    span { class: "case-next-eyebrow", "Next case" }
                    Link {
                        class: "case-next-link",
                        to: Route::CaseStudyView { slug: next.slug.clone() },
                        if let Some(thumbnail) = &next.thumbnail {
                            img {
                                src: "{thumbnail}",
                                alt: next.alt.clone().unwrap_or_default(),
                                loading: "lazy",
                            }
                        }
                        span { class: "case-next-title", "{next.title}" }
                        if let Some(client) = &next.client {
                            span { class: "case-next-meta", "{client}" }
                        }
                    }
                }
            }
            Link { class: "btn-link", to: Route::WorkIndex {}, "\u{2190} All work" }
        }
    }
}

#[component]
fn HeroFigure(media: HeroMedia) -> Element {
    let reduced = use_layout().reduced();
    let poster = media.poster.clone().unwrap_or_default();

    let visual = match media.media_type {
        MediaType::Video => rsx! {
            video {
                poster: "{poster}",
                muted: true,
                autoplay: !reduced,
                controls: reduced,
                r#loop: true,
                playsinline: true,
                "aria-label": "{media.alt}",
                if let Some(src) = &media.src {
                    source { src: "{src}" }
                }
                for source in media.sources.iter() {
                    source { src: "{source.src}", r#type: "{source.mime}" }
                }
            }
        },
        MediaType::Image => rsx! {
            img { src: media.src.clone().unwrap_or(poster), alt: "{media.alt}" }
        },
    };

    rsx! {
        figure { class: "case-hero",
            {visual}
            figcaption { "{media.caption}" }
        }
    }
}
