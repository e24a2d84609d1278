//! Case-study library.
//!
//! Case studies are Markdown documents with a TOML frontmatter block between
//! `+++` fences, bundled into the binary. A slug resolves by trying a fixed
//! list of candidate keys; the first key present wins.
//!
//! ```text
//! cases/{slug}.mdx
//! cases/{slug}.md
//! cases/{slug}/index.mdx
//! cases/{slug}/index.md
//! ```

use std::collections::BTreeMap;

use pulldown_cmark::{html, Options, Parser};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::motion::{parse_easing, Easing};
use crate::route::WORK_PATH;

const FENCE: &str = "+++";

/// Fallbacks used when motion tokens are not finite numbers
const DEFAULT_DURATION_MS: f64 = 320.0;
const DEFAULT_DISTANCE_PX: f64 = 48.0;

/// Why a case study could not be shown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseError {
    /// Route was hit without a slug
    #[error("Case study not specified")]
    Unspecified,

    /// No bundled document matches the slug
    #[error("Case study not found: {0}")]
    NotFound(String),

    /// A document exists but its frontmatter is unusable
    #[error("Failed to load case study {slug}: {reason}")]
    Load { slug: String, reason: String },
}

impl CaseError {
    pub fn heading(&self) -> &'static str {
        match self {
            CaseError::Unspecified => "Case study not specified",
            CaseError::NotFound(_) | CaseError::Load { .. } => "Unable to load case",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CaseError::Unspecified => "Pick a case from the index to view the full breakdown.",
            CaseError::NotFound(_) => "We couldn't find that case study.",
            CaseError::Load { .. } => "Something went sideways while loading this case.",
        }
    }

    pub fn action_label(&self) -> &'static str {
        match self {
            CaseError::Unspecified => "Back to work index",
            CaseError::NotFound(_) | CaseError::Load { .. } => "Return to work index",
        }
    }

    /// Where the empty-state control leads
    pub fn action_path(&self) -> &'static str {
        WORK_PATH
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct MediaSource {
    pub src: String,
    #[serde(rename = "type")]
    pub mime: String,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct HeroMedia {
    pub media_type: MediaType,
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub sources: Vec<MediaSource>,
    #[serde(default)]
    pub poster: Option<String>,
    pub alt: String,
    pub caption: String,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct OutcomeMetric {
    pub label: String,
    pub value: String,
}

impl OutcomeMetric {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct MotionTokens {
    pub duration_ms: f64,
    pub easing: String,
    pub distance_px: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub extras: Vec<OutcomeMetric>,
}

impl MotionTokens {
    pub fn duration_ms(&self) -> f64 {
        if self.duration_ms.is_finite() {
            self.duration_ms
        } else {
            DEFAULT_DURATION_MS
        }
    }

    pub fn distance_px(&self) -> f64 {
        if self.distance_px.is_finite() {
            self.distance_px
        } else {
            DEFAULT_DISTANCE_PX
        }
    }

    pub fn easing(&self) -> Easing {
        parse_easing(&self.easing)
    }

    /// Token chips shown above the motion score preview.
    pub fn chips(&self) -> Vec<OutcomeMetric> {
        let mut chips = vec![
            OutcomeMetric::new("Duration", format!("{} ms", self.duration_ms().round())),
            OutcomeMetric::new("Easing", self.easing.clone()),
            OutcomeMetric::new("Distance", format!("{} px", self.distance_px().round())),
        ];
        chips.extend(self.extras.iter().cloned());
        chips
    }

    pub fn notes(&self) -> &str {
        self.notes
            .as_deref()
            .unwrap_or("Token preview mirrors system defaults.")
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ProcessClip {
    #[serde(default)]
    pub id: Option<String>,
    pub src: String,
    #[serde(default, rename = "type")]
    pub media_type: Option<MediaType>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub sources: Vec<MediaSource>,
    pub alt: String,
    pub caption: String,
}

impl ProcessClip {
    pub fn is_video(&self) -> bool {
        self.media_type == Some(MediaType::Video)
    }
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct ProcessReel {
    #[serde(default)]
    pub label: Option<String>,
    pub clips: Vec<ProcessClip>,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct Credit {
    pub label: String,
    pub person: String,
    #[serde(default)]
    pub contribution: Option<String>,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct NextCase {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Metadata block at the top of a case document.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct CaseFrontmatter {
    pub title: String,
    pub year: String,
    pub client: String,
    pub role: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub hero: HeroMedia,
    #[serde(default)]
    pub outcomes: Vec<OutcomeMetric>,
    pub motion_tokens: MotionTokens,
    #[serde(default)]
    pub process_reel: Option<ProcessReel>,
    #[serde(default)]
    pub credits: Vec<Credit>,
    #[serde(default)]
    pub next_case: Option<NextCase>,
}

/// A resolved case study.
#[derive(Clone, PartialEq, Debug)]
pub struct CaseStudy {
    pub slug: String,
    pub frontmatter: CaseFrontmatter,
    pub body: String,
}

impl CaseStudy {
    /// Parse a bundled document.
    pub fn parse(slug: &str, source: &str) -> Result<Self, CaseError> {
        let load_err = |reason: String| CaseError::Load {
            slug: slug.to_string(),
            reason,
        };

        let (meta, body) =
            split_frontmatter(source).ok_or_else(|| load_err("missing +++ frontmatter".into()))?;
        let frontmatter: CaseFrontmatter =
            toml::from_str(meta).map_err(|e| load_err(e.to_string()))?;

        Ok(Self {
            slug: slug.to_string(),
            frontmatter,
            body: body.trim().to_string(),
        })
    }

    /// Window title while the case is on screen
    pub fn document_title(&self) -> String {
        format!("{}  -  {}", self.frontmatter.title, self.frontmatter.client)
    }

    /// Body rendered to HTML.
    pub fn body_html(&self) -> String {
        render_markdown(&self.body)
    }

    pub fn clips(&self) -> &[ProcessClip] {
        self.frontmatter
            .process_reel
            .as_ref()
            .map(|reel| reel.clips.as_slice())
            .unwrap_or(&[])
    }

    pub fn reel_label(&self) -> &str {
        self.frontmatter
            .process_reel
            .as_ref()
            .and_then(|reel| reel.label.as_deref())
            .unwrap_or("Process Reel")
    }
}

/// Split `+++\n<toml>\n+++\n<body>` into its two halves.
fn split_frontmatter(source: &str) -> Option<(&str, &str)> {
    let rest = source.trim_start_matches('\u{feff}').trim_start();
    let rest = rest.strip_prefix(FENCE)?;
    let rest = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Markdown to HTML with tables and strikethrough enabled.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Keys tried for a slug, in priority order.
pub fn candidate_keys(slug: &str) -> [String; 4] {
    [
        format!("cases/{slug}.mdx"),
        format!("cases/{slug}.md"),
        format!("cases/{slug}/index.mdx"),
        format!("cases/{slug}/index.md"),
    ]
}

/// URL slugs are matched trimmed and case-insensitively
fn normalize_slug(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Keyed collection of case documents.
#[derive(Clone, Default, Debug)]
pub struct CaseLibrary {
    documents: BTreeMap<String, &'static str>,
}

impl CaseLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents compiled into the binary from `content/cases`.
    pub fn bundled() -> Self {
        Self::new()
            .with_document(
                "cases/nebula-horizon.md",
                include_str!("../content/cases/nebula-horizon.md"),
            )
            .with_document(
                "cases/tempo-channels/index.md",
                include_str!("../content/cases/tempo-channels/index.md"),
            )
            .with_document(
                "cases/lyra-signal.md",
                include_str!("../content/cases/lyra-signal.md"),
            )
    }

    pub fn with_document(mut self, key: impl Into<String>, source: &'static str) -> Self {
        self.documents.insert(key.into(), source);
        self
    }

    /// Whether any candidate key exists for the slug. Agrees with
    /// [`CaseLibrary::resolve`] on what counts as the same slug.
    pub fn contains(&self, slug: &str) -> bool {
        let slug = normalize_slug(slug);
        !slug.is_empty() && self.lookup(&slug).is_some()
    }

    fn lookup(&self, slug: &str) -> Option<(String, &'static str)> {
        candidate_keys(slug)
            .into_iter()
            .find_map(|key| self.documents.get(&key).map(|source| (key, *source)))
    }

    /// Resolve a slug from the URL into a parsed case study.
    pub fn resolve(&self, raw_slug: &str) -> Result<CaseStudy, CaseError> {
        let slug = normalize_slug(raw_slug);
        if slug.is_empty() {
            return Err(CaseError::Unspecified);
        }

        let Some((key, source)) = self.lookup(&slug) else {
            debug!(slug = %slug, "No case document for slug");
            return Err(CaseError::NotFound(slug));
        };

        debug!(slug = %slug, key = %key, "Resolved case document");
        CaseStudy::parse(&slug, source).inspect_err(|e| {
            warn!("Case document {} failed to parse: {}", key, e);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"+++
title = "Test Case"
year = "2024"
client = "Orbital"
role = "Lead"

[hero]
media_type = "image"
src = "hero.jpg"
alt = "Hero"
caption = "Caption"

[motion_tokens]
duration_ms = 280
easing = "cubic-bezier(0.2, 0.8, 0.2, 1)"
distance_px = 36
+++

## Challenge

Body **text**.
"#;

    #[test]
    fn candidate_order_is_fixed() {
        let keys = candidate_keys("orbit");
        assert_eq!(keys[0], "cases/orbit.mdx");
        assert_eq!(keys[1], "cases/orbit.md");
        assert_eq!(keys[2], "cases/orbit/index.mdx");
        assert_eq!(keys[3], "cases/orbit/index.md");
    }

    #[test]
    fn first_candidate_wins() {
        const OTHER: &str = "+++\ntitle = 1\n+++\n";
        let library = CaseLibrary::new()
            .with_document("cases/test/index.md", OTHER)
            .with_document("cases/test.md", MINIMAL);
        let case = library.resolve("test").unwrap();
        assert_eq!(case.frontmatter.title, "Test Case");
    }

    #[test]
    fn slug_is_case_insensitive() {
        let library = CaseLibrary::new().with_document("cases/test.md", MINIMAL);
        assert!(library.resolve("TEST").is_ok());
        assert!(library.contains("Test"));
    }

    #[test]
    fn bundled_next_cases_point_at_bundled_documents() {
        let library = CaseLibrary::bundled();
        for slug in ["nebula-horizon", "tempo-channels", "lyra-signal"] {
            let case = library.resolve(slug).unwrap();
            let next = case.frontmatter.next_case.expect("every bundled case links on");
            assert!(library.contains(&next.slug), "{slug} links to {}", next.slug);
        }
        assert!(!library.contains("retired-case"));
    }

    #[test]
    fn contains_agrees_with_resolve() {
        let library = CaseLibrary::new().with_document("cases/test.md", MINIMAL);
        for slug in [" Test ", "test\n", "TEST", "  ", "missing"] {
            assert_eq!(
                library.contains(slug),
                library.resolve(slug).is_ok(),
                "slug {slug:?}"
            );
        }
    }

    #[test]
    fn empty_slug_is_unspecified() {
        let library = CaseLibrary::new();
        assert_eq!(library.resolve("  ").unwrap_err(), CaseError::Unspecified);
    }

    #[test]
    fn bad_frontmatter_is_a_load_error() {
        let library = CaseLibrary::new().with_document("cases/broken.md", "+++\ntitle = \n+++\n");
        let err = library.resolve("broken").unwrap_err();
        assert!(matches!(err, CaseError::Load { ref slug, .. } if slug == "broken"));
        assert_eq!(err.description(), "Something went sideways while loading this case.");
    }

    #[test]
    fn missing_fence_is_a_load_error() {
        let library = CaseLibrary::new().with_document("cases/plain.md", "# Just markdown");
        assert!(matches!(
            library.resolve("plain"),
            Err(CaseError::Load { .. })
        ));
    }

    #[test]
    fn parses_frontmatter_and_body() {
        let case = CaseStudy::parse("test", MINIMAL).unwrap();
        assert_eq!(case.document_title(), "Test Case  -  Orbital");
        assert_eq!(case.frontmatter.hero.media_type, MediaType::Image);
        assert!(case.body.starts_with("## Challenge"));
        assert!(case.body_html().contains("<strong>text</strong>"));
        assert!(case.clips().is_empty());
        assert_eq!(case.reel_label(), "Process Reel");
    }

    #[test]
    fn motion_chips_include_extras_and_fallbacks() {
        let tokens = MotionTokens {
            duration_ms: f64::NAN,
            easing: "easeOut".into(),
            distance_px: 40.4,
            notes: None,
            extras: vec![OutcomeMetric::new("Stagger", "60 ms")],
        };
        let chips = tokens.chips();
        assert_eq!(chips[0].value, "320 ms");
        assert_eq!(chips[2].value, "40 px");
        assert_eq!(chips[3].label, "Stagger");
        assert_eq!(tokens.notes(), "Token preview mirrors system defaults.");
    }

    #[test]
    fn bundled_documents_all_parse() {
        let library = CaseLibrary::bundled();
        for slug in ["nebula-horizon", "tempo-channels", "lyra-signal"] {
            let case = library.resolve(slug).unwrap();
            assert!(!case.frontmatter.title.is_empty());
        }
    }

    #[test]
    fn error_copy() {
        let err = CaseError::NotFound("x".into());
        assert_eq!(err.heading(), "Unable to load case");
        assert_eq!(err.description(), "We couldn't find that case study.");
        assert_eq!(err.action_label(), "Return to work index");
        assert_eq!(CaseError::Unspecified.action_label(), "Back to work index");
    }
}
