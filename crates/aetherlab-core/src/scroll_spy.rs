//! Scroll spy: pick the section most in view from intersection reports.

use serde::Deserialize;

/// Observer root margin: a band between 48% from the top and 42% from the
/// bottom of the viewport.
pub const DEFAULT_ROOT_MARGIN: &str = "-48% 0px -42% 0px";

/// Observer thresholds
pub const THRESHOLDS: [f64; 6] = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];

/// One intersection-observer entry, as reported by the browser bridge.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct SectionEntry {
    pub id: String,
    /// `boundingClientRect.top` of the section
    pub top: f64,
    #[serde(rename = "isIntersecting")]
    pub is_intersecting: bool,
}

impl SectionEntry {
    pub fn new(id: impl Into<String>, top: f64, is_intersecting: bool) -> Self {
        Self {
            id: id.into(),
            top,
            is_intersecting,
        }
    }
}

/// Tracks the active section among a fixed list of ids.
#[derive(Clone, PartialEq, Debug)]
pub struct ScrollSpy {
    ids: Vec<String>,
    active: Option<String>,
}

impl ScrollSpy {
    /// Initial state is the first identifier given, or `None` for an empty list.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let all: Vec<String> = ids.into_iter().map(Into::into).collect();
        let active = all.first().cloned();
        let ids = all.into_iter().filter(|id| !id.is_empty()).collect();
        Self { ids, active }
    }

    /// Ids the bridge should observe
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Fold one batch of intersection entries. Returns `true` when the active
    /// section changed.
    pub fn observe(&mut self, entries: &[SectionEntry]) -> bool {
        let next = pick_active(entries);
        match next {
            Some(id) if self.active.as_deref() != Some(id) => {
                self.active = Some(id.to_string());
                true
            }
            _ => false,
        }
    }
}

/// Topmost intersecting entry, falling back to the topmost entry overall.
fn pick_active(entries: &[SectionEntry]) -> Option<&str> {
    let topmost = |a: &&SectionEntry, b: &&SectionEntry| a.top.total_cmp(&b.top);

    entries
        .iter()
        .filter(|entry| entry.is_intersecting)
        .min_by(topmost)
        .or_else(|| entries.iter().min_by(topmost))
        .map(|entry| entry.id.as_str())
        .filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_id() {
        let spy = ScrollSpy::new(["work", "approach", "lab"]);
        assert_eq!(spy.active(), Some("work"));
        assert_eq!(spy.ids().len(), 3);

        let empty = ScrollSpy::new(Vec::<String>::new());
        assert_eq!(empty.active(), None);
    }

    #[test]
    fn empty_ids_are_not_observed() {
        let spy = ScrollSpy::new(["work", "", "lab"]);
        assert_eq!(spy.ids(), ["work".to_string(), "lab".to_string()]);
    }

    #[test]
    fn picks_topmost_intersecting() {
        let mut spy = ScrollSpy::new(["work", "approach", "lab"]);
        let changed = spy.observe(&[
            SectionEntry::new("lab", 420.0, true),
            SectionEntry::new("approach", 120.0, true),
            SectionEntry::new("work", -900.0, false),
        ]);
        assert!(changed);
        assert_eq!(spy.active(), Some("approach"));
    }

    #[test]
    fn falls_back_to_least_top_when_nothing_intersects() {
        let mut spy = ScrollSpy::new(["work", "approach", "lab"]);
        spy.observe(&[
            SectionEntry::new("approach", -40.0, false),
            SectionEntry::new("lab", 600.0, false),
        ]);
        assert_eq!(spy.active(), Some("approach"));
    }

    #[test]
    fn repeated_reports_are_idempotent() {
        let mut spy = ScrollSpy::new(["work", "lab"]);
        let batch = [SectionEntry::new("lab", 10.0, true)];
        assert!(spy.observe(&batch));
        assert!(!spy.observe(&batch));
        assert_eq!(spy.active(), Some("lab"));
    }

    #[test]
    fn empty_batch_keeps_state() {
        let mut spy = ScrollSpy::new(["work"]);
        assert!(!spy.observe(&[]));
        assert_eq!(spy.active(), Some("work"));
    }

    #[test]
    fn entries_deserialize_from_bridge_json() {
        let json = r#"[{"id":"lab","top":12.5,"isIntersecting":true}]"#;
        let entries: Vec<SectionEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries, vec![SectionEntry::new("lab", 12.5, true)]);
    }
}
