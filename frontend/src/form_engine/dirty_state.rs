//! Normalized snapshot comparison for dirty-state tracking.
//!
//! Form entities arrive from the backend and from user input with a lot of
//! representational noise: `None` vs `""`, stray whitespace, tag lists in
//! arbitrary order, rich-text editors that leave `<p><br></p>` behind when
//! the user deletes everything. Comparing working copy and baseline
//! directly would report phantom changes and light up the save button on a
//! form nobody touched.
//!
//! Each screen therefore projects its entity into a [`FormSnapshot`] — an
//! immutable, normalized field map used purely for comparison — and a
//! [`DirtyStateTracker`] keeps the md5 fingerprint of the snapshot taken at
//! load/save time, exactly as the editor kept an `original_md5` of its last
//! saved text. Dirtiness is re-evaluated synchronously on every working
//! copy mutation; it gates button visibility and must feel instantaneous.
//!
//! Normalization never fails: fields a projection does not declare simply
//! do not participate in the comparison.

use std::collections::BTreeMap;

use regex::Regex;
use serde::Serialize;

/// A normalized field of a [`FormSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FieldValue {
    /// Trimmed text; `None` and `""` collapse to the same value.
    Text(String),
    /// Strictly coerced boolean (`None` counts as `false`).
    Flag(bool),
    /// Numeric field, passed through unchanged.
    Number(Option<i64>),
    /// Order-insensitive string list (tags): trimmed, empties dropped,
    /// sorted before comparison.
    TagList(Vec<String>),
    /// Order-sensitive string list (e.g. image URLs in slot order).
    Sequence(Vec<String>),
    /// Nested sub-entity collection. Items are normalized recursively and
    /// compared as an ordered sequence — item order is significant here,
    /// unlike [`FieldValue::TagList`].
    Items(Vec<FormSnapshot>),
}

/// An immutable, normalized projection of a form entity used purely for
/// comparison. Never the live editable object.
///
/// Two snapshots compare equal iff they represent the same semantic
/// content, regardless of incidental representation differences.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormSnapshot {
    fields: BTreeMap<String, FieldValue>,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.fields
            .insert(name.to_string(), FieldValue::Text(normalize_text(value)));
        self
    }

    pub fn opt_text(self, name: &str, value: Option<&str>) -> Self {
        self.text(name, value.unwrap_or(""))
    }

    /// Like [`Self::text`], but additionally collapses visually empty
    /// rich-text markup to the empty string.
    pub fn rich_text(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(
            name.to_string(),
            FieldValue::Text(normalize_rich_text(value)),
        );
        self
    }

    pub fn flag(mut self, name: &str, value: Option<bool>) -> Self {
        self.fields
            .insert(name.to_string(), FieldValue::Flag(value.unwrap_or(false)));
        self
    }

    pub fn number(mut self, name: &str, value: Option<i64>) -> Self {
        self.fields
            .insert(name.to_string(), FieldValue::Number(value));
        self
    }

    pub fn tags(mut self, name: &str, values: &[String]) -> Self {
        self.fields
            .insert(name.to_string(), FieldValue::TagList(normalize_tags(values)));
        self
    }

    pub fn sequence(mut self, name: &str, values: &[String]) -> Self {
        let normalized = values.iter().map(|value| normalize_text(value)).collect();
        self.fields
            .insert(name.to_string(), FieldValue::Sequence(normalized));
        self
    }

    pub fn items(mut self, name: &str, items: Vec<FormSnapshot>) -> Self {
        self.fields.insert(name.to_string(), FieldValue::Items(items));
        self
    }

    /// Hex md5 digest of the canonical serialization. Field order is fixed
    /// by the underlying `BTreeMap`, so equal snapshots always produce
    /// equal fingerprints.
    pub fn fingerprint(&self) -> String {
        let canonical = serde_json::to_string(self).unwrap_or_default();
        format!("{:x}", md5::compute(canonical))
    }
}

/// Deep structural inequality of the two normalized snapshots.
pub fn compute_dirty(baseline: &FormSnapshot, current: &FormSnapshot) -> bool {
    baseline != current
}

fn normalize_text(value: &str) -> String {
    value.trim().to_string()
}

fn normalize_rich_text(value: &str) -> String {
    let markup = Regex::new(r"(?i)</?(?:p|div|span|br)\s*/?>|&nbsp;").unwrap();
    let stripped = markup.replace_all(value, "");
    if stripped.trim().is_empty() {
        String::new()
    } else {
        value.trim().to_string()
    }
}

fn normalize_tags(values: &[String]) -> Vec<String> {
    let mut tags: Vec<String> = values
        .iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect();
    tags.sort();
    tags
}

/// Keeper of the baseline fingerprint for one form.
///
/// Callers rebaseline on load and on save success; with no baseline set the
/// tracker reports clean, so a screen must rebaseline even for a freshly
/// created empty entity.
#[derive(Debug, Clone, Default)]
pub struct DirtyStateTracker {
    baseline_fingerprint: Option<String>,
}

impl DirtyStateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures `snapshot` as the new last-known-saved state.
    pub fn rebaseline(&mut self, snapshot: &FormSnapshot) {
        self.baseline_fingerprint = Some(snapshot.fingerprint());
    }

    /// True when `current` differs, after normalization, from the baseline.
    pub fn is_dirty(&self, current: &FormSnapshot) -> bool {
        match &self.baseline_fingerprint {
            Some(baseline) => baseline != &current.fingerprint(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimming_removes_phantom_changes() {
        let baseline = FormSnapshot::new().text("title", "  Camisa de lino  ");
        let current = FormSnapshot::new().text("title", "Camisa de lino");
        assert!(!compute_dirty(&baseline, &current));
    }

    #[test]
    fn none_and_empty_string_are_equivalent() {
        let baseline = FormSnapshot::new().opt_text("description", None);
        let current = FormSnapshot::new().opt_text("description", Some(""));
        assert!(!compute_dirty(&baseline, &current));
        assert!(compute_dirty(
            &baseline,
            &FormSnapshot::new().opt_text("description", Some("algo"))
        ));
    }

    #[test]
    fn tag_order_is_irrelevant() {
        let baseline = FormSnapshot::new().tags(
            "tags",
            &["verano".to_string(), "lino".to_string(), "camisas".to_string()],
        );
        let current = FormSnapshot::new().tags(
            "tags",
            &["camisas".to_string(), "verano".to_string(), "lino".to_string()],
        );
        assert!(!compute_dirty(&baseline, &current));
    }

    #[test]
    fn visually_empty_rich_text_collapses_to_empty() {
        for markup in ["<p><br></p>", "<p></p>", "<div><br/></div>", "&nbsp;", "  "] {
            let baseline = FormSnapshot::new().rich_text("content", markup);
            let current = FormSnapshot::new().rich_text("content", "");
            assert!(
                !compute_dirty(&baseline, &current),
                "{:?} should normalize to empty",
                markup
            );
        }
    }

    #[test]
    fn rich_text_with_real_content_survives() {
        let baseline = FormSnapshot::new().rich_text("content", "<p>hola</p>");
        let current = FormSnapshot::new().rich_text("content", "");
        assert!(compute_dirty(&baseline, &current));
    }

    #[test]
    fn flags_are_strictly_coerced() {
        let baseline = FormSnapshot::new().flag("published", None);
        assert!(!compute_dirty(
            &baseline,
            &FormSnapshot::new().flag("published", Some(false))
        ));
        assert!(compute_dirty(
            &baseline,
            &FormSnapshot::new().flag("published", Some(true))
        ));
    }

    #[test]
    fn nested_collection_order_is_significant() {
        let a = FormSnapshot::new().text("heading", "A");
        let b = FormSnapshot::new().text("heading", "B");
        let baseline = FormSnapshot::new().items("subsections", vec![a.clone(), b.clone()]);
        let current = FormSnapshot::new().items("subsections", vec![b, a]);
        assert!(compute_dirty(&baseline, &current));
    }

    #[test]
    fn nested_items_are_normalized_recursively() {
        let baseline = FormSnapshot::new().items(
            "subsections",
            vec![FormSnapshot::new().text("heading", "  Envíos  ")],
        );
        let current = FormSnapshot::new().items(
            "subsections",
            vec![FormSnapshot::new().text("heading", "Envíos")],
        );
        assert!(!compute_dirty(&baseline, &current));
    }

    #[test]
    fn sequence_order_is_significant() {
        let baseline = FormSnapshot::new()
            .sequence("additional_image_urls", &["a.png".to_string(), "b.png".to_string()]);
        let current = FormSnapshot::new()
            .sequence("additional_image_urls", &["b.png".to_string(), "a.png".to_string()]);
        assert!(compute_dirty(&baseline, &current));
    }

    #[test]
    fn tracker_follows_rebaseline() {
        let mut tracker = DirtyStateTracker::new();
        let clean = FormSnapshot::new().text("title", "Camisa");
        tracker.rebaseline(&clean);
        assert!(!tracker.is_dirty(&clean));

        let edited = FormSnapshot::new().text("title", "Camisa de lino");
        assert!(tracker.is_dirty(&edited));

        tracker.rebaseline(&edited);
        assert!(!tracker.is_dirty(&edited));
    }

    #[test]
    fn equal_snapshots_share_a_fingerprint() {
        let one = FormSnapshot::new()
            .text("title", "  Camisa ")
            .tags("tags", &["b".to_string(), "a".to_string()]);
        let other = FormSnapshot::new()
            .text("title", "Camisa")
            .tags("tags", &["a".to_string(), "b".to_string()]);
        assert_eq!(one.fingerprint(), other.fingerprint());
    }
}
