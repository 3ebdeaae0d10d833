//! The multi-locale message catalog and its merge/serialization engine.
//!
//! A [`Catalog`] maps `locale -> message key -> translation`, where the
//! message key is the literal source text and an empty translation means
//! "untranslated". The merge rules are strictly non-destructive: `add` only
//! ever fills in absent entries, so translations supplied by hand survive any
//! number of rescans, and keys that disappear from the source are kept.
//!
//! Serialization is hand-rendered rather than delegated to `serde_json` so
//! the document diffs well under review: locales are sorted, every locale
//! block shares one key list (the union of all locales' keys), and within a
//! block untranslated entries come first, then ascending first-seen scan
//! order, then the raw key string.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

#[derive(Debug, Default)]
pub struct Catalog {
    translations: BTreeMap<String, BTreeMap<String, String>>,
    /// First-seen sequence number per key, assigned by `add` during the
    /// current process only. Keys loaded from disk have no entry until they
    /// are re-encountered.
    scan_orders: HashMap<String, usize>,
    next_order: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a locale. Idempotent.
    ///
    /// A freshly registered locale starts with an empty sub-map; keys already
    /// known to other locales are NOT back-filled. They only appear in this
    /// locale once `add` runs for each of them again, so callers must
    /// register every locale before feeding keys in. This call-order contract
    /// is deliberate and covered by tests.
    pub fn add_locale(&mut self, locale: &str) {
        self.translations.entry(locale.to_string()).or_default();
    }

    /// Fold a discovered message key into every registered locale.
    ///
    /// Locales that already hold `key` are left untouched, translated or not;
    /// only absence inserts an (untranslated) entry. The key is also assigned
    /// the next scan-order number the first time it comes through.
    pub fn add(&mut self, key: &str) {
        for entries in self.translations.values_mut() {
            if !entries.contains_key(key) {
                entries.insert(key.to_string(), String::new());
            }
        }

        if !self.scan_orders.contains_key(key) {
            self.next_order += 1;
            self.scan_orders.insert(key.to_string(), self.next_order);
        }
    }

    /// Set the translation for a key in one locale. No-op if the locale is
    /// not registered.
    pub fn set_translation(&mut self, locale: &str, key: &str, text: &str) {
        if let Some(entries) = self.translations.get_mut(locale) {
            entries.insert(key.to_string(), text.to_string());
        }
    }

    pub fn translation(&self, locale: &str, key: &str) -> Option<&str> {
        self.translations
            .get(locale)?
            .get(key)
            .map(String::as_str)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }

    /// Number of distinct message keys across all locales.
    pub fn key_count(&self) -> usize {
        self.key_union().len()
    }

    /// Render the catalog as its persisted JSON document.
    ///
    /// Locale blocks are indented two spaces and message entries four, with
    /// standard JSON string escaping and no trailing commas, so the file
    /// round-trips through any JSON tooling.
    pub fn to_json(&self) -> String {
        let keys = self.key_union();

        let mut out = String::from("{\n");
        let locale_count = self.translations.len();
        for (i, (locale, entries)) in self.translations.iter().enumerate() {
            out.push_str(&format!("  {}: {{\n", json_quote(locale)));

            // "Untranslated first" depends on this locale's entries, so the
            // shared key list is re-sorted per block.
            let ordered = self.ordered_keys(&keys, entries);
            let entry_count = ordered.len();
            for (j, key) in ordered.iter().enumerate() {
                let text = entries.get(*key).map(String::as_str).unwrap_or("");
                out.push_str(&format!("    {}: {}", json_quote(key.as_str()), json_quote(text)));
                out.push_str(if j + 1 == entry_count { "\n" } else { ",\n" });
            }

            out.push_str(if i + 1 == locale_count { "  }\n" } else { "  },\n" });
        }
        out.push('}');

        out
    }

    /// Parse a persisted catalog document.
    ///
    /// Scan orders are process-lifetime state and always start empty, even
    /// for keys present in the document.
    pub fn from_json(content: &str) -> Result<Self> {
        let translations: BTreeMap<String, BTreeMap<String, String>> =
            serde_json::from_str(content)
                .context("catalog root must map locales to message objects")?;

        Ok(Self {
            translations,
            ..Self::default()
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(path, format!("{}\n", self.to_json()))
            .with_context(|| format!("Failed to write catalog file: {}", path.display()))
    }

    /// The union of every locale's keys, deduplicated, in locale-then-key
    /// iteration order. The final per-block order comes from `ordered_keys`.
    fn key_union(&self) -> Vec<&String> {
        let mut seen = HashSet::new();
        let mut keys = Vec::new();
        for entries in self.translations.values() {
            for key in entries.keys() {
                if seen.insert(key.as_str()) {
                    keys.push(key);
                }
            }
        }
        keys
    }

    /// Stable-sort the shared key list for one locale block.
    ///
    /// The sort key is precomputed per entry instead of consulting the
    /// catalog inside the comparator: untranslated-for-this-locale first,
    /// then ascending scan order (absent orders map past every real one),
    /// then the raw key string.
    fn ordered_keys<'a>(
        &self,
        keys: &[&'a String],
        entries: &BTreeMap<String, String>,
    ) -> Vec<&'a String> {
        let translated = |key: &str| entries.get(key).is_some_and(|text| !text.is_empty());
        let order = |key: &str| self.scan_orders.get(key).copied().unwrap_or(usize::MAX);

        let mut ordered = keys.to_vec();
        ordered.sort_by(|a, b| {
            let rank_a = (translated(a.as_str()), order(a.as_str()));
            let rank_b = (translated(b.as_str()), order(b.as_str()));
            rank_a.cmp(&rank_b).then_with(|| a.cmp(b))
        });
        ordered
    }
}

/// Quote and escape a string as a JSON string literal.
fn json_quote(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}
