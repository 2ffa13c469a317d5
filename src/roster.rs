//! The employee roster: canonical names mapped to short display labels.
//!
//! Pure in-memory, per-invocation state. The extractor never sees this
//! type, only a `Fn(&str) -> Option<String>` resolver built from it.

use crate::error::ShiftResult;
use std::collections::BTreeMap;
use std::path::Path;

/// Canonical mapping key for an employee name: trimmed and uppercased.
pub fn canonical_name(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Maps canonical employee names to display labels (abbreviations or
/// free-text summaries). Iteration order is the key order, so listings
/// and diagnostics stay deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: BTreeMap<String, String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a roster from (name, label) pairs, canonicalizing the keys.
    pub fn from_entries<I, N, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, L)>,
        N: AsRef<str>,
        L: AsRef<str>,
    {
        let mut roster = Self::new();
        for (name, label) in pairs {
            roster.insert(name.as_ref(), label.as_ref());
        }
        roster
    }

    /// Load a roster from a YAML map of `name: label`.
    pub fn load(path: &Path) -> ShiftResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> ShiftResult<Self> {
        let raw: BTreeMap<String, String> = serde_yaml::from_str(content)?;
        Ok(Self::from_entries(raw))
    }

    /// Insert one entry. The key is canonicalized, the label trimmed;
    /// an empty label after trimming is dropped.
    pub fn insert(&mut self, name: &str, label: &str) {
        let label = label.trim();
        if label.is_empty() {
            return;
        }
        self.entries.insert(canonical_name(name), label.to_string());
    }

    /// Look up the display label for an already-canonical name.
    pub fn resolve(&self, canonical: &str) -> Option<&str> {
        self.entries.get(canonical).map(String::as_str)
    }

    pub fn contains(&self, canonical: &str) -> bool {
        self.entries.contains_key(canonical)
    }

    /// Resolver closure for the extractor.
    pub fn resolver(&self) -> impl Fn(&str) -> Option<String> + '_ {
        move |canonical| self.resolve(canonical).map(str::to_string)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse one `NAME=LABEL` pair as given on the command line.
pub fn parse_abbr(raw: &str) -> Option<(String, String)> {
    let (name, label) = raw.split_once('=')?;
    let name = name.trim();
    let label = label.trim();
    if name.is_empty() || label.is_empty() {
        return None;
    }
    Some((name.to_string(), label.to_string()))
}
