//! Column classification: which header labels denote employees.
//!
//! Pure and deterministic given the label list and the configured
//! keyword/length constants. No I/O.

use crate::error::{ShiftError, ShiftResult};
use crate::types::ColumnRole;
use regex::Regex;
use serde::Deserialize;

/// Prefix of the synthetic label the loader produces for an absent
/// header cell ("Empty_3" for column 3).
pub const PLACEHOLDER_PREFIX: &str = "Empty_";

/// Labels that never denote a person, matched case-folded by
/// containment ("Unnamed: 3" must still match "unnamed").
const DEFAULT_KEYWORDS: &[&str] = &["nan", "none", "unnamed", "shifts"];

/// Month names are matched as whole words only; containment would
/// swallow names like "Maya".
const DEFAULT_MONTH_NAMES: &[&str] = &[
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const DEFAULT_MAX_LABEL_LEN: usize = 40;

/// Tunable classifier constants. All fields default so a config file
/// may override any subset.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Case-folded containment keywords marking non-person columns.
    pub keywords: Vec<String>,
    /// Case-folded whole-word month markers.
    pub month_names: Vec<String>,
    /// Labels longer than this are accidental text capture, not names.
    pub max_label_len: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            month_names: DEFAULT_MONTH_NAMES.iter().map(|m| m.to_string()).collect(),
            max_label_len: DEFAULT_MAX_LABEL_LEN,
        }
    }
}

/// Classifies header labels into [`ColumnRole`]s.
pub struct ColumnClassifier {
    config: ClassifierConfig,
    placeholder: Regex,
    bare_year: Regex,
}

impl ColumnClassifier {
    pub fn new(config: ClassifierConfig) -> ShiftResult<Self> {
        let placeholder = Regex::new(r"(?i)^empty_\d+$")
            .map_err(|e| ShiftError::Invalid(format!("placeholder pattern: {e}")))?;
        let bare_year = Regex::new(r"^(19|20)\d{2}$")
            .map_err(|e| ShiftError::Invalid(format!("year pattern: {e}")))?;
        Ok(Self {
            config,
            placeholder,
            bare_year,
        })
    }

    pub fn with_defaults() -> ShiftResult<Self> {
        Self::new(ClassifierConfig::default())
    }

    /// Classify every column label. Rules in order, first match wins:
    /// index 0 is DATE; placeholder labels, keyword matches, month
    /// names, bare years and over-long labels are IGNORED; everything
    /// else is an EMPLOYEE column keyed by its canonical (trimmed,
    /// uppercased) name.
    pub fn classify(&self, labels: &[String]) -> Vec<ColumnRole> {
        labels
            .iter()
            .enumerate()
            .map(|(index, label)| self.classify_one(index, label))
            .collect()
    }

    fn classify_one(&self, index: usize, label: &str) -> ColumnRole {
        if index == 0 {
            return ColumnRole::Date;
        }

        let trimmed = label.trim();
        if trimmed.is_empty() || self.placeholder.is_match(trimmed) {
            return ColumnRole::Ignored;
        }

        let folded = trimmed.to_lowercase();
        if self
            .config
            .keywords
            .iter()
            .any(|k| !k.is_empty() && folded.contains(&k.to_lowercase()))
        {
            return ColumnRole::Ignored;
        }
        if folded
            .split_whitespace()
            .any(|word| self.config.month_names.iter().any(|m| m.eq_ignore_ascii_case(word)))
        {
            return ColumnRole::Ignored;
        }
        if self.bare_year.is_match(trimmed) {
            return ColumnRole::Ignored;
        }

        if trimmed.chars().count() > self.config.max_label_len {
            return ColumnRole::Ignored;
        }

        ColumnRole::Employee {
            canonical: trimmed.to_uppercase(),
        }
    }
}

/// Synthetic label for a column whose header cell is absent.
pub fn placeholder_label(index: usize) -> String {
    format!("{PLACEHOLDER_PREFIX}{index}")
}
