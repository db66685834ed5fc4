//! # Aerobic Selection
//!
//! Multi-select list with one exclusive option.
//!
//! ## Invariant
//!
//! [`NO_AEROBICS`] and any other label never coexist. Every way of building
//! or mutating an [`AerobicSelection`] preserves this, including
//! deserialization from a plain list.

use crate::catalog::NO_AEROBICS;
use serde::{Deserialize, Serialize};

/// The labels the student picked, in the order they were picked.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AerobicSelection {
    labels: Vec<String>,
}

impl AerobicSelection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from arbitrary labels.
    ///
    /// Duplicates are dropped (first occurrence wins). If the sentinel is
    /// among the labels the result is the sentinel alone.
    #[must_use]
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for label in labels {
            let label = label.into();
            if label == NO_AEROBICS {
                return Self::only_sentinel();
            }
            if !selection.contains(&label) {
                selection.labels.push(label);
            }
        }
        selection
    }

    fn only_sentinel() -> Self {
        Self {
            labels: vec![NO_AEROBICS.to_string()],
        }
    }

    /// Apply a click on `label`.
    ///
    /// - The sentinel replaces the whole selection with itself.
    /// - Any other label first evicts the sentinel, then toggles: removed if
    ///   present, appended otherwise.
    pub fn toggle(&mut self, label: &str) {
        if label == NO_AEROBICS {
            *self = Self::only_sentinel();
            return;
        }

        self.labels.retain(|l| l != NO_AEROBICS);
        if let Some(pos) = self.labels.iter().position(|l| l == label) {
            self.labels.remove(pos);
        } else {
            self.labels.push(label.to_string());
        }
    }

    /// Return a toggled copy, leaving `self` untouched.
    #[must_use]
    pub fn toggled(&self, label: &str) -> Self {
        let mut next = self.clone();
        next.toggle(label);
        next
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// True when the student explicitly declined aerobic work.
    #[must_use]
    pub fn declined(&self) -> bool {
        self.contains(NO_AEROBICS)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Labels in selection order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Comma-joined rendering used by the summary.
    #[must_use]
    pub fn joined(&self) -> String {
        self.labels.join(", ")
    }
}

impl From<Vec<String>> for AerobicSelection {
    fn from(labels: Vec<String>) -> Self {
        Self::from_labels(labels)
    }
}

impl From<AerobicSelection> for Vec<String> {
    fn from(selection: AerobicSelection) -> Self {
        selection.labels
    }
}
