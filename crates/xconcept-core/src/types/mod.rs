//! # Core Type Definitions
//!
//! Small value types shared by the record, the steps and the formatter:
//! - Training frequency (`Frequency`)
//! - Tri-state injury answer (`InjuryAnswer`)
//! - Opaque photo reference (`PhotoRef`)
//! - Error type (`XconceptError`)
//!
//! Numeric answers (age, height, measurements) stay as text. They are
//! echoed into the summary verbatim and never parsed.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

// =============================================================================
// FREQUENCY
// =============================================================================

/// Weekly training frequency chosen on the frequency step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Frequency {
    /// Nothing chosen yet.
    #[default]
    #[serde(rename = "")]
    Unset,
    /// Three sessions per week.
    #[serde(rename = "3x")]
    ThreePerWeek,
    /// Five or more sessions per week.
    #[serde(rename = "5x")]
    FiveOrMore,
}

impl Frequency {
    /// The two selectable values, in display order.
    pub const CHOICES: [Frequency; 2] = [Frequency::ThreePerWeek, Frequency::FiveOrMore];

    /// Short code used in the summary (`"3x"`, `"5x"`, or empty).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Frequency::Unset => "",
            Frequency::ThreePerWeek => "3x",
            Frequency::FiveOrMore => "5x",
        }
    }

    /// Label shown on the selection card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Frequency::Unset => "",
            Frequency::ThreePerWeek => "Treinar 3x por semana",
            Frequency::FiveOrMore => "Treinar 5x ou mais",
        }
    }

    #[must_use]
    pub const fn is_set(self) -> bool {
        !matches!(self, Frequency::Unset)
    }
}

// =============================================================================
// INJURY ANSWER
// =============================================================================

/// Answer to "do you have injuries or restrictions?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InjuryAnswer {
    #[default]
    Unanswered,
    No,
    Yes,
}

impl InjuryAnswer {
    #[must_use]
    pub const fn is_answered(self) -> bool {
        !matches!(self, InjuryAnswer::Unanswered)
    }

    /// True only for an explicit "yes". Unanswered counts as no.
    #[must_use]
    pub const fn is_yes(self) -> bool {
        matches!(self, InjuryAnswer::Yes)
    }
}

impl From<bool> for InjuryAnswer {
    fn from(value: bool) -> Self {
        if value {
            InjuryAnswer::Yes
        } else {
            InjuryAnswer::No
        }
    }
}

// =============================================================================
// PHOTO REFERENCE
// =============================================================================

/// A selected photo, known only by its display name.
///
/// The image bytes are never read, decoded or transmitted. Presence is the
/// only thing the wizard cares about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhotoRef {
    pub display_name: String,
}

impl PhotoRef {
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }

    /// Build a reference from a path without touching the file.
    ///
    /// The display name is the final path component, or the whole path
    /// when it has none (e.g. `".."`).
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let display_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { display_name }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised at the boundaries of the wizard.
///
/// The assessment logic itself never fails: an unmet step requirement is a
/// refused transition, not an error. These variants cover configuration,
/// input files, terminal I/O and the external opener.
#[derive(Debug, Error)]
pub enum XconceptError {
    /// The configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// An answers file or other structured input could not be parsed.
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// Output could not be serialized.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A date argument was not a valid `YYYY-MM-DD` date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The external application for a delivery URI could not be launched.
    #[error("Dispatch failed: {0}")]
    DispatchError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================
