//! # Summary Formatter
//!
//! Renders a record into the fixed text block sent to the coach.
//!
//! The output is plain text with WhatsApp-style `*bold*` markers. Nothing is
//! escaped; the delivery URIs percent-encode the text themselves.

use crate::catalog::focus_label;
use crate::record::AssessmentRecord;
use crate::types::XconceptError;
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Opening line of the messaging payload.
pub const MESSAGING_GREETING: &str =
    "Olá, finalizei minha avaliação física no app XCONCEPT. Aguardo retorno.";

/// Subject line of the mail payload.
pub const MAIL_SUBJECT: &str = "Avaliação Física – XCONCEPT";

/// `strftime` pattern used when none is configured (`dd/mm/yyyy`).
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

// =============================================================================
// DATE STYLE
// =============================================================================

/// A validated `strftime` pattern for rendering dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateStyle {
    pattern: String,
}

impl DateStyle {
    /// Validate and wrap a `strftime` pattern.
    ///
    /// The pattern must parse and must render a bare date; time or offset
    /// specifiers (`%H`, `%z`, ...) are rejected.
    pub fn new(pattern: impl Into<String>) -> Result<Self, XconceptError> {
        let pattern = pattern.into();
        if pattern.is_empty()
            || StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error))
            || write!(String::new(), "{}", NaiveDate::default().format(&pattern)).is_err()
        {
            return Err(XconceptError::ConfigError(format!(
                "invalid date format '{}'",
                pattern
            )));
        }
        Ok(Self { pattern })
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Render a date. Falls back to ISO 8601 if the pattern cannot be
    /// applied to this date.
    #[must_use]
    pub fn render(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.pattern)).is_err() {
            return date.to_string();
        }
        out
    }
}

impl Default for DateStyle {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl TryFrom<String> for DateStyle {
    type Error = XconceptError;

    fn try_from(pattern: String) -> Result<Self, Self::Error> {
        Self::new(pattern)
    }
}

impl From<DateStyle> for String {
    fn from(style: DateStyle) -> Self {
        style.pattern
    }
}

// =============================================================================
// FORMATTER
// =============================================================================

/// Render the full assessment summary.
///
/// The injury details appear only for an explicit "yes"; values left over
/// from an earlier "yes" are kept in the record but never printed after the
/// answer changes to "no".
#[must_use]
pub fn format_summary(record: &AssessmentRecord, dates: &DateStyle) -> String {
    let injury_details = if record.has_injuries.is_yes() {
        format!(
            "Local: {}\nRestrição: {}",
            record.injury_location, record.injury_restriction
        )
    } else {
        String::new()
    };

    let notes = if record.basic_notes.is_empty() {
        "-"
    } else {
        record.basic_notes.as_str()
    };

    let schedule = record.schedule();

    let text = format!(
        concat!(
            "*AVALIAÇÃO XCONCEPT*\n",
            "------------------\n",
            "*Aluno:* {name}\n",
            "*Idade:* {age} | *Alt:* {height}cm | *Peso:* {weight}kg\n",
            "\n",
            "*Medidas:*\n",
            "Cintura: {waist} | Quadril: {hip}\n",
            "Peito: {chest} | Braço: {arm} | Coxa: {thigh}\n",
            "\n",
            "*Treino:*\n",
            "Frequência: {frequency}\n",
            "Aeróbico: {aerobics}\n",
            "Foco: {focus}\n",
            "\n",
            "*Lesões:* {injured}\n",
            "{injury_details}\n",
            "\n",
            "*Meta:* {goal_days} Dias\n",
            "Início: {start}\n",
            "Reavaliação: {review}\n",
            "------------------\n",
            "Obs: {notes}\n",
        ),
        name = record.name,
        age = record.age,
        height = record.height,
        weight = record.weight,
        waist = record.waist,
        hip = record.hip,
        chest = record.chest,
        arm = record.arm,
        thigh = record.thigh,
        frequency = record.frequency.code(),
        aerobics = record.aerobics.joined(),
        focus = focus_label(&record.focus_body_part),
        injured = if record.has_injuries.is_yes() { "SIM" } else { "NÃO" },
        injury_details = injury_details,
        goal_days = schedule.goal_days(),
        start = dates.render(schedule.start_date()),
        review = dates.render(schedule.review_date()),
        notes = notes,
    );

    text.trim().to_string()
}

/// Greeting plus summary, as sent through the messaging channel.
#[must_use]
pub fn messaging_text(record: &AssessmentRecord, dates: &DateStyle) -> String {
    format!("{}\n\n{}", MESSAGING_GREETING, format_summary(record, dates))
}

// =============================================================================
// TESTS
// =============================================================================
