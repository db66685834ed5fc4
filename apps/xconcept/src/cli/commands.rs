//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::config::AppConfig;
use crate::opener::{EchoOpener, SystemOpener};
use crate::wizard::{Outcome, Wizard};
use chrono::NaiveDate;
use serde::Serialize;
use std::path::{Path, PathBuf};
use xconcept_core::{
    Channel, Dispatcher, RecordPatch, Session, Step, SystemClock, UriOpener, XconceptError,
    delivery_uri,
};

// =============================================================================
// INPUT VALIDATION
// =============================================================================

/// Maximum answers file size (1 MB).
const MAX_ANSWERS_FILE_SIZE: u64 = 1024 * 1024;

/// Date format accepted by `--start`.
const START_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), XconceptError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| XconceptError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(XconceptError::DeserializationError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Resolve `path` and make sure it names an existing regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, XconceptError> {
    let canonical = path.canonicalize().map_err(|e| {
        XconceptError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(XconceptError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Parse a `--start` value.
pub fn parse_start_date(value: &str) -> Result<NaiveDate, XconceptError> {
    NaiveDate::parse_from_str(value.trim(), START_DATE_FORMAT).map_err(|e| {
        XconceptError::InvalidDate(format!("'{}' is not a YYYY-MM-DD date: {}", value, e))
    })
}

/// Fresh session starting on `start`, or today.
pub fn new_session(start: Option<&str>) -> Result<Session, XconceptError> {
    match start {
        Some(value) => Ok(Session::starting_on(parse_start_date(value)?)),
        None => Ok(Session::new(&SystemClock)),
    }
}

/// Read a JSON answers file into a patch.
pub fn load_answers(path: &Path) -> Result<RecordPatch, XconceptError> {
    let validated_path = validate_file_path(path)?;
    validate_file_size(&validated_path, MAX_ANSWERS_FILE_SIZE)?;

    let content = std::fs::read_to_string(&validated_path)
        .map_err(|e| XconceptError::IoError(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| XconceptError::DeserializationError(e.to_string()))
}

// =============================================================================
// RUN COMMAND
// =============================================================================

/// Run the interactive wizard on the terminal.
pub fn cmd_run(config: &AppConfig, dry_run: bool, start: Option<&str>) -> Result<(), XconceptError> {
    let mut session = new_session(start)?;
    tracing::info!(
        start = %session.record().schedule().start_date(),
        review = %session.record().schedule().review_date(),
        dry_run,
        "Assessment started"
    );

    let opener: Box<dyn UriOpener> = if dry_run {
        Box::new(EchoOpener::new(std::io::stdout()))
    } else {
        Box::new(SystemOpener)
    };
    let mut dispatcher = Dispatcher::new(
        config.contacts.clone(),
        config.display.date_format.clone(),
        opener,
    );

    let stdin = std::io::stdin();
    let mut wizard = Wizard::new(stdin.lock(), std::io::stdout());
    match wizard.run(&mut session, &mut dispatcher)? {
        Outcome::Finished => tracing::info!("Assessment finished"),
        Outcome::Aborted => {
            tracing::info!(step = session.current_step().number(), "Assessment aborted")
        }
    }
    Ok(())
}

// =============================================================================
// PREVIEW COMMAND
// =============================================================================

/// Everything the finish step would send, rendered without a terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewReport {
    pub start_date: String,
    pub review_date: String,
    pub summary: String,
    pub messaging_uri: String,
    pub mail_uri: String,
    /// Steps whose requirements the answers do not meet.
    pub incomplete_steps: Vec<Step>,
}

/// Build the preview for `session` under `config`.
pub fn preview_report(config: &AppConfig, session: &Session) -> PreviewReport {
    let record = session.record();
    let dates = &config.display.date_format;
    let incomplete_steps = Step::ALL
        .iter()
        .copied()
        .filter(|step| !step.is_terminal() && !step.can_advance(record))
        .collect();

    PreviewReport {
        start_date: dates.render(record.schedule().start_date()),
        review_date: dates.render(record.schedule().review_date()),
        summary: session.summary(dates),
        messaging_uri: delivery_uri(Channel::Messaging, record, &config.contacts, dates),
        mail_uri: delivery_uri(Channel::Mail, record, &config.contacts, dates),
        incomplete_steps,
    }
}

/// Apply an answers file to a fresh session and print the result.
pub fn cmd_preview(
    config: &AppConfig,
    json_mode: bool,
    input: &Path,
    start: Option<&str>,
) -> Result<(), XconceptError> {
    let patch = load_answers(input)?;
    let mut session = new_session(start)?;
    session.merge(patch);

    let report = preview_report(config, &session);
    if !report.incomplete_steps.is_empty() {
        tracing::warn!(
            count = report.incomplete_steps.len(),
            "Answers leave some steps incomplete"
        );
    }

    if json_mode {
        let output = serde_json::to_string_pretty(&report)
            .map_err(|e| XconceptError::SerializationError(e.to_string()))?;
        println!("{}", output);
        return Ok(());
    }

    println!("{}", report.summary);
    println!();
    println!("Messaging link: {}", report.messaging_uri);
    println!("Mail link:      {}", report.mail_uri);
    if !report.incomplete_steps.is_empty() {
        println!();
        println!("Incomplete steps:");
        for step in &report.incomplete_steps {
            println!("  {}", step);
        }
    }

    Ok(())
}

// =============================================================================
// CONFIG COMMAND
// =============================================================================

/// Print the effective configuration.
pub fn cmd_config(config: &AppConfig, json_mode: bool) -> Result<(), XconceptError> {
    let output = if json_mode {
        serde_json::to_string_pretty(config)
            .map_err(|e| XconceptError::SerializationError(e.to_string()))?
    } else {
        config.to_toml()?
    };
    println!("{}", output);
    Ok(())
}
