//! # xconcept-core
//!
//! The logic behind the XCONCEPT physical assessment wizard - THE LOGIC.
//!
//! A session walks a student through ten fixed steps, accumulating answers
//! in a single [`AssessmentRecord`]. At the end the record is rendered into
//! a text summary and handed to a messaging or mail application through a
//! URI.
//!
//! ## Architectural Constraints
//!
//! - Pure and synchronous: no async, no network, no terminal I/O
//! - The clock is injected ([`Clock`]) and read once per session
//! - External applications are reached only through [`UriOpener`]
//! - Nothing is persisted; a session lives as long as its owner

// =============================================================================
// MODULES
// =============================================================================

pub mod aerobics;
pub mod catalog;
pub mod dispatch;
pub mod record;
pub mod schedule;
pub mod sequencer;
pub mod session;
pub mod step;
pub mod summary;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{Frequency, InjuryAnswer, PhotoRef, XconceptError};

// =============================================================================
// RE-EXPORTS: Record & Navigation
// =============================================================================

pub use aerobics::AerobicSelection;
pub use catalog::{AEROBIC_OPTIONS, FOCUS_OPTIONS, FocusOption, NO_AEROBICS, focus_label};
pub use record::{AssessmentRecord, RecordPatch};
pub use schedule::{Clock, FixedClock, GoalSchedule, REVIEW_DAYS, SystemClock};
pub use sequencer::{Direction, StepSequencer};
pub use session::Session;
pub use step::{PROGRESS_STEPS, Progress, Step, TOTAL_STEPS};

// =============================================================================
// RE-EXPORTS: Output
// =============================================================================

pub use dispatch::{
    Channel, Contacts, Dispatcher, MESSAGING_BASE_URL, UriOpener, delivery_uri, mail_uri,
    messaging_uri,
};
pub use summary::{
    DEFAULT_DATE_FORMAT, DateStyle, MAIL_SUBJECT, MESSAGING_GREETING, format_summary,
    messaging_text,
};
