//! # Session Module
//!
//! The wizard controller: one record plus one step cursor.
//!
//! A `Session` is created when the wizard starts and dropped when it ends.
//! Nothing is persisted. Step handlers get `&mut Session`, so only one of
//! them can touch the record at a time.
//!
//! ## Navigation rules
//!
//! - `advance` moves forward only when the current step's requirements hold;
//!   otherwise nothing changes.
//! - `retreat` moves back without touching the record.

use crate::record::{AssessmentRecord, RecordPatch};
use crate::schedule::{Clock, GoalSchedule};
use crate::sequencer::{Direction, StepSequencer};
use crate::step::Step;
use crate::summary::{DateStyle, format_summary};
use chrono::NaiveDate;

/// Record and cursor for one run of the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    record: AssessmentRecord,
    sequencer: StepSequencer,
}

impl Session {
    /// Start a session, reading the clock once to fix the goal dates.
    #[must_use]
    pub fn new(clock: &impl Clock) -> Self {
        Self::with_schedule(GoalSchedule::from_clock(clock))
    }

    /// Start a session whose goal begins on `start_date`.
    #[must_use]
    pub fn starting_on(start_date: NaiveDate) -> Self {
        Self::with_schedule(GoalSchedule::starting(start_date))
    }

    fn with_schedule(schedule: GoalSchedule) -> Self {
        Self {
            record: AssessmentRecord::new(schedule),
            sequencer: StepSequencer::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Record
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn record(&self) -> &AssessmentRecord {
        &self.record
    }

    /// Shallow-merge `patch` into the record. No validation.
    pub fn merge(&mut self, patch: RecordPatch) {
        self.record.merge(patch);
    }

    /// Click an aerobic option, applying the exclusive-option rule.
    pub fn toggle_aerobic(&mut self, label: &str) {
        let aerobics = self.record.aerobics.toggled(label);
        self.merge(RecordPatch {
            aerobics: Some(aerobics),
            ..RecordPatch::default()
        });
    }

    /// Render the summary for the current record.
    #[must_use]
    pub fn summary(&self, dates: &DateStyle) -> String {
        format_summary(&self.record, dates)
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn current_step(&self) -> Step {
        self.sequencer.current()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.sequencer.direction()
    }

    /// Whether the continue action is enabled on the current step.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.current_step().can_advance(&self.record)
    }

    /// Continue to the next step if the current one is satisfied.
    ///
    /// Returns `true` if the cursor moved. A refused advance leaves the
    /// cursor, the direction and the record exactly as they were.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.sequencer.advance()
    }

    /// Go back one step. No-op on the welcome step.
    pub fn retreat(&mut self) -> bool {
        self.sequencer.retreat()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NO_AEROBICS;
    use crate::schedule::FixedClock;
    use crate::types::{Frequency, InjuryAnswer};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn session() -> Session {
        Session::new(&FixedClock(date(2026, 10, 18)))
    }

    fn basic_info() -> RecordPatch {
        RecordPatch {
            name: Some("Ana".into()),
            age: Some("30".into()),
            height: Some("165".into()),
            weight: Some("60".into()),
            ..RecordPatch::default()
        }
    }

    #[test]
    fn new_session_derives_review_date() {
        let s = session();
        assert_eq!(s.current_step(), Step::Welcome);
        assert_eq!(s.record().schedule().start_date(), date(2026, 10, 18));
        assert_eq!(s.record().schedule().review_date(), date(2026, 12, 2));
    }

    #[test]
    fn blocked_advance_changes_nothing() {
        let mut s = session();
        assert!(s.advance());
        assert_eq!(s.current_step(), Step::BasicInfo);

        let before = s.clone();
        assert!(!s.advance());
        assert_eq!(s, before);
    }

    #[test]
    fn walk_through_all_steps() {
        let mut s = session();
        assert!(s.advance()); // welcome

        s.merge(basic_info());
        assert!(s.advance());
        assert!(s.advance()); // photos
        assert!(s.advance()); // measurements

        s.merge(RecordPatch {
            frequency: Some(Frequency::FiveOrMore),
            ..RecordPatch::default()
        });
        assert!(s.advance());

        s.toggle_aerobic("Corrida");
        assert!(s.advance());

        s.merge(RecordPatch {
            focus_body_part: Some("gluteos".into()),
            focus_notes: Some("Mais força".into()),
            ..RecordPatch::default()
        });
        assert!(s.advance());

        s.merge(RecordPatch {
            has_injuries: Some(InjuryAnswer::No),
            ..RecordPatch::default()
        });
        assert!(s.advance());
        assert_eq!(s.current_step(), Step::Goal);
        assert!(s.advance());
        assert_eq!(s.current_step(), Step::Finish);

        assert!(!s.can_advance());
        assert!(!s.advance());
        assert_eq!(s.current_step(), Step::Finish);
    }

    #[test]
    fn retreat_keeps_answers() {
        let mut s = session();
        s.advance();
        s.merge(basic_info());
        s.advance();
        let record_before = s.record().clone();

        assert!(s.retreat());
        assert_eq!(s.current_step(), Step::BasicInfo);
        assert_eq!(s.direction(), Direction::Backward);
        assert_eq!(s.record(), &record_before);
    }

    #[test]
    fn retreat_on_welcome_is_noop() {
        let mut s = session();
        assert!(!s.retreat());
        assert_eq!(s.current_step(), Step::Welcome);
    }

    #[test]
    fn toggle_aerobic_goes_through_merge() {
        let mut s = session();
        s.toggle_aerobic("Corrida");
        s.toggle_aerobic("Natação");
        s.toggle_aerobic(NO_AEROBICS);
        assert_eq!(s.record().aerobics.labels(), [NO_AEROBICS.to_string()]);
    }

    #[test]
    fn injury_no_keeps_stale_details() {
        let mut s = session();
        s.merge(RecordPatch {
            has_injuries: Some(InjuryAnswer::Yes),
            injury_location: Some("Ombro".into()),
            ..RecordPatch::default()
        });
        s.merge(RecordPatch {
            has_injuries: Some(InjuryAnswer::No),
            ..RecordPatch::default()
        });
        assert_eq!(s.record().injury_location, "Ombro");
        assert!(!s.summary(&DateStyle::default()).contains("Local: Ombro"));
    }
}
