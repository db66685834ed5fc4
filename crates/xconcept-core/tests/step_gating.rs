//! # Step Gating Tests (G0-G3)
//!
//! If ANY tier fails, the wizard can lose or invent answers.
//!
//! ## Tiers
//! - G0: Blocked steps change nothing
//! - G1: Satisfied steps move exactly one step
//! - G2: Backward navigation preserves answers
//! - G3: Summary content after a full run

use chrono::NaiveDate;
use xconcept_core::{
    DateStyle, Frequency, InjuryAnswer, RecordPatch, Session, Step, format_summary,
};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date")
}

/// Patch that satisfies every gated step.
fn complete_answers() -> RecordPatch {
    RecordPatch {
        name: Some("Ana".into()),
        age: Some("30".into()),
        height: Some("165".into()),
        weight: Some("62".into()),
        frequency: Some(Frequency::ThreePerWeek),
        focus_body_part: Some("abdomen".into()),
        focus_notes: Some("Quero mais definição".into()),
        has_injuries: Some(InjuryAnswer::No),
        ..RecordPatch::default()
    }
}

/// Advance until `target` with a fully answered record.
fn session_at(target: Step) -> Session {
    let mut session = Session::starting_on(start());
    session.merge(complete_answers());
    while session.current_step() < target {
        assert!(session.advance(), "stuck on {}", session.current_step());
    }
    session
}

// =============================================================================
// TIER G0: BLOCKED STEPS CHANGE NOTHING
// =============================================================================

mod g0_blocked {
    use super::*;

    /// G0.1: Each gated step refuses to advance on an empty record.
    #[test]
    fn gated_steps_refuse_empty_record() {
        for step in [Step::BasicInfo, Step::Frequency, Step::Focus, Step::Injuries] {
            let mut session = session_at(step);
            // Wipe this step's answers and check the refusal.
            session.merge(RecordPatch {
                name: Some(String::new()),
                frequency: Some(Frequency::Unset),
                focus_notes: Some(String::new()),
                has_injuries: Some(InjuryAnswer::Unanswered),
                ..RecordPatch::default()
            });

            let before = session.clone();
            assert!(!session.advance(), "{step} advanced without answers");
            assert_eq!(session, before);
        }
    }

    /// G0.2: Finish is terminal.
    #[test]
    fn finish_never_advances() {
        let mut session = session_at(Step::Finish);
        let before = session.clone();
        assert!(!session.advance());
        assert_eq!(session, before);
    }

    /// G0.3: Non-numeric text passes presence checks.
    #[test]
    fn non_numeric_age_accepted() {
        let mut session = session_at(Step::BasicInfo);
        session.merge(RecordPatch {
            age: Some("trinta".into()),
            ..RecordPatch::default()
        });
        assert!(session.advance());
    }
}

// =============================================================================
// TIER G1: SATISFIED STEPS MOVE EXACTLY ONE STEP
// =============================================================================

mod g1_advance {
    use super::*;

    /// G1.1: Steps 2-9 advance by exactly one.
    #[test]
    fn each_step_advances_by_one() {
        for number in 2..=9u8 {
            let step = Step::from_number(number).expect("step");
            let mut session = session_at(step);
            assert!(session.advance());
            assert_eq!(session.current_step().number(), number + 1);
        }
    }

    /// G1.2: Photos are never required.
    #[test]
    fn photos_optional() {
        let mut session = session_at(Step::Photos);
        assert_eq!(session.record().photo_count(), 0);
        assert!(session.advance());
    }

    /// G1.3: Injury details are optional after "yes".
    #[test]
    fn injury_details_optional() {
        let mut session = session_at(Step::Injuries);
        session.merge(RecordPatch {
            has_injuries: Some(InjuryAnswer::Yes),
            ..RecordPatch::default()
        });
        assert!(session.advance());
        assert_eq!(session.current_step(), Step::Goal);
    }
}

// =============================================================================
// TIER G2: BACKWARD NAVIGATION PRESERVES ANSWERS
// =============================================================================

mod g2_retreat {
    use super::*;

    /// G2.1: Retreating from s+1 lands on s with the record intact.
    #[test]
    fn retreat_returns_to_previous_step() {
        for number in 2..=9u8 {
            let step = Step::from_number(number).expect("step");
            let mut session = session_at(step);
            session.advance();
            let record = session.record().clone();

            assert!(session.retreat());
            assert_eq!(session.current_step(), step);
            assert_eq!(session.record(), &record);
        }
    }

    /// G2.2: Walking back to welcome keeps every answer.
    #[test]
    fn retreat_to_welcome_keeps_answers() {
        let mut session = session_at(Step::Goal);
        let record = session.record().clone();

        while session.retreat() {}

        assert_eq!(session.current_step(), Step::Welcome);
        assert_eq!(session.record(), &record);
    }
}

// =============================================================================
// TIER G3: SUMMARY CONTENT
// =============================================================================

mod g3_summary {
    use super::*;

    /// G3.1: Dates in the summary come from the session start.
    #[test]
    fn summary_carries_goal_dates() {
        let session = session_at(Step::Finish);
        let text = format_summary(session.record(), &DateStyle::default());
        assert!(text.contains("Início: 18/10/2026"));
        assert!(text.contains("Reavaliação: 02/12/2026"));
        assert!(text.contains("*Meta:* 45 Dias"));
    }

    /// G3.2: Injury lines follow the current answer.
    #[test]
    fn injury_lines_follow_answer() {
        let mut session = session_at(Step::Injuries);
        session.merge(RecordPatch {
            has_injuries: Some(InjuryAnswer::Yes),
            injury_location: Some("Joelho".into()),
            injury_restriction: Some("Agachamento".into()),
            ..RecordPatch::default()
        });
        let text = session.summary(&DateStyle::default());
        assert!(text.contains("Local: Joelho"));
        assert!(text.contains("Restrição: Agachamento"));

        session.merge(RecordPatch {
            has_injuries: Some(InjuryAnswer::No),
            ..RecordPatch::default()
        });
        let text = session.summary(&DateStyle::default());
        assert!(!text.contains("Local: Joelho"));
        assert!(!text.contains("Restrição: Agachamento"));
        assert!(text.contains("*Lesões:* NÃO"));
    }
}
