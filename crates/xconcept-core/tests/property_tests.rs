//! # Property-Based Tests
//!
//! Invariants of navigation, aerobic selection and the goal schedule,
//! checked with proptest.

use chrono::NaiveDate;
use proptest::collection::vec;
use proptest::prelude::*;
use xconcept_core::{
    AEROBIC_OPTIONS, AerobicSelection, GoalSchedule, NO_AEROBICS, REVIEW_DAYS, Session, Step,
    TOTAL_STEPS,
};

/// Navigation commands applied to a session.
#[derive(Debug, Clone, Copy)]
enum Nav {
    Advance,
    Retreat,
}

fn nav() -> impl Strategy<Value = Nav> {
    prop_oneof![Just(Nav::Advance), Just(Nav::Retreat)]
}

fn aerobic_label() -> impl Strategy<Value = &'static str> {
    prop::sample::select(AEROBIC_OPTIONS.to_vec())
}

fn start_date() -> impl Strategy<Value = NaiveDate> {
    (1970i32..2200, 1u32..=365).prop_map(|(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal).unwrap_or(NaiveDate::MIN)
    })
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// The cursor never leaves [1, 10] whatever the navigation sequence.
    #[test]
    fn cursor_stays_in_bounds(commands in vec(nav(), 0..60)) {
        let mut session = Session::starting_on(NaiveDate::MIN);

        for command in commands {
            match command {
                Nav::Advance => { session.advance(); }
                Nav::Retreat => { session.retreat(); }
            }
            let number = session.current_step().number();
            prop_assert!((1..=TOTAL_STEPS).contains(&number));
        }
    }

    /// Navigation alone never changes the record.
    #[test]
    fn navigation_never_mutates_record(commands in vec(nav(), 0..60)) {
        let mut session = Session::starting_on(NaiveDate::MIN);
        let before = session.record().clone();

        for command in commands {
            match command {
                Nav::Advance => { session.advance(); }
                Nav::Retreat => { session.retreat(); }
            }
        }

        prop_assert_eq!(session.record(), &before);
        // With an empty record the basic info step blocks everything after it.
        prop_assert!(session.current_step() <= Step::BasicInfo);
    }

    /// Toggling never leaves the sentinel next to another label.
    #[test]
    fn sentinel_never_coexists(clicks in vec(aerobic_label(), 0..40)) {
        let mut selection = AerobicSelection::new();
        for label in clicks {
            selection.toggle(label);
            if selection.declined() {
                prop_assert_eq!(selection.len(), 1);
            }
        }
    }

    /// Clicking the sentinel always yields exactly {sentinel}.
    #[test]
    fn sentinel_click_yields_singleton(clicks in vec(aerobic_label(), 0..20)) {
        let mut selection = AerobicSelection::from_labels(clicks);
        selection.toggle(NO_AEROBICS);
        let expected = [NO_AEROBICS.to_string()];
        prop_assert_eq!(selection.labels(), expected.as_slice());
    }

    /// Clicking a present label removes only that label.
    #[test]
    fn toggle_removes_only_clicked(clicks in vec(aerobic_label(), 1..20), pick in any::<prop::sample::Index>()) {
        let selection = AerobicSelection::from_labels(clicks);
        let target = pick.get(selection.labels()).clone();
        prop_assume!(target != NO_AEROBICS);
        let next = selection.toggled(&target);

        let expected: Vec<String> = selection
            .labels()
            .iter()
            .filter(|l| **l != target)
            .cloned()
            .collect();
        prop_assert_eq!(next.labels(), expected.as_slice());
    }

    /// Review date is always start + REVIEW_DAYS.
    #[test]
    fn review_is_fixed_offset(start in start_date()) {
        let schedule = GoalSchedule::starting(start);
        let days = schedule.review_date().signed_duration_since(schedule.start_date()).num_days();
        prop_assert_eq!(days, REVIEW_DAYS as i64);

        let session = Session::starting_on(start);
        prop_assert_eq!(session.record().schedule(), &schedule);
    }
}
