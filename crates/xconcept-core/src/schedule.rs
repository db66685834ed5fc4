//! # Goal Schedule
//!
//! The assessment sets a fixed-length goal: training starts on the day the
//! session is created and the review happens [`REVIEW_DAYS`] later.
//!
//! Both dates are derived once, when the session starts. Nothing in the
//! wizard can edit them afterwards.

use chrono::{Days, Local, NaiveDate};
use serde::Serialize;

/// Days between the start date and the review.
pub const REVIEW_DAYS: u64 = 45;

// =============================================================================
// CLOCK
// =============================================================================

/// Source of "today". Consulted exactly once per session.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local system date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

// =============================================================================
// SCHEDULE
// =============================================================================

/// Start and review dates for the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalSchedule {
    start_date: NaiveDate,
    review_date: NaiveDate,
}

impl GoalSchedule {
    /// Derive the schedule for a goal starting on `start_date`.
    ///
    /// Saturates at `NaiveDate::MAX` instead of overflowing.
    #[must_use]
    pub fn starting(start_date: NaiveDate) -> Self {
        let review_date = start_date
            .checked_add_days(Days::new(REVIEW_DAYS))
            .unwrap_or(NaiveDate::MAX);
        Self {
            start_date,
            review_date,
        }
    }

    /// Derive the schedule from a clock reading.
    #[must_use]
    pub fn from_clock(clock: &impl Clock) -> Self {
        Self::starting(clock.today())
    }

    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[must_use]
    pub const fn review_date(&self) -> NaiveDate {
        self.review_date
    }

    /// Length of the goal in days.
    #[must_use]
    pub const fn goal_days(&self) -> u64 {
        REVIEW_DAYS
    }
}
