//! # Step Sequencer
//!
//! The cursor over [`Step::ALL`]. It knows nothing about the record; gating
//! on step requirements is done by the session before calling [`advance`].
//!
//! [`advance`]: StepSequencer::advance

use crate::step::Step;
use serde::Serialize;

/// Direction of the last move. Used for transition styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Current step plus the direction of the last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StepSequencer {
    current: Step,
    direction: Direction,
}

impl StepSequencer {
    /// A sequencer positioned on the welcome step.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn current(&self) -> Step {
        self.current
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Move one step forward, staying put on the last step.
    ///
    /// Returns `true` if the cursor moved.
    pub fn advance(&mut self) -> bool {
        self.direction = Direction::Forward;
        match self.current.next() {
            Some(next) => {
                self.current = next;
                true
            }
            None => false,
        }
    }

    /// Move one step back. No-op on the first step (direction untouched).
    ///
    /// Returns `true` if the cursor moved.
    pub fn retreat(&mut self) -> bool {
        let Some(previous) = self.current.previous() else {
            return false;
        };
        self.direction = Direction::Backward;
        self.current = previous;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_welcome_moving_forward() {
        let seq = StepSequencer::new();
        assert_eq!(seq.current(), Step::Welcome);
        assert_eq!(seq.direction(), Direction::Forward);
    }

    #[test]
    fn advance_clamps_at_finish() {
        let mut seq = StepSequencer::new();
        for _ in 0..9 {
            assert!(seq.advance());
        }
        assert_eq!(seq.current(), Step::Finish);
        assert!(!seq.advance());
        assert_eq!(seq.current(), Step::Finish);
    }

    #[test]
    fn retreat_noop_on_welcome() {
        let mut seq = StepSequencer::new();
        assert!(!seq.retreat());
        assert_eq!(seq.current(), Step::Welcome);
        assert_eq!(seq.direction(), Direction::Forward);
    }

    #[test]
    fn retreat_sets_backward_direction() {
        let mut seq = StepSequencer::new();
        seq.advance();
        seq.advance();
        assert!(seq.retreat());
        assert_eq!(seq.current(), Step::BasicInfo);
        assert_eq!(seq.direction(), Direction::Backward);

        seq.advance();
        assert_eq!(seq.direction(), Direction::Forward);
    }
}
