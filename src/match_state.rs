//! Transient per-match state
//!
//! Tracks the running goal tally and the remaining time of a stopped match.
//! A positive remaining time marks the result as "pending": the match was
//! interrupted before confirmation, so a result report must only record the
//! goals and must not finalize ratings.

use crate::types::GoalTally;

/// Goal tally and interruption state of the match in progress
#[derive(Debug, Clone, Default)]
pub struct MatchState {
    goals_red: u32,
    goals_blue: u32,
    remaining_time: f32,
}

impl MatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn red_goals(&self) -> u32 {
        self.goals_red
    }

    pub fn blue_goals(&self) -> u32 {
        self.goals_blue
    }

    pub fn goals(&self) -> GoalTally {
        GoalTally::new(self.goals_red, self.goals_blue)
    }

    pub fn remaining_time(&self) -> f32 {
        self.remaining_time
    }

    /// True while an interrupted result still awaits confirmation
    pub fn pending(&self) -> bool {
        self.remaining_time > 0.0
    }

    pub fn init_goals(&mut self, red: u32, blue: u32) {
        self.goals_red = red;
        self.goals_blue = blue;
    }

    pub fn init_remaining_time(&mut self, seconds: f32) {
        self.remaining_time = seconds;
    }

    /// Record a game stop with `seconds` left on the clock
    pub fn game_stopped_at(&mut self, seconds: f32) {
        self.remaining_time += seconds;
    }

    /// Record a resume consuming `seconds` of the stored remaining time
    pub fn game_resumed_at(&mut self, seconds: f32) {
        self.remaining_time -= seconds;
    }

    /// Clear goals and remaining time at the start of a match
    pub fn reset(&mut self) {
        self.goals_red = 0;
        self.goals_blue = 0;
        self.remaining_time = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_not_pending() {
        let state = MatchState::new();
        assert!(!state.pending());
        assert_eq!(state.red_goals(), 0);
        assert_eq!(state.blue_goals(), 0);
    }

    #[test]
    fn test_pending_follows_remaining_time() {
        let mut state = MatchState::new();
        state.game_stopped_at(90.0);
        assert!(state.pending());

        state.game_resumed_at(90.0);
        assert!(!state.pending());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = MatchState::new();
        state.init_goals(2, 3);
        state.init_remaining_time(45.0);
        assert!(state.pending());

        state.reset();
        assert!(!state.pending());
        assert_eq!(state.goals(), GoalTally::new(0, 0));
    }
}
