//! Common types used throughout the qualification tracker

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for tournament participants
pub type PlayerId = String;

/// Side of the pitch a participant plays on in the current match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Red,
    Blue,
    /// Not part of the currently selected match (spectator)
    None,
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::Red => write!(f, "red"),
            Team::Blue => write!(f, "blue"),
            Team::None => write!(f, "none"),
        }
    }
}

/// Position of a player (or the tracker cursor) in the match schedule.
///
/// The roster is partitioned into consecutive blocks of `2 x team_size`
/// players; `Match(n)` is the n-th block. `NoMatch` is the cursor state after
/// a rating resort, before a match has been explicitly selected. `Absent`
/// means the player is not on the roster at all. The two non-match states are
/// distinct variants so they can never compare equal by accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchSlot {
    /// No match is currently selected
    NoMatch,
    /// The player is not on the roster
    Absent,
    /// Block index into the roster partition
    Match(usize),
}

impl MatchSlot {
    /// Block index if this slot refers to an actual match
    pub fn index(&self) -> Option<usize> {
        match self {
            MatchSlot::Match(n) => Some(*n),
            _ => None,
        }
    }
}

impl std::fmt::Display for MatchSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchSlot::NoMatch => write!(f, "no match"),
            MatchSlot::Absent => write!(f, "absent"),
            MatchSlot::Match(n) => write!(f, "match {}", n),
        }
    }
}

/// Final goal count of one match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalTally {
    pub red: u32,
    pub blue: u32,
}

impl GoalTally {
    pub fn new(red: u32, blue: u32) -> Self {
        Self { red, blue }
    }
}

impl std::fmt::Display for GoalTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.red, self.blue)
    }
}

/// A finalized match result kept for reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Block index the result belongs to
    pub match_index: usize,
    pub red_side: Vec<PlayerId>,
    pub blue_side: Vec<PlayerId>,
    pub goals: GoalTally,
    pub finished_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_slot_distinct_sentinels() {
        assert_ne!(MatchSlot::NoMatch, MatchSlot::Absent);
        assert_ne!(MatchSlot::NoMatch, MatchSlot::Match(0));
        assert_eq!(MatchSlot::Match(2), MatchSlot::Match(2));
    }

    #[test]
    fn test_match_slot_index() {
        assert_eq!(MatchSlot::Match(3).index(), Some(3));
        assert_eq!(MatchSlot::NoMatch.index(), None);
        assert_eq!(MatchSlot::Absent.index(), None);
    }

    #[test]
    fn test_goal_tally_display() {
        assert_eq!(GoalTally::new(3, 1).to_string(), "3-1");
    }
}
