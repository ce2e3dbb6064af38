//! Team-assignment collaborator seam
//!
//! The host game owns the live peers and applies team labels to them; the
//! tracker only decides who plays on which side. The seam is an injected
//! trait rather than a global host lookup so the tracker can be tested in
//! isolation.

use crate::types::{PlayerId, Team};
use std::collections::HashMap;
use std::sync::RwLock;

/// Collaborator that applies team labels to connected participants
pub trait TeamAssignment: Send + Sync {
    /// Identifiers of all currently connected participants
    fn connected_players(&self) -> Vec<PlayerId>;

    /// Apply `team` to the participant `player_id`
    fn assign_team(&self, player_id: &str, team: Team);
}

/// Recording collaborator for tests and offline tooling: remembers the last
/// team assigned to each of a fixed set of connected players.
#[derive(Debug, Default)]
pub struct RecordingTeamAssignment {
    connected: Vec<PlayerId>,
    assignments: RwLock<HashMap<PlayerId, Team>>,
}

impl RecordingTeamAssignment {
    pub fn new(connected: Vec<PlayerId>) -> Self {
        Self {
            connected,
            assignments: RwLock::new(HashMap::new()),
        }
    }

    /// Last team assigned to `player_id`, if any notification happened
    pub fn assigned_team(&self, player_id: &str) -> Option<Team> {
        self.assignments
            .read()
            .ok()
            .and_then(|a| a.get(player_id).copied())
    }

    /// Total number of players that ever received an assignment
    pub fn assignment_count(&self) -> usize {
        self.assignments.read().map(|a| a.len()).unwrap_or(0)
    }
}

impl TeamAssignment for RecordingTeamAssignment {
    fn connected_players(&self) -> Vec<PlayerId> {
        self.connected.clone()
    }

    fn assign_team(&self, player_id: &str, team: Team) {
        if let Ok(mut assignments) = self.assignments.write() {
            assignments.insert(player_id.to_string(), team);
        }
    }
}
