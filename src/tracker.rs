//! Qualification bracket tracker
//!
//! This module contains the core tracker that owns the roster, the rating
//! table, the current-match cursor and the per-match state, and that drives
//! the team-assignment and rating-update collaborators.
//!
//! Pairing is pure index arithmetic: the roster is partitioned into blocks of
//! `2 * team_size` consecutive players, the first half of a block plays red,
//! the second half blue. Roster mutations, match selection and result
//! finalization all keep the silent-no-op contract towards the host game;
//! anything unexpected is logged instead of raised.

use crate::config::{validate_config, TrackerConfig};
use crate::error::Result;
use crate::match_state::MatchState;
use crate::rating::engine::{side_ratings, MatchReport, RatingEngine};
use crate::rating::rankings::read_rankings;
use crate::rating::table::RatingTable;
use crate::roster::{Roster, SubstitutionMap};
use crate::team::TeamAssignment;
use crate::types::{GoalTally, MatchRecord, MatchSlot, PlayerId, Team};
use crate::utils::{current_timestamp, generate_session_id};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Tracks pairings and ratings for one qualification session
pub struct QualificationTracker {
    config: TrackerConfig,
    session_id: Uuid,
    roster: Roster,
    ratings: RatingTable,
    substitutions: SubstitutionMap,
    current_match: MatchSlot,
    match_state: MatchState,
    history: Vec<MatchRecord>,
    teams: Arc<dyn TeamAssignment>,
    engine: Arc<dyn RatingEngine>,
}

impl QualificationTracker {
    /// Create a tracker for one tournament session.
    ///
    /// The roster is seeded from the configured player list and ratings are
    /// pre-loaded from the ranking file if it exists. Fails only on invalid
    /// configuration (notably a team size other than 1 or 2).
    pub fn new(
        config: TrackerConfig,
        teams: Arc<dyn TeamAssignment>,
        engine: Arc<dyn RatingEngine>,
    ) -> Result<Self> {
        validate_config(&config)?;

        let roster = Roster::from_list(&config.bracket.player_list);
        let mut tracker = Self {
            config,
            session_id: generate_session_id(),
            roster,
            ratings: RatingTable::new(),
            substitutions: SubstitutionMap::new(),
            current_match: MatchSlot::Match(0),
            match_state: MatchState::new(),
            history: Vec::new(),
            teams,
            engine,
        };

        tracker.reload_ratings();
        tracker.notify_teams();
        debug!(
            "Qualification session {} started with {} players",
            tracker.session_id,
            tracker.roster.len()
        );
        Ok(tracker)
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn team_size(&self) -> usize {
        self.config.bracket.team_size
    }

    /// Players in pairing order
    pub fn players(&self) -> &[PlayerId] {
        self.roster.players()
    }

    /// Finalized results of this session, oldest first
    pub fn history(&self) -> &[MatchRecord] {
        &self.history
    }

    pub fn match_state(&self) -> &MatchState {
        &self.match_state
    }

    /// Mutable match state, for the host to record stops and resumes
    pub fn match_state_mut(&mut self) -> &mut MatchState {
        &mut self.match_state
    }

    // ---- roster management -------------------------------------------------

    /// Append `id` to the roster; duplicate ids are ignored. A supplied
    /// rating is stored either way, `None` leaves any existing rating alone.
    pub fn add_player(&mut self, id: &str, rating: Option<i32>) {
        if !self.roster.add(id) {
            debug!("Player {} already on roster", id);
        }
        if let Some(rating) = rating {
            self.ratings.set(id, rating);
        }
        self.notify_teams();
    }

    /// Remove `id` from the roster. The rating table is left untouched so
    /// past results stay attributable.
    pub fn remove_player(&mut self, id: &str) {
        if !self.roster.remove(id) {
            debug!("Cannot remove {}: not on roster", id);
            return;
        }
        self.notify_teams();
    }

    /// Swap `current` for `new` in the same roster slot and record the
    /// substitution for rating attribution. Silent no-op if `current` is not
    /// on the roster or `new` already is.
    pub fn replace_player(&mut self, current: &str, new: &str, rating: Option<i32>) {
        if !self.roster.replace(current, new) {
            debug!("Ignoring replacement {} -> {}", current, new);
            return;
        }
        if let Some(rating) = rating {
            self.ratings.set(new, rating);
        }
        self.substitutions.record(current, new);
        info!("Player {} substitutes for {}", new, current);
        self.notify_teams();
    }

    /// Position of `id` in pairing order
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.roster.index_of(id)
    }

    // ---- partitioning and team assignment ----------------------------------

    fn block_size(&self) -> usize {
        2 * self.team_size()
    }

    /// Number of complete matches the roster currently holds, at least 1
    pub fn match_count(&self) -> usize {
        (self.roster.len() / self.block_size()).max(1)
    }

    pub fn current_match(&self) -> MatchSlot {
        self.current_match
    }

    /// Block the player belongs to, independent of the current cursor
    pub fn match_id_of(&self, id: &str) -> MatchSlot {
        match self.roster.index_of(id) {
            Some(index) => MatchSlot::Match(index / self.block_size()),
            None => MatchSlot::Absent,
        }
    }

    /// Side `id` plays on in the currently selected match
    pub fn team_of(&self, id: &str) -> Team {
        let index = match self.roster.index_of(id) {
            Some(index) => index,
            None => return Team::None,
        };
        if MatchSlot::Match(index / self.block_size()) != self.current_match {
            return Team::None;
        }
        if index % self.block_size() < self.team_size() {
            Team::Red
        } else {
            Team::Blue
        }
    }

    /// True iff `id` is fielded in the currently selected match
    pub fn can_play(&self, id: &str) -> bool {
        self.team_of(id) != Team::None
    }

    /// True iff `id` is not on the roster at all (as opposed to merely not
    /// playing the current match)
    pub fn is_always_spectate(&self, id: &str) -> bool {
        !self.roster.contains(id)
    }

    /// Advance the cursor to the next match, wrapping around the schedule
    pub fn next_match(&mut self) {
        let next = self.current_match.index().map_or(0, |index| index + 1);
        self.set_match(next);
    }

    /// Select match `index` (modulo the schedule length), resetting the
    /// per-match state and pushing fresh team labels to all connected
    /// participants.
    pub fn set_match(&mut self, index: usize) {
        self.match_state.reset();
        self.current_match = MatchSlot::Match(index % self.match_count());
        debug!("Selected {}", self.current_match);
        self.notify_teams();
    }

    /// Stable-sort the roster by descending rating and deselect the current
    /// match until one is explicitly set again.
    pub fn sort_players_by_rating(&mut self) {
        self.roster.sort_by_rating(&self.ratings);
        self.current_match = MatchSlot::NoMatch;
        self.notify_teams();
    }

    fn notify_teams(&self) {
        for id in self.teams.connected_players() {
            self.teams.assign_team(&id, self.team_of(&id));
        }
    }

    // ---- ratings -----------------------------------------------------------

    /// Current rating of `id`, defaulting to 1500 for unrated players
    pub fn rating_of(&self, id: &str) -> i32 {
        self.ratings.get(id)
    }

    /// Report the final goal tally of the current match.
    ///
    /// While the match state is pending (interrupted with time left), the
    /// goals are only recorded for later confirmation. Otherwise the result
    /// is finalized: logged, appended to the history, submitted to the rating
    /// engine, and the ratings reloaded from the ranking file the engine
    /// rewrites.
    pub fn report_result(&mut self, red_goals: u32, blue_goals: u32) {
        if self.match_state.pending() {
            debug!(
                "Match interrupted, holding result {} for confirmation",
                GoalTally::new(red_goals, blue_goals)
            );
            self.match_state.init_goals(red_goals, blue_goals);
            return;
        }
        self.match_state.reset();

        let index = match self.current_match.index() {
            Some(index) => index,
            None => {
                warn!("Dropping result: no match selected");
                return;
            }
        };
        if self.roster.len() < self.block_size() * (index + 1) {
            warn!(
                "Dropping result for match {}: roster has only {} players",
                index,
                self.roster.len()
            );
            return;
        }

        let start = index * self.block_size();
        let players = self.roster.players();
        let red: Vec<PlayerId> = players[start..start + self.team_size()].to_vec();
        let blue: Vec<PlayerId> = players[start + self.team_size()..start + self.block_size()].to_vec();
        let goals = GoalTally::new(red_goals, blue_goals);

        info!(
            "Match result: {} {} {}",
            red.join(" "),
            goals,
            blue.join(" ")
        );
        self.history.push(MatchRecord {
            match_index: index,
            red_side: red.clone(),
            blue_side: blue.clone(),
            goals,
            finished_at: current_timestamp(),
        });

        let report = MatchReport {
            red_side: self.annotate_side(&red),
            blue_side: self.annotate_side(&blue),
            red_ratings: side_ratings(&red, &self.ratings),
            blue_ratings: side_ratings(&blue, &self.ratings),
            goals,
        };
        if let Err(e) = self.engine.submit(&report) {
            warn!("Rating update failed: {:#}", e);
        }
        self.reload_ratings();
    }

    /// Substitution annotation applies in 2vs2 mode only; 1vs1 rankings are
    /// keyed by the players actually listed.
    fn annotate_side(&self, side: &[PlayerId]) -> Vec<String> {
        if self.team_size() == 2 {
            side.iter().map(|p| self.substitutions.annotate(p)).collect()
        } else {
            side.to_vec()
        }
    }

    /// Refresh the rating table from the team-size-specific ranking file.
    /// A missing or unreadable file leaves the current table untouched.
    pub fn reload_ratings(&mut self) {
        let path = self.config.ranking_file();
        if !path.exists() {
            debug!(
                "Ranking file {} not present, keeping current ratings",
                path.display()
            );
            return;
        }
        match read_rankings(path) {
            Ok(updates) => {
                debug!(
                    "Loaded {} ranking entries from {}",
                    updates.len(),
                    path.display()
                );
                self.ratings.merge(updates);
            }
            Err(e) => {
                warn!("Failed to read ranking file {}: {:#}", path.display(), e);
            }
        }
    }
}
