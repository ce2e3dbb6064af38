//! Error types for the qualification tracker
//!
//! This module defines all error types using anyhow for consistent error
//! handling throughout the crate. Roster and result bookkeeping keeps its
//! silent no-op contract towards the host game; these errors surface only
//! from construction, configuration and the I/O plumbing.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific tracker scenarios
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Unsupported team size: {team_size} (only 1 and 2 are supported)")]
    UnsupportedTeamSize { team_size: usize },

    #[error("Ranking file unreadable: {path}: {message}")]
    RankingFileUnreadable { path: String, message: String },

    #[error("Rating update process failed: {message}")]
    RatingProcessFailed { message: String },
}
