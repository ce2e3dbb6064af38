//! Quali Bracket - qualification pairing and rating bookkeeping
//!
//! This crate tracks the qualification bracket of a tournament session:
//! an ordered roster paired by list position, per-match red/blue sides,
//! integer skill ratings loaded from flat ranking files, and result
//! finalization through an external rating-update process.

pub mod config;
pub mod error;
pub mod match_state;
pub mod rating;
pub mod roster;
pub mod team;
pub mod tracker;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Result, TrackerError};
pub use types::*;

// Re-export key components
pub use config::TrackerConfig;
pub use rating::{ProcessRatingEngine, RatingEngine, RatingTable};
pub use team::TeamAssignment;
pub use tracker::QualificationTracker;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
