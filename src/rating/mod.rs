//! Rating bookkeeping for the qualification bracket
//!
//! This module provides the in-memory rating table, the flat ranking-file
//! parser, and the seam to the external rating-update process. The rating
//! formula itself lives entirely in that external process; this crate only
//! feeds it results and reads its output file back.

pub mod engine;
pub mod rankings;
pub mod table;

// Re-export commonly used types
pub use engine::{MatchReport, ProcessRatingEngine, RatingEngine, RecordingRatingEngine};
pub use rankings::read_rankings;
pub use table::{RatingTable, DEFAULT_RATING};
