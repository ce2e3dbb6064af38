//! Utility functions for the qualification tracker

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new unique tournament session ID
pub fn generate_session_id() -> Uuid {
    Uuid::new_v4()
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}
