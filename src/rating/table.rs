//! In-memory rating table
//!
//! Ratings are plain integers keyed by player identifier. Reads fall back to
//! the default rating for unknown players; the default is never stored, so a
//! later ranking-file reload can still distinguish "never rated" entries.

use crate::types::PlayerId;
use std::collections::HashMap;

/// Rating assumed for any player absent from the table
pub const DEFAULT_RATING: i32 = 1500;

/// Mapping from player identifier to integer skill rating
#[derive(Debug, Clone, Default)]
pub struct RatingTable {
    ratings: HashMap<PlayerId, i32>,
}

impl RatingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rating of `id`, or [`DEFAULT_RATING`] if never set
    pub fn get(&self, id: &str) -> i32 {
        self.ratings.get(id).copied().unwrap_or(DEFAULT_RATING)
    }

    /// True if `id` has an explicitly stored rating
    pub fn contains(&self, id: &str) -> bool {
        self.ratings.contains_key(id)
    }

    pub fn set(&mut self, id: &str, rating: i32) {
        self.ratings.insert(id.to_string(), rating);
    }

    /// Overwrite entries with freshly parsed ranking-file values
    pub fn merge(&mut self, updates: HashMap<PlayerId, i32>) {
        self.ratings.extend(updates);
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rating_for_unknown_player() {
        let table = RatingTable::new();
        assert_eq!(table.get("nobody"), DEFAULT_RATING);
        assert!(!table.contains("nobody"));
        assert!(table.is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let mut table = RatingTable::new();
        table.set("alice", 1700);
        assert_eq!(table.get("alice"), 1700);
        assert!(table.contains("alice"));
    }

    #[test]
    fn test_merge_overwrites() {
        let mut table = RatingTable::new();
        table.set("alice", 1700);
        table.set("bob", 1400);

        let mut updates = HashMap::new();
        updates.insert("alice".to_string(), 1650);
        updates.insert("carol".to_string(), 1550);
        table.merge(updates);

        assert_eq!(table.get("alice"), 1650);
        assert_eq!(table.get("bob"), 1400);
        assert_eq!(table.get("carol"), 1550);
    }
}
