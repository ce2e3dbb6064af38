//! Roster and substitution bookkeeping
//!
//! The roster is an ordered, duplicate-free list of participants; list order
//! is the pairing order, so it is never reordered except by an explicit
//! sort-by-rating. The substitution map attributes a stand-in's results back
//! to the original participant they replaced (2vs2 mode only).

use crate::rating::table::RatingTable;
use crate::types::PlayerId;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Ordered list of active tournament participants
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<PlayerId>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from a space-separated player list
    pub fn from_list(list: &str) -> Self {
        Self {
            players: list
                .split(' ')
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    pub fn contains(&self, id: &str) -> bool {
        self.players.iter().any(|p| p == id)
    }

    /// Position of `id` in pairing order
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.players.iter().position(|p| p == id)
    }

    /// Append `id` unless already present; returns whether it was added
    pub fn add(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.players.push(id.to_string());
        true
    }

    /// Remove `id` if present; returns whether it was removed
    pub fn remove(&mut self, id: &str) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.players.remove(index);
                true
            }
            None => false,
        }
    }

    /// Swap `current` for `new` in place, keeping the roster slot.
    /// Fails (returns false) if `current` is absent or `new` already present.
    pub fn replace(&mut self, current: &str, new: &str) -> bool {
        if self.contains(new) {
            return false;
        }
        match self.index_of(current) {
            Some(index) => {
                self.players[index] = new.to_string();
                true
            }
            None => false,
        }
    }

    /// Stable sort, highest rating first. Equal ratings keep their prior
    /// relative order.
    pub fn sort_by_rating(&mut self, ratings: &RatingTable) {
        self.players.sort_by_key(|p| Reverse(ratings.get(p)));
    }
}

/// Maps an active stand-in back to the original participant they replaced.
///
/// Chains collapse to one hop: if the stand-in is later replaced as well, the
/// entry is re-pointed at the newest stand-in, so a key is never also present
/// as another entry's original.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionMap {
    original_by_substitute: HashMap<PlayerId, PlayerId>,
}

impl SubstitutionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `new` now plays in place of `current`
    pub fn record(&mut self, current: &str, new: &str) {
        let original = self
            .original_by_substitute
            .remove(current)
            .unwrap_or_else(|| current.to_string());
        self.original_by_substitute.insert(new.to_string(), original);
    }

    /// Original participant behind `id`, if `id` is a stand-in
    pub fn original_of(&self, id: &str) -> Option<&PlayerId> {
        self.original_by_substitute.get(id)
    }

    /// Roster entry annotated for rating attribution: `original#substitute`
    /// when `id` is a stand-in, otherwise `id` itself.
    pub fn annotate(&self, id: &str) -> String {
        match self.original_of(id) {
            Some(original) => format!("{}#{}", original, id),
            None => id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(ids: &[&str]) -> Roster {
        let mut r = Roster::new();
        for id in ids {
            r.add(id);
        }
        r
    }

    #[test]
    fn test_from_list_splits_on_spaces() {
        let r = Roster::from_list("alice bob  carol");
        assert_eq!(r.players(), ["alice", "bob", "carol"]);
    }

    #[test]
    fn test_add_is_idempotent_on_id() {
        let mut r = roster(&["alice", "bob"]);
        assert!(!r.add("alice"));
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut r = roster(&["alice", "bob", "carol"]);
        assert!(r.remove("bob"));
        assert_eq!(r.players(), ["alice", "carol"]);
        assert!(!r.remove("bob"));
    }

    #[test]
    fn test_replace_keeps_slot() {
        let mut r = roster(&["alice", "bob", "carol"]);
        assert!(r.replace("bob", "dave"));
        assert_eq!(r.players(), ["alice", "dave", "carol"]);
    }

    #[test]
    fn test_replace_rejects_existing_target() {
        let mut r = roster(&["alice", "bob"]);
        assert!(!r.replace("alice", "bob"));
        assert_eq!(r.players(), ["alice", "bob"]);
        assert!(!r.replace("ghost", "dave"));
    }

    #[test]
    fn test_sort_by_rating_is_stable() {
        let mut ratings = RatingTable::new();
        ratings.set("alice", 1600);
        ratings.set("carol", 1700);
        // bob and dave stay at the 1500 default and keep their relative order
        let mut r = roster(&["alice", "bob", "carol", "dave"]);
        r.sort_by_rating(&ratings);
        assert_eq!(r.players(), ["carol", "alice", "bob", "dave"]);
    }

    #[test]
    fn test_substitution_chain_collapses_to_one_hop() {
        let mut subs = SubstitutionMap::new();
        subs.record("alice", "bob");
        subs.record("bob", "carol");

        assert_eq!(subs.original_of("carol"), Some(&"alice".to_string()));
        assert_eq!(subs.original_of("bob"), None);
        assert_eq!(subs.annotate("carol"), "alice#carol");
        assert_eq!(subs.annotate("dave"), "dave");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn sort_by_rating_is_descending(ratings_in in proptest::collection::vec(1000..2000i32, 1..12)) {
                let mut table = RatingTable::new();
                let mut r = Roster::new();
                for (i, rating) in ratings_in.iter().enumerate() {
                    let id = format!("p{}", i);
                    table.set(&id, *rating);
                    r.add(&id);
                }

                r.sort_by_rating(&table);
                let sorted: Vec<i32> = r.players().iter().map(|p| table.get(p)).collect();
                prop_assert!(sorted.windows(2).all(|w| w[0] >= w[1]));
            }

            #[test]
            fn substitution_keys_never_appear_as_originals(
                steps in proptest::collection::vec((0..6usize, 6..12usize), 0..10)
            ) {
                let mut subs = SubstitutionMap::new();
                for (current, new) in steps {
                    subs.record(&format!("p{}", current), &format!("p{}", new));
                }
                for original in subs.original_by_substitute.values() {
                    prop_assert!(subs.original_of(original).is_none());
                }
            }
        }
    }
}
