//! Availability index.
//!
//! Fast lookup structures over the loaded snapshot: actor by id and
//! character by id. Built once per run, never mutated. Construction never
//! fails — a character whose linked actor does not exist simply produces a
//! lookup miss at evaluation time.

use std::collections::HashMap;

use crate::models::{Actor, Character};

/// Id lookup maps over borrowed actor and character collections.
#[derive(Debug)]
pub struct AvailabilityIndex<'a> {
    actors: HashMap<&'a str, &'a Actor>,
    characters: HashMap<&'a str, &'a Character>,
}

impl<'a> AvailabilityIndex<'a> {
    /// Builds the index from full snapshots.
    ///
    /// Duplicate ids keep the last occurrence; duplicates are reported
    /// separately by [`crate::validation::validate_snapshot`].
    pub fn new(actors: &'a [Actor], characters: &'a [Character]) -> Self {
        Self {
            actors: actors.iter().map(|a| (a.id.as_str(), a)).collect(),
            characters: characters.iter().map(|c| (c.id.as_str(), c)).collect(),
        }
    }

    /// Looks up an actor by id.
    #[inline]
    pub fn actor(&self, id: &str) -> Option<&'a Actor> {
        self.actors.get(id).copied()
    }

    /// Looks up a character by id.
    #[inline]
    pub fn character(&self, id: &str) -> Option<&'a Character> {
        self.characters.get(id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_lookup() {
        let actors = vec![Actor::new("recA1").with_name("Alice")];
        let characters = vec![Character::new("recC1").with_actor("recA1")];
        let index = AvailabilityIndex::new(&actors, &characters);

        assert_eq!(index.actor("recA1").unwrap().name, "Alice");
        assert_eq!(
            index.character("recC1").unwrap().actor_id.as_deref(),
            Some("recA1")
        );
    }

    #[test]
    fn test_index_miss() {
        let index = AvailabilityIndex::new(&[], &[]);
        assert!(index.actor("recA1").is_none());
        assert!(index.character("recC1").is_none());
    }

    #[test]
    fn test_index_tolerates_dangling_actor_reference() {
        // Character links an actor that is not in the snapshot.
        let characters = vec![Character::new("recC1").with_actor("recMISSING")];
        let index = AvailabilityIndex::new(&[], &characters);

        let c = index.character("recC1").unwrap();
        assert!(index.actor(c.actor_id.as_deref().unwrap()).is_none());
    }
}
