//! Actor model.
//!
//! An actor is a real performer. Availability is recorded as the set of
//! session ids the actor can attend; the engine derives everything else
//! from this set.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A performer in the production.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Unique actor identifier (record id in the store).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Characters this actor plays (character ids).
    pub characters: Vec<String>,
    /// Sessions this actor can attend (session ids).
    pub availabilities: HashSet<String>,
}

impl Actor {
    /// Creates a new actor with no characters and no availabilities.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            characters: Vec::new(),
            availabilities: HashSet::new(),
        }
    }

    /// Sets the actor name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a character id this actor plays.
    pub fn with_character(mut self, character_id: impl Into<String>) -> Self {
        self.characters.push(character_id.into());
        self
    }

    /// Marks the actor as available for a session.
    pub fn with_availability(mut self, session_id: impl Into<String>) -> Self {
        self.availabilities.insert(session_id.into());
        self
    }

    /// Whether the actor is available for a session.
    #[inline]
    pub fn is_available_for(&self, session_id: &str) -> bool {
        self.availabilities.contains(session_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_builder() {
        let a = Actor::new("recA1")
            .with_name("Alice")
            .with_character("recC1")
            .with_availability("recS1")
            .with_availability("recS2");

        assert_eq!(a.id, "recA1");
        assert_eq!(a.name, "Alice");
        assert_eq!(a.characters, vec!["recC1"]);
        assert!(a.is_available_for("recS1"));
        assert!(a.is_available_for("recS2"));
        assert!(!a.is_available_for("recS3"));
    }

    #[test]
    fn test_actor_no_availabilities() {
        let a = Actor::new("recA1");
        assert!(!a.is_available_for("recS1"));
    }
}
