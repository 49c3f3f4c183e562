//! Session model.
//!
//! A session is a calendar-dated rehearsal slot. Two sessions may share a
//! date; the planner groups by date in that case. The store also carries a
//! pre-listed set of available actors per session — it is kept on the model
//! for completeness but the engine derives availability from
//! `Actor::availabilities`, never from this field.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A calendar-dated rehearsal slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier (record id in the store).
    pub id: String,
    /// Calendar date of the slot. Grouping key for the planner.
    pub date: NaiveDate,
    /// Actors the store lists as available (actor ids). Informational only.
    pub available_actor_ids: Vec<String>,
}

impl Session {
    /// Creates a new session.
    pub fn new(id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            date,
            available_actor_ids: Vec::new(),
        }
    }

    /// Adds a pre-listed available actor id.
    pub fn with_available_actor(mut self, actor_id: impl Into<String>) -> Self {
        self.available_actor_ids.push(actor_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_session_builder() {
        let s = Session::new("recS1", date("2026-09-01")).with_available_actor("recA1");

        assert_eq!(s.id, "recS1");
        assert_eq!(s.date, date("2026-09-01"));
        assert_eq!(s.available_actor_ids, vec!["recA1"]);
    }
}
