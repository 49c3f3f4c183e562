//! Plan (output) model.
//!
//! A plan is the engine's result for one session: the scenes that can be
//! rehearsed plus the needed / not-needed partition of the session's
//! available actors. Plans are only produced for sessions with at least one
//! rehearsable scene.
//!
//! # Invariants
//!
//! - `needed_actor_ids` and `not_needed_actor_ids` are disjoint.
//! - Both are subsets of the actors available for the session, and their
//!   union covers that set.
//! - `scene_ids` preserves the input scene order (script order).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The planning result for one session.
///
/// Actor id sets are ordered so repeated runs over an unchanged snapshot
/// serialize identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Session this plan is for.
    pub session_id: String,
    /// Rehearsable scenes, in input scene order.
    pub scene_ids: Vec<String>,
    /// Actors required by at least one rehearsable scene.
    pub needed_actor_ids: BTreeSet<String>,
    /// Actors available for the session but required by no rehearsable scene.
    pub not_needed_actor_ids: BTreeSet<String>,
}

impl Plan {
    /// Creates a plan for a session.
    pub fn new(
        session_id: impl Into<String>,
        scene_ids: Vec<String>,
        needed_actor_ids: BTreeSet<String>,
        not_needed_actor_ids: BTreeSet<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            scene_ids,
            needed_actor_ids,
            not_needed_actor_ids,
        }
    }
}
