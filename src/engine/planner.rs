//! Session planner.
//!
//! # Algorithm
//!
//! 1. Process sessions in ascending date order (stable: load order is kept
//!    within a date).
//! 2. Compute the rehearsable scene set once per calendar date; every
//!    session sharing that date reuses it.
//! 3. Per session, partition the actors available for it into needed
//!    (required by a rehearsable scene) and not-needed.
//! 4. Emit a [`Plan`] only when the session's scene set is non-empty.
//!
//! # Complexity
//! O(d * g * c) for the per-date scene sets plus O(s * g * c) for the
//! per-session partitions, where d=dates, s=sessions, g=scenes,
//! c=characters/scene.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;

use super::{can_rehearse, AvailabilityIndex};
use crate::models::{Actor, Character, Plan, Scene, Session};

/// Deterministic single-pass planner over a loaded snapshot.
#[derive(Debug, Clone, Default)]
pub struct SessionPlanner;

impl SessionPlanner {
    /// Creates a new planner.
    pub fn new() -> Self {
        Self
    }

    /// Plans all sessions, returning one [`Plan`] per session with at least
    /// one rehearsable scene.
    ///
    /// Sessions are processed in ascending date order regardless of input
    /// order; input order is preserved among sessions sharing a date. Scene
    /// ids inside a plan keep the input scene order.
    pub fn plan_all(
        &self,
        sessions: &[Session],
        scenes: &[Scene],
        characters: &[Character],
        actors: &[Actor],
    ) -> Vec<Plan> {
        let index = AvailabilityIndex::new(actors, characters);

        let mut order: Vec<usize> = (0..sessions.len()).collect();
        order.sort_by_key(|&i| sessions[i].date);

        // Rehearsable scene indices per calendar date, computed at the first
        // session of each date and shared by the rest.
        let mut scenes_by_date: HashMap<NaiveDate, Vec<usize>> = HashMap::new();
        let mut plans = Vec::new();

        for &i in &order {
            let session = &sessions[i];
            let scene_indices = scenes_by_date
                .entry(session.date)
                .or_insert_with(|| {
                    scenes
                        .iter()
                        .enumerate()
                        .filter(|(_, scene)| can_rehearse(scene, &session.id, &index))
                        .map(|(idx, _)| idx)
                        .collect()
                })
                .clone();

            if scene_indices.is_empty() {
                continue;
            }

            let available: BTreeSet<String> = actors
                .iter()
                .filter(|a| a.is_available_for(&session.id))
                .map(|a| a.id.clone())
                .collect();

            // A scene from the shared date set only pins actors for sessions
            // where it is itself rehearsable; this keeps needed within the
            // session's available set even when sessions share a date.
            let mut needed: BTreeSet<String> = BTreeSet::new();
            for &idx in &scene_indices {
                let scene = &scenes[idx];
                if !can_rehearse(scene, &session.id, &index) {
                    continue;
                }
                for character_id in &scene.characters {
                    if let Some(actor_id) = index
                        .character(character_id)
                        .and_then(|c| c.actor_id.as_deref())
                    {
                        needed.insert(actor_id.to_string());
                    }
                }
            }

            let not_needed: BTreeSet<String> = available.difference(&needed).cloned().collect();
            let scene_ids: Vec<String> =
                scene_indices.iter().map(|&idx| scenes[idx].id.clone()).collect();

            plans.push(Plan::new(session.id.clone(), scene_ids, needed, not_needed));
        }

        plans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    /// One actor, one character, one scene, one session where everyone fits.
    fn minimal_snapshot() -> (Vec<Session>, Vec<Scene>, Vec<Character>, Vec<Actor>) {
        let sessions = vec![Session::new("recS1", date("2026-09-01"))];
        let scenes = vec![Scene::new("recG1", 1).with_character("recC1")];
        let characters = vec![Character::new("recC1").with_actor("recA1")];
        let actors = vec![Actor::new("recA1").with_availability("recS1")];
        (sessions, scenes, characters, actors)
    }

    #[test]
    fn test_single_session_single_scene() {
        // Scenario A: the scene is planned, its actor is needed, nobody idles.
        let (sessions, scenes, characters, actors) = minimal_snapshot();
        let plans = SessionPlanner::new().plan_all(&sessions, &scenes, &characters, &actors);

        assert_eq!(plans.len(), 1);
        let p = &plans[0];
        assert_eq!(p.session_id, "recS1");
        assert_eq!(p.scene_ids, vec!["recG1"]);
        assert_eq!(p.needed_actor_ids, BTreeSet::from(["recA1".to_string()]));
        assert!(p.not_needed_actor_ids.is_empty());
    }

    #[test]
    fn test_unavailable_actor_excludes_scene() {
        // Scenario B: the only scene needs an unavailable actor → no plan.
        let sessions = vec![Session::new("recS2", date("2026-09-02"))];
        let scenes = vec![Scene::new("recG2", 1).with_character("recC2")];
        let characters = vec![Character::new("recC2").with_actor("recA2")];
        let actors = vec![Actor::new("recA2").with_availability("recS1")];

        let plans = SessionPlanner::new().plan_all(&sessions, &scenes, &characters, &actors);
        assert!(plans.is_empty());
    }

    #[test]
    fn test_available_but_unneeded_actor() {
        // Scenario C: recA3 attends but plays in no rehearsable scene.
        let sessions = vec![Session::new("recS3", date("2026-09-03"))];
        let scenes = vec![Scene::new("recG1", 1).with_character("recC1")];
        let characters = vec![
            Character::new("recC1").with_actor("recA1"),
            Character::new("recC3").with_actor("recA3"),
        ];
        let actors = vec![
            Actor::new("recA1").with_availability("recS3"),
            Actor::new("recA3").with_availability("recS3"),
        ];

        let plans = SessionPlanner::new().plan_all(&sessions, &scenes, &characters, &actors);
        assert_eq!(plans.len(), 1);
        assert!(plans[0].needed_actor_ids.contains("recA1"));
        assert!(plans[0].not_needed_actor_ids.contains("recA3"));
    }

    #[test]
    fn test_shared_date_sessions_share_scenes() {
        // Scenario D: two sessions on one date share the scene set computed
        // at the first session of that date.
        let sessions = vec![
            Session::new("recS1", date("2026-09-01")),
            Session::new("recS2", date("2026-09-01")),
        ];
        let scenes = vec![Scene::new("recG1", 1).with_character("recC1")];
        let characters = vec![Character::new("recC1").with_actor("recA1")];
        let actors = vec![
            Actor::new("recA1")
                .with_availability("recS1")
                .with_availability("recS2"),
        ];

        let plans = SessionPlanner::new().plan_all(&sessions, &scenes, &characters, &actors);
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].scene_ids, vec!["recG1"]);
        assert_eq!(plans[1].scene_ids, vec!["recG1"]);
        assert_eq!(plans[0].needed_actor_ids, plans[1].needed_actor_ids);
    }

    #[test]
    fn test_needed_stays_within_available_on_shared_date() {
        // recA1 attends only the first of two same-date sessions. The scene
        // set is shared, but the second session must not claim recA1.
        let sessions = vec![
            Session::new("recS1", date("2026-09-01")),
            Session::new("recS2", date("2026-09-01")),
        ];
        let scenes = vec![Scene::new("recG1", 1).with_character("recC1")];
        let characters = vec![Character::new("recC1").with_actor("recA1")];
        let actors = vec![Actor::new("recA1").with_availability("recS1")];

        let plans = SessionPlanner::new().plan_all(&sessions, &scenes, &characters, &actors);
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[1].session_id, "recS2");
        assert!(plans[1].needed_actor_ids.is_empty());
        assert!(plans[1].not_needed_actor_ids.is_empty());
    }

    #[test]
    fn test_sessions_processed_in_date_order() {
        let sessions = vec![
            Session::new("recS2", date("2026-09-05")),
            Session::new("recS1", date("2026-09-01")),
        ];
        let scenes = vec![Scene::new("recG1", 1).with_character("recC1")];
        let characters = vec![Character::new("recC1").with_actor("recA1")];
        let actors = vec![
            Actor::new("recA1")
                .with_availability("recS1")
                .with_availability("recS2"),
        ];

        let plans = SessionPlanner::new().plan_all(&sessions, &scenes, &characters, &actors);
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].session_id, "recS1");
        assert_eq!(plans[1].session_id, "recS2");
    }

    #[test]
    fn test_scene_order_preserved() {
        let sessions = vec![Session::new("recS1", date("2026-09-01"))];
        let scenes = vec![
            Scene::new("recG2", 2).with_character("recC1"),
            Scene::new("recG1", 1).with_character("recC1"),
        ];
        let characters = vec![Character::new("recC1").with_actor("recA1")];
        let actors = vec![Actor::new("recA1").with_availability("recS1")];

        let plans = SessionPlanner::new().plan_all(&sessions, &scenes, &characters, &actors);
        // Input scene order, not id or number order.
        assert_eq!(plans[0].scene_ids, vec!["recG2", "recG1"]);
    }

    #[test]
    fn test_partition_properties() {
        // needed ∩ not-needed = ∅ and needed ∪ not-needed = available,
        // on a snapshot with mixed availabilities.
        let sessions = vec![
            Session::new("recS1", date("2026-09-01")),
            Session::new("recS2", date("2026-09-02")),
        ];
        let scenes = vec![
            Scene::new("recG1", 1).with_character("recC1"),
            Scene::new("recG2", 2)
                .with_character("recC1")
                .with_character("recC2"),
        ];
        let characters = vec![
            Character::new("recC1").with_actor("recA1"),
            Character::new("recC2").with_actor("recA2"),
        ];
        let actors = vec![
            Actor::new("recA1")
                .with_availability("recS1")
                .with_availability("recS2"),
            Actor::new("recA2").with_availability("recS1"),
            Actor::new("recA3").with_availability("recS2"),
        ];

        let plans = SessionPlanner::new().plan_all(&sessions, &scenes, &characters, &actors);
        for plan in &plans {
            let available: BTreeSet<String> = actors
                .iter()
                .filter(|a| a.is_available_for(&plan.session_id))
                .map(|a| a.id.clone())
                .collect();
            assert!(plan.needed_actor_ids.is_disjoint(&plan.not_needed_actor_ids));
            let union: BTreeSet<String> = plan
                .needed_actor_ids
                .union(&plan.not_needed_actor_ids)
                .cloned()
                .collect();
            assert_eq!(union, available);
        }
    }

    #[test]
    fn test_idempotent_over_unchanged_snapshot() {
        let (sessions, scenes, characters, actors) = minimal_snapshot();
        let planner = SessionPlanner::new();
        let first = planner.plan_all(&sessions, &scenes, &characters, &actors);
        let second = planner.plan_all(&sessions, &scenes, &characters, &actors);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_snapshot() {
        let plans = SessionPlanner::new().plan_all(&[], &[], &[], &[]);
        assert!(plans.is_empty());
    }
}
