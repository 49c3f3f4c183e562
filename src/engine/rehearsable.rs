//! Rehearsability predicate.
//!
//! A scene is rehearsable at a session iff every character appearing in it
//! resolves, through its sole actor, to an actor available at that session.
//! Referential gaps (unknown character, unlinked or unknown actor) fail
//! closed: the scene is judged not rehearsable and a diagnostic is logged,
//! never an error.

use tracing::warn;

use super::AvailabilityIndex;
use crate::models::Scene;

/// Whether `scene` can be rehearsed at the session with id `session_id`.
///
/// Pure apart from diagnostic logging. Short-circuits on the first failing
/// character; character order never affects the result.
pub fn can_rehearse(scene: &Scene, session_id: &str, index: &AvailabilityIndex) -> bool {
    scene.characters.iter().all(|character_id| {
        let Some(character) = index.character(character_id) else {
            warn!(scene = %scene.id, character = %character_id, "character not found");
            return false;
        };
        let Some(actor_id) = character.actor_id.as_deref() else {
            warn!(scene = %scene.id, character = %character_id, "character has no linked actor");
            return false;
        };
        let Some(actor) = index.actor(actor_id) else {
            warn!(scene = %scene.id, character = %character_id, actor = %actor_id, "actor not found");
            return false;
        };
        actor.is_available_for(session_id)
    })
}
