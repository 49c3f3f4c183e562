//! Character model.
//!
//! A character is a role in the production, performed by exactly one actor
//! under the current contract. The store allows several linked actors per
//! character; loading keeps only the first, so `actor_id` is singular here.
//! A character with no linked actor is tolerated — scenes using it are
//! simply never rehearsable.

use serde::{Deserialize, Serialize};

/// A role in the production.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Unique character identifier (record id in the store).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// The actor performing this character, if one is linked.
    pub actor_id: Option<String>,
    /// Scenes this character appears in (scene ids).
    pub scenes: Vec<String>,
}

impl Character {
    /// Creates a new character with no actor and no scenes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            actor_id: None,
            scenes: Vec::new(),
        }
    }

    /// Sets the character name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the performing actor.
    pub fn with_actor(mut self, actor_id: impl Into<String>) -> Self {
        self.actor_id = Some(actor_id.into());
        self
    }

    /// Adds a scene id this character appears in.
    pub fn with_scene(mut self, scene_id: impl Into<String>) -> Self {
        self.scenes.push(scene_id.into());
        self
    }
}
