//! Scene model.
//!
//! A scene is the rehearsable unit: rehearsing it requires every listed
//! character, hence every actor behind those characters. `number` is the
//! script ordering key; the store returns scenes sorted by it and the
//! matching logic itself never consults it.

use serde::{Deserialize, Serialize};

/// A rehearsable unit of the production.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Unique scene identifier (record id in the store).
    pub id: String,
    /// Ordering key within the script.
    pub number: i64,
    /// Characters appearing in this scene (character ids).
    pub characters: Vec<String>,
}

impl Scene {
    /// Creates a new scene with no characters.
    pub fn new(id: impl Into<String>, number: i64) -> Self {
        Self {
            id: id.into(),
            number,
            characters: Vec::new(),
        }
    }

    /// Adds a character id appearing in this scene.
    pub fn with_character(mut self, character_id: impl Into<String>) -> Self {
        self.characters.push(character_id.into());
        self
    }
}
