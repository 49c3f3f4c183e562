//! Typed wire records for the Airtable REST API.
//!
//! The store returns `{ records: [{ id, fields: {...} }], offset? }` pages
//! with table-specific field objects. Records are materialized into the
//! domain models at this boundary so nothing downstream touches the wire
//! representation. Link fields are arrays of record ids; absent fields
//! default to empty.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Actor, Character, Plan, Scene, Session};

/// One page of a table listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPage<F> {
    /// Records in this page.
    pub records: Vec<Record<F>>,
    /// Continuation token; `None` on the last page.
    #[serde(default)]
    pub offset: Option<String>,
}

/// A single record with its table-specific fields.
#[derive(Debug, Clone, Deserialize)]
pub struct Record<F> {
    /// Store-assigned record id.
    pub id: String,
    /// Table-specific field object.
    pub fields: F,
}

/// Body for record creation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRecord<F> {
    pub fields: F,
}

/// Fields of the `Actor` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActorFields {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Characters", default)]
    pub characters: Vec<String>,
    #[serde(rename = "Availabilities", default)]
    pub availabilities: Vec<String>,
}

/// Fields of the `Character` table.
///
/// `Actor` is a link array in the store; only the first entry is kept
/// (single-actor-per-character contract).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CharacterFields {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Actor", default)]
    pub actor: Vec<String>,
    #[serde(rename = "Scenes", default)]
    pub scenes: Vec<String>,
}

/// Fields of the `Scene` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneFields {
    #[serde(rename = "Number", default)]
    pub number: i64,
    #[serde(rename = "Characters", default)]
    pub characters: Vec<String>,
}

/// Fields of the `Session` table.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionFields {
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "Available actors", default)]
    pub available_actors: Vec<String>,
}

/// Fields written to the `Plan` table.
#[derive(Debug, Clone, Serialize)]
pub struct PlanFields {
    #[serde(rename = "Session")]
    pub session: Vec<String>,
    #[serde(rename = "Scenes")]
    pub scenes: Vec<String>,
    #[serde(rename = "Not needed actors")]
    pub not_needed_actors: Vec<String>,
    #[serde(rename = "Needed actors")]
    pub needed_actors: Vec<String>,
}

impl From<Record<ActorFields>> for Actor {
    fn from(record: Record<ActorFields>) -> Self {
        Self {
            id: record.id,
            name: record.fields.name,
            characters: record.fields.characters,
            availabilities: record.fields.availabilities.into_iter().collect(),
        }
    }
}

impl From<Record<CharacterFields>> for Character {
    fn from(record: Record<CharacterFields>) -> Self {
        Self {
            id: record.id,
            name: record.fields.name,
            actor_id: record.fields.actor.into_iter().next(),
            scenes: record.fields.scenes,
        }
    }
}

impl From<Record<SceneFields>> for Scene {
    fn from(record: Record<SceneFields>) -> Self {
        Self {
            id: record.id,
            number: record.fields.number,
            characters: record.fields.characters,
        }
    }
}

impl From<Record<SessionFields>> for Session {
    fn from(record: Record<SessionFields>) -> Self {
        Self {
            id: record.id,
            date: record.fields.date,
            available_actor_ids: record.fields.available_actors,
        }
    }
}

impl From<&Plan> for PlanFields {
    fn from(plan: &Plan) -> Self {
        Self {
            session: vec![plan.session_id.clone()],
            scenes: plan.scene_ids.clone(),
            not_needed_actors: plan.not_needed_actor_ids.iter().cloned().collect(),
            needed_actors: plan.needed_actor_ids.iter().cloned().collect(),
        }
    }
}
