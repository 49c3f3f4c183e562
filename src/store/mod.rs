//! Record store collaborators.
//!
//! The engine is decoupled from persistence behind two async contracts:
//! [`DataProvider`] (read side, full in-memory collections) and
//! [`PlanStore`] (write side). [`AirtableClient`] implements both against
//! the Airtable REST API; tests substitute in-memory fakes.

pub mod airtable;
pub mod records;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::Result;
use crate::models::{Actor, Character, Plan, Scene, Session};

pub use airtable::AirtableClient;

/// Read side: loads full entity snapshots for one planning run.
#[async_trait]
pub trait DataProvider {
    /// Loads all actors, sorted ascending by name.
    async fn load_actors(&self) -> Result<Vec<Actor>>;

    /// Loads sessions sorted ascending by date.
    ///
    /// When `include_past` is false, sessions whose date is not strictly
    /// after today are excluded.
    async fn load_sessions(&self, include_past: bool) -> Result<Vec<Session>>;

    /// Loads all scenes, sorted ascending by number.
    async fn load_scenes(&self) -> Result<Vec<Scene>>;

    /// Loads all characters, sorted ascending by name.
    async fn load_characters(&self) -> Result<Vec<Character>>;
}

/// Write side: persists plans.
#[async_trait]
pub trait PlanStore {
    /// Removes all existing plan records before a new run.
    async fn clear_plans(&self) -> Result<()>;

    /// Persists one plan record.
    async fn create_plan(&self, plan: &Plan) -> Result<()>;
}

/// Keeps only sessions strictly after `today`.
///
/// `today` is injected so the cutoff is testable; the Airtable provider
/// passes the local calendar date.
pub fn upcoming_only(sessions: Vec<Session>, today: NaiveDate) -> Vec<Session> {
    sessions.into_iter().filter(|s| s.date > today).collect()
}
