//! Rehearsal session planner.
//!
//! Assigns rehearsal scenes to scheduled sessions of a theatrical
//! production from actor availabilities, and records per session which
//! actors are needed and which attend unneeded.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Actor`, `Character`, `Scene`, `Session`,
//!   and the engine's output `Plan`
//! - **`engine`**: The matching engine — availability index, rehearsability
//!   predicate, session planner
//! - **`validation`**: Snapshot integrity checks (duplicate IDs, dangling
//!   references)
//! - **`store`**: Collaborator contracts and the Airtable implementation
//! - **`config`**: Static show configuration (`shows.yaml`)
//! - **`run`**: One full planning pass, with per-session failure tolerance
//!
//! # Architecture
//!
//! The engine is pure and sequential: snapshots in, plans out, one
//! deterministic pass in ascending session-date order. All I/O lives behind
//! the `store` traits, constructed per run.

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod run;
pub mod store;
pub mod validation;

pub use error::{Error, Result};
