//! Rehearsal planning domain models.
//!
//! Provides the core data types for one planning run. All entities are
//! immutable snapshots loaded once from the record store; the only type
//! created by the engine itself is [`Plan`].
//!
//! # Domain Mapping
//!
//! | Model | Record store table |
//! |-----------|--------------------|
//! | Actor | `Actor` |
//! | Character | `Character` |
//! | Scene | `Scene` |
//! | Session | `Session` |
//! | Plan | `Plan` (write-only) |

mod actor;
mod character;
mod plan;
mod scene;
mod session;

pub use actor::Actor;
pub use character::Character;
pub use plan::Plan;
pub use scene::Scene;
pub use session::Session;
