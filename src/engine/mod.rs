//! Scene-to-session matching engine.
//!
//! The engine is a single deterministic pass over the loaded snapshot:
//!
//! 1. [`AvailabilityIndex`] builds id lookup maps from the flat actor and
//!    character collections.
//! 2. [`can_rehearse`] decides, per scene and session, whether every actor
//!    behind every character of the scene is available.
//! 3. [`SessionPlanner`] walks sessions in ascending date order, computes the
//!    rehearsable scene set once per calendar date, and partitions each
//!    session's available actors into needed and not-needed.
//!
//! The engine is purely in-memory and sequential; it never talks to the
//! record store.

mod index;
mod planner;
mod rehearsable;

pub use index::AvailabilityIndex;
pub use planner::SessionPlanner;
pub use rehearsable::can_rehearse;
