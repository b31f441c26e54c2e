//! `roam-core` — foundational types for the `rust_roam` visitor framework.
//!
//! This crate is a dependency of every other `roam-*` crate.  It intentionally
//! has no `roam-*` dependencies and minimal external ones (only `glam`,
//! `rand`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `RoomId`, `DoorId`, `PointId`, `PartId`    |
//! | [`math`]        | ground-plane helpers over `glam::Vec3`                |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`error`]       | `RoamError`, `RoamResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the public config types. |

pub mod error;
pub mod ids;
pub mod math;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RoamError, RoamResult};
pub use ids::{AgentId, DoorId, PartId, PointId, RoomId};
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, SimConfig, Tick};

// Vector math comes straight from glam; re-exported so downstream crates
// don't need their own glam dependency line.
pub use glam::{Vec2, Vec3};
