//! `roam-motor` — locomotion layer for the `rust_roam` framework.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`body`]     | `BodyPose` trait (the body-pose seam), `PointBody`        |
//! | [`actuator`] | `Locomotion` — target/facing state + per-tick steering    |
//! | [`input`]    | `MoveInput` trait, `ManualMove`                           |
//!
//! # Movement model (force-based steering)
//!
//! The actuator never writes positions.  Each tick it computes a horizontal
//! unit vector toward its target and asks the body to apply a forward force
//! of configured magnitude — skipped when the body reports a fallen posture
//! or is already moving at the configured maximum speed.  Integration,
//! balance, and collision all belong to whatever implements [`BodyPose`]:
//! a physics-engine ragdoll in a real host, the damped point-mass
//! [`PointBody`] in headless runs and tests.

pub mod actuator;
pub mod body;
pub mod input;

#[cfg(test)]
mod tests;

pub use actuator::{Locomotion, MotorConfig};
pub use body::{BodyPose, PointBody};
pub use input::{ManualMove, MoveInput};
