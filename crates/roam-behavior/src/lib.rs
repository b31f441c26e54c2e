//! `roam-behavior` — the visitor behavior controller.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`state`]   | `AgentState` enum, `WaypointPath`                               |
//! | [`points`]  | `InterestPoint` — immutable observation targets                 |
//! | [`sensors`] | `ThreatSensor` / `GraspSensor` traits, `NullSensors`            |
//! | [`context`] | `TickContext<'a>` — read-only tick snapshot shared by agents    |
//! | [`visitor`] | `Visitor` controller + `BehaviorConfig`                         |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Tick contract
//!
//! [`Visitor::tick`] runs once per fixed timestep and completes
//! synchronously — nothing blocks or awaits.  Each call:
//!
//! 1. Diffs the body's fallen posture against the previous tick and captures
//!    the knockdown direction.
//! 2. Applies the override states (`KnockedOut`, then `Grabbed`), which are
//!    dictated by external sensors and preempt the normal cycle.
//! 3. Otherwise dispatches on the current state
//!    (`Idle → Walking → Observing → Idle`, with `Fleeing` as the recovery
//!    path out of both overrides).
//! 4. Drives the locomotion actuator.
//!
//! All reads of shared world state go through [`TickContext`], which borrows
//! the interest-point set, the navigation mesh, and the sensors immutably —
//! agents never share mutable state, so a host may tick them in any order
//! (or in parallel) without changing a run.

pub mod context;
pub mod error;
pub mod points;
pub mod sensors;
pub mod state;
pub mod visitor;


pub use context::TickContext;
pub use error::{BehaviorError, BehaviorResult};
pub use points::InterestPoint;
pub use sensors::{GraspSensor, NullSensors, ThreatSensor};
pub use state::{AgentState, WaypointPath};
pub use visitor::{BehaviorConfig, Visitor};
