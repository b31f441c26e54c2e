//! `roam-sim` — tick loop orchestrator for the rust_roam framework.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Agents  — tick every visitor FSM in ascending AgentId order
//!               (parallel with the `parallel` feature), all reading one
//!               shared TickContext.
//!   ② Bodies  — integrate every PointBody one fixed timestep.
//!   ③ Hooks   — observer callbacks; snapshots every
//!               config.output_interval_ticks.
//! ```
//!
//! The host mutates the [`GraspState`] / [`ThreatState`] registries and the
//! bodies *between* ticks (scripted disturbances, physics events); within a
//! tick all shared state is read-only, which is what makes phase ① safe to
//! parallelize.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the agent phase on Rayon's thread pool.           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use roam_core::SimConfig;
//! use roam_rooms::DoorwayNav;
//! use roam_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), DoorwayNav::new(graph))
//!     .points(points)
//!     .spawn(spawn_pos)
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sensors;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sensors::{GraspState, ThreatState};
pub use sim::Sim;
