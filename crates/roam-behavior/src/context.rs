//! Read-only world state passed to every visitor tick.

use roam_core::Tick;
use roam_rooms::NavMesh;

use crate::points::InterestPoint;
use crate::sensors::{GraspSensor, ThreatSensor};

/// A read-only snapshot of shared world state for one simulation tick.
///
/// Built once per tick by the harness and shared (immutably) across all
/// agents.  Everything an agent reads about the world outside its own body
/// comes through here, which is what makes the tick phase order-independent.
///
/// # Lifetimes
///
/// All borrows live for one tick.  The harness never mutates the borrowed
/// structures while a `TickContext` is live.
pub struct TickContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Seconds represented by this tick (fixed timestep).
    pub dt_secs: f32,

    /// The scene's interest points, indexed by `PointId`.  May be empty —
    /// visitors then simply stay idle.
    pub points: &'a [InterestPoint],

    /// Walkable-surface queries (host mesh or [`roam_rooms::DoorwayNav`]).
    pub nav: &'a dyn NavMesh,

    /// Unconsciousness sensor, polled every tick.
    pub threat: &'a dyn ThreatSensor,

    /// Grasp sensor, polled every tick against each agent's own parts.
    pub grasp: &'a dyn GraspSensor,
}

impl<'a> TickContext<'a> {
    /// Build a context for a single tick.
    #[inline]
    pub fn new(
        tick:    Tick,
        dt_secs: f32,
        points:  &'a [InterestPoint],
        nav:     &'a dyn NavMesh,
        threat:  &'a dyn ThreatSensor,
        grasp:   &'a dyn GraspSensor,
    ) -> Self {
        Self { tick, dt_secs, points, nav, threat, grasp }
    }
}
