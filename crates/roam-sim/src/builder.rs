//! Fluent builder for constructing a [`Sim`].

use glam::Vec3;

use roam_behavior::{BehaviorConfig, InterestPoint, Visitor};
use roam_core::{AgentId, AgentRng, PartId, SimConfig};
use roam_motor::PointBody;
use roam_rooms::NavMesh;

use crate::sensors::{GraspState, ThreatState};
use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<N>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, seed, tick rate, …
/// - `N: NavMesh` — the navigation backend (host mesh or
///   [`roam_rooms::DoorwayNav`]).
///
/// Collaborators are required *by type*: a `Sim` cannot be built without a
/// navigation backend, so the missing-collaborator failure mode is caught at
/// compile time.  What `build` validates at runtime is configuration.
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                               |
/// |---------------|---------------------------------------|
/// | `.behavior(c)`| `BehaviorConfig::default()`           |
/// | `.points(v)`  | empty — visitors stay idle            |
/// | `.spawn(p)`   | no visitors                           |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, DoorwayNav::new(graph))
///     .points(exhibits)
///     .spawn(Vec3::new(0.0, 0.0, 0.0))
///     .spawn(Vec3::new(2.0, 0.0, -1.0))
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<N: NavMesh> {
    config:    SimConfig,
    nav:       N,
    behavior:  BehaviorConfig,
    points:    Vec<InterestPoint>,
    spawns:    Vec<(Vec3, Vec<PartId>)>,
    next_part: u32,
}

impl<N: NavMesh> SimBuilder<N> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, nav: N) -> Self {
        Self {
            config,
            nav,
            behavior:  BehaviorConfig::default(),
            points:    Vec::new(),
            spawns:    Vec::new(),
            next_part: 0,
        }
    }

    /// Behavior tuning shared by all visitors.
    pub fn behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    /// The scene's interest points.
    ///
    /// If not called, visitors have nothing to visit and remain idle — legal
    /// but dull.
    pub fn points(mut self, points: Vec<InterestPoint>) -> Self {
        self.points = points;
        self
    }

    /// Spawn a visitor at `position` with one auto-allocated graspable part.
    pub fn spawn(mut self, position: Vec3) -> Self {
        let part = PartId(self.next_part);
        self.next_part += 1;
        self.spawns.push((position, vec![part]));
        self
    }

    /// Spawn a visitor at `position` with the host's own part handles
    /// (multi-part ragdolls).
    pub fn spawn_with_parts(mut self, position: Vec3, parts: Vec<PartId>) -> Self {
        self.spawns.push((position, parts));
        self
    }

    /// Validate the configuration and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<N>> {
        if self.config.tick_hz == 0 {
            return Err(SimError::Config("tick_hz must be nonzero".into()));
        }
        self.behavior.validate()?;

        let mut rngs: Vec<AgentRng> = (0..self.spawns.len() as u32)
            .map(|i| AgentRng::new(self.config.seed, AgentId(i)))
            .collect();

        let mut visitors = Vec::with_capacity(self.spawns.len());
        let mut bodies   = Vec::with_capacity(self.spawns.len());
        for (i, (position, parts)) in self.spawns.into_iter().enumerate() {
            visitors.push(Visitor::new(
                AgentId(i as u32),
                parts,
                self.behavior,
                &mut rngs[i],
            ));
            bodies.push(PointBody::new(position));
        }

        Ok(Sim {
            clock:    self.config.make_clock(),
            config:   self.config,
            visitors,
            bodies,
            rngs,
            points:   self.points,
            nav:      self.nav,
            grasp:    GraspState::default(),
            threat:   ThreatState::default(),
        })
    }
}
