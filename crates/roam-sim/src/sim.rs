//! The `Sim` struct and its tick loop.

use roam_behavior::{InterestPoint, TickContext, Visitor};
use roam_core::{AgentId, AgentRng, SimClock, SimConfig, Tick};
use roam_motor::PointBody;
use roam_rooms::NavMesh;

use crate::sensors::{GraspState, ThreatState};
use crate::SimObserver;

/// The main simulation runner.
///
/// `Sim<N>` holds all per-agent state in parallel `Vec`s indexed by
/// [`AgentId`] — visitor controllers, bodies, and RNGs live in separate
/// vectors so the tick phase can borrow them independently.  World state
/// (points, nav, sensor registries) is shared read-only during a tick.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<N: NavMesh> {
    /// Global configuration (total ticks, seed, tick rate, …).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick and the fixed timestep.
    pub clock: SimClock,

    /// Visitor controllers, indexed by `AgentId`.
    pub visitors: Vec<Visitor>,

    /// Reference bodies, indexed by `AgentId`.  Hosts script disturbances by
    /// mutating these between ticks.
    pub bodies: Vec<PointBody>,

    /// Per-agent deterministic RNGs, kept separate for the split-borrow
    /// pattern in the (possibly parallel) agent phase.
    pub rngs: Vec<AgentRng>,

    /// The scene's interest points, shared read-only by every agent.
    pub points: Vec<InterestPoint>,

    /// Walkable-surface queries.
    pub nav: N,

    /// Host-fed grasp registry, polled by every agent each tick.
    pub grasp: GraspState,

    /// Host-fed unconsciousness registry, polled by every agent each tick.
    pub threat: ThreatState,
}

impl<N: NavMesh> Sim<N> {
    // ── Public API ────────────────────────────────────────────────────────

    pub fn agent_count(&self) -> usize {
        self.visitors.len()
    }

    pub fn visitor(&self, agent: AgentId) -> Option<&Visitor> {
        self.visitors.get(agent.index())
    }

    pub fn body_mut(&mut self, agent: AgentId) -> Option<&mut PointBody> {
        self.bodies.get_mut(agent.index())
    }

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() {
                break;
            }
            self.tick_once(now, observer);
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and for hosts interleaving scripted disturbances.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.clock.current_tick;
            self.tick_once(now, observer);
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn tick_once<O: SimObserver>(&mut self, now: Tick, observer: &mut O) {
        observer.on_tick_start(now);
        let transitions = self.process_tick(now);
        observer.on_tick_end(now, transitions);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.visitors, &self.bodies);
        }
        self.clock.advance();
    }

    /// Tick every agent, then integrate every body.  Returns the number of
    /// agents that changed state.
    fn process_tick(&mut self, now: Tick) -> usize {
        let dt = self.clock.dt_secs();

        // Explicit field borrows so the borrow checker sees disjoint access:
        // the context borrows world state immutably while the agent loop
        // mutates the per-agent vectors.
        let points   = self.points.as_slice();
        let nav      = &self.nav;
        let threat   = &self.threat;
        let grasp    = &self.grasp;
        let visitors = &mut self.visitors;
        let bodies   = &mut self.bodies;
        let rngs     = &mut self.rngs;

        let ctx = TickContext::new(now, dt, points, nav, threat, grasp);

        // ── Phase 1: agent FSMs, ascending AgentId ────────────────────────
        #[cfg(not(feature = "parallel"))]
        let transitions = visitors
            .iter_mut()
            .zip(bodies.iter_mut())
            .zip(rngs.iter_mut())
            .map(|((visitor, body), rng)| visitor.tick(&ctx, body, rng))
            .filter(|&changed| changed)
            .count();

        // Agents share only the read-only context, and each owns its RNG, so
        // scheduling cannot change a run.
        #[cfg(feature = "parallel")]
        let transitions = {
            use rayon::prelude::*;
            visitors
                .par_iter_mut()
                .zip(bodies.par_iter_mut())
                .zip(rngs.par_iter_mut())
                .map(|((visitor, body), rng)| visitor.tick(&ctx, body, rng))
                .filter(|&changed| changed)
                .count()
        };

        // ── Phase 2: integrate bodies ─────────────────────────────────────
        for body in bodies.iter_mut() {
            body.step(dt);
        }

        transitions
    }
}
