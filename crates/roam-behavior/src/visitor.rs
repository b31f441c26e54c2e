//! The `Visitor` controller — the authoritative per-agent state machine.

use glam::Vec3;

use roam_core::math::{flat_len, flat_normalize};
use roam_core::{AgentId, AgentRng, PartId, PointId};
use roam_motor::{BodyPose, Locomotion, MotorConfig, MoveInput};

use crate::context::TickContext;
use crate::state::{AgentState, WaypointPath};
use crate::{BehaviorError, BehaviorResult};

// ── BehaviorConfig ────────────────────────────────────────────────────────────

/// Tuning knobs for one visitor's behavior.
#[derive(Debug, Clone, Copy)]
pub struct BehaviorConfig {
    /// Idle pause window in seconds, sampled uniformly on every Idle entry.
    pub idle_pause_min: f32,
    pub idle_pause_max: f32,

    /// Observation hold window in seconds, sampled uniformly on entry.
    pub observe_min: f32,
    pub observe_max: f32,

    /// How far to run when fleeing, metres.
    pub flee_distance: f32,

    /// How long to keep fleeing before calming down, seconds.
    pub flee_duration: f32,

    /// Horizontal speeds below this are too slow to define a threat
    /// direction.
    pub min_threat_speed: f32,

    /// Search radius handed to `NavMesh::sample_position`.
    pub nav_sample_radius: f32,

    /// Bounded random retries when picking a non-repeating target.
    pub select_attempts: u32,

    /// Steering configuration forwarded to the locomotion actuator.
    pub motor: MotorConfig,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            idle_pause_min:    1.5,
            idle_pause_max:    4.0,
            observe_min:       2.0,
            observe_max:       6.0,
            flee_distance:     6.0,
            flee_duration:     3.0,
            min_threat_speed:  0.5,
            nav_sample_radius: 2.0,
            select_attempts:   10,
            motor:             MotorConfig::default(),
        }
    }
}

impl BehaviorConfig {
    /// Reject configurations the state machine cannot run on.
    pub fn validate(&self) -> BehaviorResult<()> {
        if self.idle_pause_min < 0.0 || self.idle_pause_max < self.idle_pause_min {
            return Err(BehaviorError::Config(format!(
                "idle pause window [{}, {}] is not ordered",
                self.idle_pause_min, self.idle_pause_max
            )));
        }
        if self.observe_min < 0.0 || self.observe_max < self.observe_min {
            return Err(BehaviorError::Config(format!(
                "observe window [{}, {}] is not ordered",
                self.observe_min, self.observe_max
            )));
        }
        if self.select_attempts == 0 {
            return Err(BehaviorError::Config(
                "select_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

// ── Dispatch actions ──────────────────────────────────────────────────────────

/// Transition decided while the state variant was mutably borrowed; applied
/// afterwards so entry helpers can take `&mut self`.
enum Action {
    None,
    PlanWalk,
    Observe(PointId),
    BackToIdle,
    Recover,
}

// ── Visitor ───────────────────────────────────────────────────────────────────

/// One visitor's behavior controller.
///
/// Owns the [`AgentState`], the locomotion actuator, and the set of part
/// handles the grasp sensor is checked against.  Everything else — body,
/// navigation, sensors, interest points — arrives borrowed through
/// [`TickContext`] each tick.
pub struct Visitor {
    id:     AgentId,
    state:  AgentState,
    locomotion: Locomotion,
    config: BehaviorConfig,

    /// The visitor's own graspable part handles.
    parts: Vec<PartId>,

    /// Most recently visited point, to bias selection away from repeats.
    last_visited: Option<PointId>,

    /// Direction of the hit or throw that last disturbed this visitor
    /// (unit, ground plane).  Consumed by flee-target calculation.
    threat_dir: Option<Vec3>,

    /// Previous tick's fallen posture, for transition detection.
    was_fallen: bool,
}

impl Visitor {
    /// Create a visitor in `Idle` with a freshly randomized pause.
    pub fn new(
        id:     AgentId,
        parts:  Vec<PartId>,
        config: BehaviorConfig,
        rng:    &mut AgentRng,
    ) -> Self {
        let mut visitor = Self {
            id,
            state: AgentState::Idle { remaining: 0.0 },
            locomotion: Locomotion::new(config.motor),
            config,
            parts,
            last_visited: None,
            threat_dir: None,
            was_fallen: false,
        };
        visitor.enter_idle(rng);
        visitor
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn state(&self) -> &AgentState {
        &self.state
    }

    pub fn locomotion(&self) -> &Locomotion {
        &self.locomotion
    }

    /// The visitor's movement intent through the shared actuator seam.
    pub fn move_input(&self) -> &dyn MoveInput {
        &self.locomotion
    }

    pub fn last_visited(&self) -> Option<PointId> {
        self.last_visited
    }

    /// The part handles the grasp sensor is checked against.
    pub fn parts(&self) -> &[PartId] {
        &self.parts
    }

    /// Test seam: force the state machine into `state`, clearing locomotion
    /// exactly like a sensor-driven override would.
    pub fn force_state(&mut self, state: AgentState) {
        self.locomotion.halt();
        self.state = state;
    }

    // ── Tick entry point ──────────────────────────────────────────────────

    /// Advance the state machine one fixed timestep and drive the actuator.
    ///
    /// Returns `true` when the visitor changed state this tick (used by the
    /// harness for per-tick summaries).
    pub fn tick(
        &mut self,
        ctx:  &TickContext<'_>,
        body: &mut dyn BodyPose,
        rng:  &mut AgentRng,
    ) -> bool {
        let before = std::mem::discriminant(&self.state);

        // Posture diff — capture the knockdown direction on the tick the
        // body goes down, regardless of what state logic does below.
        self.note_posture(body);

        // Sensor-dictated overrides preempt the normal cycle; only when
        // neither fires does the current state get its regular dispatch.
        if !self.apply_overrides(ctx, body, rng) {
            self.dispatch(ctx, body, rng);
        }

        self.locomotion.tick(body);

        std::mem::discriminant(&self.state) != before
    }

    // ── Posture & threat capture ──────────────────────────────────────────

    fn note_posture(&mut self, body: &dyn BodyPose) {
        let fallen = body.is_fallen();
        if fallen && !self.was_fallen {
            self.record_threat_from(body);
        }
        self.was_fallen = fallen;
    }

    /// Record the body's current horizontal travel direction as the threat
    /// direction, when it is fast enough to mean anything.
    fn record_threat_from(&mut self, body: &dyn BodyPose) {
        let v = body.horizontal_velocity();
        if flat_len(v) >= self.config.min_threat_speed {
            if let Some(dir) = flat_normalize(v) {
                self.threat_dir = Some(dir);
            }
        }
    }

    // ── Override states ───────────────────────────────────────────────────

    /// Returns `true` when an override transition consumed this tick.
    fn apply_overrides(
        &mut self,
        ctx:  &TickContext<'_>,
        body: &mut dyn BodyPose,
        rng:  &mut AgentRng,
    ) -> bool {
        // Unconsciousness wins over everything, including Grabbed.
        if ctx.threat.is_unconscious(self.id)
            && !matches!(self.state, AgentState::KnockedOut)
        {
            tracing::debug!(agent = %self.id, from = self.state.label(), "knocked out");
            self.locomotion.halt();
            self.state = AgentState::KnockedOut;
            return true;
        }

        let held = self.parts.iter().any(|&p| ctx.grasp.is_held(p));
        let grabbed = matches!(self.state, AgentState::Grabbed);
        let knocked_out = matches!(self.state, AgentState::KnockedOut);

        // Grab begins — but never preempts unconsciousness.
        if held && !grabbed && !knocked_out {
            tracing::debug!(agent = %self.id, from = self.state.label(), "grabbed");
            self.locomotion.halt();
            self.state = AgentState::Grabbed;
            return true;
        }

        // Grab ends — flee along the release throw, if fast enough.
        if !held && grabbed {
            self.record_threat_from(body);
            self.enter_fleeing(ctx, body, rng);
            return true;
        }

        false
    }

    // ── Normal-cycle dispatch ─────────────────────────────────────────────

    fn dispatch(
        &mut self,
        ctx:  &TickContext<'_>,
        body: &mut dyn BodyPose,
        rng:  &mut AgentRng,
    ) {
        let dt = ctx.dt_secs;

        let action = match &mut self.state {
            AgentState::Idle { remaining } => {
                *remaining -= dt;
                if *remaining <= 0.0 { Action::PlanWalk } else { Action::None }
            }

            AgentState::Walking { path, goal } => {
                if self.locomotion.has_arrived(body) {
                    // Current corner reached: walk the next segment, or
                    // start observing once the last corner is behind us.
                    match path.advance() {
                        Some(corner) => {
                            self.locomotion.set_target(corner);
                            Action::None
                        }
                        None => Action::Observe(*goal),
                    }
                } else {
                    Action::None
                }
            }

            AgentState::Observing { remaining, .. } => {
                *remaining -= dt;
                if *remaining <= 0.0 { Action::BackToIdle } else { Action::None }
            }

            AgentState::Fleeing { remaining, .. } => {
                *remaining -= dt;
                if *remaining <= 0.0 || self.locomotion.has_arrived(body) {
                    Action::BackToIdle
                } else {
                    Action::None
                }
            }

            // Passive until the sensor restores consciousness; the sensor
            // owns the duration, there is no internal timer here.
            AgentState::KnockedOut => {
                if ctx.threat.is_unconscious(self.id) {
                    Action::None
                } else {
                    Action::Recover
                }
            }

            // Fully passive; exits live in apply_overrides.
            AgentState::Grabbed => Action::None,
        };

        match action {
            Action::None => {}
            Action::PlanWalk => self.begin_walk(ctx, body, rng),
            Action::Observe(point) => self.enter_observing(point, ctx, rng),
            Action::BackToIdle => self.enter_idle(rng),
            Action::Recover => self.enter_fleeing(ctx, body, rng),
        }
    }

    // ── State entries ─────────────────────────────────────────────────────

    fn enter_idle(&mut self, rng: &mut AgentRng) {
        self.locomotion.clear_target();
        let pause = rng.gen_range(self.config.idle_pause_min..=self.config.idle_pause_max);
        self.state = AgentState::Idle { remaining: pause };
    }

    fn enter_observing(&mut self, point: PointId, ctx: &TickContext<'_>, rng: &mut AgentRng) {
        self.last_visited = Some(point);
        if let Some(p) = ctx.points.get(point.index()) {
            self.locomotion.set_facing_only(p.facing());
        } else {
            self.locomotion.clear_target();
        }
        let hold = rng.gen_range(self.config.observe_min..=self.config.observe_max);
        self.state = AgentState::Observing { point, remaining: hold };
    }

    fn enter_fleeing(&mut self, ctx: &TickContext<'_>, body: &dyn BodyPose, rng: &mut AgentRng) {
        // Away from the recorded threat, or anywhere if nothing was recorded.
        let dir = match self.threat_dir {
            Some(threat) => -threat,
            None => rng.unit_dir_xz(),
        };
        let raw = body.position() + dir * self.config.flee_distance;
        let raw = Vec3::new(raw.x, 0.0, raw.z);
        let target = ctx
            .nav
            .sample_position(raw, self.config.nav_sample_radius)
            .unwrap_or(raw);

        tracing::debug!(agent = %self.id, ?target, "fleeing");
        self.locomotion.set_target(target);
        self.state = AgentState::Fleeing {
            target,
            remaining: self.config.flee_duration,
        };
    }

    // ── Walk planning ─────────────────────────────────────────────────────

    fn begin_walk(&mut self, ctx: &TickContext<'_>, body: &dyn BodyPose, rng: &mut AgentRng) {
        let Some(goal) = self.select_target(ctx, rng) else {
            // No interest points known — stay idle, retry on the next expiry.
            self.enter_idle(rng);
            return;
        };

        match self.plan_path(ctx, body, goal) {
            Some((path, first)) => {
                tracing::debug!(agent = %self.id, %goal, corners = path.len(), "walk begins");
                self.locomotion.set_target(first);
                self.state = AgentState::Walking { path, goal };
            }
            None => {
                // Planning failure is an expected transient (target corner
                // unreachable right now); Idle retries naturally.
                tracing::debug!(agent = %self.id, %goal, "path planning failed");
                self.enter_idle(rng);
            }
        }
    }

    /// Pick the next interest point to visit.
    ///
    /// Up to `select_attempts` uniform samples, taking the first that isn't
    /// the immediately preceding visit; after that, fall back to the front
    /// of the registry regardless of repeats.  The bound keeps single-point
    /// scenes from looping forever — visiting the only point twice in a row
    /// is acceptable there.
    fn select_target(&self, ctx: &TickContext<'_>, rng: &mut AgentRng) -> Option<PointId> {
        let count = ctx.points.len() as u32;
        if count == 0 {
            return None;
        }
        for _ in 0..self.config.select_attempts {
            let candidate = PointId(rng.gen_range(0..count));
            if Some(candidate) != self.last_visited {
                return Some(candidate);
            }
        }
        Some(PointId(0))
    }

    /// Sample both endpoints onto walkable ground, compute the corner
    /// polyline, and drop its leading corner (the start position itself).
    ///
    /// Returns the path together with its first waypoint; `None` on any
    /// sampling or path failure, including a walk so short that nothing
    /// remains after the drop.
    fn plan_path(
        &self,
        ctx:  &TickContext<'_>,
        body: &dyn BodyPose,
        goal: PointId,
    ) -> Option<(WaypointPath, Vec3)> {
        let point = ctx.points.get(goal.index())?;
        let radius = self.config.nav_sample_radius;

        let start = ctx.nav.sample_position(body.position(), radius)?;
        let stand = ctx.nav.sample_position(point.view_pos(), radius)?;
        let corners = ctx.nav.compute_path(start, stand)?;

        let path = WaypointPath::new(corners.into_iter().skip(1).collect());
        let first = path.current()?;
        Some((path, first))
    }
}
