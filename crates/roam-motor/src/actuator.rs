//! The locomotion actuator: target state plus per-tick force steering.

use glam::{Vec2, Vec3};

use roam_core::math::{flat_dir, flat_distance, flat_len, flat_normalize, to_plane};

use crate::body::BodyPose;
use crate::input::MoveInput;

// ── MotorConfig ───────────────────────────────────────────────────────────────

/// Tuning knobs for one agent's steering.
#[derive(Debug, Clone, Copy)]
pub struct MotorConfig {
    /// Horizontal distance below which a target counts as reached.
    pub arrival_radius: f32,

    /// Horizontal displacement below which the target is treated as reached
    /// regardless of `arrival_radius` — forcing toward a coincident target
    /// oscillates instead of converging.
    pub stop_epsilon: f32,

    /// Forward force magnitude applied while steering.
    pub force_magnitude: f32,

    /// No force is applied once horizontal speed exceeds this.
    pub max_speed: f32,
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            arrival_radius:  1.0,
            stop_epsilon:    0.05,
            force_magnitude: 250.0,
            max_speed:       1.4, // pedestrian walking speed, m/s
        }
    }
}

// ── Locomotion ────────────────────────────────────────────────────────────────

/// Per-agent steering state: a movement target *or* a facing-only direction,
/// never both.
///
/// The actuator is deliberately stateless about paths — it knows one target
/// at a time.  Waypoint sequencing lives in the behavior controller, which
/// re-targets the actuator segment by segment.
#[derive(Debug, Clone)]
pub struct Locomotion {
    config:      MotorConfig,
    target:      Option<Vec3>,
    facing_only: Option<Vec3>,
    /// Movement intent computed on the last tick (unit length or zero).
    intent: Vec2,
}

impl Locomotion {
    pub fn new(config: MotorConfig) -> Self {
        Self {
            config,
            target:      None,
            facing_only: None,
            intent:      Vec2::ZERO,
        }
    }

    pub fn config(&self) -> &MotorConfig {
        &self.config
    }

    /// The current movement target, if any.
    pub fn target(&self) -> Option<Vec3> {
        self.target
    }

    /// Set a movement destination; leaves facing-only mode.
    pub fn set_target(&mut self, pos: Vec3) {
        self.target = Some(pos);
        self.facing_only = None;
    }

    /// Stop moving; movement intent becomes zero.
    pub fn clear_target(&mut self) {
        self.target = None;
        self.intent = Vec2::ZERO;
    }

    /// Drop both the target and any facing hold — the body goes fully
    /// passive.  Used when an external actor takes over the body (grabs,
    /// knockouts).
    pub fn halt(&mut self) {
        self.target = None;
        self.facing_only = None;
        self.intent = Vec2::ZERO;
    }

    /// Hold a facing direction without moving.
    ///
    /// The direction is flattened and normalized; an input with a near-zero
    /// horizontal component is ignored and the previous facing survives.
    pub fn set_facing_only(&mut self, direction: Vec3) {
        if let Some(dir) = flat_normalize(direction) {
            self.target = None;
            self.intent = Vec2::ZERO;
            self.facing_only = Some(dir);
        }
    }

    /// `true` when there is nothing left to walk toward: no target set, the
    /// body is inside the arrival radius, or the remaining displacement is
    /// within the stop epsilon.
    pub fn has_arrived(&self, body: &dyn BodyPose) -> bool {
        match self.target {
            None => true,
            Some(target) => {
                let d = flat_distance(body.position(), target);
                d <= self.config.arrival_radius || d <= self.config.stop_epsilon
            }
        }
    }

    /// Steer `body` for one fixed timestep.
    pub fn tick(&mut self, body: &mut dyn BodyPose) {
        // Facing-only mode: orient, never push.
        if let Some(dir) = self.facing_only {
            self.intent = Vec2::ZERO;
            body.set_facing(dir);
            return;
        }

        let Some(target) = self.target else {
            self.intent = Vec2::ZERO;
            return;
        };
        if self.has_arrived(body) {
            self.intent = Vec2::ZERO;
            return;
        }

        let Some(dir) = flat_dir(body.position(), target) else {
            // Degenerate displacement; the epsilon arrival check normally
            // catches this first.
            self.intent = Vec2::ZERO;
            return;
        };
        self.intent = to_plane(dir);

        let speed = flat_len(body.horizontal_velocity());
        if !body.is_fallen() && speed < self.config.max_speed {
            body.apply_force(dir, self.config.force_magnitude);
        }
        body.set_facing(dir);
    }
}

impl MoveInput for Locomotion {
    fn current_move_input(&self) -> Vec2 {
        self.intent
    }
}
