//! The body-pose seam and a damped point-mass reference body.

use glam::Vec3;

use roam_core::math::{flat_normalize, flatten};

// ── BodyPose trait ────────────────────────────────────────────────────────────

/// The physical body a visitor steers.
///
/// Real hosts implement this against their ragdoll/balance machinery; the
/// framework only ever reads posture and pushes forces through it.  One
/// instance per agent, mutated only during that agent's tick.
pub trait BodyPose {
    /// Current world position.
    fn position(&self) -> Vec3;

    /// Current velocity projected onto the ground plane.
    fn horizontal_velocity(&self) -> Vec3;

    /// `true` while the body has footing (standing or recovering balance).
    fn is_grounded(&self) -> bool;

    /// `true` while the body is lying down.  The actuator applies no force
    /// to a fallen body.
    fn is_fallen(&self) -> bool;

    /// Apply an incremental force of `magnitude` along `direction` this tick.
    fn apply_force(&mut self, direction: Vec3, magnitude: f32);

    /// Orient the body to face along `direction` (ground plane).
    fn set_facing(&mut self, direction: Vec3);
}

// ── PointBody ─────────────────────────────────────────────────────────────────

/// A damped point mass implementing [`BodyPose`] for headless runs and tests.
///
/// Forces accumulate during the tick and integrate in [`step`](Self::step):
///
/// ```text
/// v += (F / mass) * dt;   v *= exp(-damping * dt);   p += v * dt
/// ```
///
/// With the default mass/damping and the actuator's default force the body
/// settles just above walking speed, so the actuator's speed cap is the
/// binding limit.  The fallen flag is host-set (there is no balance model to
/// knock over); tests and scripted scenarios toggle it directly.
#[derive(Debug, Clone)]
pub struct PointBody {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Last facing direction set on the body (unit, ground plane).
    pub facing: Vec3,
    pub mass: f32,
    /// Exponential horizontal damping rate per second.
    pub damping: f32,
    fallen: bool,
    pending_force: Vec3,
}

impl PointBody {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity:      Vec3::ZERO,
            facing:        Vec3::Z,
            mass:          70.0,
            damping:       2.5,
            fallen:        false,
            pending_force: Vec3::ZERO,
        }
    }

    /// Host-side posture control: knock the body over or stand it back up.
    pub fn set_fallen(&mut self, fallen: bool) {
        self.fallen = fallen;
    }

    /// Integrate one fixed timestep and clear the accumulated force.
    pub fn step(&mut self, dt: f32) {
        let accel = self.pending_force / self.mass;
        self.velocity += accel * dt;

        let damp = (-self.damping * dt).exp();
        self.velocity.x *= damp;
        self.velocity.z *= damp;

        self.position += self.velocity * dt;
        self.pending_force = Vec3::ZERO;
    }
}

impl BodyPose for PointBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn horizontal_velocity(&self) -> Vec3 {
        flatten(self.velocity)
    }

    fn is_grounded(&self) -> bool {
        // A point mass never leaves the floor; it only has footing while
        // upright.
        !self.fallen
    }

    fn is_fallen(&self) -> bool {
        self.fallen
    }

    fn apply_force(&mut self, direction: Vec3, magnitude: f32) {
        if let Some(dir) = flat_normalize(direction) {
            self.pending_force += dir * magnitude;
        }
    }

    fn set_facing(&mut self, direction: Vec3) {
        if let Some(dir) = flat_normalize(direction) {
            self.facing = dir;
        }
    }
}
