//! Unit tests for roam-motor.

#[cfg(test)]
mod helpers {
    use glam::Vec3;

    use crate::BodyPose;

    /// A [`BodyPose`] double that records every force and facing request.
    pub struct RecordingBody {
        pub position: Vec3,
        pub velocity: Vec3,
        pub fallen:   bool,
        pub forces:   Vec<(Vec3, f32)>,
        pub facings:  Vec<Vec3>,
    }

    impl RecordingBody {
        pub fn at(position: Vec3) -> Self {
            Self {
                position,
                velocity: Vec3::ZERO,
                fallen:   false,
                forces:   Vec::new(),
                facings:  Vec::new(),
            }
        }
    }

    impl BodyPose for RecordingBody {
        fn position(&self) -> Vec3 {
            self.position
        }
        fn horizontal_velocity(&self) -> Vec3 {
            Vec3::new(self.velocity.x, 0.0, self.velocity.z)
        }
        fn is_grounded(&self) -> bool {
            !self.fallen
        }
        fn is_fallen(&self) -> bool {
            self.fallen
        }
        fn apply_force(&mut self, direction: Vec3, magnitude: f32) {
            self.forces.push((direction, magnitude));
        }
        fn set_facing(&mut self, direction: Vec3) {
            self.facings.push(direction);
        }
    }
}

// ── PointBody ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod point_body {
    use glam::Vec3;

    use crate::{BodyPose, PointBody};

    const DT: f32 = 0.01; // 100 Hz

    #[test]
    fn force_accelerates_along_direction() {
        let mut body = PointBody::new(Vec3::ZERO);
        body.apply_force(Vec3::X, 250.0);
        body.step(DT);
        assert!(body.velocity.x > 0.0);
        assert_eq!(body.velocity.z, 0.0);
        assert!(body.position.x > 0.0);
    }

    #[test]
    fn force_is_cleared_after_step() {
        let mut body = PointBody::new(Vec3::ZERO);
        body.apply_force(Vec3::X, 250.0);
        body.step(DT);
        let v1 = body.velocity.x;
        body.step(DT); // no new force — damping only
        assert!(body.velocity.x < v1);
    }

    #[test]
    fn damping_bounds_terminal_speed() {
        let mut body = PointBody::new(Vec3::ZERO);
        // Push every tick for 10 simulated seconds.
        for _ in 0..1000 {
            body.apply_force(Vec3::X, 250.0);
            body.step(DT);
        }
        let speed = body.horizontal_velocity().length();
        // F/(m·d) = 250/(70·2.5) ≈ 1.43 m/s terminal.
        assert!(speed > 1.0 && speed < 1.6, "terminal speed {speed}");
    }

    #[test]
    fn fallen_flag_flips_grounded() {
        let mut body = PointBody::new(Vec3::ZERO);
        assert!(body.is_grounded());
        assert!(!body.is_fallen());
        body.set_fallen(true);
        assert!(!body.is_grounded());
        assert!(body.is_fallen());
    }

    #[test]
    fn facing_ignores_vertical_input() {
        let mut body = PointBody::new(Vec3::ZERO);
        body.set_facing(Vec3::X);
        body.set_facing(Vec3::Y); // no horizontal component — keep previous
        assert_eq!(body.facing, Vec3::X);
    }
}

// ── Locomotion actuator ───────────────────────────────────────────────────────

#[cfg(test)]
mod actuator {
    use glam::{Vec2, Vec3};

    use super::helpers::RecordingBody;
    use crate::{Locomotion, MotorConfig, MoveInput};

    fn actuator() -> Locomotion {
        Locomotion::new(MotorConfig::default())
    }

    #[test]
    fn idle_actuator_is_arrived_and_silent() {
        let mut motor = actuator();
        let mut body = RecordingBody::at(Vec3::ZERO);
        assert!(motor.has_arrived(&body));
        motor.tick(&mut body);
        assert!(body.forces.is_empty());
        assert_eq!(motor.current_move_input(), Vec2::ZERO);
    }

    #[test]
    fn tick_pushes_toward_target() {
        let mut motor = actuator();
        let mut body = RecordingBody::at(Vec3::ZERO);
        motor.set_target(Vec3::new(10.0, 0.0, 0.0));

        motor.tick(&mut body);

        let (dir, mag) = body.forces[0];
        assert!((dir - Vec3::X).length() < 1e-5);
        assert_eq!(mag, MotorConfig::default().force_magnitude);
        assert_eq!(motor.current_move_input(), Vec2::new(1.0, 0.0));
        // Facing follows the movement intent.
        assert!((body.facings[0] - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn target_height_does_not_matter() {
        let mut motor = actuator();
        let mut body = RecordingBody::at(Vec3::ZERO);
        motor.set_target(Vec3::new(0.0, 5.0, 10.0));
        motor.tick(&mut body);
        let (dir, _) = body.forces[0];
        assert_eq!(dir.y, 0.0);
    }

    #[test]
    fn arrival_within_radius_stops_pushing() {
        let mut motor = actuator();
        let mut body = RecordingBody::at(Vec3::new(9.5, 0.0, 0.0));
        motor.set_target(Vec3::new(10.0, 0.0, 0.0));
        assert!(motor.has_arrived(&body));
        motor.tick(&mut body);
        assert!(body.forces.is_empty());
    }

    #[test]
    fn arrival_is_idempotent() {
        // Once arrived, repeated ticks with the same target stay arrived
        // and never push again.
        let mut motor = actuator();
        let mut body = RecordingBody::at(Vec3::new(10.2, 0.0, 0.0));
        motor.set_target(Vec3::new(10.0, 0.0, 0.0));
        for _ in 0..50 {
            motor.tick(&mut body);
            assert!(motor.has_arrived(&body));
        }
        assert!(body.forces.is_empty());
        assert_eq!(motor.current_move_input(), Vec2::ZERO);
    }

    #[test]
    fn near_zero_displacement_counts_as_arrived() {
        // Even with a tiny arrival radius, a coincident target must not
        // produce force oscillation.
        let config = MotorConfig {
            arrival_radius: 0.001,
            ..MotorConfig::default()
        };
        let mut motor = Locomotion::new(config);
        let mut body = RecordingBody::at(Vec3::new(0.03, 0.0, 0.0));
        motor.set_target(Vec3::ZERO);
        assert!(motor.has_arrived(&body));
        motor.tick(&mut body);
        assert!(body.forces.is_empty());
    }

    #[test]
    fn no_force_above_max_speed() {
        let mut motor = actuator();
        let mut body = RecordingBody::at(Vec3::ZERO);
        body.velocity = Vec3::new(2.0, 0.0, 0.0); // above the 1.4 cap
        motor.set_target(Vec3::new(10.0, 0.0, 0.0));
        motor.tick(&mut body);
        assert!(body.forces.is_empty());
        // Intent and facing still track the target.
        assert_eq!(motor.current_move_input(), Vec2::new(1.0, 0.0));
        assert!(!body.facings.is_empty());
    }

    #[test]
    fn fallen_body_receives_no_force() {
        let mut motor = actuator();
        let mut body = RecordingBody::at(Vec3::ZERO);
        body.fallen = true;
        motor.set_target(Vec3::new(10.0, 0.0, 0.0));
        motor.tick(&mut body);
        assert!(body.forces.is_empty());
    }

    #[test]
    fn facing_only_orients_without_moving() {
        let mut motor = actuator();
        let mut body = RecordingBody::at(Vec3::ZERO);
        motor.set_facing_only(Vec3::new(0.0, 3.0, 4.0));
        motor.tick(&mut body);
        assert!(body.forces.is_empty());
        let facing = body.facings[0];
        assert_eq!(facing.y, 0.0);
        assert!((facing.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn vertical_facing_request_is_ignored() {
        let mut motor = actuator();
        let mut body = RecordingBody::at(Vec3::ZERO);
        motor.set_facing_only(Vec3::Y);
        motor.tick(&mut body);
        // Request had no horizontal component: not in facing mode at all.
        assert!(body.facings.is_empty());
    }

    #[test]
    fn halt_drops_both_modes() {
        let mut motor = actuator();
        let mut body = RecordingBody::at(Vec3::ZERO);
        motor.set_facing_only(Vec3::X);
        motor.halt();
        motor.tick(&mut body);
        assert!(body.forces.is_empty());
        assert!(body.facings.is_empty());
        assert!(motor.target().is_none());
    }

    #[test]
    fn target_and_facing_modes_are_exclusive() {
        let mut motor = actuator();
        motor.set_target(Vec3::new(5.0, 0.0, 0.0));
        motor.set_facing_only(Vec3::Z);
        assert!(motor.target().is_none());

        motor.set_target(Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(motor.target(), Some(Vec3::new(5.0, 0.0, 0.0)));
        let mut body = RecordingBody::at(Vec3::ZERO);
        motor.tick(&mut body);
        // Back in movement mode: force applied again.
        assert!(!body.forces.is_empty());
    }
}

// ── MoveInput seam ────────────────────────────────────────────────────────────

#[cfg(test)]
mod move_input {
    use glam::Vec2;

    use crate::{Locomotion, ManualMove, MotorConfig, MoveInput};

    #[test]
    fn manual_move_clamps_to_unit() {
        let mut manual = ManualMove::default();
        manual.set(Vec2::new(3.0, 4.0));
        assert!((manual.current_move_input().length() - 1.0).abs() < 1e-5);
        manual.clear();
        assert_eq!(manual.current_move_input(), Vec2::ZERO);
    }

    #[test]
    fn both_actuators_share_the_seam() {
        // Consumers hold &dyn MoveInput and never learn which kind drives it.
        let motor = Locomotion::new(MotorConfig::default());
        let manual = ManualMove::default();
        let sources: Vec<&dyn MoveInput> = vec![&motor, &manual];
        for s in sources {
            assert_eq!(s.current_move_input(), Vec2::ZERO);
        }
    }
}
