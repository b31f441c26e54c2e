//! Unit tests for roam-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, PartId, PointId, RoomId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(RoomId(100) > RoomId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(PointId::INVALID.0, u32::MAX);
        assert_eq!(PartId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(PointId(7).to_string(), "PointId(7)");
    }
}

#[cfg(test)]
mod math {
    use glam::Vec3;

    use crate::math::{flat_dir, flat_distance, flat_len, flat_normalize, flatten, to_plane};

    #[test]
    fn flatten_zeroes_y() {
        let v = flatten(Vec3::new(3.0, 7.0, -4.0));
        assert_eq!(v, Vec3::new(3.0, 0.0, -4.0));
    }

    #[test]
    fn flat_distance_ignores_y() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 99.0, 4.0);
        assert!((flat_distance(a, b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_rejects_vertical() {
        // Purely vertical input has no horizontal direction.
        assert!(flat_normalize(Vec3::new(0.0, 5.0, 0.0)).is_none());
        let d = flat_normalize(Vec3::new(0.0, 5.0, 2.0)).unwrap();
        assert!((flat_len(d) - 1.0).abs() < 1e-6);
        assert_eq!(d.y, 0.0);
    }

    #[test]
    fn dir_between_coincident_points_is_none() {
        let p = Vec3::new(1.0, 0.0, 1.0);
        let above = Vec3::new(1.0, 3.0, 1.0);
        assert!(flat_dir(p, above).is_none());
    }

    #[test]
    fn plane_projection() {
        let v = to_plane(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!((v.x, v.y), (1.0, 3.0));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(100); // 100 Hz
        assert_eq!(clock.elapsed_secs(), 0.0);
        for _ in 0..250 {
            clock.advance();
        }
        assert!((clock.elapsed_secs() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn dt_matches_rate() {
        let clock = SimClock::new(100);
        assert!((clock.dt_secs() - 0.01).abs() < 1e-9);
    }

    #[test]
    fn ticks_for_duration_rounds_up() {
        let clock = SimClock::new(100);
        assert_eq!(clock.ticks_for_secs(1.0), 100);
        // partial tick rounds up
        assert_eq!(clock.ticks_for_secs(0.015), 2);
    }

    #[test]
    fn sim_config_end_tick() {
        let cfg = SimConfig {
            tick_hz: 100,
            total_ticks: 6_000, // one minute
            seed: 42,
            output_interval_ticks: 100,
        };
        assert_eq!(cfg.end_tick(), Tick(6_000));
    }
}

#[cfg(test)]
mod rng {
    use crate::math::flat_len;
    use crate::{AgentId, AgentRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f32..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn sim_rng_children_are_reproducible() {
        use crate::SimRng;
        let mut a = SimRng::new(42);
        let mut b = SimRng::new(42);
        let x: u64 = a.child(1).random();
        let y: u64 = b.child(1).random();
        assert_eq!(x, y);
        let z: u64 = SimRng::new(42).child(2).random();
        assert_ne!(x, z);
    }

    #[test]
    fn unit_dir_is_horizontal_and_normalized() {
        let mut rng = AgentRng::new(7, AgentId(3));
        for _ in 0..100 {
            let d = rng.unit_dir_xz();
            assert_eq!(d.y, 0.0);
            assert!((flat_len(d) - 1.0).abs() < 1e-5);
        }
    }
}
