//! Unit tests for tether-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentHandle, ControllerId};

    #[test]
    fn equality_is_identity() {
        assert_eq!(AgentHandle(7), AgentHandle(7));
        assert_ne!(AgentHandle(7), AgentHandle(8));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentHandle::INVALID.0, u64::MAX);
        assert_eq!(ControllerId::INVALID.0, u32::MAX);
        assert!(!AgentHandle::default().is_valid());
        assert!(AgentHandle(0).is_valid());
    }

    #[test]
    fn controller_id_next() {
        assert_eq!(ControllerId(4).next(), ControllerId(5));
    }

    #[test]
    fn display() {
        assert_eq!(AgentHandle(3).to_string(), "AgentHandle(3)");
        assert_eq!(ControllerId(1).to_string(), "ControllerId(1)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Point3;

    #[test]
    fn zero_distance() {
        let p = Point3::new(10.0, 2.0, -4.0);
        assert_eq!(p.distance(p), 0.0);
        assert_eq!(p.horizontal_distance(p), 0.0);
    }

    #[test]
    fn pythagorean_distance() {
        let a = Point3::ZERO;
        let b = Point3::new(3.0, 0.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn horizontal_distance_ignores_height() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 25.0, 4.0);
        assert!((a.horizontal_distance(b) - 5.0).abs() < 1e-6);
        assert!(a.distance(b) > 25.0);
    }

    #[test]
    fn offset_keeps_height() {
        let p = Point3::new(1.0, 7.0, 1.0).offset_horizontal(0.5, -0.5);
        assert_eq!(p, Point3::new(1.5, 7.0, 0.5));
    }

    #[test]
    fn non_finite_detected() {
        assert!(Point3::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Point3::new(f32::NAN, 0.0, 0.0).is_finite());
    }
}

#[cfg(test)]
mod time {
    use crate::{Countdown, Stopwatch};

    #[test]
    fn countdown_expires_exactly_at_duration() {
        let mut c = Countdown::new(0.5);
        assert!(!c.advance(0.125));
        assert!(!c.advance(0.125));
        assert!(!c.advance(0.125));
        assert!(c.advance(0.125));
        assert_eq!(c.remaining(), 0.0);
    }

    #[test]
    fn countdown_tolerates_float_drift() {
        // 1/60 does not add up to exactly 1.0 in f32.
        let mut c = Countdown::new(1.0);
        let mut expired_at = None;
        for frame in 1..=61 {
            if c.advance(1.0 / 60.0) {
                expired_at = Some(frame);
                break;
            }
        }
        assert_eq!(expired_at, Some(60));
    }

    #[test]
    fn countdown_stays_expired() {
        let mut c = Countdown::new(0.1);
        assert!(c.advance(1.0));
        assert!(c.advance(0.0));
        assert!(c.is_expired());
    }

    #[test]
    fn negative_inputs_clamped() {
        let mut c = Countdown::new(-3.0);
        assert!(c.is_expired());
        let mut s = Stopwatch::new();
        s.advance(-1.0);
        assert_eq!(s.elapsed(), 0.0);
    }

    #[test]
    fn stopwatch_accumulates_and_resets() {
        let mut s = Stopwatch::new();
        s.advance(0.25);
        assert_eq!(s.advance(0.25), 0.5);
        assert!(!s.exceeds(0.5));
        s.advance(0.25);
        assert!(s.exceeds(0.5));
        s.reset();
        assert_eq!(s.elapsed(), 0.0);
    }
}

#[cfg(test)]
mod rng {
    use crate::{ControllerId, JitterRng, Point3};

    #[test]
    fn same_seed_same_scatter() {
        let mut a = JitterRng::new(42);
        let mut b = JitterRng::new(42);
        for _ in 0..16 {
            assert_eq!(a.scatter(Point3::ZERO, 1.0), b.scatter(Point3::ZERO, 1.0));
        }
    }

    #[test]
    fn scatter_within_radius_and_keeps_height() {
        let mut r = JitterRng::new(7);
        let target = Point3::new(10.0, 3.0, 10.0);
        for _ in 0..200 {
            let p = r.scatter(target, 1.5);
            assert!((p.x - target.x).abs() <= 1.5);
            assert!((p.z - target.z).abs() <= 1.5);
            assert_eq!(p.y, target.y);
        }
    }

    #[test]
    fn zero_radius_is_identity() {
        let mut r = JitterRng::new(1);
        let target = Point3::new(4.0, 0.0, -2.0);
        assert_eq!(r.scatter(target, 0.0), target);
    }

    #[test]
    fn controller_streams_differ() {
        let mut a = JitterRng::for_controller(9, ControllerId(0));
        let mut b = JitterRng::for_controller(9, ControllerId(1));
        let pa: Vec<f32> = (0..8).map(|_| a.symmetric(1.0)).collect();
        let pb: Vec<f32> = (0..8).map(|_| b.symmetric(1.0)).collect();
        assert_ne!(pa, pb);
    }
}

#[cfg(test)]
mod config {
    use crate::{FollowConfig, MovementConfig, TetherConfig, TetherError};

    #[test]
    fn defaults_are_valid() {
        TetherConfig::default().validate().unwrap();
    }

    #[test]
    fn radius_ordering_enforced() {
        let follow = FollowConfig {
            comfortable_radius:  12.0,
            force_follow_radius: 12.0,
            ..FollowConfig::default()
        };
        assert!(matches!(follow.validate(), Err(TetherError::Config(_))));

        let follow = FollowConfig {
            force_follow_radius: 40.0,
            teleport_radius:     30.0,
            ..FollowConfig::default()
        };
        assert!(follow.validate().is_err());
    }

    #[test]
    fn warmup_must_be_shorter_than_failsafe() {
        let movement = MovementConfig { warmup_secs: 15.0, ..MovementConfig::default() };
        assert!(movement.validate().is_err());
    }

    #[test]
    fn non_finite_values_rejected() {
        let movement = MovementConfig { arrival_epsilon: f32::NAN, ..MovementConfig::default() };
        assert!(movement.validate().is_err());
        let follow = FollowConfig { teleport_timeout_secs: f32::INFINITY, ..FollowConfig::default() };
        assert!(follow.validate().is_err());
    }

    #[test]
    fn zero_settle_delay_allowed() {
        let follow = FollowConfig { settle_delay_secs: 0.0, ..FollowConfig::default() };
        follow.validate().unwrap();
    }

    #[test]
    fn negative_jitter_rejected() {
        let cfg = TetherConfig { command_jitter: -1.0, ..TetherConfig::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("command_jitter"));
    }
}
