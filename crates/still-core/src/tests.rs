//! Unit tests for still-core primitives.

#[cfg(test)]
mod time {
    use crate::{StillClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn tick_display() {
        assert_eq!(Tick(7).to_string(), "T7");
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = StillClock::new(10, 0.0);
        assert_eq!(clock.elapsed_mins(), 0);
        clock.advance();
        assert_eq!(clock.elapsed_mins(), 10);
        for _ in 0..5 {
            clock.advance();
        }
        assert_eq!(clock.elapsed_mins(), 60);
        assert_eq!(clock.elapsed_hours(), 1.0);
    }

    #[test]
    fn hour_of_day_wraps_at_midnight() {
        let mut clock = StillClock::new(60, 22.0);
        assert_eq!(clock.hour_of_day(), 22.0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.hour_of_day(), 0.0);
        clock.advance();
        assert_eq!(clock.hour_of_day(), 1.0);
    }

    #[test]
    fn clock_dhm() {
        let mut clock = StillClock::new(60, 0.0);
        // Advance 25 hours.
        for _ in 0..25 {
            clock.advance();
        }
        let (d, h, m) = clock.elapsed_dhm();
        assert_eq!(d, 1);
        assert_eq!(h, 1);
        assert_eq!(m, 0);
    }
}

#[cfg(test)]
mod config {
    use crate::{StillConfig, StillError};

    fn base() -> StillConfig {
        StillConfig {
            seed: Some(42),
            ..StillConfig::default()
        }
    }

    #[test]
    fn default_config_is_valid() {
        base().validate().unwrap();
    }

    #[test]
    fn derived_quantities() {
        let cfg = base();
        assert_eq!(cfg.initial_volume_l(), 20.0); // 1 m² × 0.02 m
        assert_eq!(cfg.total_steps(), 144); // 24 h at 10 min
    }

    fn offending_param(cfg: StillConfig) -> &'static str {
        match cfg.validate().unwrap_err() {
            StillError::InvalidParameter { name, .. } => name,
            other => panic!("expected InvalidParameter, got {other}"),
        }
    }

    #[test]
    fn rejects_nonpositive_geometry() {
        let mut cfg = base();
        cfg.basin_area_m2 = 0.0;
        assert_eq!(offending_param(cfg), "basin_area_m2");

        let mut cfg = base();
        cfg.basin_depth_m = -0.01;
        assert_eq!(offending_param(cfg), "basin_depth_m");
    }

    #[test]
    fn rejects_bad_efficiency() {
        let mut cfg = base();
        cfg.condensation_efficiency = 1.2;
        assert_eq!(offending_param(cfg), "condensation_efficiency");
    }

    #[test]
    fn rejects_bad_discharge_fraction() {
        let mut cfg = base();
        cfg.discharge_fraction = 0.0;
        assert_eq!(offending_param(cfg), "discharge_fraction");

        let mut cfg = base();
        cfg.discharge_fraction = 1.5;
        assert_eq!(offending_param(cfg), "discharge_fraction");
    }

    #[test]
    fn rejects_threshold_at_or_below_feed() {
        let mut cfg = base();
        cfg.discharge_threshold_g_l = cfg.feed_salinity_g_l;
        assert_eq!(offending_param(cfg), "discharge_threshold_g_l");
    }

    #[test]
    fn rejects_negative_noise() {
        let mut cfg = base();
        cfg.noise_std_w_m2 = -1.0;
        assert_eq!(offending_param(cfg), "noise_std_w_m2");
    }

    #[test]
    fn rejects_zero_step() {
        let mut cfg = base();
        cfg.step_mins = 0;
        assert_eq!(offending_param(cfg), "step_mins");
    }

    #[test]
    fn rejects_degenerate_horizon() {
        let mut cfg = base();
        cfg.horizon_hours = 1;
        cfg.step_mins = 90; // one step does not fit
        match cfg.validate().unwrap_err() {
            StillError::EmptyHorizon { horizon_hours, step_mins } => {
                assert_eq!(horizon_hours, 1);
                assert_eq!(step_mins, 90);
            }
            other => panic!("expected EmptyHorizon, got {other}"),
        }
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(Some(12345));
        let mut r2 = SimRng::new(Some(12345));
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut r1 = SimRng::new(Some(1));
        let mut r2 = SimRng::new(Some(2));
        let a: u64 = r1.random();
        let b: u64 = r2.random();
        assert_ne!(a, b);
    }

    #[test]
    fn children_are_independent() {
        let mut root = SimRng::new(Some(7));
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let a: u64 = c0.random();
        let b: u64 = c1.random();
        assert_ne!(a, b, "sibling child streams should diverge");
    }

    #[test]
    fn normal_zero_std_returns_mean() {
        let mut rng = SimRng::new(Some(0));
        for _ in 0..10 {
            assert_eq!(rng.normal(650.0, 0.0), 650.0);
        }
    }

    #[test]
    fn normal_samples_spread_around_mean() {
        let mut rng = SimRng::new(Some(0));
        let n = 2_000;
        let mean: f64 = (0..n).map(|_| rng.normal(0.0, 30.0)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 3.0, "sample mean {mean} too far from 0");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(Some(0));
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f64..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }
}
