//! Unit tests for the model components.

/// Helper: assert two f64 values are close.
fn assert_approx(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() < tol,
        "expected {expected} ± {tol}, got {actual}"
    );
}

#[cfg(test)]
mod forcing {
    use still_core::SimRng;

    use super::assert_approx;
    use crate::constants::{AMBIENT_MEAN_C, AMBIENT_SWING_C, PEAK_RADIATION_W_M2};
    use crate::forcing::{ambient_temperature, clear_sky_radiation, sample};

    #[test]
    fn radiation_zero_outside_daylight() {
        for hour in [0.0, 3.0, 5.9, 18.0, 21.0, 23.9] {
            assert_eq!(clear_sky_radiation(hour), 0.0, "hour {hour}");
        }
    }

    #[test]
    fn radiation_peaks_at_solar_noon() {
        assert_approx(clear_sky_radiation(12.0), PEAK_RADIATION_W_M2, 1e-9);
        assert!(clear_sky_radiation(8.0) < clear_sky_radiation(10.0));
        assert!(clear_sky_radiation(10.0) < clear_sky_radiation(12.0));
        assert!(clear_sky_radiation(14.0) < clear_sky_radiation(12.0));
    }

    #[test]
    fn radiation_morning_evening_symmetry() {
        assert_approx(clear_sky_radiation(9.0), clear_sky_radiation(15.0), 1e-9);
    }

    #[test]
    fn ambient_peaks_mid_afternoon() {
        assert_approx(ambient_temperature(15.0), AMBIENT_MEAN_C + AMBIENT_SWING_C, 1e-9);
        assert_approx(ambient_temperature(3.0), AMBIENT_MEAN_C - AMBIENT_SWING_C, 1e-9);
        for hour in 0..24 {
            let t = ambient_temperature(hour as f64);
            assert!(t >= AMBIENT_MEAN_C - AMBIENT_SWING_C - 1e-9);
            assert!(t <= AMBIENT_MEAN_C + AMBIENT_SWING_C + 1e-9);
        }
    }

    #[test]
    fn zero_noise_matches_clear_sky_exactly() {
        let mut rng = SimRng::new(Some(1));
        for hour in [0.0, 7.5, 12.0, 16.25] {
            let f = sample(hour, 0.0, &mut rng);
            assert_eq!(f.radiation_w_m2, clear_sky_radiation(hour));
            assert_eq!(f.ambient_c, ambient_temperature(hour));
        }
    }

    #[test]
    fn noisy_radiation_clamped_nonnegative() {
        // At night the clear-sky value is 0, so roughly half the raw draws
        // would be negative without the clamp.
        let mut rng = SimRng::new(Some(7));
        for _ in 0..200 {
            let f = sample(0.0, 500.0, &mut rng);
            assert!(f.radiation_w_m2 >= 0.0);
        }
    }
}

#[cfg(test)]
mod thermal {
    use still_core::StillConfig;

    use crate::forcing::Forcing;
    use crate::thermal::{ThermalCoeffs, glass_equilibrium, thermal_step};

    fn coeffs() -> ThermalCoeffs {
        ThermalCoeffs::from_config(&StillConfig::default())
    }

    #[test]
    fn midday_radiation_warms_water() {
        let f = Forcing { radiation_w_m2: 800.0, ambient_c: 30.0 };
        let upd = thermal_step(30.0, &f, &coeffs(), 1.0 / 6.0);
        assert!(upd.water_temp_c > 30.0);
        assert!(upd.absorbed_w > 0.0);
    }

    #[test]
    fn night_losses_cool_water_toward_ambient() {
        let f = Forcing { radiation_w_m2: 0.0, ambient_c: 20.0 };
        let upd = thermal_step(40.0, &f, &coeffs(), 1.0 / 6.0);
        assert!(upd.water_temp_c < 40.0);
        assert!(upd.water_temp_c > 20.0, "must not overshoot past ambient at minute-scale steps");
    }

    #[test]
    fn glass_sits_between_water_and_ambient_without_sun() {
        let g = glass_equilibrium(45.0, 25.0, 0.0);
        assert!(g > 25.0 && g < 45.0, "got {g}");
    }

    #[test]
    fn wick_lining_raises_absorption() {
        let cfg = StillConfig::default();
        let wick_cfg = StillConfig { wick_lining: true, ..cfg.clone() };
        let f = Forcing { radiation_w_m2: 700.0, ambient_c: 30.0 };

        let plain = thermal_step(35.0, &f, &ThermalCoeffs::from_config(&cfg), 0.25);
        let wick = thermal_step(35.0, &f, &ThermalCoeffs::from_config(&wick_cfg), 0.25);
        assert!(wick.absorbed_w > plain.absorbed_w);
        assert!(wick.water_temp_c > plain.water_temp_c);
    }

    #[test]
    fn pcm_damps_the_temperature_step() {
        let cfg = StillConfig::default();
        let pcm_cfg = StillConfig { pcm_storage: true, ..cfg.clone() };
        let f = Forcing { radiation_w_m2: 900.0, ambient_c: 32.0 };

        let plain = thermal_step(35.0, &f, &ThermalCoeffs::from_config(&cfg), 0.25);
        let pcm = thermal_step(35.0, &f, &ThermalCoeffs::from_config(&pcm_cfg), 0.25);
        let plain_delta = plain.water_temp_c - 35.0;
        let pcm_delta = pcm.water_temp_c - 35.0;
        assert!(pcm_delta > 0.0);
        assert!(pcm_delta < plain_delta, "PCM must slow the swing: {pcm_delta} vs {plain_delta}");
    }

    #[test]
    fn losses_never_negative() {
        // Basin colder than the night air: both flows point inward and the
        // reported loss floors at zero.
        let f = Forcing { radiation_w_m2: 0.0, ambient_c: 25.0 };
        let upd = thermal_step(10.0, &f, &coeffs(), 1.0 / 6.0);
        assert_eq!(upd.lost_w, 0.0);

        // Hot basin: losses strictly positive.
        let f = Forcing { radiation_w_m2: 0.0, ambient_c: 20.0 };
        let upd = thermal_step(50.0, &f, &coeffs(), 1.0 / 6.0);
        assert!(upd.lost_w > 0.0);
    }
}

#[cfg(test)]
mod evaporation {
    use super::assert_approx;
    use crate::evaporation::{
        evaporation_rate_l_per_h, evaporation_step, salt_suppression, saturation_vapor_pressure_pa,
    };

    #[test]
    fn vapor_pressure_increases_with_temperature() {
        let mut last = 0.0;
        for t in [0.0, 10.0, 25.0, 40.0, 60.0, 80.0, 100.0] {
            let p = saturation_vapor_pressure_pa(t);
            assert!(p > last, "p_sat must rise with T: {p} at {t}");
            last = p;
        }
        // Magnus lands within a few percent of 1 atm at the boiling point.
        let boiling = saturation_vapor_pressure_pa(100.0);
        assert!((90_000.0..110_000.0).contains(&boiling), "got {boiling}");
    }

    #[test]
    fn suppression_decreasing_and_never_zero() {
        assert_eq!(salt_suppression(0.0), 1.0);
        let mut last = 1.0;
        for c in [10.0, 35.0, 70.0, 150.0, 1_000.0] {
            let s = salt_suppression(c);
            assert!(s < last);
            assert!(s > 0.0);
            last = s;
        }
    }

    #[test]
    fn rate_strictly_increases_with_radiation() {
        let lo = evaporation_rate_l_per_h(400.0, 45.0, 35.0, 1.0);
        let hi = evaporation_rate_l_per_h(800.0, 45.0, 35.0, 1.0);
        assert!(hi > lo);
    }

    #[test]
    fn rate_strictly_increases_with_water_temperature() {
        let lo = evaporation_rate_l_per_h(600.0, 35.0, 35.0, 1.0);
        let hi = evaporation_rate_l_per_h(600.0, 45.0, 35.0, 1.0);
        assert!(hi > lo);
    }

    #[test]
    fn rate_strictly_decreases_with_salinity() {
        let fresh = evaporation_rate_l_per_h(600.0, 45.0, 20.0, 1.0);
        let briny = evaporation_rate_l_per_h(600.0, 45.0, 60.0, 1.0);
        assert!(briny < fresh);
    }

    #[test]
    fn dark_still_keeps_evaporating() {
        // Warm water under a night sky: the vapor-pressure term alone drives
        // a small positive rate (this is what PCM storage exploits).
        assert!(evaporation_rate_l_per_h(0.0, 30.0, 35.0, 1.0) > 0.0);
    }

    #[test]
    fn step_conserves_salt_mass() {
        let out = evaporation_step(800.0, 50.0, 35.0, 1.0, 20.0, 0.8, 1.0).unwrap();
        assert!(out.evaporated_l > 0.0);
        assert!(out.volume_l < 20.0);
        assert!(out.salinity_g_l > 35.0);
        assert_approx(out.salinity_g_l * out.volume_l, 35.0 * 20.0, 1e-9);
    }

    #[test]
    fn distillate_scaled_by_condensation_efficiency() {
        let out = evaporation_step(800.0, 50.0, 35.0, 1.0, 20.0, 0.8, 1.0).unwrap();
        assert_approx(out.distillate_l, out.evaporated_l * 0.8, 1e-12);
    }

    #[test]
    fn uncapped_step_matches_rate_times_dt() {
        let out = evaporation_step(600.0, 45.0, 35.0, 1.0, 20.0, 1.0, 0.5).unwrap();
        assert_approx(out.evaporated_l, out.rate_l_per_h * 0.5, 1e-12);
    }

    #[test]
    fn draining_the_basin_is_reported() {
        // 10 mL of brine against an hour of midday evaporation: the cap
        // leaves zero volume, whose salinity is undefined.
        let out = evaporation_step(800.0, 50.0, 35.0, 1.0, 0.01, 0.8, 1.0);
        assert!(out.is_none());
    }
}

#[cfg(test)]
mod brine {
    use still_core::StillConfig;

    use super::assert_approx;
    use crate::brine::DischargeController;

    fn controller(threshold: f64, fraction: f64) -> DischargeController {
        DischargeController {
            threshold_g_l:     threshold,
            fraction,
            feed_salinity_g_l: 35.0,
        }
    }

    #[test]
    fn below_threshold_is_a_noop() {
        let out = controller(70.0, 0.5).inspect(18.0, 55.0);
        assert!(!out.occurred);
        assert_eq!(out.volume_l, 18.0);
        assert_eq!(out.salinity_g_l, 55.0);
        assert_eq!(out.brine_removed_l, 0.0);
    }

    #[test]
    fn above_threshold_mixes_toward_feed() {
        let out = controller(70.0, 0.5).inspect(18.0, 80.0);
        assert!(out.occurred);
        assert_eq!(out.volume_l, 18.0, "refill matches draw-off");
        assert_approx(out.brine_removed_l, 9.0, 1e-12);
        assert_approx(out.salinity_g_l, 0.5 * 80.0 + 0.5 * 35.0, 1e-12);
    }

    #[test]
    fn full_exchange_resets_to_feed_baseline() {
        let out = controller(70.0, 1.0).inspect(18.0, 92.0);
        assert!(out.occurred);
        assert_approx(out.salinity_g_l, 35.0, 1e-12);
    }

    #[test]
    fn exchange_conserves_salt_mass() {
        let (volume, salinity, fraction) = (16.0, 85.0, 0.4);
        let out = controller(70.0, fraction).inspect(volume, salinity);
        let expected_mass =
            salinity * volume - fraction * volume * salinity + fraction * volume * 35.0;
        assert_approx(out.salinity_g_l * out.volume_l, expected_mass, 1e-9);
    }

    #[test]
    fn from_config_picks_up_parameters() {
        let cfg = StillConfig::default();
        let ctl = DischargeController::from_config(&cfg);
        assert_eq!(ctl.threshold_g_l, cfg.discharge_threshold_g_l);
        assert_eq!(ctl.fraction, cfg.discharge_fraction);
        assert_eq!(ctl.feed_salinity_g_l, cfg.feed_salinity_g_l);
    }
}

#[cfg(test)]
mod state {
    use still_core::StillConfig;

    use super::assert_approx;
    use crate::forcing::ambient_temperature;
    use crate::state::StillState;

    #[test]
    fn initial_state_from_config() {
        let cfg = StillConfig::default();
        let state = StillState::initial(&cfg);
        assert_eq!(state.volume_l, 20.0);
        assert_eq!(state.salinity_g_l, 35.0);
        assert_eq!(state.distillate_l, 0.0);
        let ambient = ambient_temperature(cfg.start_hour);
        assert_approx(state.water_temp_c, ambient, 1e-12);
        assert_approx(state.glass_temp_c, ambient, 1e-12);
    }
}

#[cfg(test)]
mod engine {
    use still_core::{SimRng, StillConfig, Tick};

    use crate::engine::StillEngine;
    use crate::error::PhysicsError;
    use crate::state::StillState;

    fn quiet_config() -> StillConfig {
        StillConfig {
            noise_std_w_m2: 0.0,
            seed: Some(42),
            ..StillConfig::default()
        }
    }

    #[test]
    fn first_step_record_is_consistent() {
        let cfg = quiet_config();
        let engine = StillEngine::new(&cfg);
        let mut state = StillState::initial(&cfg);
        let clock = cfg.make_clock();
        let mut rng = SimRng::new(cfg.seed);

        let rec = engine.step(&mut state, &clock, &mut rng).unwrap();
        assert_eq!(rec.step, 0);
        assert_eq!(rec.elapsed_mins, 0);
        assert_eq!(rec.hour_of_day, 0.0);
        assert_eq!(rec.radiation_w_m2, 0.0, "midnight, zero noise");
        assert_eq!(rec.absorbed_w, 0.0);
        assert!(!rec.discharged);
        assert!(rec.volume_l < 20.0, "night evaporation still removes volume");
        assert!(rec.salinity_g_l > 35.0);
        assert!(rec.distillate_l > 0.0);
        assert_eq!(rec.volume_l, state.volume_l);
        assert_eq!(rec.distillate_l, state.distillate_l);
    }

    #[test]
    fn invariant_checker_names_the_broken_field() {
        let cfg = quiet_config();
        let mut state = StillState::initial(&cfg);

        state.water_temp_c = f64::NAN;
        match crate::engine::check_invariants(&state, Tick(3)) {
            Err(PhysicsError::Invariant { invariant, tick, .. }) => {
                assert_eq!(invariant, "water_temp_c");
                assert_eq!(tick, Tick(3));
            }
            other => panic!("expected Invariant, got {other:?}"),
        }

        let mut state = StillState::initial(&cfg);
        state.glass_temp_c = 250.0;
        match crate::engine::check_invariants(&state, Tick(9)) {
            Err(PhysicsError::Invariant { invariant, value, .. }) => {
                assert_eq!(invariant, "glass_temp_c in plausible range");
                assert_eq!(value, 250.0);
            }
            other => panic!("expected Invariant, got {other:?}"),
        }
    }

    #[test]
    fn micro_basin_runs_dry_with_tick() {
        // One micron of depth holds ~1 mL — less than a single step of
        // evaporation.
        let cfg = StillConfig {
            basin_depth_m: 1e-6,
            ..quiet_config()
        };
        let engine = StillEngine::new(&cfg);
        let mut state = StillState::initial(&cfg);
        let clock = cfg.make_clock();
        let mut rng = SimRng::new(cfg.seed);

        match engine.step(&mut state, &clock, &mut rng) {
            Err(PhysicsError::BasinDry { tick }) => assert_eq!(tick, Tick(0)),
            other => panic!("expected BasinDry, got {other:?}"),
        }
    }
}
