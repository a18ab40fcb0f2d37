//! The per-step engine: forcing → thermal → evaporation → discharge →
//! invariant checks → record.

use still_core::{SimRng, StillClock, StillConfig, Tick};

use crate::brine::DischargeController;
use crate::constants::{MAX_PLAUSIBLE_TEMP_C, MIN_PLAUSIBLE_TEMP_C};
use crate::error::{PhysicsError, PhysicsResult};
use crate::evaporation;
use crate::forcing;
use crate::state::{StepRecord, StillState};
use crate::thermal::{self, ThermalCoeffs};

/// Owns the derived coefficients and applies one full update per tick.
///
/// The engine itself is immutable after construction; all mutation goes
/// through the `&mut StillState` the driver loop threads in.
#[derive(Debug, Clone)]
pub struct StillEngine {
    coeffs:     ThermalCoeffs,
    controller: DischargeController,

    condensation_efficiency: f64,
    noise_std_w_m2:          f64,
    dt_hours:                f64,
}

impl StillEngine {
    pub fn new(cfg: &StillConfig) -> Self {
        Self {
            coeffs:                  ThermalCoeffs::from_config(cfg),
            controller:              DischargeController::from_config(cfg),
            condensation_efficiency: cfg.condensation_efficiency,
            noise_std_w_m2:          cfg.noise_std_w_m2,
            dt_hours:                cfg.step_mins as f64 / 60.0,
        }
    }

    /// Advance `state` by one step and return the trajectory record for it.
    ///
    /// Consumes one forcing sample from `rng`.  Fails — without mutating any
    /// further — when the basin runs dry or the updated state leaves the
    /// plausibility window.
    pub fn step(
        &self,
        state: &mut StillState,
        clock: &StillClock,
        rng:   &mut SimRng,
    ) -> PhysicsResult<StepRecord> {
        let tick = clock.current_tick;
        let hour = clock.hour_of_day();

        // ── ① Forcing ─────────────────────────────────────────────────────
        let forcing = forcing::sample(hour, self.noise_std_w_m2, rng);

        // ── ② Thermal update (explicit, previous temperature only) ────────
        let thermal = thermal::thermal_step(state.water_temp_c, &forcing, &self.coeffs, self.dt_hours);

        // ── ③ Evaporation and salt balance ────────────────────────────────
        let evap = evaporation::evaporation_step(
            forcing.radiation_w_m2,
            thermal.water_temp_c,
            state.salinity_g_l,
            self.coeffs.area_m2,
            state.volume_l,
            self.condensation_efficiency,
            self.dt_hours,
        )
        .ok_or(PhysicsError::BasinDry { tick })?;

        // ── ④ Discharge control ───────────────────────────────────────────
        let discharge = self.controller.inspect(evap.volume_l, evap.salinity_g_l);

        // ── ⑤ Commit and check ────────────────────────────────────────────
        let next = StillState {
            water_temp_c: thermal.water_temp_c,
            glass_temp_c: thermal.glass_temp_c,
            salinity_g_l: discharge.salinity_g_l,
            volume_l:     discharge.volume_l,
            distillate_l: state.distillate_l + evap.distillate_l,
        };
        check_invariants(&next, tick)?;
        *state = next;

        Ok(StepRecord {
            step:                tick.0,
            elapsed_mins:        clock.elapsed_mins(),
            hour_of_day:         hour,
            radiation_w_m2:      forcing.radiation_w_m2,
            ambient_c:           forcing.ambient_c,
            water_c:             state.water_temp_c,
            glass_c:             state.glass_temp_c,
            evaporation_l_per_h: evap.rate_l_per_h,
            salinity_g_l:        state.salinity_g_l,
            volume_l:            state.volume_l,
            distillate_l:        state.distillate_l,
            absorbed_w:          thermal.absorbed_w,
            lost_w:              thermal.lost_w,
            discharged:          discharge.occurred,
        })
    }
}

/// Reject states no valid parameterization can reach.
///
/// The ambient ≤ glass ≤ water ordering of normal operation is *not*
/// enforced: stochastic forcing legitimately produces transient inversions
/// at night.  What is enforced is finiteness, non-negative volume and
/// salinity, and a generous temperature plausibility window — anything
/// outside it means a broken configuration or an unstable step size.
pub(crate) fn check_invariants(state: &StillState, tick: Tick) -> PhysicsResult<()> {
    let checks: [(&'static str, f64); 5] = [
        ("water_temp_c", state.water_temp_c),
        ("glass_temp_c", state.glass_temp_c),
        ("salinity_g_l", state.salinity_g_l),
        ("volume_l", state.volume_l),
        ("distillate_l", state.distillate_l),
    ];
    for (invariant, value) in checks {
        if !value.is_finite() {
            return Err(PhysicsError::Invariant { invariant, value, tick });
        }
    }

    for (invariant, value) in [
        ("water_temp_c in plausible range", state.water_temp_c),
        ("glass_temp_c in plausible range", state.glass_temp_c),
    ] {
        if !(MIN_PLAUSIBLE_TEMP_C..=MAX_PLAUSIBLE_TEMP_C).contains(&value) {
            return Err(PhysicsError::Invariant { invariant, value, tick });
        }
    }

    if state.salinity_g_l < 0.0 {
        return Err(PhysicsError::Invariant {
            invariant: "salinity_g_l >= 0",
            value:     state.salinity_g_l,
            tick,
        });
    }
    if state.volume_l < 0.0 {
        return Err(PhysicsError::Invariant {
            invariant: "volume_l >= 0",
            value:     state.volume_l,
            tick,
        });
    }
    Ok(())
}
