//! Simulation state and the per-step trajectory record.

use still_core::StillConfig;

use crate::forcing;

/// The mutable state threaded through the step loop.
///
/// Exactly one instance exists per run, owned by the driver loop and mutated
/// once per tick by [`StillEngine::step`][crate::StillEngine::step].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StillState {
    /// Basin water temperature, °C.
    pub water_temp_c: f64,
    /// Glass cover temperature, °C.
    pub glass_temp_c: f64,
    /// Brine salinity, g/L.  Rises between discharges, resets at each one.
    pub salinity_g_l: f64,
    /// Brine volume, L.  Falls between discharges.
    pub volume_l: f64,
    /// Cumulative distillate yield, L.  Non-decreasing; the primary output.
    pub distillate_l: f64,
}

impl StillState {
    /// The state at tick 0: both temperatures at the ambient value for the
    /// start hour, the feed salinity, a full basin, zero yield.
    pub fn initial(cfg: &StillConfig) -> Self {
        let ambient = forcing::ambient_temperature(cfg.start_hour);
        Self {
            water_temp_c: ambient,
            glass_temp_c: ambient,
            salinity_g_l: cfg.feed_salinity_g_l,
            volume_l:     cfg.initial_volume_l(),
            distillate_l: 0.0,
        }
    }
}

/// One element of the output trajectory — the full state plus the forcing
/// and energy terms for a single tick.
///
/// `Copy + PartialEq` so that determinism (same seed ⇒ identical records)
/// is directly assertable.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepRecord {
    /// Step index.
    pub step: u64,
    /// Simulated minutes since the start of the run.
    pub elapsed_mins: u64,
    /// Hour of day in [0, 24).
    pub hour_of_day: f64,
    /// Solar radiation this step, W/m².
    pub radiation_w_m2: f64,
    /// Ambient temperature this step, °C.
    pub ambient_c: f64,
    /// Water temperature after the update, °C.
    pub water_c: f64,
    /// Glass temperature after the update, °C.
    pub glass_c: f64,
    /// Instantaneous evaporation rate, L/h.
    pub evaporation_l_per_h: f64,
    /// Salinity after the update (post-discharge if one fired), g/L.
    pub salinity_g_l: f64,
    /// Brine volume after the update, L.
    pub volume_l: f64,
    /// Cumulative distillate, L.
    pub distillate_l: f64,
    /// Radiation captured by the basin, W.
    pub absorbed_w: f64,
    /// Outward losses to ambient, W.
    pub lost_w: f64,
    /// Whether a brine discharge fired this step.
    pub discharged: bool,
}
