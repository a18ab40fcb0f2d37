//! Run configuration.

use crate::error::{StillError, StillResult};
use crate::time::StillClock;

/// Top-level simulation configuration.
///
/// Typically assembled by the application (hardcoded defaults, CLI flags, a
/// TOML file — the core prescribes no format) and handed to
/// `SimBuilder::new`.  All parameters are constant for the duration of a run.
///
/// Geometry is given as basin area and brine depth; the initial charge
/// follows from them (`initial_volume_l`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StillConfig {
    /// Basin (evaporating surface) area in m².
    pub basin_area_m2: f64,

    /// Brine depth in m.  Shallow basins heat faster and yield more.
    pub basin_depth_m: f64,

    /// Salinity of the feedwater, g/L.  Also the post-discharge baseline.
    pub feed_salinity_g_l: f64,

    /// Black wick lining on the absorber plate — raises effective
    /// absorptivity.
    pub wick_lining: bool,

    /// Phase-change storage under the basin — raises effective thermal mass,
    /// damping the diurnal temperature swing and extending evaporation into
    /// the night.
    pub pcm_storage: bool,

    /// Fraction of evaporated vapor recovered as distillate, in [0, 1].
    pub condensation_efficiency: f64,

    /// Salinity at which the discharge controller fires, g/L.  Must exceed
    /// the feed salinity or the controller would fire on the initial charge.
    pub discharge_threshold_g_l: f64,

    /// Fraction of the brine volume drawn off (and replaced by feedwater)
    /// per discharge, in (0, 1].
    pub discharge_fraction: f64,

    /// Standard deviation of the Gaussian radiation perturbation, W/m².
    /// Zero gives the noise-free clear-sky curve.
    pub noise_std_w_m2: f64,

    /// Hour of day (0..24) at tick 0.
    pub start_hour: f64,

    /// Simulated minutes per step.
    pub step_mins: u32,

    /// Total simulated horizon in hours.
    pub horizon_hours: u32,

    /// RNG seed.  `Some` makes the run reproducible; `None` seeds from
    /// entropy.
    pub seed: Option<u64>,
}

impl Default for StillConfig {
    /// A 1 m² pyramid still with 2 cm of seawater, matching the bench
    /// conditions the model coefficients were tuned against.
    fn default() -> Self {
        Self {
            basin_area_m2:           1.0,
            basin_depth_m:           0.02,
            feed_salinity_g_l:       35.0,
            wick_lining:             false,
            pcm_storage:             false,
            condensation_efficiency: 0.82,
            discharge_threshold_g_l: 70.0,
            discharge_fraction:      0.5,
            noise_std_w_m2:          30.0,
            start_hour:              0.0,
            step_mins:               10,
            horizon_hours:           24,
            seed:                    None,
        }
    }
}

impl StillConfig {
    /// Initial brine charge implied by the geometry, in liters.
    #[inline]
    pub fn initial_volume_l(&self) -> f64 {
        self.basin_area_m2 * self.basin_depth_m * 1_000.0
    }

    /// Total steps spanning the horizon (integer division — a horizon
    /// shorter than one step yields zero and fails validation).
    #[inline]
    pub fn total_steps(&self) -> u64 {
        (self.horizon_hours as u64 * 60) / self.step_mins.max(1) as u64
    }

    /// Construct a `StillClock` pre-configured for this run.
    pub fn make_clock(&self) -> StillClock {
        StillClock::new(self.step_mins, self.start_hour)
    }

    /// Reject configurations the engine cannot run.
    ///
    /// Called by `SimBuilder::build` before the loop starts, so a bad
    /// parameter is reported by name instead of surfacing mid-run as an
    /// invariant violation.
    pub fn validate(&self) -> StillResult<()> {
        fn require(ok: bool, name: &'static str, value: f64, constraint: &'static str) -> StillResult<()> {
            if ok {
                Ok(())
            } else {
                Err(StillError::InvalidParameter { name, value, constraint })
            }
        }

        require(self.basin_area_m2 > 0.0, "basin_area_m2", self.basin_area_m2, "must be > 0")?;
        require(self.basin_depth_m > 0.0, "basin_depth_m", self.basin_depth_m, "must be > 0")?;
        require(
            self.feed_salinity_g_l >= 0.0,
            "feed_salinity_g_l",
            self.feed_salinity_g_l,
            "must be >= 0",
        )?;
        require(
            (0.0..=1.0).contains(&self.condensation_efficiency),
            "condensation_efficiency",
            self.condensation_efficiency,
            "must be within [0, 1]",
        )?;
        require(
            self.discharge_threshold_g_l > self.feed_salinity_g_l,
            "discharge_threshold_g_l",
            self.discharge_threshold_g_l,
            "must exceed feed_salinity_g_l",
        )?;
        require(
            self.discharge_fraction > 0.0 && self.discharge_fraction <= 1.0,
            "discharge_fraction",
            self.discharge_fraction,
            "must be within (0, 1]",
        )?;
        require(
            self.noise_std_w_m2 >= 0.0,
            "noise_std_w_m2",
            self.noise_std_w_m2,
            "must be >= 0",
        )?;
        require(
            (0.0..24.0).contains(&self.start_hour),
            "start_hour",
            self.start_hour,
            "must be within [0, 24)",
        )?;
        require(self.step_mins > 0, "step_mins", self.step_mins as f64, "must be > 0")?;

        if self.total_steps() == 0 {
            return Err(StillError::EmptyHorizon {
                horizon_hours: self.horizon_hours,
                step_mins:     self.step_mins,
            });
        }
        Ok(())
    }
}
