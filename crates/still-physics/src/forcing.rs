//! Diurnal environment forcing.
//!
//! Radiation and ambient temperature are pure functions of the hour of day;
//! the only stochastic element is an additive Gaussian perturbation on the
//! radiation, drawn from the run's injected [`SimRng`].  Nothing here holds
//! state — forcing is recomputed fresh each step, never stored.

use still_core::SimRng;

use crate::constants::{
    AMBIENT_MEAN_C, AMBIENT_PEAK_HOUR, AMBIENT_SWING_C, PEAK_RADIATION_W_M2, SUNRISE_HOUR,
    SUNSET_HOUR,
};

/// Environmental conditions for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Forcing {
    /// Global solar radiation on the basin plane, W/m².  Never negative.
    pub radiation_w_m2: f64,
    /// Ambient air temperature, °C.
    pub ambient_c: f64,
}

/// Clear-sky radiation at `hour` (0..24): zero outside the daylight window,
/// a half-sine inside it peaking at solar noon.
pub fn clear_sky_radiation(hour: f64) -> f64 {
    if !(SUNRISE_HOUR..SUNSET_HOUR).contains(&hour) {
        return 0.0;
    }
    let phase = std::f64::consts::PI * (hour - SUNRISE_HOUR) / (SUNSET_HOUR - SUNRISE_HOUR);
    PEAK_RADIATION_W_M2 * phase.sin()
}

/// Ambient air temperature at `hour`: a 24 h cosine around the daily mean,
/// peaking mid-afternoon.
pub fn ambient_temperature(hour: f64) -> f64 {
    let phase = std::f64::consts::TAU * (hour - AMBIENT_PEAK_HOUR) / 24.0;
    AMBIENT_MEAN_C + AMBIENT_SWING_C * phase.cos()
}

/// Sample the forcing for `hour`.
///
/// Adds `Normal(0, noise_std_w_m2)` cloud/atmospheric noise to the clear-sky
/// radiation and clamps the result at zero — negative solar input is
/// non-physical.  With `noise_std_w_m2 == 0` the result is exactly the
/// deterministic curve and the RNG is left untouched.
pub fn sample(hour: f64, noise_std_w_m2: f64, rng: &mut SimRng) -> Forcing {
    let radiation = (clear_sky_radiation(hour) + rng.normal(0.0, noise_std_w_m2)).max(0.0);
    Forcing {
        radiation_w_m2: radiation,
        ambient_c:      ambient_temperature(hour),
    }
}
