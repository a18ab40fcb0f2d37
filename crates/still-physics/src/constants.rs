//! Model coefficients.
//!
//! The empirical values here are tunables calibrated against bench-scale
//! pyramid-still behavior (1 m² basin, ~2 cm brine, 600–950 W/m² midday
//! radiation, daily yield in the 2–4 L/m² range), not exact physical
//! constants.  Adjust with care: the qualitative properties the test suite
//! pins down (monotonicities, single noon peak, bounded salinity) must
//! survive any retuning.

// ── Water properties ──────────────────────────────────────────────────────────

/// Density of brine, kg/m³ (salinity dependence neglected).
pub const DENSITY_WATER_KG_M3: f64 = 1_000.0;

/// Specific heat capacity of water, J/(kg·K).
pub const SPECIFIC_HEAT_WATER_J_KG_K: f64 = 4_186.0;

// ── Diurnal forcing ───────────────────────────────────────────────────────────

/// Local sunrise, hour of day.
pub const SUNRISE_HOUR: f64 = 6.0;

/// Local sunset, hour of day.
pub const SUNSET_HOUR: f64 = 18.0;

/// Clear-sky radiation at solar noon, W/m².
pub const PEAK_RADIATION_W_M2: f64 = 950.0;

/// Daily mean ambient temperature, °C.
pub const AMBIENT_MEAN_C: f64 = 28.0;

/// Half-amplitude of the diurnal ambient swing, °C.
pub const AMBIENT_SWING_C: f64 = 7.0;

/// Hour of the ambient maximum.  Lags solar noon: the air keeps warming
/// through early afternoon.
pub const AMBIENT_PEAK_HOUR: f64 = 15.0;

// ── Thermal network ───────────────────────────────────────────────────────────

/// Absorptivity of the bare basin liner.
pub const BASE_ABSORPTIVITY: f64 = 0.85;

/// Absorptivity gain from a black wick lining.
pub const WICK_ABSORPTIVITY_BOOST: f64 = 0.08;

/// Effective heat capacity added by the phase-change layer, J/(K·m²) of
/// basin area.  Roughly doubles the thermal mass of a 2 cm basin.
pub const PCM_CAPACITY_J_K_M2: f64 = 90_000.0;

/// Water → glass cover coupling (evaporative + convective + radiative), W/(m²·K).
pub const U_WATER_GLASS_W_M2K: f64 = 25.0;

/// Water → ambient side/bottom losses, W/(m²·K).
pub const U_WATER_AMBIENT_W_M2K: f64 = 15.0;

/// Glass cover → ambient (wind-dominated), W/(m²·K).
pub const U_GLASS_AMBIENT_W_M2K: f64 = 30.0;

/// Fraction of incident radiation absorbed directly in the glass.
pub const GLASS_ABSORPTIVITY: f64 = 0.05;

// ── Evaporation ───────────────────────────────────────────────────────────────

/// Magnus saturation-pressure coefficients (T in °C, result in Pa).
pub const MAGNUS_A_PA: f64 = 610.94;
pub const MAGNUS_B: f64 = 17.625;
pub const MAGNUS_C: f64 = 243.04;

/// Rate-law scale, L/(h·m²) at reference conditions.
pub const EVAP_COEFF_L_H_M2: f64 = 0.055;

/// Radiation normalization for the rate law, W/m².
pub const RADIATION_REF_W_M2: f64 = 1_000.0;

/// Saturation pressure at 25 °C, Pa — normalizes the vapor-pressure factor
/// to ~1 at room temperature.
pub const VAPOR_PRESSURE_REF_PA: f64 = 3_161.7;

/// Strength of the salt suppression factor.
pub const SALT_GAMMA: f64 = 0.9;

/// Salinity normalization for the suppression factor, g/L.
pub const SALT_REF_G_L: f64 = 100.0;

// ── Plausibility window ───────────────────────────────────────────────────────

/// Temperatures outside this band mean a broken configuration or an unstable
/// step size, never a valid state.
pub const MIN_PLAUSIBLE_TEMP_C: f64 = -25.0;
pub const MAX_PLAUSIBLE_TEMP_C: f64 = 105.0;
