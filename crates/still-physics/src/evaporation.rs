//! Evaporation rate and the coupled volume/salinity update.
//!
//! The rate law is a product of three factors, each strictly monotone in its
//! own input:
//!
//!   rate = k · A · (1 + G/G_ref) · p_sat(T_w)/p_ref · 1/(1 + γ·C/C_ref)
//!
//! Radiation enters affinely, temperature through the Magnus saturation
//! curve (the Clausius–Clapeyron dependence), and salinity through a
//! hyperbolic suppression that approaches but never reaches zero — brine
//! keeps evaporating, just ever more slowly, and the discharge controller is
//! what keeps the rate from collapsing.
//!
//! Salinity is never incremented: the dissolved salt mass `C·V` is conserved
//! across evaporation, so the new concentration is recomputed as
//! `mass / V'`.  The same conservation law governs discharge mixing, which
//! keeps the two updates consistent with each other.

use crate::constants::{
    EVAP_COEFF_L_H_M2, MAGNUS_A_PA, MAGNUS_B, MAGNUS_C, RADIATION_REF_W_M2, SALT_GAMMA,
    SALT_REF_G_L, VAPOR_PRESSURE_REF_PA,
};

/// Saturation vapor pressure over water at `temp_c`, Pa (Magnus form).
pub fn saturation_vapor_pressure_pa(temp_c: f64) -> f64 {
    MAGNUS_A_PA * (MAGNUS_B * temp_c / (temp_c + MAGNUS_C)).exp()
}

/// Dimensionless salt suppression factor in (0, 1].
pub fn salt_suppression(salinity_g_l: f64) -> f64 {
    1.0 / (1.0 + SALT_GAMMA * salinity_g_l / SALT_REF_G_L)
}

/// Instantaneous evaporation rate, L/h.
pub fn evaporation_rate_l_per_h(
    radiation_w_m2: f64,
    water_temp_c: f64,
    salinity_g_l: f64,
    area_m2: f64,
) -> f64 {
    let radiation_factor = 1.0 + radiation_w_m2 / RADIATION_REF_W_M2;
    let vapor_factor = saturation_vapor_pressure_pa(water_temp_c) / VAPOR_PRESSURE_REF_PA;
    EVAP_COEFF_L_H_M2 * area_m2 * radiation_factor * vapor_factor * salt_suppression(salinity_g_l)
}

/// Result of one evaporation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvapOutcome {
    /// Instantaneous rate this step, L/h.
    pub rate_l_per_h: f64,
    /// Brine volume removed this step, L (capped at the available volume).
    pub evaporated_l: f64,
    /// Distillate recovered this step, L (`evaporated × ηc`).
    pub distillate_l: f64,
    /// Remaining brine volume, L.
    pub volume_l: f64,
    /// Salinity after the conservation-law update, g/L.
    pub salinity_g_l: f64,
}

/// Advance volume and salinity by one step of `dt_hours`.
///
/// Evaporation is capped at the available volume.  Returns `None` when the
/// cap leaves the basin empty — the salinity of zero liters is undefined, so
/// the caller must fail the run at this tick rather than continue.
pub fn evaporation_step(
    radiation_w_m2: f64,
    water_temp_c: f64,
    salinity_g_l: f64,
    area_m2: f64,
    volume_l: f64,
    condensation_efficiency: f64,
    dt_hours: f64,
) -> Option<EvapOutcome> {
    let rate_l_per_h =
        evaporation_rate_l_per_h(radiation_w_m2, water_temp_c, salinity_g_l, area_m2);
    let evaporated_l = (rate_l_per_h * dt_hours).min(volume_l);

    let new_volume_l = volume_l - evaporated_l;
    if new_volume_l <= 0.0 {
        return None;
    }

    // Dissolved mass is conserved; only the solvent leaves.
    let salt_mass_g = salinity_g_l * volume_l;
    let new_salinity_g_l = salt_mass_g / new_volume_l;

    Some(EvapOutcome {
        rate_l_per_h,
        evaporated_l,
        distillate_l: evaporated_l * condensation_efficiency,
        volume_l: new_volume_l,
        salinity_g_l: new_salinity_g_l,
    })
}
