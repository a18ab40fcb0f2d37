//! Brine discharge control.
//!
//! The controller is a two-state machine — **Normal** and **Discharging** —
//! where the Discharging state collapses back to Normal within the same
//! step: when the salinity crosses the threshold, a fixed fraction of the
//! brine is drawn off and replaced by an equal volume of feedwater, and the
//! step ends with the basin back in Normal.  The basin is never left in a
//! pending-discharge condition across steps.
//!
//! This is the system's only closed-loop action: it bounds salinity to an
//! operating band so the evaporation rate cannot collapse as salt
//! accumulates.

use still_core::StillConfig;

/// Result of inspecting the basin after an evaporation update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DischargeOutcome {
    /// Whether a discharge fired this step.
    pub occurred: bool,
    /// Brine volume drawn off (and feedwater volume added), L.
    pub brine_removed_l: f64,
    /// Basin volume after the exchange, L.  Equal to the pre-exchange volume:
    /// the refill matches the draw-off.
    pub volume_l: f64,
    /// Salinity after the conservation-law mix, g/L.
    pub salinity_g_l: f64,
}

/// Threshold-triggered brine exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct DischargeController {
    pub threshold_g_l: f64,
    /// Fraction of the brine volume exchanged per event, in (0, 1].
    pub fraction: f64,
    pub feed_salinity_g_l: f64,
}

impl DischargeController {
    pub fn from_config(cfg: &StillConfig) -> Self {
        Self {
            threshold_g_l:     cfg.discharge_threshold_g_l,
            fraction:          cfg.discharge_fraction,
            feed_salinity_g_l: cfg.feed_salinity_g_l,
        }
    }

    /// Inspect the basin; exchange brine for feedwater if the salinity
    /// exceeds the threshold.
    ///
    /// The drawn-off brine carries its salt with it, the refill brings feed
    /// salt in, and the mixed concentration follows from mass conservation:
    ///
    ///   C' = (1 − f)·C + f·C_feed
    ///
    /// With `fraction = 1.0` the whole charge is replaced and the salinity
    /// resets exactly to the feed baseline.
    pub fn inspect(&self, volume_l: f64, salinity_g_l: f64) -> DischargeOutcome {
        if salinity_g_l <= self.threshold_g_l {
            return DischargeOutcome {
                occurred:        false,
                brine_removed_l: 0.0,
                volume_l,
                salinity_g_l,
            };
        }

        let removed_l = self.fraction * volume_l;
        let mixed_g_l =
            (1.0 - self.fraction) * salinity_g_l + self.fraction * self.feed_salinity_g_l;

        DischargeOutcome {
            occurred:        true,
            brine_removed_l: removed_l,
            volume_l,
            salinity_g_l:    mixed_g_l,
        }
    }
}
