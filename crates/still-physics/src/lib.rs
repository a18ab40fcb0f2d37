//! `still-physics` — the pyramid-still model for the solstill simulator.
//!
//! # Step pipeline
//!
//! ```text
//! for each tick:
//!   ① Forcing     — diurnal radiation + ambient temperature, Gaussian noise
//!   ② Thermal     — explicit water-temperature step, quasi-steady glass
//!   ③ Evaporation — vapor-pressure-driven rate, salt-mass conservation
//!   ④ Discharge   — threshold-triggered brine draw-off and feedwater refill
//!   ⑤ Record      — one StepRecord appended to the trajectory
//! ```
//!
//! Every stage consumes the previous step's state plus the current step's
//! forcing only — a first-order explicit scheme.  Empirical coefficients live
//! in [`constants`] and are tunables, not physical truths; they are sized so
//! that minute-scale steps sit well inside the stability region of the
//! explicit update.
//!
//! | Module          | Contents                                        |
//! |-----------------|-------------------------------------------------|
//! | [`constants`]   | Water properties and model coefficients         |
//! | [`forcing`]     | `Forcing`, diurnal radiation/ambient functions  |
//! | [`thermal`]     | `ThermalCoeffs`, water/glass temperature step   |
//! | [`evaporation`] | Rate law, volume and salinity update            |
//! | [`brine`]       | `DischargeController`                           |
//! | [`state`]       | `StillState`, `StepRecord`                      |
//! | [`engine`]      | `StillEngine` — one full step, invariant checks |
//! | [`error`]       | `PhysicsError`, `PhysicsResult`                 |

pub mod brine;
pub mod constants;
pub mod engine;
pub mod error;
pub mod evaporation;
pub mod forcing;
pub mod state;
pub mod thermal;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use brine::{DischargeController, DischargeOutcome};
pub use engine::StillEngine;
pub use error::{PhysicsError, PhysicsResult};
pub use evaporation::EvapOutcome;
pub use forcing::Forcing;
pub use state::{StepRecord, StillState};
pub use thermal::{ThermalCoeffs, ThermalUpdate};
