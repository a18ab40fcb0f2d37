//! Simulation observer trait for progress reporting and data collection.

use still_core::Tick;
use still_physics::StepRecord;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — discharge logger
///
/// ```rust,ignore
/// struct DischargeLogger;
///
/// impl SimObserver for DischargeLogger {
///     fn on_step_end(&mut self, record: &StepRecord) {
///         if record.discharged {
///             println!("T{}: brine exchanged, salinity back to {:.1} g/L",
///                 record.step, record.salinity_g_l);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before any processing.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called after each completed step with the record appended to the
    /// trajectory.
    fn on_step_end(&mut self, _record: &StepRecord) {}

    /// Called once after the final step completes.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
