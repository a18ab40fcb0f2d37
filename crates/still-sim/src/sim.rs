//! The `Sim` struct and its step loop.

use still_core::{SimRng, StillClock, StillConfig};
use still_physics::{StillEngine, StillState};

use crate::trajectory::Trajectory;
use crate::{SimObserver, SimResult};

/// The main simulation runner.
///
/// Owns all mutable run state — the clock, the basin state, and the random
/// stream — and drives the engine across the configured horizon.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (horizon, step size, seed, geometry, …).
    pub config: StillConfig,

    /// Simulation clock — tracks the current tick and the hour of day.
    pub clock: StillClock,

    /// The model.  Immutable after construction.
    pub engine: StillEngine,

    /// The basin state, mutated once per tick.
    pub state: StillState,

    /// The run's random stream (forcing perturbations draw from it).
    pub rng: SimRng,
}

impl Sim {
    /// Run from the current tick to the end of the configured horizon.
    ///
    /// Calls observer hooks at every step boundary and returns the recorded
    /// trajectory.  Use [`NoopObserver`][crate::NoopObserver] if you don't
    /// need callbacks.  A physics failure (dry basin, invariant violation)
    /// aborts the run at the offending tick.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Trajectory> {
        let total = self.config.total_steps();
        let remaining = total.saturating_sub(self.clock.current_tick.0);
        let trajectory = self.step_loop(remaining, observer)?;
        observer.on_run_end(self.clock.current_tick);
        Ok(trajectory)
    }

    /// Run exactly `n` steps from the current position (ignores the horizon).
    ///
    /// Useful for tests and incremental stepping.  Does not fire
    /// `on_run_end`.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<Trajectory> {
        self.step_loop(n, observer)
    }

    fn step_loop<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<Trajectory> {
        let mut trajectory = Trajectory::with_capacity(n as usize);
        for _ in 0..n {
            observer.on_step_start(self.clock.current_tick);
            let record = self.engine.step(&mut self.state, &self.clock, &mut self.rng)?;
            observer.on_step_end(&record);
            trajectory.push(record);
            self.clock.advance();
        }
        Ok(trajectory)
    }
}
