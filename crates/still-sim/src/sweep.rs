//! Parameter sweeps: many independent runs, one trajectory each.
//!
//! Runs share no mutable data — every configuration gets its own state and
//! its own random stream (from its own seed) — so with the `parallel`
//! feature they simply fan out across Rayon's thread pool.  Result order
//! matches the input order either way.

use still_core::StillConfig;

use crate::builder::SimBuilder;
use crate::observer::NoopObserver;
use crate::trajectory::Trajectory;
use crate::SimResult;

/// Run every configuration to the end of its horizon.
///
/// A failed run occupies its slot in the output with the error; other runs
/// are unaffected.
pub fn run_sweep(configs: &[StillConfig]) -> Vec<SimResult<Trajectory>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        configs.par_iter().map(run_one).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        configs.iter().map(run_one).collect()
    }
}

fn run_one(config: &StillConfig) -> SimResult<Trajectory> {
    SimBuilder::new(config.clone()).build()?.run(&mut NoopObserver)
}
