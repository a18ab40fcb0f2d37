//! `still-sim` — step loop orchestrator for the solstill simulator.
//!
//! # The loop
//!
//! ```text
//! for tick in 0..config.total_steps():
//!   ① observer.on_step_start(tick)
//!   ② engine.step(&mut state, &clock, &mut rng)  → StepRecord (or fail)
//!   ③ observer.on_step_end(&record); trajectory.push(record)
//!   ④ clock.advance()
//! ```
//!
//! Strictly sequential: each step depends on the previous step's state plus
//! freshly sampled forcing, so there is no parallelism inside a run.  Whole
//! runs are independent, which is what [`sweep::run_sweep`] parallelizes.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                          |
//! |------------|-------------------------------------------------|
//! | `parallel` | Runs sweep members on Rayon's thread pool.      |
//! | `serde`    | Serde derives on `Trajectory` and its records.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use still_core::StillConfig;
//! use still_sim::{NoopObserver, SimBuilder};
//!
//! let config = StillConfig { seed: Some(42), ..StillConfig::default() };
//! let mut sim = SimBuilder::new(config).build()?;
//! let trajectory = sim.run(&mut NoopObserver)?;
//! println!("yield: {:.2} L", trajectory.total_distillate_l());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod sweep;
pub mod trajectory;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use sweep::run_sweep;
pub use trajectory::Trajectory;
