//! `still-core` — foundational types for the `solstill` solar-still simulator.
//!
//! This crate is a dependency of every other `still-*` crate.  It
//! intentionally has no `still-*` dependencies and minimal external ones
//! (only `rand`/`rand_distr` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                  |
//! |------------|-------------------------------------------|
//! | [`time`]   | `Tick`, `StillClock`                      |
//! | [`config`] | `StillConfig` and its validation          |
//! | [`rng`]    | `SimRng` (seedable, injectable stream)    |
//! | [`error`]  | `StillError`, `StillResult`               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::StillConfig;
pub use error::{StillError, StillResult};
pub use rng::SimRng;
pub use time::{StillClock, Tick};
