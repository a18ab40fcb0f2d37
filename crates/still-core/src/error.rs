//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `StillError` as one
//! variant via `From` impls, keeping error sites clean.

use thiserror::Error;

/// Configuration-level errors, raised before the step loop starts.
#[derive(Debug, Error)]
pub enum StillError {
    #[error("invalid configuration: {name} = {value} ({constraint})")]
    InvalidParameter {
        name:       &'static str,
        value:      f64,
        constraint: &'static str,
    },

    #[error("degenerate run: a {horizon_hours} h horizon holds no complete {step_mins}-minute step")]
    EmptyHorizon { horizon_hours: u32, step_mins: u32 },
}

/// Shorthand result type for configuration handling.
pub type StillResult<T> = Result<T, StillError>;
