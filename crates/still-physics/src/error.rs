use still_core::Tick;
use thiserror::Error;

/// Step-level failures.  Both variants carry the tick so a bad configuration
/// or unstable step size can be traced to the moment it broke.
#[derive(Debug, Error)]
pub enum PhysicsError {
    #[error("basin ran dry at {tick}: evaporation consumed the remaining brine volume")]
    BasinDry { tick: Tick },

    #[error("state invariant `{invariant}` violated at {tick} (value {value})")]
    Invariant {
        invariant: &'static str,
        value:     f64,
        tick:      Tick,
    },
}

pub type PhysicsResult<T> = Result<T, PhysicsError>;
