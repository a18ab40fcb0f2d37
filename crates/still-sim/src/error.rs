use still_core::StillError;
use still_physics::PhysicsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration rejected: {0}")]
    Config(#[from] StillError),

    #[error("run failed: {0}")]
    Physics(#[from] PhysicsError),
}

pub type SimResult<T> = Result<T, SimError>;
