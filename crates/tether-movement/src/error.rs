use tether_core::{AgentHandle, Point3};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MovementError {
    #[error("no live agent to command")]
    AgentMissing,

    #[error("agent {0} is not on a navigable surface")]
    OffNavigableSurface(AgentHandle),

    #[error("move target {0} is not a finite point")]
    InvalidTarget(Point3),
}

pub type MovementResult<T> = Result<T, MovementError>;
