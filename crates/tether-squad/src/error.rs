use tether_core::{AgentHandle, ControllerId, TetherError};
use tether_movement::MovementError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SquadError {
    #[error(transparent)]
    Tether(#[from] TetherError),

    #[error("agent {agent} is already attached as {controller}")]
    AlreadyAttached {
        agent:      AgentHandle,
        controller: ControllerId,
    },

    #[error("move command for {controller} rejected: {source}")]
    MoveRejected {
        controller: ControllerId,
        #[source]
        source:     MovementError,
    },
}

pub type SquadResult<T> = Result<T, SquadError>;
