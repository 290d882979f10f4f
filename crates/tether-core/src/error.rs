//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `TetherError` as one
//! variant where construction can fail on configuration.

use thiserror::Error;

use crate::ControllerId;

/// The top-level error type for `tether-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum TetherError {
    #[error("controller {0} not found")]
    ControllerNotFound(ControllerId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `tether-*` crates.
pub type TetherResult<T> = Result<T, TetherError>;
