//! Fluent builder for constructing a [`Squad`].

use tether_core::TetherConfig;

use crate::{NoopObserver, Squad, SquadObserver, SquadResult};

/// Fluent builder for [`Squad<O>`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default         |
/// |-----------------|-----------------|
/// | `.observer(o)`  | `NoopObserver`  |
///
/// # Example
///
/// ```rust,ignore
/// let mut squad = SquadBuilder::new(config)
///     .observer(EventLogObserver::new(writer))
///     .build()?;
/// ```
pub struct SquadBuilder<O: SquadObserver = NoopObserver> {
    config:   TetherConfig,
    observer: O,
}

impl SquadBuilder<NoopObserver> {
    pub fn new(config: TetherConfig) -> Self {
        Self {
            config,
            observer: NoopObserver,
        }
    }
}

impl<O: SquadObserver> SquadBuilder<O> {
    /// Replace the observer that receives controller events.
    pub fn observer<P: SquadObserver>(self, observer: P) -> SquadBuilder<P> {
        SquadBuilder {
            config: self.config,
            observer,
        }
    }

    /// Validate the configuration and return an empty squad.
    ///
    /// # Errors
    ///
    /// [`SquadError::Tether`][crate::SquadError::Tether] wrapping a
    /// `TetherError::Config` for the first invalid parameter.
    pub fn build(self) -> SquadResult<Squad<O>> {
        self.config.validate()?;
        Ok(Squad::new(self.config, self.observer))
    }
}
