//! The movement executor: one outstanding manual command per companion.

use tether_core::{MovementConfig, Point3};
use tether_host::NativeAgent;
use tracing::{debug, warn};

use crate::{MoveCompletion, MovePhase, MovementError, MovementResult, Step};

/// Executes manual move commands for a single companion.
///
/// The executor does not hold the native agent.  Every call that needs it is
/// handed an `Option<&mut A>` resolved by the caller for this tick; `None`
/// means the agent is not available and the call degrades gracefully.
///
/// While a command is outstanding the executor also holds *peace mode*: the
/// interception layer uses it to keep the native combat logic from acquiring
/// targets and pulling the companion off course.
pub struct MovementExecutor {
    config:     MovementConfig,
    phase:      MovePhase,
    peace_mode: bool,
}

impl MovementExecutor {
    pub fn new(config: MovementConfig) -> Self {
        Self {
            config,
            phase:      MovePhase::Idle,
            peace_mode: false,
        }
    }

    /// Start moving to `target`, replacing any outstanding command.
    ///
    /// Issues `stop_move` then `move_to` on the agent; some native states
    /// ignore a bare `move_to` while an older path is in flight.
    ///
    /// # Errors
    ///
    /// - [`MovementError::AgentMissing`]: nothing changes.
    /// - [`MovementError::InvalidTarget`]: nothing changes.
    /// - [`MovementError::OffNavigableSurface`]: fails closed: any outstanding
    ///   command is stopped and the agent is left under native control.
    pub fn move_to<A: NativeAgent + ?Sized>(
        &mut self,
        agent:  Option<&mut A>,
        target: Point3,
    ) -> MovementResult<()> {
        let Some(agent) = agent else {
            return Err(MovementError::AgentMissing);
        };
        if !target.is_finite() {
            return Err(MovementError::InvalidTarget(target));
        }
        if !agent.is_on_navigable_surface() {
            let handle = agent.handle();
            self.stop(Some(agent));
            warn!(agent = %handle, %target, "move rejected: agent is off the navigable surface");
            return Err(MovementError::OffNavigableSurface(handle));
        }

        if self.phase.is_active() {
            debug!(agent = %agent.handle(), "replacing outstanding move command");
        }
        self.phase      = MovePhase::begin(target, &self.config);
        self.peace_mode = true;

        agent.stop_move();
        agent.move_to(target);
        debug!(agent = %agent.handle(), %target, "manual move issued");
        Ok(())
    }

    /// Advance the outstanding command by `delta_secs`.
    ///
    /// Returns the completion on the tick the command ends; the executor is
    /// already idle and the native agent stopped by then.  No-op while idle.
    pub fn tick<A: NativeAgent + ?Sized>(
        &mut self,
        delta_secs: f32,
        agent:      Option<&mut A>,
    ) -> Option<MoveCompletion> {
        if !self.phase.is_active() {
            return None;
        }
        let phase = std::mem::take(&mut self.phase);
        match phase.advance(delta_secs, agent.as_deref(), self.config.arrival_epsilon) {
            Step::Continue(next) => {
                self.phase = next;
                None
            }
            Step::Finished(completion) => {
                match completion {
                    MoveCompletion::Arrived(rule) => debug!(%rule, "manual move arrived"),
                    MoveCompletion::TimedOut => {
                        warn!(failsafe_secs = self.config.failsafe_secs, "manual move timed out")
                    }
                }
                self.release(agent);
                Some(completion)
            }
        }
    }

    /// Cancel the outstanding command and hand the agent back to native
    /// control.
    ///
    /// Returns `false` (and touches nothing) if no command was outstanding.
    pub fn stop<A: NativeAgent + ?Sized>(&mut self, agent: Option<&mut A>) -> bool {
        if !self.phase.is_active() {
            return false;
        }
        self.release(agent);
        true
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    #[inline]
    pub fn is_peace_mode_active(&self) -> bool {
        self.peace_mode
    }

    #[inline]
    pub fn phase(&self) -> &MovePhase {
        &self.phase
    }

    #[inline]
    pub fn target(&self) -> Option<Point3> {
        self.phase.target()
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    fn release<A: NativeAgent + ?Sized>(&mut self, agent: Option<&mut A>) {
        self.phase      = MovePhase::Idle;
        self.peace_mode = false;
        if let Some(agent) = agent {
            agent.stop_move();
        }
    }
}
