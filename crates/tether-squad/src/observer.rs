//! Squad observer trait for event logging and data collection.

use tether_core::{AgentHandle, ControllerId, Point3};
use tether_follow::TeleportReason;
use tether_movement::{MoveCompletion, MovementError};

/// Callbacks invoked by [`Squad`][crate::Squad] when controllers change
/// state.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Every event carries both the
/// controller id and the native agent handle.
///
/// # Example: teleport counter
///
/// ```rust,ignore
/// struct TeleportCounter(usize);
///
/// impl SquadObserver for TeleportCounter {
///     fn on_teleport(&mut self, _: ControllerId, _: AgentHandle,
///                    _: Point3, _: Point3, _: TeleportReason) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SquadObserver {
    /// Called at the start of every [`Squad::tick`][crate::Squad::tick] with
    /// the squad clock after this tick's delta is added.
    fn on_tick_start(&mut self, _now_secs: f64) {}

    fn on_attached(&mut self, _id: ControllerId, _agent: AgentHandle, _leader: AgentHandle) {}

    fn on_detached(&mut self, _id: ControllerId, _agent: AgentHandle) {}

    /// A manual move command was accepted.  `target` is after jitter.
    fn on_move_started(&mut self, _id: ControllerId, _agent: AgentHandle, _target: Point3) {}

    /// A manual move command was refused; the companion stays under native
    /// control.
    fn on_move_rejected(
        &mut self,
        _id:     ControllerId,
        _agent:  AgentHandle,
        _target: Point3,
        _error:  &MovementError,
    ) {}

    /// A manual move command ended by arrival or failsafe.
    fn on_move_finished(&mut self, _id: ControllerId, _agent: AgentHandle, _completion: MoveCompletion) {}

    /// A manual move command was cancelled by an explicit stop.
    fn on_move_cancelled(&mut self, _id: ControllerId, _agent: AgentHandle) {}

    fn on_force_follow_started(&mut self, _id: ControllerId, _agent: AgentHandle, _distance: f32) {}

    fn on_follow_reissued(&mut self, _id: ControllerId, _agent: AgentHandle, _distance: f32) {}

    fn on_teleport(
        &mut self,
        _id:     ControllerId,
        _agent:  AgentHandle,
        _from:   Point3,
        _to:     Point3,
        _reason: TeleportReason,
    ) {}

    /// The native leader reference was (re-)assigned, on attach or after a
    /// teleport settled.
    fn on_rearm(&mut self, _id: ControllerId, _agent: AgentHandle, _leader: AgentHandle) {}
}

/// A [`SquadObserver`] that does nothing.  The default for
/// [`SquadBuilder`][crate::SquadBuilder].
pub struct NoopObserver;

impl SquadObserver for NoopObserver {}
