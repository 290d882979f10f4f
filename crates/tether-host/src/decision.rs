//! Interception decision points.
//!
//! The host behavior engine wraps exactly four native actions.  Before each
//! runs, the interception layer asks whether it may; the answer is a pure read
//! of state the framework committed earlier in the tick, so it is safe to ask
//! at any point, any number of times.

use tether_core::AgentHandle;

/// A native behavior-tree action the framework may veto.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum DecisionPoint {
    /// Native pursuit of a target / waypoint.
    TraceTarget,
    /// Native "stop moving" node.
    StopMoving,
    /// Native target acquisition.
    NoticeTarget,
    /// Native weapon readying.
    ReadyWeapon,
}

/// Which framework state vetoes a decision point.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Suppression {
    /// Vetoed while a manual move command is outstanding.
    ManualOverride,
    /// Vetoed while combat acquisition is suppressed.
    PeaceMode,
}

impl DecisionPoint {
    pub const ALL: [DecisionPoint; 4] = [
        DecisionPoint::TraceTarget,
        DecisionPoint::StopMoving,
        DecisionPoint::NoticeTarget,
        DecisionPoint::ReadyWeapon,
    ];

    pub fn suppression(self) -> Suppression {
        match self {
            DecisionPoint::TraceTarget | DecisionPoint::StopMoving => Suppression::ManualOverride,
            DecisionPoint::NoticeTarget | DecisionPoint::ReadyWeapon => Suppression::PeaceMode,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DecisionPoint::TraceTarget  => "trace_target",
            DecisionPoint::StopMoving   => "stop_moving",
            DecisionPoint::NoticeTarget => "notice_target",
            DecisionPoint::ReadyWeapon  => "ready_weapon",
        }
    }
}

impl std::fmt::Display for DecisionPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only override state, keyed by native handle.
///
/// Unknown handles are not managed companions and must answer `false`.
pub trait OverridePredicate {
    /// `true` iff a manual move command is outstanding for `handle`.
    fn is_manual_override_active(&self, handle: AgentHandle) -> bool;

    /// `true` iff combat acquisition is suppressed for `handle`.
    fn is_peace_mode_active(&self, handle: AgentHandle) -> bool;
}

/// The questions the interception layer asks, one per [`DecisionPoint`].
///
/// Blanket-implemented for every [`OverridePredicate`].
pub trait DecisionPoints: OverridePredicate {
    /// `true` if the native action at `point` may run for `handle`.
    fn may_run(&self, handle: AgentHandle, point: DecisionPoint) -> bool {
        match point.suppression() {
            Suppression::ManualOverride => !self.is_manual_override_active(handle),
            Suppression::PeaceMode      => !self.is_peace_mode_active(handle),
        }
    }

    fn may_trace_target(&self, handle: AgentHandle) -> bool {
        self.may_run(handle, DecisionPoint::TraceTarget)
    }

    fn may_stop_moving(&self, handle: AgentHandle) -> bool {
        self.may_run(handle, DecisionPoint::StopMoving)
    }

    fn may_notice_target(&self, handle: AgentHandle) -> bool {
        self.may_run(handle, DecisionPoint::NoticeTarget)
    }

    fn may_ready_weapon(&self, handle: AgentHandle) -> bool {
        self.may_run(handle, DecisionPoint::ReadyWeapon)
    }
}

impl<T: OverridePredicate + ?Sized> DecisionPoints for T {}
