//! Manual-move phase machine.

use tether_core::{Countdown, MovementConfig, Point3};
use tether_host::NativeAgent;

use crate::{ArrivalRule, evaluate_arrival};

/// How a manual move command ended.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MoveCompletion {
    /// The arrival policy matched `ArrivalRule`.
    Arrived(ArrivalRule),
    /// The failsafe expired first.  This is also how unreachable targets end.
    TimedOut,
}

/// Phase of the manual move command for one companion.
///
/// `Idle` means no command is outstanding: nothing is counted down and the
/// native behavior runs unsuppressed.  Every other variant is an active
/// command, and exactly one of them holds at a time.
///
/// The failsafe is carried from `Warmup` into `Polling` unchanged, so it
/// bounds the command from the moment it was issued.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum MovePhase {
    #[default]
    Idle,

    /// Path computation grace period; arrival is not evaluated.
    Warmup {
        target:   Point3,
        warmup:   Countdown,
        failsafe: Countdown,
    },

    /// Arrival is evaluated every tick.
    Polling {
        target:   Point3,
        failsafe: Countdown,
    },
}

/// Result of one [`MovePhase::advance`].
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    Continue(MovePhase),
    Finished(MoveCompletion),
}

impl MovePhase {
    /// The phase entered when a command for `target` is issued.
    pub fn begin(target: Point3, config: &MovementConfig) -> MovePhase {
        MovePhase::Warmup {
            target,
            warmup:   Countdown::new(config.warmup_secs),
            failsafe: Countdown::new(config.failsafe_secs),
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        !matches!(self, MovePhase::Idle)
    }

    /// Target of the outstanding command, if any.
    pub fn target(&self) -> Option<Point3> {
        match self {
            MovePhase::Idle => None,
            MovePhase::Warmup { target, .. } | MovePhase::Polling { target, .. } => Some(*target),
        }
    }

    /// Seconds left on the failsafe, if a command is outstanding.
    pub fn failsafe_remaining(&self) -> Option<f32> {
        match self {
            MovePhase::Idle => None,
            MovePhase::Warmup { failsafe, .. } | MovePhase::Polling { failsafe, .. } => {
                Some(failsafe.remaining())
            }
        }
    }

    /// Advance by `delta_secs`.
    ///
    /// The failsafe is counted down first in every active phase, but it is
    /// only checked once the warmup is over: a failsafe shorter than the
    /// warmup ends the command on the tick the warmup expires.  When the
    /// warmup expires on this tick, arrival is evaluated on the same tick.
    /// Without an agent to inspect (`agent == None`) arrival cannot be
    /// decided, but the failsafe still runs so the command stays bounded.
    ///
    /// When both signals fire on one tick, arrival is reported.
    pub fn advance<A: NativeAgent + ?Sized>(
        self,
        delta_secs: f32,
        agent:      Option<&A>,
        epsilon:    f32,
    ) -> Step {
        match self {
            MovePhase::Idle => Step::Continue(MovePhase::Idle),

            MovePhase::Warmup { target, mut warmup, mut failsafe } => {
                let failsafe_expired = failsafe.advance(delta_secs);
                if !warmup.advance(delta_secs) {
                    return Step::Continue(MovePhase::Warmup { target, warmup, failsafe });
                }
                poll(target, failsafe, failsafe_expired, agent, epsilon)
            }

            MovePhase::Polling { target, mut failsafe } => {
                let failsafe_expired = failsafe.advance(delta_secs);
                poll(target, failsafe, failsafe_expired, agent, epsilon)
            }
        }
    }
}

fn poll<A: NativeAgent + ?Sized>(
    target:           Point3,
    failsafe:         Countdown,
    failsafe_expired: bool,
    agent:            Option<&A>,
    epsilon:          f32,
) -> Step {
    if let Some(rule) = agent.and_then(|a| evaluate_arrival(a, target, epsilon)) {
        return Step::Finished(MoveCompletion::Arrived(rule));
    }
    if failsafe_expired {
        return Step::Finished(MoveCompletion::TimedOut);
    }
    Step::Continue(MovePhase::Polling { target, failsafe })
}
