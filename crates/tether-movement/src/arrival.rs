//! Arrival detection as an ordered policy.
//!
//! Each [`ArrivalRule`] looks at one signal and either decides (`Some`) or
//! passes (`None`).  [`ARRIVAL_POLICY`] lists them in priority order; the
//! first rule that decides wins.
//!
//! | # | Rule               | Decides                                   |
//! |---|--------------------|-------------------------------------------|
//! | 1 | `PathPending`      | not arrived, while a path result is owed  |
//! | 2 | `ReachedEndOfPath` | arrived, when the host says so            |
//! | 3 | `NoPath`           | arrived, when the host dropped the path   |
//! | 4 | `WithinEpsilon`    | arrived, when horizontally close enough   |
//!
//! Rule 3 is only sound after warmup; the executor never consults the policy
//! earlier.  Rule 4 covers backends with no path-state queries.

use tether_core::Point3;
use tether_host::NativeAgent;

/// One arrival signal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ArrivalRule {
    PathPending,
    ReachedEndOfPath,
    NoPath,
    WithinEpsilon,
}

/// Priority order of the arrival rules.
pub const ARRIVAL_POLICY: [ArrivalRule; 4] = [
    ArrivalRule::PathPending,
    ArrivalRule::ReachedEndOfPath,
    ArrivalRule::NoPath,
    ArrivalRule::WithinEpsilon,
];

impl ArrivalRule {
    /// `Some(arrived)` if this rule decides, `None` if it passes.
    pub fn check<A: NativeAgent + ?Sized>(self, agent: &A, target: Point3, epsilon: f32) -> Option<bool> {
        match self {
            ArrivalRule::PathPending      => agent.is_path_pending().then_some(false),
            ArrivalRule::ReachedEndOfPath => agent.reached_end_of_path().then_some(true),
            ArrivalRule::NoPath           => (!agent.has_path()).then_some(true),
            ArrivalRule::WithinEpsilon    => {
                (agent.position().horizontal_distance(target) < epsilon).then_some(true)
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArrivalRule::PathPending      => "path_pending",
            ArrivalRule::ReachedEndOfPath => "reached_end_of_path",
            ArrivalRule::NoPath           => "no_path",
            ArrivalRule::WithinEpsilon    => "within_epsilon",
        }
    }
}

impl std::fmt::Display for ArrivalRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run [`ARRIVAL_POLICY`] against `agent`.
///
/// Returns the rule that declared arrival, or `None` if the agent has not
/// arrived (either a rule said so or no rule decided).
pub fn evaluate_arrival<A: NativeAgent + ?Sized>(
    agent:   &A,
    target:  Point3,
    epsilon: f32,
) -> Option<ArrivalRule> {
    ARRIVAL_POLICY
        .iter()
        .find_map(|&rule| rule.check(agent, target, epsilon).map(|arrived| (rule, arrived)))
        .and_then(|(rule, arrived)| arrived.then_some(rule))
}
