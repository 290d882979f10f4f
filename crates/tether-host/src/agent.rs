//! The `NativeAgent` trait: the host agent as the framework sees it.

use tether_core::{AgentHandle, Point3};

/// A host-simulation agent that can be observed and commanded.
///
/// # Path-state queries
///
/// Arrival detection prefers the host pathfinder's own view of the current
/// path.  Backends that cannot answer these questions keep the defaults,
/// which make every path-state rule inconclusive so arrival falls through to
/// the straight-line distance check:
///
/// | Method                | Default |
/// |-----------------------|---------|
/// | `is_path_pending`     | `false` |
/// | `reached_end_of_path` | `false` |
/// | `has_path`            | `true`  |
///
/// # Commands
///
/// Commands are fire-and-forget: the host applies them on its own schedule
/// and the framework observes the effect on later ticks.
pub trait NativeAgent {
    /// Identity of this agent.
    fn handle(&self) -> AgentHandle;

    /// Current world position.
    fn position(&self) -> Point3;

    /// `true` while a path request is queued and its result not yet delivered.
    fn is_path_pending(&self) -> bool {
        false
    }

    /// `true` once the agent has reached the last waypoint of its path.
    fn reached_end_of_path(&self) -> bool {
        false
    }

    /// `true` if the agent currently holds a computed path.
    fn has_path(&self) -> bool {
        true
    }

    /// `true` while the agent reports itself in motion.
    fn is_moving(&self) -> bool;

    /// `false` if the agent is off the navigation surface and a move command
    /// would be silently dropped.
    fn is_on_navigable_surface(&self) -> bool {
        true
    }

    /// Cancel the current path and zero velocity.
    fn stop_move(&mut self);

    /// Request a path to `target` and start moving along it.
    fn move_to(&mut self, target: Point3);

    /// Drop the currently acquired combat target.  Perception state (alerted /
    /// noticed flags) is left alone.
    fn clear_combat_target(&mut self);

    /// Drop alerted / noticed perception state.
    fn clear_perception(&mut self);

    /// Relocate instantly, without pathing.
    fn warp_to(&mut self, position: Point3);

    /// Point the native follow logic at `leader`, patrolling around `anchor`.
    fn rearm_leader(&mut self, leader: AgentHandle, anchor: Point3);
}
