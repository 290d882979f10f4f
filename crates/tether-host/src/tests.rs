//! Unit tests for tether-host.

use std::collections::HashSet;

use tether_core::{AgentHandle, Point3};

use crate::{
    AgentHost, DecisionPoint, DecisionPoints, NativeAgent, NativeCall, OverridePredicate,
    ScriptedAgent, ScriptedHost, Suppression,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Predicate with fixed answers for one managed handle.
struct Fixed {
    managed:  AgentHandle,
    override_on: bool,
    peace_on:    bool,
}

impl OverridePredicate for Fixed {
    fn is_manual_override_active(&self, handle: AgentHandle) -> bool {
        handle == self.managed && self.override_on
    }

    fn is_peace_mode_active(&self, handle: AgentHandle) -> bool {
        handle == self.managed && self.peace_on
    }
}

/// A backend that exposes no path-state queries at all.
struct Bare {
    position: Point3,
}

impl NativeAgent for Bare {
    fn handle(&self) -> AgentHandle { AgentHandle(0) }
    fn position(&self) -> Point3 { self.position }
    fn is_moving(&self) -> bool { false }
    fn stop_move(&mut self) {}
    fn move_to(&mut self, _target: Point3) {}
    fn clear_combat_target(&mut self) {}
    fn clear_perception(&mut self) {}
    fn warp_to(&mut self, position: Point3) { self.position = position; }
    fn rearm_leader(&mut self, _leader: AgentHandle, _anchor: Point3) {}
}

// ── DecisionPoint ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod decision_tests {
    use super::*;

    #[test]
    fn suppression_mapping() {
        assert_eq!(DecisionPoint::TraceTarget.suppression(), Suppression::ManualOverride);
        assert_eq!(DecisionPoint::StopMoving.suppression(), Suppression::ManualOverride);
        assert_eq!(DecisionPoint::NoticeTarget.suppression(), Suppression::PeaceMode);
        assert_eq!(DecisionPoint::ReadyWeapon.suppression(), Suppression::PeaceMode);
    }

    #[test]
    fn all_points_distinct_labels() {
        let labels: HashSet<_> = DecisionPoint::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(labels.len(), 4);
        assert_eq!(DecisionPoint::ReadyWeapon.to_string(), "ready_weapon");
    }

    #[test]
    fn manual_override_vetoes_movement_points_only() {
        let p = Fixed { managed: AgentHandle(1), override_on: true, peace_on: false };
        assert!(!p.may_trace_target(AgentHandle(1)));
        assert!(!p.may_stop_moving(AgentHandle(1)));
        assert!(p.may_notice_target(AgentHandle(1)));
        assert!(p.may_ready_weapon(AgentHandle(1)));
    }

    #[test]
    fn peace_mode_vetoes_combat_points_only() {
        let p = Fixed { managed: AgentHandle(1), override_on: false, peace_on: true };
        assert!(p.may_trace_target(AgentHandle(1)));
        assert!(p.may_stop_moving(AgentHandle(1)));
        assert!(!p.may_notice_target(AgentHandle(1)));
        assert!(!p.may_ready_weapon(AgentHandle(1)));
    }

    #[test]
    fn unmanaged_handles_always_run() {
        let p = Fixed { managed: AgentHandle(1), override_on: true, peace_on: true };
        for point in DecisionPoint::ALL {
            assert!(p.may_run(AgentHandle(2), point), "{point} vetoed for unmanaged agent");
        }
    }

    #[test]
    fn usable_as_trait_object() {
        let p: Box<dyn OverridePredicate> =
            Box::new(Fixed { managed: AgentHandle(1), override_on: true, peace_on: false });
        assert!(!p.may_trace_target(AgentHandle(1)));
    }
}

// ── NativeAgent defaults ──────────────────────────────────────────────────────

#[cfg(test)]
mod native_agent_tests {
    use super::*;

    #[test]
    fn path_state_defaults_are_inconclusive() {
        let bare = Bare { position: Point3::ZERO };
        assert!(!bare.is_path_pending());
        assert!(!bare.reached_end_of_path());
        assert!(bare.has_path());
        assert!(bare.is_on_navigable_surface());
    }
}

// ── ScriptedAgent / ScriptedHost ──────────────────────────────────────────────

#[cfg(test)]
mod scripted_tests {
    use super::*;

    #[test]
    fn move_and_stop_update_state_and_record() {
        let mut a = ScriptedAgent::new(AgentHandle(3), Point3::ZERO);
        let target = Point3::new(5.0, 0.0, 5.0);
        a.move_to(target);
        assert!(a.path_pending && a.has_path && a.moving);
        assert_eq!(a.destination, Some(target));
        a.stop_move();
        assert!(!a.path_pending && !a.has_path && !a.moving);
        assert_eq!(a.calls, vec![NativeCall::MoveTo(target), NativeCall::StopMove]);
        assert_eq!(a.move_count(), 1);
    }

    #[test]
    fn clear_target_keeps_perception() {
        let mut a = ScriptedAgent::new(AgentHandle(3), Point3::ZERO);
        a.combat_target = Some(AgentHandle(99));
        a.alerted = true;
        a.clear_combat_target();
        assert_eq!(a.combat_target, None);
        assert!(a.alerted);
        a.clear_perception();
        assert!(!a.alerted);
    }

    #[test]
    fn host_resolves_and_forgets() {
        let mut host = ScriptedHost::new();
        host.spawn(AgentHandle(1), Point3::new(1.0, 0.0, 1.0));
        assert_eq!(host.position_of(AgentHandle(1)), Some(Point3::new(1.0, 0.0, 1.0)));
        assert!(host.agent_mut(AgentHandle(2)).is_none());

        host.place(AgentHandle(1), Point3::new(2.0, 0.0, 2.0));
        assert_eq!(host.agent(AgentHandle(1)).map(|a| a.calls.len()), Some(0));

        assert!(host.despawn(AgentHandle(1)).is_some());
        assert_eq!(host.position_of(AgentHandle(1)), None);
    }

    #[test]
    fn respawn_replaces_agent() {
        let mut host = ScriptedHost::new();
        host.spawn(AgentHandle(1), Point3::ZERO).move_to(Point3::new(1.0, 0.0, 0.0));
        let fresh = host.spawn(AgentHandle(1), Point3::ZERO);
        assert!(fresh.calls.is_empty());
    }
}
