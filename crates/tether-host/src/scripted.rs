//! Recording test doubles for the host traits.
//!
//! `ScriptedAgent` does not simulate movement.  Tests set its path-state and
//! position fields directly between ticks, then assert on the
//! [`NativeCall`]s the framework issued.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use tether_core::{AgentHandle, Point3};

use crate::{AgentHost, NativeAgent};

/// One command the framework issued to a [`ScriptedAgent`].
#[derive(Debug, Clone, PartialEq)]
pub enum NativeCall {
    StopMove,
    MoveTo(Point3),
    ClearCombatTarget,
    ClearPerception,
    WarpTo(Point3),
    RearmLeader(AgentHandle, Point3),
}

/// A [`NativeAgent`] whose observable state is set by the test.
///
/// Commands update the obvious fields (`move_to` gives the agent a pending
/// path and marks it moving; `stop_move` clears both) and are appended to
/// `calls`.
#[derive(Debug, Clone)]
pub struct ScriptedAgent {
    pub handle:        AgentHandle,
    pub position:      Point3,
    pub path_pending:  bool,
    pub reached_end:   bool,
    pub has_path:      bool,
    pub moving:        bool,
    pub navigable:     bool,
    /// Acquired combat target, if any.
    pub combat_target: Option<AgentHandle>,
    /// Alerted / noticed perception flag.
    pub alerted:       bool,
    /// Leader reference last set through `rearm_leader`.
    pub leader:        Option<AgentHandle>,
    /// Most recent `move_to` target.
    pub destination:   Option<Point3>,
    pub calls:         Vec<NativeCall>,
}

impl ScriptedAgent {
    /// An idle agent standing at `position`.
    pub fn new(handle: AgentHandle, position: Point3) -> Self {
        Self {
            handle,
            position,
            path_pending:  false,
            reached_end:   false,
            has_path:      false,
            moving:        false,
            navigable:     true,
            combat_target: None,
            alerted:       false,
            leader:        None,
            destination:   None,
            calls:         Vec::new(),
        }
    }

    /// Number of recorded calls equal to `call`.
    pub fn count(&self, call: &NativeCall) -> usize {
        self.calls.iter().filter(|c| *c == call).count()
    }

    /// Number of recorded `MoveTo` calls, whatever the target.
    pub fn move_count(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, NativeCall::MoveTo(_))).count()
    }

    /// Number of recorded `WarpTo` calls, whatever the target.
    pub fn warp_count(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, NativeCall::WarpTo(_))).count()
    }
}

impl NativeAgent for ScriptedAgent {
    fn handle(&self) -> AgentHandle {
        self.handle
    }

    fn position(&self) -> Point3 {
        self.position
    }

    fn is_path_pending(&self) -> bool {
        self.path_pending
    }

    fn reached_end_of_path(&self) -> bool {
        self.reached_end
    }

    fn has_path(&self) -> bool {
        self.has_path
    }

    fn is_moving(&self) -> bool {
        self.moving
    }

    fn is_on_navigable_surface(&self) -> bool {
        self.navigable
    }

    fn stop_move(&mut self) {
        self.path_pending = false;
        self.has_path     = false;
        self.reached_end  = false;
        self.moving       = false;
        self.calls.push(NativeCall::StopMove);
    }

    fn move_to(&mut self, target: Point3) {
        self.path_pending = true;
        self.has_path     = true;
        self.reached_end  = false;
        self.moving       = true;
        self.destination  = Some(target);
        self.calls.push(NativeCall::MoveTo(target));
    }

    fn clear_combat_target(&mut self) {
        self.combat_target = None;
        self.calls.push(NativeCall::ClearCombatTarget);
    }

    fn clear_perception(&mut self) {
        self.alerted = false;
        self.calls.push(NativeCall::ClearPerception);
    }

    fn warp_to(&mut self, position: Point3) {
        self.position = position;
        self.calls.push(NativeCall::WarpTo(position));
    }

    fn rearm_leader(&mut self, leader: AgentHandle, anchor: Point3) {
        self.leader = Some(leader);
        self.calls.push(NativeCall::RearmLeader(leader, anchor));
    }
}

/// An [`AgentHost`] over a map of [`ScriptedAgent`]s.
#[derive(Debug, Default)]
pub struct ScriptedHost {
    pub agents: BTreeMap<AgentHandle, ScriptedAgent>,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an idle agent at `position`, replacing any previous one.
    pub fn spawn(&mut self, handle: AgentHandle, position: Point3) -> &mut ScriptedAgent {
        let fresh = ScriptedAgent::new(handle, position);
        match self.agents.entry(handle) {
            Entry::Occupied(mut slot) => {
                slot.insert(fresh);
                slot.into_mut()
            }
            Entry::Vacant(slot) => slot.insert(fresh),
        }
    }

    pub fn despawn(&mut self, handle: AgentHandle) -> Option<ScriptedAgent> {
        self.agents.remove(&handle)
    }

    /// Move `handle` without recording a call (the host moving on its own).
    pub fn place(&mut self, handle: AgentHandle, position: Point3) {
        if let Some(agent) = self.agents.get_mut(&handle) {
            agent.position = position;
        }
    }
}

impl AgentHost for ScriptedHost {
    type Agent = ScriptedAgent;

    fn agent(&self, handle: AgentHandle) -> Option<&ScriptedAgent> {
        self.agents.get(&handle)
    }

    fn agent_mut(&mut self, handle: AgentHandle) -> Option<&mut ScriptedAgent> {
        self.agents.get_mut(&handle)
    }
}
