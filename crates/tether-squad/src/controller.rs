//! One companion: its movement executor and follow supervisor.

use tether_core::{AgentHandle, ControllerId, JitterRng, Point3, TetherConfig};
use tether_follow::{FollowEvent, FollowSupervisor};
use tether_host::{AgentHost, NativeAgent};
use tether_movement::{MoveCompletion, MovementExecutor, MovementResult};

/// What happened to one controller during [`Controller::tick`].
#[derive(Debug, Default, PartialEq)]
pub struct ControllerTick {
    /// Set on the tick the outstanding manual command ended.
    pub completion: Option<MoveCompletion>,
    /// Side effects applied by the follow supervisor, in order.
    pub follow:     Vec<FollowEvent>,
}

/// Control state for one attached companion.
///
/// The controller never holds the native agent.  Every operation that needs
/// it takes the host and resolves `agent` by handle; an absent agent (or
/// leader) turns the operation into a no-op.  A controller whose leader was
/// never armed retries the re-arm every tick until both resolve.
pub struct Controller {
    id:           ControllerId,
    agent:        AgentHandle,
    leader:       AgentHandle,
    movement:     MovementExecutor,
    follow:       FollowSupervisor,
    jitter:       JitterRng,
    /// Set once the native follow logic has been pointed at `leader`.
    leader_armed: bool,
}

impl Controller {
    pub fn new(
        id:     ControllerId,
        agent:  AgentHandle,
        leader: AgentHandle,
        config: &TetherConfig,
    ) -> Self {
        Self {
            id,
            agent,
            leader,
            movement:     MovementExecutor::new(config.movement.clone()),
            follow:       FollowSupervisor::new(config.follow.clone()),
            jitter:       JitterRng::for_controller(config.seed, id),
            leader_armed: false,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> ControllerId {
        self.id
    }

    #[inline]
    pub fn agent(&self) -> AgentHandle {
        self.agent
    }

    #[inline]
    pub fn leader(&self) -> AgentHandle {
        self.leader
    }

    pub fn movement(&self) -> &MovementExecutor {
        &self.movement
    }

    pub fn follow(&self) -> &FollowSupervisor {
        &self.follow
    }

    /// `true` while a manual move command is outstanding.
    #[inline]
    pub fn is_manual_override_active(&self) -> bool {
        self.movement.is_active()
    }

    /// `true` while combat acquisition is suppressed.
    #[inline]
    pub fn is_peace_mode_active(&self) -> bool {
        self.movement.is_peace_mode_active()
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Start a manual move to `target`, replacing any outstanding one.
    ///
    /// On success the follow supervisor yields: force-follow state is dropped
    /// and supervision is suspended until the command ends.
    pub fn issue_move<H: AgentHost>(&mut self, target: Point3, host: &mut H) -> MovementResult<()> {
        self.movement.move_to(host.agent_mut(self.agent), target)?;
        self.follow.yield_to_manual();
        Ok(())
    }

    /// `target` scattered by this controller's jitter stream.
    pub fn scatter(&mut self, target: Point3, radius: f32) -> Point3 {
        self.jitter.scatter(target, radius)
    }

    /// Cancel the outstanding manual command.  Returns `false` if there was
    /// none.
    pub fn stop<H: AgentHost>(&mut self, host: &mut H) -> bool {
        self.movement.stop(host.agent_mut(self.agent))
    }

    /// Point the native follow logic at the leader.
    ///
    /// Returns `false` if either the agent or the leader is not available.
    pub fn rearm_leader<H: AgentHost>(&mut self, host: &mut H) -> bool {
        let Some(anchor) = host.position_of(self.leader) else {
            return false;
        };
        match host.agent_mut(self.agent) {
            Some(agent) => {
                agent.rearm_leader(self.leader, anchor);
                self.leader_armed = true;
                true
            }
            None => false,
        }
    }

    /// `false` until the first successful [`rearm_leader`][Self::rearm_leader].
    #[inline]
    pub fn is_leader_armed(&self) -> bool {
        self.leader_armed
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance the movement executor, then the follow supervisor.
    ///
    /// A deferred leader re-arm is retried first and reported as
    /// `FollowEvent::Rearmed`.  Supervision is skipped when the agent or the
    /// leader cannot be resolved this tick.
    pub fn tick<H: AgentHost>(&mut self, delta_secs: f32, host: &mut H) -> ControllerTick {
        let completion = self.movement.tick(delta_secs, host.agent_mut(self.agent));

        let mut follow = Vec::new();
        if !self.leader_armed && self.rearm_leader(host) {
            follow.push(FollowEvent::Rearmed);
        }
        let leader_pos = host.position_of(self.leader);
        if let (Some(leader_pos), Some(agent)) = (leader_pos, host.agent_mut(self.agent)) {
            follow.extend(self.follow.tick(
                delta_secs,
                agent,
                self.leader,
                leader_pos,
                self.movement.is_active(),
            ));
        }

        ControllerTick { completion, follow }
    }

    /// Drop a combat target the native update re-acquired while combat
    /// acquisition is suppressed.
    ///
    /// Returns `true` if a target was scrubbed.
    pub fn scrub_combat_target<H: AgentHost>(&mut self, host: &mut H) -> bool {
        if !self.movement.is_peace_mode_active() {
            return false;
        }
        match host.agent_mut(self.agent) {
            Some(agent) => {
                agent.clear_combat_target();
                true
            }
            None => false,
        }
    }
}
