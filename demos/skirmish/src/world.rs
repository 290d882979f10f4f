//! A kinematic stand-in for the host simulation.
//!
//! Agents glide in straight lines at a fixed speed.  Path requests take a
//! short while to resolve, and targets south of `UNREACHABLE_Z` resolve to a
//! path that never ends, which is how a real pathfinder behaves on a target
//! behind a wall.  The player is not an agent: the squad reads its position
//! through `AgentHost::position_of`.

use std::collections::BTreeMap;

use tether_core::{AgentHandle, Point3};
use tether_host::{AgentHost, DecisionPoints, NativeAgent};

/// Seconds the toy pathfinder takes to answer a request.
const PATH_LATENCY_SECS: f32 = 0.3;

/// Targets with `z` below this never get a finished path.
pub const UNREACHABLE_Z: f32 = -50.0;

/// Native follow distance: companions idle closer than this.
const NATIVE_FOLLOW_RADIUS: f32 = 3.0;

/// Companions notice the enemy within this distance.
const NOTICE_RADIUS: f32 = 15.0;

// ── ToyAgent ──────────────────────────────────────────────────────────────────

pub struct ToyAgent {
    handle:            AgentHandle,
    position:          Point3,
    speed:             f32,
    destination:       Option<Point3>,
    path_latency:      f32,
    has_path:          bool,
    reached_end:       bool,
    pub combat_target: Option<AgentHandle>,
    pub alerted:       bool,
    pub weapon_ready:  bool,
    pub leader:        Option<AgentHandle>,
}

impl ToyAgent {
    pub fn new(handle: AgentHandle, position: Point3, speed: f32) -> Self {
        Self {
            handle,
            position,
            speed,
            destination:   None,
            path_latency:  0.0,
            has_path:      false,
            reached_end:   false,
            combat_target: None,
            alerted:       false,
            weapon_ready:  false,
            leader:        None,
        }
    }

    fn integrate(&mut self, delta_secs: f32) {
        if self.path_latency > 0.0 {
            self.path_latency -= delta_secs;
            if self.path_latency <= 0.0 {
                self.has_path = self.destination.is_some();
            }
            return;
        }
        let Some(dest) = self.destination else {
            return;
        };
        if dest.z < UNREACHABLE_Z {
            return;
        }
        let to_go = dest - self.position;
        let remaining = self.position.distance(dest);
        let step = self.speed * delta_secs;
        if remaining <= step {
            self.position    = dest;
            self.destination = None;
            self.reached_end = true;
        } else {
            let k = step / remaining;
            self.position = Point3::new(
                self.position.x + to_go.x * k,
                self.position.y + to_go.y * k,
                self.position.z + to_go.z * k,
            );
        }
    }
}

impl NativeAgent for ToyAgent {
    fn handle(&self) -> AgentHandle {
        self.handle
    }

    fn position(&self) -> Point3 {
        self.position
    }

    fn is_path_pending(&self) -> bool {
        self.path_latency > 0.0
    }

    fn reached_end_of_path(&self) -> bool {
        self.reached_end
    }

    fn has_path(&self) -> bool {
        self.has_path
    }

    fn is_moving(&self) -> bool {
        self.destination.is_some() && !self.is_path_pending()
    }

    fn stop_move(&mut self) {
        self.destination  = None;
        self.path_latency = 0.0;
        self.has_path     = false;
        self.reached_end  = false;
    }

    fn move_to(&mut self, target: Point3) {
        self.destination  = Some(target);
        self.path_latency = PATH_LATENCY_SECS;
        self.has_path     = false;
        self.reached_end  = false;
    }

    fn clear_combat_target(&mut self) {
        self.combat_target = None;
        self.weapon_ready  = false;
    }

    fn clear_perception(&mut self) {
        self.alerted = false;
    }

    fn warp_to(&mut self, position: Point3) {
        self.position = position;
    }

    fn rearm_leader(&mut self, leader: AgentHandle, _anchor: Point3) {
        self.leader = Some(leader);
    }
}

// ── World ─────────────────────────────────────────────────────────────────────

pub struct World {
    pub player:     AgentHandle,
    pub player_pos: Point3,
    pub enemy:      AgentHandle,
    pub enemy_pos:  Point3,
    pub agents:     BTreeMap<AgentHandle, ToyAgent>,
}

impl World {
    /// Spawn service stand-in: place a companion and hand back its handle.
    pub fn spawn(&mut self, handle: AgentHandle, position: Point3, speed: f32) -> AgentHandle {
        self.agents.insert(handle, ToyAgent::new(handle, position, speed));
        handle
    }

    /// The host behavior engine.  Every native action asks `gate` first.
    pub fn native_update<G: DecisionPoints>(&mut self, gate: &G) {
        let leader_pos = self.player_pos;
        let (enemy, enemy_pos) = (self.enemy, self.enemy_pos);

        for (&handle, agent) in &mut self.agents {
            let enemy_near = agent.position.distance(enemy_pos) < NOTICE_RADIUS;

            if enemy_near && gate.may_notice_target(handle) {
                agent.alerted = true;
                agent.combat_target = Some(enemy);
            } else if enemy_near && agent.alerted {
                // Retaliation bypasses the notice node; the post-update scrub
                // catches it.
                agent.combat_target = Some(enemy);
            }

            if agent.combat_target.is_some() && gate.may_ready_weapon(handle) {
                agent.weapon_ready = true;
            }

            if gate.may_trace_target(handle) {
                match agent.combat_target {
                    Some(_) => {
                        if agent.destination != Some(enemy_pos) {
                            agent.move_to(enemy_pos);
                        }
                    }
                    None => {
                        let idle = agent.destination.is_none();
                        if idle
                            && agent.leader.is_some()
                            && agent.position.distance(leader_pos) > NATIVE_FOLLOW_RADIUS
                        {
                            agent.move_to(leader_pos);
                        }
                    }
                }
            }

            if agent.combat_target.is_some()
                && agent.position.distance(enemy_pos) < 2.0
                && gate.may_stop_moving(handle)
            {
                agent.stop_move();
            }
        }
    }

    /// Advance every agent's motion and the player's walk.
    pub fn integrate(&mut self, delta_secs: f32, player_velocity: Point3) {
        self.player_pos = Point3::new(
            self.player_pos.x + player_velocity.x * delta_secs,
            self.player_pos.y + player_velocity.y * delta_secs,
            self.player_pos.z + player_velocity.z * delta_secs,
        );
        for agent in self.agents.values_mut() {
            agent.integrate(delta_secs);
        }
    }
}

impl AgentHost for World {
    type Agent = ToyAgent;

    fn agent(&self, handle: AgentHandle) -> Option<&ToyAgent> {
        self.agents.get(&handle)
    }

    fn agent_mut(&mut self, handle: AgentHandle) -> Option<&mut ToyAgent> {
        self.agents.get_mut(&handle)
    }

    fn position_of(&self, handle: AgentHandle) -> Option<Point3> {
        if handle == self.player {
            return Some(self.player_pos);
        }
        self.agent(handle).map(|agent| agent.position)
    }
}
