//! The follow supervisor: per-companion distance monitor.

use tether_core::{AgentHandle, Countdown, FollowConfig, Point3, Stopwatch};
use tether_host::NativeAgent;
use tracing::{debug, info};

use crate::{FollowBand, FollowEvent, TeleportReason};

/// Watches one companion's distance to its leader and walks or warps it back.
///
/// # State
///
/// | Field                  | Meaning                                                  |
/// |------------------------|----------------------------------------------------------|
/// | `force_following`      | a follow command toward the leader is being maintained   |
/// | `force_follow_elapsed` | time spent force-following since entry                   |
/// | `rearm`                | settle countdown to re-arm the leader after a teleport   |
///
/// `force_follow_elapsed` is reset whenever force-follow starts, whenever the
/// companion is back inside `comfortable_radius`, and on every teleport.
pub struct FollowSupervisor {
    config:               FollowConfig,
    force_following:      bool,
    force_follow_elapsed: Stopwatch,
    rearm:                Option<Countdown>,
}

impl FollowSupervisor {
    pub fn new(config: FollowConfig) -> Self {
        Self {
            config,
            force_following:      false,
            force_follow_elapsed: Stopwatch::new(),
            rearm:                None,
        }
    }

    /// Run one supervision step.
    ///
    /// `manual_override` is `true` while the companion's movement executor
    /// holds a command; band evaluation is skipped then, though a pending
    /// post-teleport re-arm still completes.
    pub fn tick<A: NativeAgent + ?Sized>(
        &mut self,
        delta_secs:      f32,
        agent:           &mut A,
        leader:          AgentHandle,
        leader_pos:      Point3,
        manual_override: bool,
    ) -> Vec<FollowEvent> {
        let mut events = Vec::new();

        if let Some(mut settle) = self.rearm.take() {
            if settle.advance(delta_secs) {
                self.rearm_now(agent, leader, leader_pos, &mut events);
            } else {
                self.rearm = Some(settle);
            }
        }

        if manual_override {
            return events;
        }

        let distance = agent.position().distance(leader_pos);
        match FollowBand::classify(distance, &self.config) {
            FollowBand::Comfortable => {
                if self.force_following {
                    debug!(agent = %agent.handle(), distance, "companion back within comfortable radius");
                }
                self.force_following = false;
                self.force_follow_elapsed.reset();
            }

            FollowBand::Slack => {
                if self.force_following {
                    self.keep_following(agent, leader_pos, distance, &mut events);
                }
            }

            FollowBand::ForceFollow if !self.force_following => {
                self.force_following = true;
                self.force_follow_elapsed.reset();
                agent.clear_combat_target();
                agent.move_to(leader_pos);
                debug!(agent = %agent.handle(), distance, "force-follow started");
                events.push(FollowEvent::ForceFollowStarted { distance });
            }

            FollowBand::ForceFollow => {
                self.force_follow_elapsed.advance(delta_secs);
                if self.force_follow_elapsed.exceeds(self.config.teleport_timeout_secs) {
                    self.teleport(agent, leader, leader_pos, TeleportReason::ForceFollowTimeout, &mut events);
                } else {
                    self.keep_following(agent, leader_pos, distance, &mut events);
                }
            }

            FollowBand::Teleport => {
                self.teleport(agent, leader, leader_pos, TeleportReason::OutOfRange, &mut events);
            }
        }

        events
    }

    /// Drop force-follow state because a manual command took over.
    ///
    /// The manual command owns the agent's path from here; the supervisor
    /// starts fresh once it completes.
    pub fn yield_to_manual(&mut self) {
        self.force_following = false;
        self.force_follow_elapsed.reset();
    }

    #[inline]
    pub fn is_force_following(&self) -> bool {
        self.force_following
    }

    #[inline]
    pub fn force_follow_elapsed(&self) -> f32 {
        self.force_follow_elapsed.elapsed()
    }

    #[inline]
    pub fn is_rearm_pending(&self) -> bool {
        self.rearm.is_some()
    }

    pub fn config(&self) -> &FollowConfig {
        &self.config
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    fn keep_following<A: NativeAgent + ?Sized>(
        &mut self,
        agent:      &mut A,
        leader_pos: Point3,
        distance:   f32,
        events:     &mut Vec<FollowEvent>,
    ) {
        if is_underway(agent) {
            return;
        }
        agent.move_to(leader_pos);
        debug!(agent = %agent.handle(), distance, "follow command re-issued");
        events.push(FollowEvent::FollowReissued { distance });
    }

    fn teleport<A: NativeAgent + ?Sized>(
        &mut self,
        agent:      &mut A,
        leader:     AgentHandle,
        leader_pos: Point3,
        reason:     TeleportReason,
        events:     &mut Vec<FollowEvent>,
    ) {
        let from = agent.position();
        agent.stop_move();
        agent.clear_combat_target();
        agent.clear_perception();
        agent.warp_to(leader_pos);

        self.force_following = false;
        self.force_follow_elapsed.reset();

        info!(agent = %agent.handle(), %from, to = %leader_pos, %reason, "teleport recovery");
        events.push(FollowEvent::Teleported { from, to: leader_pos, reason });

        if self.config.settle_delay_secs > 0.0 {
            self.rearm = Some(Countdown::new(self.config.settle_delay_secs));
        } else {
            self.rearm = None;
            self.rearm_now(agent, leader, leader_pos, events);
        }
    }

    fn rearm_now<A: NativeAgent + ?Sized>(
        &self,
        agent:      &mut A,
        leader:     AgentHandle,
        leader_pos: Point3,
        events:     &mut Vec<FollowEvent>,
    ) {
        agent.rearm_leader(leader, leader_pos);
        debug!(agent = %agent.handle(), %leader, "leader reference re-armed");
        events.push(FollowEvent::Rearmed);
    }
}

/// A companion counts as underway while a path result is owed, while it
/// reports motion, or while it holds a path it has not finished.
fn is_underway<A: NativeAgent + ?Sized>(agent: &A) -> bool {
    agent.is_path_pending()
        || agent.is_moving()
        || (agent.has_path() && !agent.reached_end_of_path())
}
