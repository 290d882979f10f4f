//! The `Squad` struct: controller lifecycle, command surface, and tick.

use tether_core::{AgentHandle, ControllerId, Point3, TetherConfig, TetherError};
use tether_follow::FollowEvent;
use tether_host::{AgentHost, OverridePredicate};
use tracing::{debug, info};

use crate::{AgentRegistry, Controller, ControllerTick, NoopObserver, SquadError, SquadObserver, SquadResult};

/// Every companion controller plus the registry that finds them by handle.
///
/// The squad owns its controllers outright.  They live in a slot vector
/// indexed by `ControllerId`, so the registry's handle lookup is followed by
/// a direct index, and ticks and team-wide commands visit controllers in
/// ascending id order, which keeps runs reproducible.  Ids are never reused;
/// trailing empty slots are dropped on detach.
///
/// Create via [`SquadBuilder`][crate::SquadBuilder].
pub struct Squad<O: SquadObserver = NoopObserver> {
    config:      TetherConfig,
    controllers: Vec<Option<Controller>>,
    live:        usize,
    registry:    AgentRegistry,
    next_id:     ControllerId,
    /// Sum of every `delta_secs` passed to `tick`.
    clock_secs:  f64,
    observer:    O,
}

impl<O: SquadObserver> Squad<O> {
    pub(crate) fn new(config: TetherConfig, observer: O) -> Self {
        Self {
            config,
            controllers: Vec::new(),
            live:        0,
            registry:    AgentRegistry::new(),
            next_id:     ControllerId(0),
            clock_secs:  0.0,
            observer,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Take control of `agent`, following `leader`.
    ///
    /// Registers the new controller and points the native follow logic at
    /// the leader.  Companions commonly attach before the host has finished
    /// spawning them: if the agent or the leader cannot be resolved yet, the
    /// controller is still registered and the re-arm happens on the first
    /// tick both resolve.
    ///
    /// # Errors
    ///
    /// [`SquadError::AlreadyAttached`] if `agent` already has a controller.
    pub fn attach<H: AgentHost>(
        &mut self,
        agent:  AgentHandle,
        leader: AgentHandle,
        host:   &mut H,
    ) -> SquadResult<ControllerId> {
        if let Some(controller) = self.registry.lookup(agent) {
            return Err(SquadError::AlreadyAttached { agent, controller });
        }
        let id = self.next_id;
        self.next_id = id.next();

        let mut controller = Controller::new(id, agent, leader, &self.config);
        self.registry.register(agent, id);
        info!(controller = %id, %agent, %leader, "controller attached");
        self.observer.on_attached(id, agent, leader);

        if controller.rearm_leader(host) {
            self.observer.on_rearm(id, agent, leader);
        } else {
            debug!(controller = %id, %agent, %leader, "agent or leader not resolvable yet; re-arm deferred");
        }
        self.insert(controller);
        Ok(id)
    }

    /// Release controller `id`: unregister it, stop any outstanding command,
    /// and drop it.  The agent goes back to native control.
    pub fn detach<H: AgentHost>(&mut self, id: ControllerId, host: &mut H) -> SquadResult<()> {
        if self.teardown(id, host) {
            Ok(())
        } else {
            Err(TetherError::ControllerNotFound(id).into())
        }
    }

    /// Detach every controller.  Used when the level ends or the squad is
    /// dismissed.  Returns how many were detached.
    pub fn despawn_all<H: AgentHost>(&mut self, host: &mut H) -> usize {
        let ids: Vec<ControllerId> = self.controllers().map(Controller::id).collect();
        let count = ids.into_iter().filter(|&id| self.teardown(id, host)).count();
        if count > 0 {
            info!(count, "squad dismissed");
        }
        count
    }

    // ── Command surface ───────────────────────────────────────────────────

    /// Send one companion to `target`.
    ///
    /// # Errors
    ///
    /// - `TetherError::ControllerNotFound` for an unknown `id`.
    /// - [`SquadError::MoveRejected`] if the executor refused the command.
    pub fn issue_move_command<H: AgentHost>(
        &mut self,
        id:     ControllerId,
        target: Point3,
        host:   &mut H,
    ) -> SquadResult<()> {
        let controller = self
            .controllers
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(TetherError::ControllerNotFound(id))?;
        dispatch_move(controller, target, host, &mut self.observer)
    }

    /// Send every companion to `target`, each scattered by an independent
    /// horizontal offset in `[-jitter, jitter]` on x and z.
    ///
    /// Rejections are reported to the observer and skipped.  Returns the
    /// number of companions that accepted the command.
    pub fn issue_move_command_to_all<H: AgentHost>(
        &mut self,
        target: Point3,
        jitter: f32,
        host:   &mut H,
    ) -> usize {
        let jitter = if jitter.is_finite() { jitter.max(0.0) } else { 0.0 };
        let mut accepted = 0;
        let total = self.live;
        for controller in self.controllers.iter_mut().flatten() {
            let scattered = controller.scatter(target, jitter);
            if dispatch_move(controller, scattered, host, &mut self.observer).is_ok() {
                accepted += 1;
            }
        }
        debug!(%target, jitter, accepted, total, "team move issued");
        accepted
    }

    /// Cancel every outstanding manual command.  Returns how many were
    /// cancelled.
    pub fn stop_all<H: AgentHost>(&mut self, host: &mut H) -> usize {
        let mut stopped = 0;
        for controller in self.controllers.iter_mut().flatten() {
            if controller.stop(host) {
                self.observer.on_move_cancelled(controller.id(), controller.agent());
                stopped += 1;
            }
        }
        stopped
    }

    /// Cancel controller `id`'s outstanding command.  `Ok(false)` if it had
    /// none.
    pub fn stop<H: AgentHost>(&mut self, id: ControllerId, host: &mut H) -> SquadResult<bool> {
        let controller = self
            .controllers
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(TetherError::ControllerNotFound(id))?;
        let stopped = controller.stop(host);
        if stopped {
            self.observer.on_move_cancelled(id, controller.agent());
        }
        Ok(stopped)
    }

    /// `true` iff controller `id` exists and has a manual command outstanding.
    pub fn query_is_override_active(&self, id: ControllerId) -> bool {
        self.controller(id).is_some_and(Controller::is_manual_override_active)
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance every controller by `delta_secs`.
    pub fn tick<H: AgentHost>(&mut self, delta_secs: f32, host: &mut H) {
        self.clock_secs += f64::from(delta_secs.max(0.0));
        self.observer.on_tick_start(self.clock_secs);

        for controller in self.controllers.iter_mut().flatten() {
            let ControllerTick { completion, follow } = controller.tick(delta_secs, host);
            let (id, agent) = (controller.id(), controller.agent());

            if let Some(completion) = completion {
                self.observer.on_move_finished(id, agent, completion);
            }
            for event in follow {
                match event {
                    FollowEvent::ForceFollowStarted { distance } => {
                        self.observer.on_force_follow_started(id, agent, distance)
                    }
                    FollowEvent::FollowReissued { distance } => {
                        self.observer.on_follow_reissued(id, agent, distance)
                    }
                    FollowEvent::Teleported { from, to, reason } => {
                        self.observer.on_teleport(id, agent, from, to, reason)
                    }
                    FollowEvent::Rearmed => {
                        self.observer.on_rearm(id, agent, controller.leader())
                    }
                }
            }
        }
    }

    /// Hook for the interception layer, called after the host's native update
    /// of `handle`.  Scrubs a combat target re-acquired in peace mode.
    ///
    /// Returns `true` if a target was scrubbed.  Unknown handles are ignored.
    pub fn after_native_update<H: AgentHost>(&mut self, handle: AgentHandle, host: &mut H) -> bool {
        let Some(id) = self.registry.lookup(handle) else {
            return false;
        };
        self.slot_mut(id)
            .is_some_and(|controller| controller.scrub_combat_target(host))
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &TetherConfig {
        &self.config
    }

    pub fn controller(&self, id: ControllerId) -> Option<&Controller> {
        self.controllers.get(id.index()).and_then(Option::as_ref)
    }

    /// The controller attached to native agent `handle`.
    pub fn controller_for(&self, handle: AgentHandle) -> Option<&Controller> {
        self.registry
            .lookup(handle)
            .and_then(|id| self.controller(id))
    }

    /// Controllers in ascending id order.
    pub fn controllers(&self) -> impl Iterator<Item = &Controller> {
        self.controllers.iter().flatten()
    }

    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Seconds simulated so far.
    pub fn clock_secs(&self) -> f64 {
        self.clock_secs
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consume the squad and return its observer (e.g. to finish an output
    /// writer).
    pub fn into_observer(self) -> O {
        self.observer
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn slot_mut(&mut self, id: ControllerId) -> Option<&mut Controller> {
        self.controllers.get_mut(id.index()).and_then(Option::as_mut)
    }

    fn insert(&mut self, controller: Controller) {
        let index = controller.id().index();
        if self.controllers.len() <= index {
            self.controllers.resize_with(index + 1, || None);
        }
        self.controllers[index] = Some(controller);
        self.live += 1;
    }

    fn remove(&mut self, id: ControllerId) -> Option<Controller> {
        let controller = self.controllers.get_mut(id.index())?.take()?;
        self.live -= 1;
        while matches!(self.controllers.last(), Some(None)) {
            self.controllers.pop();
        }
        Some(controller)
    }

    /// Unregister first so no interception call can reach a controller that
    /// is being torn down.
    fn teardown<H: AgentHost>(&mut self, id: ControllerId, host: &mut H) -> bool {
        let Some(agent) = self.controller(id).map(Controller::agent) else {
            return false;
        };
        self.registry.unregister(agent);

        if let Some(mut controller) = self.remove(id) {
            if controller.stop(host) {
                self.observer.on_move_cancelled(id, agent);
            }
        }
        info!(controller = %id, %agent, "controller detached");
        self.observer.on_detached(id, agent);
        true
    }
}

impl<O: SquadObserver> OverridePredicate for Squad<O> {
    fn is_manual_override_active(&self, handle: AgentHandle) -> bool {
        self.controller_for(handle)
            .is_some_and(Controller::is_manual_override_active)
    }

    fn is_peace_mode_active(&self, handle: AgentHandle) -> bool {
        self.controller_for(handle)
            .is_some_and(Controller::is_peace_mode_active)
    }
}

/// Issue one command and report it, preceded by `on_move_cancelled` when an
/// outstanding command was displaced.
fn dispatch_move<H: AgentHost, O: SquadObserver>(
    controller: &mut Controller,
    target:     Point3,
    host:       &mut H,
    observer:   &mut O,
) -> SquadResult<()> {
    let (id, agent) = (controller.id(), controller.agent());
    let was_active = controller.is_manual_override_active();
    let result = controller.issue_move(target, host);

    // Accepted: the new command replaced the old one.  Rejected while idle
    // afterwards: the executor failed closed and dropped it.
    if was_active && (result.is_ok() || !controller.is_manual_override_active()) {
        observer.on_move_cancelled(id, agent);
    }
    match result {
        Ok(()) => {
            observer.on_move_started(id, agent, target);
            Ok(())
        }
        Err(source) => {
            debug!(controller = %id, %agent, error = %source, "move command rejected");
            observer.on_move_rejected(id, agent, target, &source);
            Err(SquadError::MoveRejected { controller: id, source })
        }
    }
}
