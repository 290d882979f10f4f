//! `EventLogObserver<W>`: bridges `SquadObserver` to an `EventWriter`.

use tether_core::{AgentHandle, ControllerId, Point3};
use tether_follow::TeleportReason;
use tether_movement::{MoveCompletion, MovementError};
use tether_squad::SquadObserver;

use crate::row::{EventKind, EventRow};
use crate::writer::EventWriter;
use crate::{OutputError, OutputResult};

/// A [`SquadObserver`] that records every controller event to any
/// [`EventWriter`] backend.
///
/// Events are buffered for the current tick and written as one batch when
/// the next tick starts, or on [`finish`][Self::finish].  Errors from the
/// writer are stored internally because `SquadObserver` methods have no
/// return value; check them with [`take_error`][Self::take_error].
pub struct EventLogObserver<W: EventWriter> {
    writer:     W,
    now_secs:   f64,
    pending:    Vec<EventRow>,
    written:    u64,
    last_error: Option<OutputError>,
}

impl<W: EventWriter> EventLogObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            now_secs:   0.0,
            pending:    Vec::new(),
            written:    0,
            last_error: None,
        }
    }

    /// Write any buffered events and finish the writer.
    ///
    /// Returns the first error seen during the run, if any, or the error from
    /// this final flush.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.flush();
        let result = self.writer.finish();
        self.store_err(result);
        match self.last_error.take() {
            Some(e) => Err(e),
            None    => Ok(()),
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Number of events handed to the writer so far.
    pub fn events_written(&self) -> u64 {
        self.written
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let rows = std::mem::take(&mut self.pending);
        let result = self.writer.write_events(&rows);
        if result.is_ok() {
            self.written += rows.len() as u64;
        }
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn record(
        &mut self,
        id:       ControllerId,
        agent:    AgentHandle,
        kind:     EventKind,
        position: Option<Point3>,
        distance: Option<f32>,
        detail:   String,
    ) {
        self.pending.push(EventRow {
            time_secs:  self.now_secs,
            controller: id.0,
            agent:      agent.0,
            kind,
            position,
            distance,
            detail,
        });
    }
}

impl<W: EventWriter> SquadObserver for EventLogObserver<W> {
    fn on_tick_start(&mut self, now_secs: f64) {
        self.flush();
        self.now_secs = now_secs;
    }

    fn on_attached(&mut self, id: ControllerId, agent: AgentHandle, leader: AgentHandle) {
        self.record(id, agent, EventKind::Attached, None, None, leader.0.to_string());
    }

    fn on_detached(&mut self, id: ControllerId, agent: AgentHandle) {
        self.record(id, agent, EventKind::Detached, None, None, String::new());
    }

    fn on_move_started(&mut self, id: ControllerId, agent: AgentHandle, target: Point3) {
        self.record(id, agent, EventKind::MoveStarted, Some(target), None, String::new());
    }

    fn on_move_rejected(
        &mut self,
        id:     ControllerId,
        agent:  AgentHandle,
        target: Point3,
        error:  &MovementError,
    ) {
        self.record(id, agent, EventKind::MoveRejected, Some(target), None, error.to_string());
    }

    fn on_move_finished(&mut self, id: ControllerId, agent: AgentHandle, completion: MoveCompletion) {
        let detail = match completion {
            MoveCompletion::Arrived(rule) => rule.as_str(),
            MoveCompletion::TimedOut      => "timed_out",
        };
        self.record(id, agent, EventKind::MoveFinished, None, None, detail.to_string());
    }

    fn on_move_cancelled(&mut self, id: ControllerId, agent: AgentHandle) {
        self.record(id, agent, EventKind::MoveCancelled, None, None, String::new());
    }

    fn on_force_follow_started(&mut self, id: ControllerId, agent: AgentHandle, distance: f32) {
        self.record(id, agent, EventKind::ForceFollowStarted, None, Some(distance), String::new());
    }

    fn on_follow_reissued(&mut self, id: ControllerId, agent: AgentHandle, distance: f32) {
        self.record(id, agent, EventKind::FollowReissued, None, Some(distance), String::new());
    }

    fn on_teleport(
        &mut self,
        id:     ControllerId,
        agent:  AgentHandle,
        from:   Point3,
        to:     Point3,
        reason: TeleportReason,
    ) {
        let distance = from.distance(to);
        self.record(id, agent, EventKind::Teleported, Some(to), Some(distance), reason.as_str().to_string());
    }

    fn on_rearm(&mut self, id: ControllerId, agent: AgentHandle, leader: AgentHandle) {
        self.record(id, agent, EventKind::Rearmed, None, None, leader.0.to_string());
    }
}
