//! Plain data row types written by output backends.

use tether_core::Point3;

/// What an [`EventRow`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Attached,
    Detached,
    MoveStarted,
    MoveRejected,
    MoveFinished,
    MoveCancelled,
    ForceFollowStarted,
    FollowReissued,
    Teleported,
    Rearmed,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Attached           => "attached",
            EventKind::Detached           => "detached",
            EventKind::MoveStarted        => "move_started",
            EventKind::MoveRejected       => "move_rejected",
            EventKind::MoveFinished       => "move_finished",
            EventKind::MoveCancelled      => "move_cancelled",
            EventKind::ForceFollowStarted => "force_follow_started",
            EventKind::FollowReissued     => "follow_reissued",
            EventKind::Teleported         => "teleported",
            EventKind::Rearmed            => "rearmed",
        }
    }
}

/// One controller event.
///
/// Optional columns are written empty when the event does not carry them.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    /// Squad clock when the event happened.
    pub time_secs:  f64,
    pub controller: u32,
    pub agent:      u64,
    pub kind:       EventKind,
    /// Move target, or teleport destination.
    pub position:   Option<Point3>,
    /// Distance to the leader for follow events.
    pub distance:   Option<f32>,
    /// Arrival rule, teleport reason, rejection message, or leader handle.
    pub detail:     String,
}
