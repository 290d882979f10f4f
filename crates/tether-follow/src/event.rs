//! What the supervisor did on a tick.

use tether_core::Point3;

/// Why a companion was teleported back to its leader.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TeleportReason {
    /// The companion was beyond `teleport_radius`.
    OutOfRange,
    /// The companion stayed in the force-follow band past
    /// `teleport_timeout_secs`.
    ForceFollowTimeout,
}

impl TeleportReason {
    pub fn as_str(self) -> &'static str {
        match self {
            TeleportReason::OutOfRange         => "out_of_range",
            TeleportReason::ForceFollowTimeout => "force_follow_timeout",
        }
    }
}

impl std::fmt::Display for TeleportReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A side effect the supervisor applied to the native agent.
///
/// Returned from [`FollowSupervisor::tick`][crate::FollowSupervisor::tick] in
/// the order the effects were applied.  Several can occur on one tick (a
/// pending re-arm followed by a new force-follow, for example).
#[derive(Debug, Clone, PartialEq)]
pub enum FollowEvent {
    /// The companion crossed into the force-follow band and was sent toward
    /// the leader.
    ForceFollowStarted { distance: f32 },

    /// A force-following companion had stopped short and the follow command
    /// was issued again.
    FollowReissued { distance: f32 },

    /// The companion was warped from `from` to `to`.
    Teleported {
        from:   Point3,
        to:     Point3,
        reason: TeleportReason,
    },

    /// The native leader reference was restored after a teleport.
    Rearmed,
}
