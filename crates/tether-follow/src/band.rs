//! Distance bands around the leader.

use tether_core::FollowConfig;

/// Which tier of the follow response a distance falls into.
///
/// Boundaries are inclusive on the near side: a companion exactly at
/// `comfortable_radius` is `Comfortable`, exactly at `teleport_radius` is
/// still `ForceFollow`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum FollowBand {
    /// `d <= comfortable_radius`.
    Comfortable,
    /// `comfortable_radius < d <= force_follow_radius`.
    Slack,
    /// `force_follow_radius < d <= teleport_radius`.
    ForceFollow,
    /// `d > teleport_radius`, or a distance that is not a number.
    Teleport,
}

impl FollowBand {
    pub fn classify(distance: f32, config: &FollowConfig) -> FollowBand {
        if distance <= config.comfortable_radius {
            FollowBand::Comfortable
        } else if distance <= config.force_follow_radius {
            FollowBand::Slack
        } else if distance <= config.teleport_radius {
            FollowBand::ForceFollow
        } else {
            // NaN lands here too: a companion with a broken position is
            // recovered to the leader.
            FollowBand::Teleport
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FollowBand::Comfortable => "comfortable",
            FollowBand::Slack       => "slack",
            FollowBand::ForceFollow => "force_follow",
            FollowBand::Teleport    => "teleport",
        }
    }
}

impl std::fmt::Display for FollowBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
