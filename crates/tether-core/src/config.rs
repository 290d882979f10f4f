//! Tuning parameters for manual movement and follow supervision.
//!
//! Every value is a plain number with a sensible `Default`.  None of the
//! concrete defaults is authoritative; what [`TetherConfig::validate`]
//! enforces is the shape the state machines rely on:
//!
//! ```text
//! 0 < warmup_secs < failsafe_secs
//! 0 < comfortable_radius < force_follow_radius < teleport_radius
//! ```

use crate::{TetherError, TetherResult};

// ── MovementConfig ────────────────────────────────────────────────────────────

/// Timing and tolerance for a single manual move command.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MovementConfig {
    /// Grace period after issuing a move during which arrival is not
    /// evaluated, so the host pathfinder has time to produce a path.
    pub warmup_secs: f32,

    /// Upper bound on how long one command may stay active.  Counted from
    /// the moment the command is issued, warmup included.
    pub failsafe_secs: f32,

    /// Horizontal distance to the target that counts as arrived when the host
    /// exposes no richer path state.
    pub arrival_epsilon: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            warmup_secs:     0.5,
            failsafe_secs:   15.0,
            arrival_epsilon: 1.2,
        }
    }
}

impl MovementConfig {
    pub fn validate(&self) -> TetherResult<()> {
        positive("movement.warmup_secs", self.warmup_secs)?;
        positive("movement.failsafe_secs", self.failsafe_secs)?;
        positive("movement.arrival_epsilon", self.arrival_epsilon)?;
        if self.warmup_secs >= self.failsafe_secs {
            return Err(TetherError::Config(format!(
                "movement.warmup_secs ({}) must be shorter than movement.failsafe_secs ({})",
                self.warmup_secs, self.failsafe_secs,
            )));
        }
        Ok(())
    }
}

// ── FollowConfig ──────────────────────────────────────────────────────────────

/// Distance bands and recovery timing for the follow supervisor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FollowConfig {
    /// At or inside this distance the companion is considered safely close
    /// and any force-follow state is cleared.
    pub comfortable_radius: f32,

    /// Beyond this distance the companion is actively walked back.
    pub force_follow_radius: f32,

    /// Beyond this distance the companion is teleported to the leader.
    pub teleport_radius: f32,

    /// Longest time a companion may stay in the force-follow band before it
    /// is teleported anyway.
    pub teleport_timeout_secs: f32,

    /// Delay between a teleport and re-arming the native leader reference.
    /// Zero re-arms on the same tick.
    pub settle_delay_secs: f32,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            comfortable_radius:    4.0,
            force_follow_radius:   12.0,
            teleport_radius:       30.0,
            teleport_timeout_secs: 8.0,
            settle_delay_secs:     0.05,
        }
    }
}

impl FollowConfig {
    pub fn validate(&self) -> TetherResult<()> {
        positive("follow.comfortable_radius", self.comfortable_radius)?;
        positive("follow.force_follow_radius", self.force_follow_radius)?;
        positive("follow.teleport_radius", self.teleport_radius)?;
        positive("follow.teleport_timeout_secs", self.teleport_timeout_secs)?;
        non_negative("follow.settle_delay_secs", self.settle_delay_secs)?;
        if !(self.comfortable_radius < self.force_follow_radius
            && self.force_follow_radius < self.teleport_radius)
        {
            return Err(TetherError::Config(format!(
                "follow radii must satisfy comfortable ({}) < force_follow ({}) < teleport ({})",
                self.comfortable_radius, self.force_follow_radius, self.teleport_radius,
            )));
        }
        Ok(())
    }
}

// ── TetherConfig ──────────────────────────────────────────────────────────────

/// Top-level configuration for a squad of companions.
///
/// Typically built in code or loaded from JSON by the application crate
/// (with the `serde` feature) and passed to the squad builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TetherConfig {
    pub movement: MovementConfig,
    pub follow: FollowConfig,

    /// Half-width of the per-companion scatter applied by team-wide move
    /// commands, so companions do not all path to the same point.
    pub command_jitter: f32,

    /// Seed for the scatter RNG.  The same seed reproduces the same spread.
    pub seed: u64,
}

impl Default for TetherConfig {
    fn default() -> Self {
        Self {
            movement:       MovementConfig::default(),
            follow:         FollowConfig::default(),
            command_jitter: 1.0,
            seed:           0,
        }
    }
}

impl TetherConfig {
    /// Check every section; the first violation is returned.
    pub fn validate(&self) -> TetherResult<()> {
        self.movement.validate()?;
        self.follow.validate()?;
        non_negative("command_jitter", self.command_jitter)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn positive(name: &str, value: f32) -> TetherResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TetherError::Config(format!("{name} must be a positive number, got {value}")))
    }
}

fn non_negative(name: &str, value: f32) -> TetherResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TetherError::Config(format!("{name} must be zero or positive, got {value}")))
    }
}
