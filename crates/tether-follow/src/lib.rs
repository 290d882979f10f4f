//! `tether-follow`: keeps each companion within reach of its leader.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`band`]       | `FollowBand`, distance classification against `FollowConfig` |
//! | [`event`]      | `FollowEvent`, `TeleportReason`                              |
//! | [`supervisor`] | `FollowSupervisor`, the per-companion monitor                |
//!
//! # Response tiers
//!
//! ```text
//!   0 ──── comfortable ──── force_follow ──────── teleport ────── ∞
//!   │ Comfortable │   Slack    │      ForceFollow     │  Teleport  │
//!   │ reset state │ hysteresis │ walk back, time out  │ warp now   │
//! ```
//!
//! The supervisor runs once per tick after the movement executor and is
//! suspended while a manual command is outstanding.  Inside the slack band a
//! companion already being walked back keeps being walked back; nothing new
//! starts there.

pub mod band;
pub mod event;
pub mod supervisor;


pub use band::FollowBand;
pub use event::{FollowEvent, TeleportReason};
pub use supervisor::FollowSupervisor;
