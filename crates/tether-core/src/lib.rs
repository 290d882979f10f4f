//! `tether-core`: foundational types for the `tether` companion-control
//! framework.
//!
//! This crate is a dependency of every other `tether-*` crate.  It has no
//! `tether-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentHandle`, `ControllerId`                         |
//! | [`geo`]         | `Point3`, straight-line and horizontal distance       |
//! | [`time`]        | `Countdown`, `Stopwatch`                              |
//! | [`rng`]         | `JitterRng` (deterministic command scatter)           |
//! | [`config`]      | `MovementConfig`, `FollowConfig`, `TetherConfig`      |
//! | [`error`]       | `TetherError`, `TetherResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, points and config.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{FollowConfig, MovementConfig, TetherConfig};
pub use error::{TetherError, TetherResult};
pub use geo::Point3;
pub use ids::{AgentHandle, ControllerId};
pub use rng::JitterRng;
pub use time::{Countdown, Stopwatch};
