//! `tether-squad`: the composition root of the tether framework.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                          |
//! |----------------|-------------------------------------------------------------------|
//! | [`registry`]   | `AgentRegistry`, native handle → `ControllerId`                   |
//! | [`controller`] | `Controller`, one companion's executor + supervisor               |
//! | [`squad`]      | `Squad<O>`, lifecycle, command surface, tick, `OverridePredicate` |
//! | [`builder`]    | `SquadBuilder`, validated construction                            |
//! | [`observer`]   | `SquadObserver`, `NoopObserver`                                   |
//! | [`error`]      | `SquadError`, `SquadResult<T>`                                    |
//!
//! # Per-tick order
//!
//! ```text
//! for controller in ascending ControllerId:
//!   ① Movement: MovementExecutor::tick; completion reported to the observer
//!   ② Follow:   FollowSupervisor::tick, suspended while ① is still active
//! ```
//!
//! Interception call sites only hold a native handle.  They ask the squad
//! through [`tether_host::DecisionPoints`], which `Squad` gets for free by
//! implementing [`tether_host::OverridePredicate`]: one registry lookup and
//! one flag read.  A handle the registry does not know answers "no override".
//!
//! # Cargo features
//!
//! | Feature   | Effect                                             |
//! |-----------|----------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for the agent registry.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tether_core::TetherConfig;
//! use tether_host::DecisionPoints;
//! use tether_squad::SquadBuilder;
//!
//! let mut squad = SquadBuilder::new(TetherConfig::default()).build()?;
//! let id = squad.attach(companion, player, &mut host)?;
//! squad.issue_move_command(id, target, &mut host)?;
//! loop {
//!     squad.tick(frame_delta, &mut host);
//!     if squad.may_trace_target(companion) { /* native pursuit */ }
//! }
//! ```

pub mod builder;
pub mod controller;
pub mod error;
pub mod observer;
pub mod registry;
pub mod squad;


pub use builder::SquadBuilder;
pub use controller::{Controller, ControllerTick};
pub use error::{SquadError, SquadResult};
pub use observer::{NoopObserver, SquadObserver};
pub use registry::AgentRegistry;
pub use squad::Squad;
