//! `tether-host`: the seam between the tether framework and the host
//! simulation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                         |
//! |--------------|------------------------------------------------------------------|
//! | [`agent`]    | `NativeAgent`, what the framework reads from and commands on an agent |
//! | [`host`]     | `AgentHost`, resolves an `AgentHandle` to a live agent           |
//! | [`decision`] | `DecisionPoint`, `OverridePredicate`, `DecisionPoints`           |
//! | [`scripted`] | `ScriptedAgent`, `ScriptedHost`, `NativeCall`, recording doubles |
//!
//! # Design notes
//!
//! The framework never owns host agents.  Every tick it is handed a
//! `&mut impl AgentHost` and looks agents up by handle; a lookup miss means
//! the agent has not finished spawning or is already gone, and the caller
//! degrades to a no-op instead of failing.
//!
//! The host's behavior engine does not call arbitrary framework code.  It
//! asks one of four enumerated questions ([`DecisionPoint`]) through
//! [`DecisionPoints`] before running the matching native action.

pub mod agent;
pub mod decision;
pub mod host;
pub mod scripted;

#[cfg(test)]
mod tests;

pub use agent::NativeAgent;
pub use decision::{DecisionPoint, DecisionPoints, OverridePredicate, Suppression};
pub use host::AgentHost;
pub use scripted::{NativeCall, ScriptedAgent, ScriptedHost};
