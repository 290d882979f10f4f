//! The `AgentHost` trait: handle-to-agent resolution.

use tether_core::{AgentHandle, Point3};

use crate::NativeAgent;

/// Resolves [`AgentHandle`]s to live host agents.
///
/// Implemented by the application's adapter over the host world (or by
/// [`ScriptedHost`][crate::ScriptedHost] in tests).  A `None` return is not
/// an error: it means the agent is not spawned yet or already despawned.
pub trait AgentHost {
    type Agent: NativeAgent;

    fn agent(&self, handle: AgentHandle) -> Option<&Self::Agent>;

    fn agent_mut(&mut self, handle: AgentHandle) -> Option<&mut Self::Agent>;

    /// World position of `handle`.
    ///
    /// The default goes through [`agent`][Self::agent]; override it when the
    /// leader is not itself a `NativeAgent` (e.g. a player character).
    fn position_of(&self, handle: AgentHandle) -> Option<Point3> {
        self.agent(handle).map(|agent| agent.position())
    }
}
