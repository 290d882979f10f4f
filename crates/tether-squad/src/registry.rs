//! Native handle → controller lookup.

use tether_core::{AgentHandle, ControllerId};

#[cfg(feature = "fx-hash")]
type HandleMap = rustc_hash::FxHashMap<AgentHandle, ControllerId>;
#[cfg(not(feature = "fx-hash"))]
type HandleMap = std::collections::HashMap<AgentHandle, ControllerId>;

/// Maps each attached companion's native handle to its controller.
///
/// Owned by the [`Squad`][crate::Squad]; mutated only on attach and detach,
/// read on every interception call.  Registration is symmetric: the squad
/// registers a controller when it is created and unregisters it before the
/// controller is torn down, so a lookup never finds a controller that is
/// being destroyed.
#[derive(Debug, Default)]
pub struct AgentRegistry {
    map: HandleMap,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `handle` to `controller`.
    ///
    /// Idempotent: if `handle` is already mapped the existing entry is kept
    /// and `false` is returned.
    pub fn register(&mut self, handle: AgentHandle, controller: ControllerId) -> bool {
        if self.map.contains_key(&handle) {
            return false;
        }
        self.map.insert(handle, controller);
        true
    }

    /// Remove the mapping for `handle`, returning the controller it pointed
    /// at.  No-op for unknown handles.
    pub fn unregister(&mut self, handle: AgentHandle) -> Option<ControllerId> {
        self.map.remove(&handle)
    }

    #[inline]
    pub fn lookup(&self, handle: AgentHandle) -> Option<ControllerId> {
        self.map.get(&handle).copied()
    }

    #[inline]
    pub fn contains(&self, handle: AgentHandle) -> bool {
        self.map.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
