//! Node identity registry.
//!
//! Maps node handles to sequential identities in first-visit order.
//! Keys are [`NodeId`]s, so two structurally identical nodes stay distinct.

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Entry;
use irlin_core::NodeId;

/// Stable identity of a node within one run. Printed as the bare number.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Identity(u32);

impl Identity {
    /// Create an identity from a raw number. Use only for tests and tooling.
    #[inline]
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("node {node} already has identity {identity}")]
    AlreadyAssigned { node: NodeId, identity: Identity },
    #[error("node {0} has no identity")]
    Unassigned(NodeId),
}

/// Identity registry for one serialization run.
#[derive(Debug, Clone, Default)]
pub struct IdentityRegistry {
    ids: IndexMap<NodeId, Identity>,
}

impl IdentityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: IndexMap::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn lookup(&self, node: NodeId) -> Option<Identity> {
        self.ids.get(&node).copied()
    }

    /// Give `node` the next identity. Fails if it already has one.
    pub fn assign(&mut self, node: NodeId) -> Result<Identity, RegistryError> {
        let next = Identity(self.ids.len() as u32);
        match self.ids.entry(node) {
            Entry::Occupied(e) => Err(RegistryError::AlreadyAssigned {
                node,
                identity: *e.get(),
            }),
            Entry::Vacant(e) => Ok(*e.insert(next)),
        }
    }

    /// Identity of a node that must already have one.
    #[inline]
    pub fn resolve(&self, node: NodeId) -> Result<Identity, RegistryError> {
        self.lookup(node).ok_or(RegistryError::Unassigned(node))
    }

    /// Node holding `identity`, if assigned.
    pub fn node_of(&self, identity: Identity) -> Option<NodeId> {
        self.ids.get_index(identity.index()).map(|(&node, _)| node)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Assignments in identity order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Identity)> + '_ {
        self.ids.iter().map(|(&node, &identity)| (node, identity))
    }
}
