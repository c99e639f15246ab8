//! Node identifiers and per-node bookkeeping.

use core::fmt;
use std::collections::BTreeMap;

use crate::node::Node;

/// Unique identifier for a node in a pipeline.
///
/// Ids are assigned sequentially starting at 1 and never reused within a
/// pipeline instance, even after erasure. A stale id therefore reliably
/// reads as "not present" instead of silently naming a different node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Returns the raw numeric identifier.
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Bookkeeping for one stored node.
///
/// `inputs` and `dependents` are two views of the same wiring: for every
/// `slot -> source` binding here, the source's entry holds a matching
/// `(consumer, slot)` pair. Mutations maintain both sides together.
pub(crate) struct NodeEntry {
    /// The owned node instance.
    pub node: Box<dyn Node>,
    /// Which upstream currently feeds each input slot.
    pub inputs: BTreeMap<usize, NodeId>,
    /// (consumer, slot) pairs this node's output is wired into.
    pub dependents: Vec<(NodeId, usize)>,
}

impl NodeEntry {
    pub fn new(node: Box<dyn Node>) -> Self {
        Self {
            node,
            inputs: BTreeMap::new(),
            dependents: Vec::new(),
        }
    }
}
