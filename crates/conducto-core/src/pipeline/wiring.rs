//! Pipeline store and wiring mutations.
//!
//! [`Pipeline`] owns every node instance and the bookkeeping that ties them
//! together: per-node slot bindings and their transposed dependent edges.
//! All mutations are check-then-apply, so a failed call leaves the graph
//! exactly as it was.

use std::collections::BTreeMap;

use crate::node::Node;

use super::entry::{NodeEntry, NodeId};
use super::error::PipelineError;

/// A typed dataflow graph of polled nodes.
///
/// The pipeline is the single owner of its nodes: hosts construct a node,
/// hand it over with [`add_node`](Self::add_node), and refer to it by
/// [`NodeId`] from then on. Edges are stored as id pairs on both sides of
/// every connection, never as references, so erasing a node mid-run cannot
/// dangle.
///
/// # Usage
///
/// 1. Create a pipeline with [`new()`](Self::new)
/// 2. Add nodes: [`add_node()`](Self::add_node)
/// 3. Wire them: [`connect()`](Self::connect)
/// 4. Check the structure: [`is_valid()`](Self::is_valid)
/// 5. Drive it: [`step()`](Self::step) / [`run()`](Self::run)
///
/// A pipeline is move-only. Copying would require cloning polymorphic node
/// state, which is not well-defined for arbitrary node behaviors.
pub struct Pipeline {
    pub(super) nodes: BTreeMap<NodeId, NodeEntry>,
    next_id: u32,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            next_id: 1,
        }
    }

    // --- Node mutations ---

    /// Takes ownership of `node` and returns its freshly assigned id.
    ///
    /// Never fails. Ids are handed out in creation order and never reused,
    /// even after the node is erased.
    pub fn add_node(&mut self, node: Box<dyn Node>) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        tracing::debug!("pipeline_add: {id} ({})", node.name());
        self.nodes.insert(id, NodeEntry::new(node));
        id
    }

    /// Removes a node, detaching it from every neighbor on both sides first.
    ///
    /// Suppliers lose their dependent edges into the node; consumers get the
    /// affected slots released (`bind(slot, None)`) and cleared. Neighbor
    /// lookups are defensive, so erase stays safe even on bookkeeping that
    /// has been left inconsistent.
    pub fn erase_node(&mut self, id: NodeId) -> Result<(), PipelineError> {
        let Some(entry) = self.nodes.remove(&id) else {
            return Err(PipelineError::InvalidNodeId(id));
        };

        // Strip this node out of every supplier's dependent list.
        for supplier in entry.inputs.values() {
            if let Some(src) = self.nodes.get_mut(supplier) {
                src.dependents.retain(|&(consumer, _)| consumer != id);
            }
        }

        // Release every consumer slot this node was feeding.
        for &(consumer, slot) in &entry.dependents {
            if let Some(dst) = self.nodes.get_mut(&consumer)
                && dst.inputs.get(&slot) == Some(&id)
            {
                dst.node.bind(slot, None);
                dst.inputs.remove(&slot);
            }
        }

        tracing::debug!("pipeline_erase: {id}");
        Ok(())
    }

    // --- Edge mutations ---

    /// Wires `src`'s output into `dst`'s input `slot`.
    ///
    /// Checks run in a fixed order: id existence, slot occupancy, slot
    /// existence, type compatibility. On success the destination is bound to
    /// the source's port handle and both sides of the bookkeeping are
    /// updated together; on any failure nothing changes.
    ///
    /// Connecting a node to itself is accepted here when the types line up;
    /// [`is_valid`](Self::is_valid) reports the resulting cycle.
    pub fn connect(&mut self, src: NodeId, dst: NodeId, slot: usize) -> Result<(), PipelineError> {
        if !self.nodes.contains_key(&src) {
            return Err(PipelineError::InvalidNodeId(src));
        }
        let Some(dst_entry) = self.nodes.get(&dst) else {
            return Err(PipelineError::InvalidNodeId(dst));
        };
        if dst_entry.inputs.contains_key(&slot) {
            return Err(PipelineError::SlotAlreadyUsed { node: dst, slot });
        }
        let input_types = dst_entry.node.input_types();
        let Some(&expected) = input_types.get(slot) else {
            return Err(PipelineError::NoSuchSlot { node: dst, slot });
        };
        let Some(src_entry) = self.nodes.get(&src) else {
            return Err(PipelineError::InvalidNodeId(src));
        };
        if src_entry.node.output_type() != Some(expected) {
            return Err(PipelineError::ConnectionTypeMismatch {
                source: src,
                dest: dst,
                slot,
            });
        }

        let handle = src_entry.node.output_handle();
        if let Some(entry) = self.nodes.get_mut(&dst) {
            entry.node.bind(slot, handle);
            entry.inputs.insert(slot, src);
        }
        if let Some(entry) = self.nodes.get_mut(&src) {
            entry.dependents.push((dst, slot));
        }

        tracing::debug!("pipeline_connect: {src} → {dst} slot {slot}");
        Ok(())
    }

    /// Removes every connection from `src` into `dst`.
    ///
    /// Each affected slot is released on the destination and the matching
    /// dependent edges are dropped from the source. Succeeds as a no-op when
    /// the two nodes are not connected.
    pub fn disconnect(&mut self, src: NodeId, dst: NodeId) -> Result<(), PipelineError> {
        if !self.nodes.contains_key(&src) {
            return Err(PipelineError::InvalidNodeId(src));
        }
        if !self.nodes.contains_key(&dst) {
            return Err(PipelineError::InvalidNodeId(dst));
        }

        if let Some(entry) = self.nodes.get_mut(&dst) {
            let fed_slots: Vec<usize> = entry
                .inputs
                .iter()
                .filter(|(_, source)| **source == src)
                .map(|(slot, _)| *slot)
                .collect();
            for slot in fed_slots {
                entry.node.bind(slot, None);
                entry.inputs.remove(&slot);
            }
        }
        if let Some(entry) = self.nodes.get_mut(&src) {
            entry.dependents.retain(|&(consumer, _)| consumer != dst);
        }

        tracing::debug!("pipeline_disconnect: {src} → {dst}");
        Ok(())
    }

    // --- Introspection ---

    /// The (consumer, slot) pairs currently consuming `id`'s output.
    ///
    /// Insertion order; the exporter sorts by consumer id when enumerating.
    pub fn dependents(&self, id: NodeId) -> Result<&[(NodeId, usize)], PipelineError> {
        self.nodes
            .get(&id)
            .map(|entry| entry.dependents.as_slice())
            .ok_or(PipelineError::InvalidNodeId(id))
    }

    /// Returns the node stored under `id`, if present.
    pub fn node(&self, id: NodeId) -> Option<&dyn Node> {
        self.nodes.get(&id).map(|entry| entry.node.as_ref())
    }

    /// Mutable variant of [`node`](Self::node).
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut dyn Node> {
        self.nodes.get_mut(&id).map(|entry| entry.node.as_mut())
    }

    /// Number of nodes currently stored.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All current node ids, ascending.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }
}
