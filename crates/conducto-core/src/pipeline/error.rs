//! Pipeline mutation errors.

use thiserror::Error;

use super::entry::NodeId;

/// Errors that can occur while mutating a pipeline's wiring.
///
/// All four kinds are signaled synchronously and leave the pipeline exactly
/// as it was before the failed call. Validation and scheduling (`is_valid`,
/// `step`, `run`) never produce these; they report structural problems only
/// through their return values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// The identifier does not currently exist in the pipeline — it never
    /// did, or the node was erased.
    #[error("invalid node ID: {0}")]
    InvalidNodeId(NodeId),

    /// The slot index is outside the destination's declared input range.
    /// Pure sources declare zero slots, so any bind attempt lands here.
    #[error("no such slot: slot {slot} on {node}")]
    NoSuchSlot {
        /// The destination node.
        node: NodeId,
        /// The out-of-range slot index.
        slot: usize,
    },

    /// The destination slot is already fed by another connection.
    #[error("slot already used: slot {slot} on {node}")]
    SlotAlreadyUsed {
        /// The destination node.
        node: NodeId,
        /// The occupied slot index.
        slot: usize,
    },

    /// The source's declared output type differs from the destination
    /// slot's declared input type.
    #[error("connection type mismatch: {source} -> {dest} slot {slot}")]
    ConnectionTypeMismatch {
        /// The source node.
        source: NodeId,
        /// The destination node.
        dest: NodeId,
        /// The destination slot index.
        slot: usize,
    },
}
