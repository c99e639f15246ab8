//! Pipeline container: graph store, wiring, validation, scheduling, export.
//!
//! [`Pipeline`] owns a set of heterogeneous nodes behind stable integer ids
//! and provides the four facets the engine is responsible for:
//!
//! - **Wiring** — type- and slot-checked mutation of the topology
//!   (`add_node`, `connect`, `disconnect`, `erase_node`), with the dependent
//!   edges kept as the exact transpose of the slot bindings on every
//!   mutation.
//! - **Validation** — [`is_valid`](Pipeline::is_valid) checks wiring
//!   completeness, the presence of sources and sinks, acyclicity and
//!   connectedness, without side effects.
//! - **Scheduling** — [`step`](Pipeline::step) resolves every sink's
//!   tri-state tick result through memoized pull-based polling;
//!   [`run`](Pipeline::run) loops until all sinks close.
//! - **Export** — `Display` renders the topology as a Graphviz `digraph`
//!   for inspection.
//!
//! # Example
//!
//! ```rust,ignore
//! use conducto_core::Pipeline;
//!
//! let mut pipeline = Pipeline::new();
//! let src = pipeline.add_node(Box::new(Counter::new(5)));
//! let dst = pipeline.add_node(Box::new(Print::new()));
//! pipeline.connect(src, dst, 0)?;
//! assert!(pipeline.is_valid());
//! pipeline.run();
//! println!("{pipeline}");
//! ```

mod entry;
mod error;
mod export;
mod schedule;
mod validate;
mod wiring;

#[cfg(test)]
pub(crate) mod test_nodes;

pub use entry::NodeId;
pub use error::PipelineError;
pub use wiring::Pipeline;
