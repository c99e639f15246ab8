//! Conducto Core - an in-process dataflow pipeline engine
//!
//! This crate provides a typed directed graph of processing nodes that can be
//! wired together, validated for structural soundness, and driven forward one
//! logical tick at a time via cooperative pull-based polling. Hosts define
//! the concrete node behaviors (sources, transforms, sinks); the engine
//! composes and executes them safely.
//!
//! # Core Abstractions
//!
//! ## Node Contract
//!
//! - [`Node`] - Object-safe capability contract for all processing units
//! - [`Poll`] - Tri-state tick result: `Ready`, `Empty`, or `Closed`
//!
//! ## Typed Ports
//!
//! Values travel between nodes through shared latest-value cells; the engine
//! only ever compares type tags:
//!
//! - [`OutputPort`] - Producer-owned cell written during `advance()`
//! - [`InputPort`] - Typed reader a consumer stores per slot
//! - [`PortHandle`] - Type-erased handle moved from source to destination at
//!   connect time and narrowed by the consumer
//!
//! ## Pipeline
//!
//! - [`Pipeline`] - Owning graph store with slot-checked wiring, structural
//!   validation, memoized tick scheduling, and Graphviz export
//! - [`NodeId`] - Stable sequential identifier, never reused
//! - [`PipelineError`] - Wiring error taxonomy
//!
//! # Example
//!
//! ```rust
//! use core::any::TypeId;
//! use conducto_core::{InputPort, Node, OutputPort, Pipeline, Poll, PortHandle};
//!
//! struct Ticks {
//!     left: u32,
//!     out: OutputPort<u32>,
//! }
//!
//! impl Node for Ticks {
//!     fn name(&self) -> String {
//!         "Ticks".into()
//!     }
//!
//!     fn output_type(&self) -> Option<TypeId> {
//!         Some(TypeId::of::<u32>())
//!     }
//!
//!     fn output_handle(&self) -> Option<PortHandle> {
//!         Some(self.out.handle())
//!     }
//!
//!     fn advance(&mut self) -> Poll {
//!         if self.left == 0 {
//!             return Poll::Closed;
//!         }
//!         self.left -= 1;
//!         self.out.send(self.left);
//!         Poll::Ready
//!     }
//! }
//!
//! struct Last {
//!     input: Option<InputPort<u32>>,
//!     seen: Option<u32>,
//! }
//!
//! impl Node for Last {
//!     fn name(&self) -> String {
//!         "Last".into()
//!     }
//!
//!     fn input_types(&self) -> Vec<TypeId> {
//!         vec![TypeId::of::<u32>()]
//!     }
//!
//!     fn bind(&mut self, slot: usize, source: Option<PortHandle>) {
//!         if slot == 0 {
//!             self.input = source.and_then(InputPort::from_handle);
//!         }
//!     }
//!
//!     fn advance(&mut self) -> Poll {
//!         self.seen = self.input.as_ref().and_then(InputPort::value);
//!         Poll::Ready
//!     }
//! }
//!
//! let mut pipeline = Pipeline::new();
//! let src = pipeline.add_node(Box::new(Ticks { left: 3, out: OutputPort::new() }));
//! let dst = pipeline.add_node(Box::new(Last { input: None, seen: None }));
//! pipeline.connect(src, dst, 0).unwrap();
//!
//! assert!(pipeline.is_valid());
//! pipeline.run();
//! ```
//!
//! # Design Principles
//!
//! - **Stable identities**: nodes live in an arena keyed by sequential ids;
//!   edges are id pairs, never references, so live mutation cannot dangle
//! - **Check-then-apply**: a failed wiring call leaves the graph untouched
//! - **Single-threaded by contract**: one logical thread of control, no
//!   locking, no suspension points inside a tick
//! - **Pull-based**: sinks pull their upstreams; a node is polled at most
//!   once per tick and only when every upstream produced a value

pub mod node;
pub mod pipeline;
pub mod port;

pub use node::{Node, Poll};
pub use pipeline::{NodeId, Pipeline, PipelineError};
pub use port::{InputPort, OutputPort, PortHandle};
