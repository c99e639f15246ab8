//! Ready-made nodes for conducto pipelines.
//!
//! This crate provides concrete implementations of the
//! [`Node`](conducto_core::Node) contract so hosts can assemble useful
//! pipelines without writing boilerplate:
//!
//! # Sources
//!
//! - [`Counter`] - Bounded integer source: 1..=bound, then closed
//! - [`Sequence`] - Source over any iterator, closed when exhausted
//! - [`Constant`] - Emits a cloned value every tick and never closes
//!
//! # Combinators
//!
//! - [`Sum`] - Adds its two inputs
//! - [`Map`] - Applies a function to its single input
//!
//! # Sinks
//!
//! - [`Print`] - Writes each value to stdout
//! - [`Collect`] - Accumulates values into a shared buffer
//!
//! # Example
//!
//! ```rust
//! use conducto_core::Pipeline;
//! use conducto_nodes::{Collect, Counter, Sum};
//!
//! let mut pipeline = Pipeline::new();
//! let lhs = pipeline.add_node(Box::new(Counter::new(3)));
//! let rhs = pipeline.add_node(Box::new(Counter::new(3)));
//! let sum = pipeline.add_node(Box::new(Sum::<i64>::new()));
//! let sink = Collect::<i64>::new();
//! let values = sink.values();
//! let out = pipeline.add_node(Box::new(sink));
//!
//! pipeline.connect(lhs, sum, 0).unwrap();
//! pipeline.connect(rhs, sum, 1).unwrap();
//! pipeline.connect(sum, out, 0).unwrap();
//!
//! assert!(pipeline.is_valid());
//! pipeline.run();
//! assert_eq!(*values.borrow(), vec![2, 4, 6]);
//! ```

pub mod combine;
pub mod constant;
pub mod counter;
pub mod sequence;
pub mod sinks;

pub use combine::{Map, Sum};
pub use constant::Constant;
pub use counter::Counter;
pub use sequence::Sequence;
pub use sinks::{Collect, Print};
