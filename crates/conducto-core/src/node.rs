//! Core node trait and tick results.
//!
//! The [`Node`] trait is the capability contract every processing unit in a
//! pipeline satisfies, covering all three shapes of node by convention rather
//! than by hierarchy:
//!
//! - a **pure source** declares zero input slots ([`input_types`](Node::input_types)
//!   returns an empty list),
//! - a **pure sink** declares no output ([`output_type`](Node::output_type)
//!   returns `None`),
//! - a **transform** declares both.
//!
//! ## Design Decisions
//!
//! - **Object-safe**: nodes are stored as `Box<dyn Node>` in a
//!   [`Pipeline`](crate::pipeline::Pipeline), so every method works through a
//!   trait object.
//! - **Type tags, not type parameters**: slot compatibility is decided once,
//!   at connect time, by comparing [`TypeId`] tags. The values themselves
//!   travel through the typed ports in [`port`](crate::port) and never pass
//!   through the engine.
//! - **Pull-based**: the scheduler calls [`advance`](Node::advance) at most
//!   once per tick, and only when every bound upstream produced a value that
//!   tick.

use core::any::TypeId;

use crate::port::PortHandle;

/// The result of advancing a node by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Poll {
    /// A value was produced (or consumed) normally.
    Ready,
    /// No value is available this tick, but a future tick may produce one.
    Empty,
    /// The node is permanently exhausted: every future tick reports
    /// `Closed` again.
    Closed,
}

/// Capability contract for pipeline processing units.
///
/// Concrete nodes implement the subset of methods their shape needs; the
/// defaults describe a node with no inputs and no output. Sources override
/// the output side, sinks override the input side, transforms override both.
///
/// # Example
///
/// ```rust
/// use core::any::TypeId;
/// use conducto_core::{Node, OutputPort, Poll, PortHandle};
///
/// /// Emits its remaining count down to zero, then closes.
/// struct Countdown {
///     left: u32,
///     out: OutputPort<u32>,
/// }
///
/// impl Node for Countdown {
///     fn name(&self) -> String {
///         "Countdown".into()
///     }
///
///     fn output_type(&self) -> Option<TypeId> {
///         Some(TypeId::of::<u32>())
///     }
///
///     fn output_handle(&self) -> Option<PortHandle> {
///         Some(self.out.handle())
///     }
///
///     fn advance(&mut self) -> Poll {
///         if self.left == 0 {
///             return Poll::Closed;
///         }
///         self.left -= 1;
///         self.out.send(self.left);
///         Poll::Ready
///     }
/// }
/// ```
pub trait Node {
    /// Display name used in diagnostics and topology export. Pure.
    fn name(&self) -> String;

    /// Declared input slot types, in slot order.
    ///
    /// The length of the returned list is the node's input arity. The
    /// default declares zero slots (a pure source).
    fn input_types(&self) -> Vec<TypeId> {
        Vec::new()
    }

    /// Declared output type, or `None` for a terminal (sink) node.
    ///
    /// The default declares no output.
    fn output_type(&self) -> Option<TypeId> {
        None
    }

    /// A type-erased handle to this node's output port.
    ///
    /// The wiring engine passes this handle to downstream nodes at connect
    /// time; it never inspects it. Nodes that declare an output type should
    /// return `Some` — a consumer handed `None` simply treats the slot as
    /// unbound. The default declares no port.
    fn output_handle(&self) -> Option<PortHandle> {
        None
    }

    /// Records (or with `None`, releases) the upstream feeding `slot`.
    ///
    /// Called only by the wiring engine, after it has validated the slot
    /// index and type compatibility. The node typically narrows the handle
    /// with [`InputPort::from_handle`](crate::port::InputPort::from_handle)
    /// and keeps the reader for [`advance`](Self::advance) to consume.
    fn bind(&mut self, slot: usize, source: Option<PortHandle>) {
        let _ = (slot, source);
    }

    /// Advances the node by one tick.
    ///
    /// May read values from currently bound upstream ports; must not mutate
    /// wiring. Once `Closed` is returned, every later call must return
    /// `Closed` as well.
    fn advance(&mut self) -> Poll;
}
