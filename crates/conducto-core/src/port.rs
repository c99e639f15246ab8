//! Typed value ports connecting producers to consumers.
//!
//! A producing node owns an [`OutputPort<T>`] and writes its current value
//! into it during `advance()`. The engine never sees `T`: at connect time it
//! moves a type-erased [`PortHandle`] from the source to the destination's
//! `bind`, and the destination narrows it back into an [`InputPort<T>`]. A
//! failed narrowing yields `None`, which the consumer treats the same as an
//! unbound slot.
//!
//! Ports are latest-value cells, not queues: `send` replaces the previous
//! value, and any number of readers observe the same value within a tick.
//! The cells are `Rc`-shared because the execution model is single-threaded
//! by contract.

use core::any::{Any, TypeId};
use std::cell::RefCell;
use std::rc::Rc;

type Cell<T> = Rc<RefCell<Option<T>>>;

/// Latest-value cell owned by a producing node.
pub struct OutputPort<T> {
    cell: Cell<T>,
}

impl<T: 'static> OutputPort<T> {
    /// Creates an empty port.
    pub fn new() -> Self {
        Self {
            cell: Rc::new(RefCell::new(None)),
        }
    }

    /// Stores `value` as the port's current value, replacing any previous one.
    pub fn send(&self, value: T) {
        *self.cell.borrow_mut() = Some(value);
    }

    /// The type tag a consuming slot must declare to read this port.
    pub fn data_type(&self) -> TypeId {
        TypeId::of::<T>()
    }

    /// A type-erased handle for the wiring engine to hand to consumers.
    pub fn handle(&self) -> PortHandle {
        PortHandle(Rc::clone(&self.cell) as Rc<dyn Any>)
    }
}

impl<T: 'static> Default for OutputPort<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Type-erased reference to some producer's output cell.
///
/// Obtained from [`OutputPort::handle`] (usually via
/// [`Node::output_handle`](crate::node::Node::output_handle)) and consumed by
/// [`InputPort::from_handle`].
#[derive(Clone)]
pub struct PortHandle(Rc<dyn Any>);

/// Reader end of a producer's output cell, held by a consumer per slot.
pub struct InputPort<T> {
    cell: Cell<T>,
}

impl<T: 'static> InputPort<T> {
    /// Narrows a type-erased handle back into a typed reader.
    ///
    /// Returns `None` when the handle's element type is not `T`.
    pub fn from_handle(handle: PortHandle) -> Option<Self> {
        handle
            .0
            .downcast::<RefCell<Option<T>>>()
            .ok()
            .map(|cell| Self { cell })
    }
}

impl<T: Clone + 'static> InputPort<T> {
    /// The producer's current value, if it has produced one yet.
    pub fn value(&self) -> Option<T> {
        self.cell.borrow().clone()
    }
}
