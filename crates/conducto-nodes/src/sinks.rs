//! Terminal nodes.

use core::any::TypeId;
use core::fmt;
use std::cell::RefCell;
use std::rc::Rc;

use conducto_core::{InputPort, Node, Poll, PortHandle};

/// Sink writing each observed value to stdout, one per line.
pub struct Print<T = i64> {
    input: Option<InputPort<T>>,
}

impl<T: Clone + fmt::Display + 'static> Print<T> {
    /// Creates an unbound printing sink.
    pub fn new() -> Self {
        Self { input: None }
    }
}

impl<T: Clone + fmt::Display + 'static> Default for Print<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + fmt::Display + 'static> Node for Print<T> {
    fn name(&self) -> String {
        "Print".into()
    }

    fn input_types(&self) -> Vec<TypeId> {
        vec![TypeId::of::<T>()]
    }

    fn bind(&mut self, slot: usize, source: Option<PortHandle>) {
        if slot == 0 {
            self.input = source.and_then(InputPort::from_handle);
        }
    }

    fn advance(&mut self) -> Poll {
        if let Some(value) = self.input.as_ref().and_then(InputPort::value) {
            println!("{value}");
        }
        Poll::Ready
    }
}

/// Sink accumulating every observed value into a shared buffer.
///
/// The host grabs a handle with [`values`](Self::values) before moving the
/// sink into a pipeline and keeps observing later pushes through it, the
/// pull-based counterpart of handing a sink a stream to write into.
///
/// # Example
///
/// ```rust
/// use conducto_core::Pipeline;
/// use conducto_nodes::{Collect, Counter};
///
/// let mut pipeline = Pipeline::new();
/// let src = pipeline.add_node(Box::new(Counter::new(3)));
/// let sink = Collect::<i64>::new();
/// let values = sink.values();
/// let dst = pipeline.add_node(Box::new(sink));
/// pipeline.connect(src, dst, 0).unwrap();
///
/// pipeline.run();
/// assert_eq!(*values.borrow(), vec![1, 2, 3]);
/// ```
pub struct Collect<T = i64> {
    input: Option<InputPort<T>>,
    values: Rc<RefCell<Vec<T>>>,
}

impl<T: Clone + 'static> Collect<T> {
    /// Creates an unbound collecting sink with an empty buffer.
    pub fn new() -> Self {
        Self {
            input: None,
            values: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// A shared handle to the collected values.
    pub fn values(&self) -> Rc<RefCell<Vec<T>>> {
        Rc::clone(&self.values)
    }
}

impl<T: Clone + 'static> Default for Collect<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> Node for Collect<T> {
    fn name(&self) -> String {
        "Collect".into()
    }

    fn input_types(&self) -> Vec<TypeId> {
        vec![TypeId::of::<T>()]
    }

    fn bind(&mut self, slot: usize, source: Option<PortHandle>) {
        if slot == 0 {
            self.input = source.and_then(InputPort::from_handle);
        }
    }

    fn advance(&mut self) -> Poll {
        if let Some(value) = self.input.as_ref().and_then(InputPort::value) {
            self.values.borrow_mut().push(value);
        }
        Poll::Ready
    }
}
