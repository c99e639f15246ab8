//! Minimal node implementations shared by the engine's unit tests.

use core::any::TypeId;
use std::cell::RefCell;
use std::rc::Rc;

use crate::node::{Node, Poll};
use crate::port::{InputPort, OutputPort, PortHandle};

/// Source emitting `1..=bound`, then closing.
pub(crate) struct BoundedSource {
    current: i64,
    bound: i64,
    out: OutputPort<i64>,
}

impl BoundedSource {
    pub fn new(bound: i64) -> Self {
        Self {
            current: 0,
            bound,
            out: OutputPort::new(),
        }
    }
}

impl Node for BoundedSource {
    fn name(&self) -> String {
        format!("BoundedSource(bound={})", self.bound)
    }

    fn output_type(&self) -> Option<TypeId> {
        Some(TypeId::of::<i64>())
    }

    fn output_handle(&self) -> Option<PortHandle> {
        Some(self.out.handle())
    }

    fn advance(&mut self) -> Poll {
        if self.current >= self.bound {
            return Poll::Closed;
        }
        self.current += 1;
        self.out.send(self.current);
        Poll::Ready
    }
}

/// Source that alternates empty and ready ticks up to `bound` counts.
///
/// Counts on every tick but only publishes on odd counts, so the ready
/// values are the even numbers 2, 4, ... up to `bound`.
pub(crate) struct SkippingSource {
    current: i64,
    bound: i64,
    out: OutputPort<i64>,
}

impl SkippingSource {
    pub fn new(bound: i64) -> Self {
        Self {
            current: 0,
            bound,
            out: OutputPort::new(),
        }
    }
}

impl Node for SkippingSource {
    fn name(&self) -> String {
        format!("SkippingSource(bound={})", self.bound)
    }

    fn output_type(&self) -> Option<TypeId> {
        Some(TypeId::of::<i64>())
    }

    fn output_handle(&self) -> Option<PortHandle> {
        Some(self.out.handle())
    }

    fn advance(&mut self) -> Poll {
        if self.current >= self.bound {
            return Poll::Closed;
        }
        let skip = self.current % 2 == 0;
        self.current += 1;
        if skip {
            return Poll::Empty;
        }
        self.out.send(self.current);
        Poll::Ready
    }
}

/// Two-slot combinator adding its inputs.
pub(crate) struct AddTwo {
    lhs: Option<InputPort<i64>>,
    rhs: Option<InputPort<i64>>,
    out: OutputPort<i64>,
}

impl AddTwo {
    pub fn new() -> Self {
        Self {
            lhs: None,
            rhs: None,
            out: OutputPort::new(),
        }
    }
}

impl Node for AddTwo {
    fn name(&self) -> String {
        "AddTwo".into()
    }

    fn input_types(&self) -> Vec<TypeId> {
        vec![TypeId::of::<i64>(), TypeId::of::<i64>()]
    }

    fn output_type(&self) -> Option<TypeId> {
        Some(TypeId::of::<i64>())
    }

    fn output_handle(&self) -> Option<PortHandle> {
        Some(self.out.handle())
    }

    fn bind(&mut self, slot: usize, source: Option<PortHandle>) {
        let port = source.and_then(InputPort::from_handle);
        match slot {
            0 => self.lhs = port,
            1 => self.rhs = port,
            _ => {}
        }
    }

    fn advance(&mut self) -> Poll {
        let lhs = self.lhs.as_ref().and_then(InputPort::value);
        let rhs = self.rhs.as_ref().and_then(InputPort::value);
        match (lhs, rhs) {
            (Some(a), Some(b)) => {
                self.out.send(a + b);
                Poll::Ready
            }
            _ => Poll::Empty,
        }
    }
}

/// Sink accumulating every observed value into a shared buffer.
pub(crate) struct CollectSink {
    input: Option<InputPort<i64>>,
    values: Rc<RefCell<Vec<i64>>>,
}

impl CollectSink {
    pub fn new() -> (Self, Rc<RefCell<Vec<i64>>>) {
        let values = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                input: None,
                values: Rc::clone(&values),
            },
            values,
        )
    }
}

impl Node for CollectSink {
    fn name(&self) -> String {
        "CollectSink".into()
    }

    fn input_types(&self) -> Vec<TypeId> {
        vec![TypeId::of::<i64>()]
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

/// Sink declaring an `f64` slot, for type-mismatch tests.
pub(crate) struct FloatSink {
    input: Option<InputPort<f64>>,
}

impl FloatSink {
    pub fn new() -> Self {
        Self { input: None }
    }
}

impl Node for FloatSink {
    fn name(&self) -> String {
        "FloatSink".into()
    }

    fn input_types(&self) -> Vec<TypeId> {
        vec![TypeId::of::<f64>()]
    }

    fn bind(&mut self, slot: usize, source: Option<PortHandle>) {
        if slot == 0 {
            self.input = source.and_then(InputPort::from_handle);
        }
    }

    fn advance(&mut self) -> Poll {
        if self.input.as_ref().and_then(InputPort::value).is_some() {
            return Poll::Ready;
        }
        Poll::Empty
    }
}
