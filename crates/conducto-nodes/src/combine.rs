//! Combinator nodes: arithmetic and mapping transforms.

use core::any::TypeId;
use core::ops::Add;

use conducto_core::{InputPort, Node, OutputPort, Poll, PortHandle};

/// Two-slot combinator publishing the sum of its inputs.
///
/// Generic over any `Add` value type; both slots declare `T` and the output
/// is `T`. If either slot has no value yet (an upstream that has never
/// produced), the tick reports `Empty` instead of polling garbage.
///
/// # Example
///
/// ```rust
/// use conducto_core::Pipeline;
/// use conducto_nodes::{Collect, Counter, Sum};
///
/// let mut pipeline = Pipeline::new();
/// let lhs = pipeline.add_node(Box::new(Counter::new(2)));
/// let rhs = pipeline.add_node(Box::new(Counter::new(2)));
/// let sum = pipeline.add_node(Box::new(Sum::<i64>::new()));
/// let sink = Collect::<i64>::new();
/// let values = sink.values();
/// let out = pipeline.add_node(Box::new(sink));
///
/// pipeline.connect(lhs, sum, 0).unwrap();
/// pipeline.connect(rhs, sum, 1).unwrap();
/// pipeline.connect(sum, out, 0).unwrap();
/// pipeline.run();
///
/// assert_eq!(*values.borrow(), vec![2, 4]);
/// ```
pub struct Sum<T = i64> {
    lhs: Option<InputPort<T>>,
    rhs: Option<InputPort<T>>,
    out: OutputPort<T>,
}

impl<T: Add<Output = T> + Clone + 'static> Sum<T> {
    /// Creates an unbound adder.
    pub fn new() -> Self {
        Self {
            lhs: None,
            rhs: None,
            out: OutputPort::new(),
        }
    }
}

impl<T: Add<Output = T> + Clone + 'static> Default for Sum<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Add<Output = T> + Clone + 'static> Node for Sum<T> {
    fn name(&self) -> String {
        "Sum".into()
    }

    fn input_types(&self) -> Vec<TypeId> {
        vec![TypeId::of::<T>(), TypeId::of::<T>()]
    }

    fn output_type(&self) -> Option<TypeId> {
        Some(TypeId::of::<T>())
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
        match (
            self.lhs.as_ref().and_then(InputPort::value),
            self.rhs.as_ref().and_then(InputPort::value),
        ) {
            (Some(a), Some(b)) => {
                self.out.send(a + b);
                Poll::Ready
            }
            _ => Poll::Empty,
        }
    }
}

/// One-slot combinator applying a function to each input value.
///
/// Declares input type `A` and output type `B`; the function runs once per
/// productive tick.
pub struct Map<A, B, F> {
    func: F,
    input: Option<InputPort<A>>,
    out: OutputPort<B>,
}

impl<A, B, F> Map<A, B, F>
where
    A: Clone + 'static,
    B: 'static,
    F: FnMut(A) -> B,
{
    /// Creates a mapper around `func`.
    pub fn new(func: F) -> Self {
        Self {
            func,
            input: None,
            out: OutputPort::new(),
        }
    }
}

impl<A, B, F> Node for Map<A, B, F>
where
    A: Clone + 'static,
    B: 'static,
    F: FnMut(A) -> B,
{
    fn name(&self) -> String {
        "Map".into()
    }

    fn input_types(&self) -> Vec<TypeId> {
        vec![TypeId::of::<A>()]
    }

    fn output_type(&self) -> Option<TypeId> {
        Some(TypeId::of::<B>())
    }

    fn output_handle(&self) -> Option<PortHandle> {
        Some(self.out.handle())
    }

    fn bind(&mut self, slot: usize, source: Option<PortHandle>) {
        if slot == 0 {
            self.input = source.and_then(InputPort::from_handle);
        }
    }

    fn advance(&mut self) -> Poll {
        match self.input.as_ref().and_then(InputPort::value) {
            Some(value) => {
                self.out.send((self.func)(value));
                Poll::Ready
            }
            None => Poll::Empty,
        }
    }
}
