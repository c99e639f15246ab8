//! Bounded counting source.

use core::any::TypeId;

use conducto_core::{Node, OutputPort, Poll, PortHandle};

/// Integer source producing `1..=bound`, then closing.
///
/// Each tick publishes the next count as `Ready`; once `bound` values have
/// been produced, every later tick reports `Closed`. A bound of zero closes
/// on the first tick.
///
/// # Example
///
/// ```rust
/// use conducto_core::{Node, Poll};
/// use conducto_nodes::Counter;
///
/// let mut counter = Counter::new(2);
/// assert_eq!(counter.advance(), Poll::Ready);
/// assert_eq!(counter.advance(), Poll::Ready);
/// assert_eq!(counter.advance(), Poll::Closed);
/// ```
pub struct Counter {
    current: i64,
    bound: i64,
    out: OutputPort<i64>,
}

impl Counter {
    /// Creates a counter that closes after `bound` values.
    pub fn new(bound: i64) -> Self {
        Self {
            current: 0,
            bound,
            out: OutputPort::new(),
        }
    }

    /// The configured bound.
    pub fn bound(&self) -> i64 {
        self.bound
    }
}

impl Node for Counter {
    fn name(&self) -> String {
        format!("Counter(bound={})", self.bound)
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
