//! Source over an arbitrary iterator.

use core::any::TypeId;

use conducto_core::{Node, OutputPort, Poll, PortHandle};

/// Source that drains an iterator one item per tick.
///
/// Each tick publishes the next item as `Ready`; once the iterator is
/// exhausted, every later tick reports `Closed`.
///
/// # Example
///
/// ```rust
/// use conducto_core::{Node, Poll};
/// use conducto_nodes::Sequence;
///
/// let mut seq = Sequence::new(vec!["a", "b"]);
/// assert_eq!(seq.advance(), Poll::Ready);
/// assert_eq!(seq.advance(), Poll::Ready);
/// assert_eq!(seq.advance(), Poll::Closed);
/// ```
pub struct Sequence<I: Iterator> {
    iter: I,
    out: OutputPort<I::Item>,
}

impl<I: Iterator> Sequence<I>
where
    I::Item: 'static,
{
    /// Creates a source over `items`.
    pub fn new(items: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            iter: items.into_iter(),
            out: OutputPort::new(),
        }
    }
}

impl<I: Iterator> Node for Sequence<I>
where
    I::Item: 'static,
{
    fn name(&self) -> String {
        "Sequence".into()
    }

    fn output_type(&self) -> Option<TypeId> {
        Some(TypeId::of::<I::Item>())
    }

    fn output_handle(&self) -> Option<PortHandle> {
        Some(self.out.handle())
    }

    fn advance(&mut self) -> Poll {
        match self.iter.next() {
            Some(item) => {
                self.out.send(item);
                Poll::Ready
            }
            None => Poll::Closed,
        }
    }
}
