//! Source emitting a fixed value forever.

use core::any::TypeId;

use conducto_core::{Node, OutputPort, Poll, PortHandle};

/// Source that publishes a clone of the same value every tick.
///
/// Never closes: a pipeline fed only by `Constant` sources runs until the
/// host stops stepping it.
pub struct Constant<T> {
    value: T,
    out: OutputPort<T>,
}

impl<T: Clone + 'static> Constant<T> {
    /// Creates a source that emits `value` forever.
    pub fn new(value: T) -> Self {
        Self {
            value,
            out: OutputPort::new(),
        }
    }
}

impl<T: Clone + 'static> Node for Constant<T> {
    fn name(&self) -> String {
        "Constant".into()
    }

    fn output_type(&self) -> Option<TypeId> {
        Some(TypeId::of::<T>())
    }

    fn output_handle(&self) -> Option<PortHandle> {
        Some(self.out.handle())
    }

    fn advance(&mut self) -> Poll {
        self.out.send(self.value.clone());
        Poll::Ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conducto_core::InputPort;

    #[test]
    fn stays_ready_indefinitely() {
        let mut constant = Constant::new(7i64);
        let reader =
            InputPort::<i64>::from_handle(constant.output_handle().unwrap()).unwrap();

        for _ in 0..100 {
            assert_eq!(constant.advance(), Poll::Ready);
        }
        assert_eq!(reader.value(), Some(7));
    }
}
