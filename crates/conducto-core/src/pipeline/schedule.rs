//! Tick scheduling: pull-based polling with per-tick memoization.

use std::collections::HashMap;

use crate::node::Poll;

use super::entry::NodeId;
use super::wiring::Pipeline;

impl Pipeline {
    /// Advances the pipeline by one logical tick.
    ///
    /// Every sink's result is computed by depth-first resolution of its
    /// upstream slot sources. A node whose upstreams are not all `Ready` is
    /// skipped rather than polled: any `Closed` upstream closes it for the
    /// tick (closure dominates emptiness), otherwise any `Empty` upstream
    /// leaves it empty. Only a node whose upstreams all resolved `Ready` —
    /// or which has none — gets its own `advance()` invoked. Results are
    /// memoized per id, so shared upstreams are polled once per tick no
    /// matter the fan-out.
    ///
    /// Nothing is cached across ticks: a branch that was closed only because
    /// of a since-replaced upstream produces again on the next call.
    ///
    /// Returns true iff every sink resolved `Closed` this tick.
    pub fn step(&mut self) -> bool {
        let sinks: Vec<NodeId> = self
            .nodes
            .iter()
            .filter(|(_, entry)| entry.node.output_type().is_none())
            .map(|(id, _)| *id)
            .collect();

        let mut resolved: HashMap<NodeId, Poll> = HashMap::new();
        let mut all_closed = true;
        for id in sinks {
            if self.resolve(id, &mut resolved) != Poll::Closed {
                all_closed = false;
            }
        }
        tracing::trace!(
            "pipeline_step: {} node(s) resolved, done={all_closed}",
            resolved.len()
        );
        all_closed
    }

    /// Runs [`step`](Self::step) until every sink is closed.
    ///
    /// There is no iteration bound: a pipeline whose sources never close
    /// runs forever, and bounding the tick count is the caller's concern.
    pub fn run(&mut self) {
        let mut ticks = 0u64;
        loop {
            ticks += 1;
            if self.step() {
                break;
            }
        }
        tracing::debug!("pipeline_run: all sinks closed after {ticks} tick(s)");
    }

    fn resolve(&mut self, id: NodeId, resolved: &mut HashMap<NodeId, Poll>) -> Poll {
        if let Some(&state) = resolved.get(&id) {
            return state;
        }

        let upstream: Vec<NodeId> = match self.nodes.get(&id) {
            Some(entry) => entry.inputs.values().copied().collect(),
            None => {
                resolved.insert(id, Poll::Closed);
                return Poll::Closed;
            }
        };

        let mut any_empty = false;
        let mut any_closed = false;
        for source in upstream {
            match self.resolve(source, resolved) {
                Poll::Closed => any_closed = true,
                Poll::Empty => any_empty = true,
                Poll::Ready => {}
            }
        }

        let state = if any_closed {
            Poll::Closed
        } else if any_empty {
            Poll::Empty
        } else {
            match self.nodes.get_mut(&id) {
                Some(entry) => entry.node.advance(),
                None => Poll::Closed,
            }
        };
        resolved.insert(id, state);
        state
    }
}
