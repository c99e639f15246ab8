//! Structural validation of a pipeline's topology.

use std::collections::{HashMap, HashSet};

use super::entry::NodeId;
use super::wiring::Pipeline;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

impl Pipeline {
    /// Checks whether the pipeline is structurally sound.
    ///
    /// Returns false when any of the following holds:
    ///
    /// 1. a node has fewer bound slots than its declared input arity,
    /// 2. a non-sink node's output is consumed by nobody,
    /// 3. there is no pure source or no pure sink — an empty pipeline fails
    ///    here, before any traversal runs,
    /// 4. the consumption edges contain a cycle,
    /// 5. the graph splits into disconnected sub-pipelines when all edges
    ///    are treated as undirected.
    ///
    /// Read-only and side-effect free; callable at any point, including on
    /// partially wired or freshly mutated graphs.
    pub fn is_valid(&self) -> bool {
        let mut has_source = false;
        let mut has_sink = false;
        for entry in self.nodes.values() {
            let arity = entry.node.input_types().len();
            if entry.inputs.len() != arity {
                return false;
            }
            if entry.node.output_type().is_some() && entry.dependents.is_empty() {
                return false;
            }
            if entry.node.output_type().is_none() {
                has_sink = true;
            }
            if arity == 0 {
                has_source = true;
            }
        }
        if !has_source || !has_sink {
            return false;
        }

        // Cycle check: walk the "consumes from" direction starting at every
        // sink, sharing visit state across starts.
        let mut visited: HashMap<NodeId, Visit> = HashMap::new();
        for (id, entry) in &self.nodes {
            if entry.node.output_type().is_none() && self.upstream_cycle(*id, &mut visited) {
                return false;
            }
        }

        // Connectivity: one undirected traversal must reach every node.
        let mut seen: HashSet<NodeId> = HashSet::new();
        if let Some(&start) = self.nodes.keys().next() {
            let mut stack = vec![start];
            while let Some(id) = stack.pop() {
                if !seen.insert(id) {
                    continue;
                }
                if let Some(entry) = self.nodes.get(&id) {
                    stack.extend(entry.inputs.values().copied());
                    stack.extend(entry.dependents.iter().map(|&(consumer, _)| consumer));
                }
            }
        }
        seen.len() == self.nodes.len()
    }

    fn upstream_cycle(&self, id: NodeId, visited: &mut HashMap<NodeId, Visit>) -> bool {
        match visited.get(&id) {
            Some(Visit::InProgress) => return true,
            Some(Visit::Done) => return false,
            None => {}
        }
        visited.insert(id, Visit::InProgress);
        if let Some(entry) = self.nodes.get(&id) {
            let upstream: Vec<NodeId> = entry.inputs.values().copied().collect();
            for source in upstream {
                if self.upstream_cycle(source, visited) {
                    return true;
                }
            }
        }
        visited.insert(id, Visit::Done);
        false
    }
}
