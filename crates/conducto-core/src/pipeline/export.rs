//! Graphviz export of the pipeline topology.

use core::fmt;

use super::wiring::Pipeline;

/// Renders the topology as a Graphviz `digraph`.
///
/// One quoted `<id> <name>` line per node in ascending id order, a blank
/// line, then one quoted arrow line per dependent edge, grouped by source id
/// and sorted by consumer id within each group. A source wired into the same
/// consumer on several slots repeats its arrow line once per connection.
/// Quoting escapes embedded quotes and backslashes.
impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph G {{")?;
        for (id, entry) in &self.nodes {
            writeln!(f, "  {:?}", format!("{} {}", id.index(), entry.node.name()))?;
        }
        writeln!(f)?;

        for (id, entry) in &self.nodes {
            let mut edges = entry.dependents.clone();
            edges.sort_by_key(|&(consumer, _)| consumer);
            let from = format!("{} {}", id.index(), entry.node.name());
            for (consumer, _) in edges {
                if let Some(target) = self.nodes.get(&consumer) {
                    writeln!(
                        f,
                        "  {:?} -> {:?}",
                        from,
                        format!("{} {}", consumer.index(), target.node.name())
                    )?;
                }
            }
        }
        writeln!(f, "}}")
    }
}
