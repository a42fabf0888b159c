//! Ancestor-closure pruning.

use super::Graph;
use crate::error::{GraphError, Result};
use std::collections::HashSet;
use std::hash::Hash;
use tracing::debug;

/// Build the smallest subgraph that still contains every target and all of
/// their transitive predecessors.
///
/// The result holds exactly those nodes and every original edge between
/// them. Its nodes are numbered in the original graph's insertion order, so
/// sorting it yields the original order restricted to the kept nodes.
///
/// Every target is checked before the graph is inspected: an unknown target
/// fails with [`GraphError::UnknownNode`], a cyclic graph with
/// [`GraphError::Cycle`].
pub fn prune<V>(graph: &Graph<V>, targets: &[V]) -> Result<Graph<V>, V>
where
    V: Eq + Hash + Clone,
{
    if let Some(missing) = targets.iter().find(|target| !graph.contains(target)) {
        return Err(GraphError::UnknownNode(missing.clone()));
    }
    if let Some(cycle) = graph.find_cycle() {
        return Err(GraphError::cycle(cycle));
    }

    let keep = ancestors(graph, targets);

    let mut pruned = Graph::with_capacity(keep.len());
    for node in graph.enumerate().filter(|node| keep.contains(node)) {
        let predecessors = graph.predecessors(node);
        if predecessors.is_empty() {
            pruned.add_node(node.clone());
        } else {
            pruned.add(node.clone(), predecessors.iter().cloned());
        }
    }
    pruned.renumber_by(|node| graph.index_of(node));

    debug!(
        targets = targets.len(),
        kept = pruned.len(),
        dropped = graph.len() - pruned.len(),
        "graph pruned"
    );
    Ok(pruned)
}

/// Targets plus every node reachable from them along predecessor edges.
fn ancestors<'a, V>(graph: &'a Graph<V>, targets: &'a [V]) -> HashSet<&'a V>
where
    V: Eq + Hash + Clone,
{
    let mut keep: HashSet<&V> = HashSet::with_capacity(targets.len());
    let mut pending: Vec<&V> = targets.iter().collect();
    while let Some(node) = pending.pop() {
        if keep.insert(node) {
            pending.extend(graph.predecessors(node));
        }
    }
    keep
}
