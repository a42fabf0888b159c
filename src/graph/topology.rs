//! Topological sorting using Kahn's algorithm.

use super::Graph;
use crate::error::{GraphError, Result};
use std::collections::HashMap;
use std::hash::Hash;
use tracing::{debug, error};

/// Sort the graph so every node comes after all of its predecessors.
///
/// Fails with [`GraphError::Cycle`] when the graph is not a DAG. Nodes are
/// released layer by layer; within a layer they follow insertion order, so
/// the same sequence of `add` calls always yields the same order.
pub fn topological_order<V>(graph: &Graph<V>) -> Result<Vec<V>, V>
where
    V: Eq + Hash + Clone,
{
    let layers = topological_layers(graph)?;
    Ok(layers.into_iter().flatten().collect())
}

/// Like [`topological_order`], grouped into layers.
///
/// The first layer holds every node without predecessors. A node belongs to
/// layer `n + 1` when its last remaining predecessor was in layer `n`, so no
/// two nodes in a layer depend on each other.
pub fn topological_layers<V>(graph: &Graph<V>) -> Result<Vec<Vec<V>>, V>
where
    V: Eq + Hash + Clone,
{
    if let Some(cycle) = graph.find_cycle() {
        return Err(GraphError::cycle(cycle));
    }

    let mut remaining: HashMap<&V, usize> = HashMap::with_capacity(graph.len());
    let mut layer: Vec<&V> = graph
        .enumerate()
        .filter(|node| graph.predecessors(node).is_empty())
        .collect();
    let mut layers: Vec<Vec<V>> = Vec::new();
    let mut emitted = 0;

    while !layer.is_empty() {
        let mut ready: Vec<&V> = Vec::new();
        for &node in &layer {
            for successor in graph.successors(node) {
                let count = remaining
                    .entry(successor)
                    .or_insert_with(|| graph.predecessors(successor).len());
                *count -= 1;
                if *count == 0 {
                    ready.push(successor);
                }
            }
        }
        ready.sort_by_key(|node| graph.index_of(node));

        emitted += layer.len();
        layers.push(layer.into_iter().cloned().collect());
        layer = ready;
    }

    if emitted != graph.len() {
        error!(
            emitted,
            nodes = graph.len(),
            "topological sort stopped early on an acyclic graph"
        );
    }
    debug_assert_eq!(emitted, graph.len());
    debug!(nodes = emitted, layers = layers.len(), "topological order computed");

    Ok(layers)
}
