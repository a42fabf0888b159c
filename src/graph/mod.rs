//! Insertion-ordered directed graph.
//!
//! Nodes live in a hash map, but every algorithm walks them through the
//! `order` vector so results never depend on hash iteration order.

pub mod cycle;
pub mod prune;
pub mod topology;

pub use prune::prune;
pub use topology::{topological_layers, topological_order};

use crate::error::{GraphError, Result};
use std::collections::HashMap;
use std::hash::Hash;

/// Adjacency and ordering data for a single node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo<V> {
    index: usize,
    successors: Vec<V>,
    predecessors: Vec<V>,
}

impl<V> NodeInfo<V> {
    fn new(index: usize) -> Self {
        Self {
            index,
            successors: Vec::with_capacity(2),
            predecessors: Vec::new(),
        }
    }

    /// Position of the node in its graph's insertion order
    pub fn index(&self) -> usize {
        self.index
    }

    /// Nodes reachable through one outgoing edge, in edge insertion order
    pub fn successors(&self) -> &[V] {
        &self.successors
    }

    /// Nodes with an edge into this one, in edge insertion order
    pub fn predecessors(&self) -> &[V] {
        &self.predecessors
    }

    /// Number of distinct incoming edges
    pub fn predecessor_count(&self) -> usize {
        self.predecessors.len()
    }
}

/// A directed graph over caller-supplied keys.
///
/// An edge `a -> b` means `a` must come before `b`. Nodes are numbered in
/// the order they are first added; that numbering breaks ties during
/// topological sorting and orders the nodes of a pruned graph.
///
/// ```
/// use graphlib::Graph;
///
/// let mut graph = Graph::new();
/// graph.add("link", ["compile"]);
/// graph.add("compile", ["fetch"]);
///
/// let order = graph.topological_order().unwrap();
/// assert_eq!(order, vec!["fetch", "compile", "link"]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<V> {
    order: Vec<V>,
    nodes: HashMap<V, NodeInfo<V>>,
}

impl<V: Eq + Hash + Clone> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Eq + Hash + Clone> Graph<V> {
    pub fn new() -> Self {
        Self::with_capacity(8)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            nodes: HashMap::with_capacity(capacity),
        }
    }

    /// Adds `node` if it is not present yet and returns its info.
    ///
    /// Adding an existing node is a no-op; it keeps its original index.
    pub fn add_node(&mut self, node: V) -> &NodeInfo<V> {
        let index = self.order.len();
        let order = &mut self.order;
        self.nodes.entry(node).or_insert_with_key(|key| {
            order.push(key.clone());
            NodeInfo::new(index)
        })
    }

    /// Adds the edge `from -> to`.
    ///
    /// Both endpoints must already be in the graph. Adding an edge twice
    /// leaves the graph unchanged.
    pub fn add_edge(&mut self, from: V, to: V) -> Result<(), V> {
        if !self.nodes.contains_key(&from) {
            return Err(GraphError::UnknownNode(from));
        }
        if !self.nodes.contains_key(&to) {
            return Err(GraphError::UnknownNode(to));
        }
        self.link(from, to);
        Ok(())
    }

    /// Adds `node` along with each of its `predecessors`, and an edge from
    /// every predecessor to `node`.
    pub fn add<I>(&mut self, node: V, predecessors: I)
    where
        I: IntoIterator<Item = V>,
    {
        self.add_node(node.clone());
        for predecessor in predecessors {
            self.add_node(predecessor.clone());
            self.link(predecessor, node.clone());
        }
    }

    // Callers guarantee both endpoints exist.
    fn link(&mut self, from: V, to: V) {
        let Some(from_info) = self.nodes.get_mut(&from) else {
            return;
        };
        if from_info.successors.contains(&to) {
            return;
        }
        from_info.successors.push(to.clone());
        if let Some(to_info) = self.nodes.get_mut(&to) {
            to_info.predecessors.push(from);
        }
    }

    /// Nodes in ascending insertion order.
    pub fn enumerate(&self) -> impl Iterator<Item = &V> + '_ {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, node: &V) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn node(&self, node: &V) -> Option<&NodeInfo<V>> {
        self.nodes.get(node)
    }

    /// Successors of `node`; empty for an unknown node.
    pub fn successors(&self, node: &V) -> &[V] {
        self.nodes
            .get(node)
            .map(NodeInfo::successors)
            .unwrap_or_default()
    }

    /// Predecessors of `node`; empty for an unknown node.
    pub fn predecessors(&self, node: &V) -> &[V] {
        self.nodes
            .get(node)
            .map(NodeInfo::predecessors)
            .unwrap_or_default()
    }

    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.successors(from).contains(to)
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|info| info.successors.len()).sum()
    }

    /// Every edge as `(from, to)`, grouped by `from` in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.order
            .iter()
            .flat_map(move |from| self.successors(from).iter().map(move |to| (from, to)))
    }

    /// Topological order of the graph; see [`topological_order`].
    pub fn topological_order(&self) -> Result<Vec<V>, V> {
        topology::topological_order(self)
    }

    /// Ancestor closure of `targets`; see [`prune()`].
    pub fn prune(&self, targets: &[V]) -> Result<Graph<V>, V> {
        prune::prune(self, targets)
    }

    fn index_of(&self, node: &V) -> usize {
        self.nodes.get(node).map_or(usize::MAX, |info| info.index)
    }

    /// Renumbers the nodes by ascending `key`, keeping the current order
    /// among equal keys.
    fn renumber_by<K, F>(&mut self, mut key: F)
    where
        K: Ord,
        F: FnMut(&V) -> K,
    {
        self.order.sort_by_cached_key(|node| key(node));
        for (index, node) in self.order.iter().enumerate() {
            if let Some(info) = self.nodes.get_mut(node) {
                info.index = index;
            }
        }
    }
}
