use std::fmt;
use thiserror::Error;

/// Errors raised by graph mutation, sorting and pruning
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<V> {
    /// An edge endpoint or prune target was never added to the graph
    #[error("unknown node: {0}")]
    UnknownNode(V),

    /// The graph is not a DAG; carries the first cycle found
    #[error("graph contains a cycle: {0}")]
    Cycle(CyclePath<V>),
}

impl<V> GraphError<V> {
    /// Creates a cycle error from a closed path (first node == last node)
    pub fn cycle(path: Vec<V>) -> Self {
        Self::Cycle(CyclePath::new(path))
    }
}

/// A closed walk through the graph, ending on the node it started from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CyclePath<V> {
    path: Vec<V>,
}

impl<V> CyclePath<V> {
    /// Create a new cycle path.
    pub fn new(path: Vec<V>) -> Self {
        Self { path }
    }

    /// Nodes of the cycle, the starting node repeated at the end.
    pub fn nodes(&self) -> &[V] {
        &self.path
    }

    /// Consumes the path, returning its nodes.
    pub fn into_nodes(self) -> Vec<V> {
        self.path
    }
}

impl<V: fmt::Display> fmt::Display for CyclePath<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

/// Result type alias
pub type Result<T, V> = std::result::Result<T, GraphError<V>>;
