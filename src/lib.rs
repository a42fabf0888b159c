//! Insertion-ordered dependency graphs: cycle detection, topological
//! ordering and ancestor-closure pruning over any `Eq + Hash + Clone` key.

pub mod cli;
pub mod cli_handlers;
pub mod error;
pub mod graph;
pub mod manifest;

pub use error::{CyclePath, GraphError, Result};
pub use graph::{Graph, NodeInfo, prune, topological_layers, topological_order};
