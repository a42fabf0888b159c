//! Plain-text dependency manifests.
//!
//! One declaration per line, either a bare node or a node followed by the
//! nodes it depends on:
//!
//! ```text
//! # comments run to the end of the line
//! fetch
//! compile: fetch
//! link: compile, runtime
//! ```
//!
//! Each line becomes one [`Graph::add`] call, in file order, so the line
//! order decides how ties are broken when sorting.

use crate::graph::Graph;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("line {line}: missing node name before ':'")]
    MissingNode { line: usize },

    #[error("line {line}: invalid node name {name:?}")]
    InvalidName { line: usize, name: String },
}

/// Read and parse the manifest at `path`.
pub fn load(path: &Path) -> Result<Graph<String>, ManifestError> {
    let source = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse(&source)?;
    debug!(
        path = %path.display(),
        nodes = graph.len(),
        edges = graph.edge_count(),
        "manifest loaded"
    );
    Ok(graph)
}

/// Parse manifest text into a graph.
pub fn parse(source: &str) -> Result<Graph<String>, ManifestError> {
    let mut graph = Graph::new();

    for (i, raw) in source.lines().enumerate() {
        let line = i + 1;
        let text = raw.split_once('#').map_or(raw, |(before, _)| before).trim();
        if text.is_empty() {
            continue;
        }

        let (node, deps) = text.split_once(':').unwrap_or((text, ""));
        let node = node.trim();
        if node.is_empty() {
            return Err(ManifestError::MissingNode { line });
        }
        if node.contains(|c: char| c == ',' || c.is_whitespace()) {
            return Err(ManifestError::InvalidName {
                line,
                name: node.to_owned(),
            });
        }

        let predecessors = deps
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|dep| !dep.is_empty())
            .map(str::to_owned);
        graph.add(node.to_owned(), predecessors);
    }

    Ok(graph)
}
