//! Cycle detection in the graph.

use super::Graph;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use tracing::debug;

/// Pending work for the depth-first walk.
enum Step<'a, V> {
    /// Explore a successor of the node on top of the path
    Visit(&'a V),
    /// All successors of the top node have been explored
    Leave,
}

impl<V: Eq + Hash + Clone> Graph<V> {
    /// Returns the first cycle found, walking roots and successors in
    /// insertion order, or `None` for a DAG.
    ///
    /// The walk keeps its own stacks instead of recursing, so long
    /// dependency chains cannot overflow the call stack. The returned path
    /// starts and ends on the same node.
    pub fn find_cycle(&self) -> Option<Vec<V>> {
        let capacity = self.len();
        let mut seen: HashSet<&V> = HashSet::with_capacity(capacity);
        let mut path: Vec<&V> = Vec::with_capacity(capacity);
        let mut on_path: HashMap<&V, usize> = HashMap::with_capacity(capacity);
        let mut steps: Vec<Step<'_, V>> = Vec::with_capacity(capacity);

        for root in self.enumerate() {
            if seen.contains(root) {
                continue;
            }
            steps.push(Step::Visit(root));

            while let Some(step) = steps.pop() {
                let node = match step {
                    Step::Visit(node) => node,
                    Step::Leave => {
                        if let Some(done) = path.pop() {
                            on_path.remove(done);
                        }
                        continue;
                    }
                };

                if let Some(&start) = on_path.get(node) {
                    let mut cycle: Vec<V> = path[start..].iter().map(|&v| v.clone()).collect();
                    cycle.push(node.clone());
                    debug!(length = cycle.len() - 1, "cycle detected");
                    return Some(cycle);
                }
                if !seen.insert(node) {
                    // finished earlier without closing a cycle
                    continue;
                }

                on_path.insert(node, path.len());
                path.push(node);
                steps.push(Step::Leave);
                steps.extend(self.successors(node).iter().map(Step::Visit));
            }
        }

        None
    }

    /// Two-valued form of [`Graph::find_cycle`]: `(vec![], true)` for a DAG,
    /// otherwise the cycle and `false`.
    pub fn is_acyclic(&self) -> (Vec<V>, bool) {
        match self.find_cycle() {
            Some(cycle) => (cycle, false),
            None => (Vec::new(), true),
        }
    }
}
