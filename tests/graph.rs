use graphlib::{Graph, GraphError, prune, topological_order};
use std::collections::HashSet;

/// The two-tree dependency graph with a cross link through C-1.
///
/// ```text
///                                 +----> A-1-1
///                                 |
///    +------------------------> A-1
///    |                           ^|
///    A       +-----> A-2-1       ||----> A-1-2
///    |       |                   |
///    +----> A-2                  |
///            |                   |
///            +-----> A-2-2       |
///                       |        |
///                       +-----> C-1
///                       |
///    B ---> B-1 ---> B-1-1
/// ```
fn sample_graph() -> Graph<&'static str> {
    let mut g = Graph::new();

    g.add_node("A-1-1");
    g.add_node("A-1");
    g.add_edge("A-1", "A-1-1").unwrap();

    g.add_node("A-1-2");
    g.add_edge("A-1", "A-1-2").unwrap();

    g.add("A-1", ["A", "C-1"]);
    g.add("A-2-1", ["A-2"]);
    g.add("A-2-2", ["A-2"]);
    g.add("A-2", ["A"]);
    g.add("B-1-1", ["B-1"]);
    g.add("B-1", ["B"]);
    g.add("A", []);
    g.add("B", []);
    g.add("C-1", ["A-2-2", "B-1-1"]);
    g
}

fn edge_set<V: Clone + Eq + std::hash::Hash>(graph: &Graph<V>) -> HashSet<(V, V)> {
    graph
        .edges()
        .map(|(from, to)| (from.clone(), to.clone()))
        .collect()
}

/// Every node reachable from `targets` along predecessor edges, computed
/// independently of the library's pruning walk.
fn closure(graph: &Graph<&'static str>, targets: &[&'static str]) -> HashSet<&'static str> {
    let mut found: HashSet<&'static str> = targets.iter().copied().collect();
    loop {
        let before = found.len();
        for (from, to) in graph.edges() {
            if found.contains(to) {
                found.insert(*from);
            }
        }
        if found.len() == before {
            return found;
        }
    }
}

fn assert_valid_order<V: Clone + Eq + std::hash::Hash + std::fmt::Debug>(
    graph: &Graph<V>,
    order: &[V],
) {
    assert_eq!(order.len(), graph.len());
    let position: std::collections::HashMap<&V, usize> =
        order.iter().enumerate().map(|(i, v)| (v, i)).collect();
    assert_eq!(position.len(), graph.len(), "order repeats a node");
    for (from, to) in graph.edges() {
        assert!(
            position[from] < position[to],
            "{from:?} must come before {to:?}"
        );
    }
}

#[test]
fn test_sample_topological_order() {
    let g = sample_graph();
    let order = topological_order(&g).unwrap();
    assert_eq!(
        order,
        vec![
            "A", "B", "A-2", "B-1", "A-2-1", "A-2-2", "B-1-1", "C-1", "A-1", "A-1-1", "A-1-2"
        ]
    );
    assert_valid_order(&g, &order);
}

#[test]
fn test_sample_prune() {
    let g = sample_graph();
    let pruned = prune(&g, &["A-1-1"]).unwrap();
    let order = topological_order(&pruned).unwrap();
    assert_eq!(
        order,
        vec!["A", "B", "A-2", "B-1", "A-2-2", "B-1-1", "C-1", "A-1", "A-1-1"]
    );
    assert!(!pruned.contains(&"A-1-2"));
    assert!(!pruned.contains(&"A-2-1"));
}

#[test]
fn test_prune_closure_matches_reference() {
    let g = sample_graph();
    let all: Vec<&str> = g.enumerate().copied().collect();

    let target_sets: Vec<Vec<&'static str>> = vec![
        vec!["A-1-1"],
        vec!["C-1"],
        vec!["A-2-1", "B-1"],
        vec!["A", "B"],
        vec!["A-1-2", "A-2-1"],
        all.clone(),
    ];

    let original_edges = edge_set(&g);
    for targets in target_sets {
        let pruned = g.prune(&targets).unwrap();
        let expected = closure(&g, &targets);

        let kept: HashSet<&str> = pruned.enumerate().copied().collect();
        assert_eq!(kept, expected, "targets {targets:?}");

        let induced: HashSet<_> = original_edges
            .iter()
            .filter(|(from, to)| expected.contains(from) && expected.contains(to))
            .cloned()
            .collect();
        assert_eq!(edge_set(&pruned), induced, "targets {targets:?}");

        // relative order of the kept nodes is the original one
        let original_order: Vec<&str> = all
            .iter()
            .copied()
            .filter(|node| expected.contains(node))
            .collect();
        let pruned_order: Vec<&str> = pruned.enumerate().copied().collect();
        assert_eq!(pruned_order, original_order);

        assert_valid_order(&pruned, &topological_order(&pruned).unwrap());
    }
}

#[test]
fn test_prune_is_idempotent() {
    let g = sample_graph();
    let once = g.prune(&["A-1-1", "B-1"]).unwrap();
    let twice = once.prune(&["A-1-1", "B-1"]).unwrap();

    assert_eq!(
        once.enumerate().collect::<Vec<_>>(),
        twice.enumerate().collect::<Vec<_>>()
    );
    assert_eq!(
        once.edges().collect::<Vec<_>>(),
        twice.edges().collect::<Vec<_>>()
    );
    assert_eq!(
        once.topological_order().unwrap(),
        twice.topological_order().unwrap()
    );
}

#[test]
fn test_order_is_deterministic() {
    let first = topological_order(&sample_graph()).unwrap();
    for _ in 0..20 {
        assert_eq!(topological_order(&sample_graph()).unwrap(), first);
    }
}

#[test]
fn test_injected_cycle() {
    let mut g = sample_graph();
    g.add("B", ["C-1"]);

    let (cycle, ok) = g.is_acyclic();
    assert!(!ok);
    assert_eq!(cycle.first(), cycle.last());
    assert!(cycle.contains(&"B"));
    assert!(cycle.contains(&"C-1"));
    for pair in cycle.windows(2) {
        assert!(g.has_edge(&pair[0], &pair[1]), "{} -> {}", pair[0], pair[1]);
    }

    match topological_order(&g) {
        Err(GraphError::Cycle(path)) => assert_eq!(path.into_nodes(), cycle),
        other => panic!("expected a cycle error, got {other:?}"),
    }
    assert!(matches!(prune(&g, &["A-1-1"]), Err(GraphError::Cycle(_))));
}

#[test]
fn test_two_node_cycle_round_trip() {
    let mut g = Graph::new();
    g.add("X", ["Y"]);
    g.add("Y", ["X"]);

    let (cycle, ok) = g.is_acyclic();
    assert!(!ok);
    assert_eq!(cycle.len(), 3);
    assert_eq!(cycle[0], cycle[2]);
    assert!(cycle.contains(&"X") && cycle.contains(&"Y"));
}

#[test]
fn test_wide_random_like_dag() {
    // node i depends on every j < i with (i * 7 + j * 3) % 5 == 0
    let mut g = Graph::new();
    for i in 0..300u32 {
        let deps: Vec<u32> = (0..i).filter(|j| (i * 7 + j * 3) % 5 == 0).collect();
        g.add(i, deps);
    }
    let order = topological_order(&g).unwrap();
    assert_valid_order(&g, &order);
}
