use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashSet;
use trove::seen::{mark, mark_set, PolicyTracker, SeePolicy, SeenSet};

fn cyclic_graph() -> (DiGraph<&'static str, ()>, NodeIndex) {
    let mut g = DiGraph::new();
    let a = g.add_node("a");
    let b = g.add_node("b");
    let c = g.add_node("c");
    let d = g.add_node("d");
    g.extend_with_edges([(a, b), (b, c), (c, a), (c, d), (d, d), (a, c)]);
    (g, a)
}

fn visit(
    g: &DiGraph<&'static str, ()>,
    at: NodeIndex,
    seen: Option<SeenSet<NodeIndex>>,
    out: &mut Vec<&'static str>,
) -> Option<SeenSet<NodeIndex>> {
    let (hit, mut seen) = mark(at, true, seen);
    if hit {
        return seen;
    }
    out.push(g[at]);
    let mut next: Vec<_> = g.neighbors(at).collect();
    next.sort();
    for n in next {
        seen = visit(g, n, seen, out);
    }
    seen
}

#[test]
fn test_cyclic_graph_visits_each_node_once() {
    let (g, root) = cyclic_graph();
    let mut order = Vec::new();
    let seen = visit(&g, root, None, &mut order).expect("tracker allocated");

    assert_eq!(order, vec!["a", "b", "c", "d"]);
    assert_eq!(seen.len(), g.node_count());
}

#[test]
fn test_plain_hash_set_tracker_walk() {
    let (g, root) = cyclic_graph();
    let mut stack = vec![root];
    let mut set: Option<HashSet<NodeIndex>> = None;
    let mut visited = 0;

    while let Some(at) = stack.pop() {
        let (hit, next) = mark_set(at, true, set);
        set = next;
        if hit {
            continue;
        }
        visited += 1;
        stack.extend(g.neighbors(at));
    }

    assert_eq!(visited, 4);
    assert_eq!(set.map(|s| s.len()), Some(4));
}

#[test]
fn test_non_recursive_walk_never_allocates() {
    let (g, root) = cyclic_graph();
    let mut seen: Option<SeenSet<NodeIndex>> = None;
    for n in g.neighbors(root) {
        let (hit, next) = mark(n, false, seen);
        assert!(!hit);
        seen = next;
    }
    assert!(seen.is_none());
}

#[test]
fn test_policy_tracker_reenters_on_non_recursive_step() {
    let (g, root) = cyclic_graph();
    let (_, tracker) = mark(root, true, Some(PolicyTracker::new()));

    let (hit, tracker) = mark(root, false, tracker);
    assert!(!hit, "non-recursive step may revisit a recorded node");

    let (hit, tracker) = mark(root, true, tracker);
    assert!(hit);

    let tracker = tracker.expect("tracker supplied");
    assert_eq!(tracker.policy(), SeePolicy::RecursiveOnly);
    assert_eq!(tracker.iter().map(|n| g[*n]).collect::<Vec<_>>(), vec!["a"]);
}
