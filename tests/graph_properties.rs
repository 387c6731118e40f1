//! Property tests for the undirected graph: adjacency symmetry and
//! the neighbor-set semantics of the depth-first friends scan.

use deepfirst::UndirectedGraph;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

// A small label space forces collisions, parallel edges and
// self-loops to show up in generated graphs.
fn label(i: u8) -> String {
    format!("v{}", i % 8)
}

fn build(edges: &[(u8, u8)]) -> UndirectedGraph {
    let mut graph = UndirectedGraph::new();
    for &(a, b) in edges {
        graph.add_vertex(&label(a));
        graph.add_vertex(&label(b));
        graph.add_edge(&label(a), &label(b)).unwrap();
    }
    graph
}

#[quickcheck]
fn adjacency_stays_symmetric(edges: Vec<(u8, u8)>) -> bool {
    let graph = build(&edges);
    graph.vertices().all(|a| {
        let adjacent = graph.neighbors(a.label()).unwrap();
        adjacent.iter().all(|b| {
            let count_ab = adjacent.iter().filter(|v| *v == b).count();
            let count_ba = graph
                .neighbors(b.label())
                .unwrap()
                .iter()
                .filter(|v| v.label() == a.label())
                .count();
            count_ab == count_ba
        })
    })
}

#[quickcheck]
fn friends_are_exactly_the_stored_neighbors(edges: Vec<(u8, u8)>) -> TestResult {
    if edges.is_empty() {
        return TestResult::discard();
    }
    let graph = build(&edges);
    let root = label(edges[0].0);

    let mut friends = graph.depth_first_traversal(&root).unwrap();
    friends.sort();

    let mut expected: Vec<String> = graph
        .neighbors(&root)
        .unwrap()
        .iter()
        .map(|v| v.label().to_string())
        .collect();
    expected.sort();

    // Multiset equality: parallel edges duplicate a friend exactly as
    // often as the neighbor list stores it.
    TestResult::from_bool(friends == expected)
}

#[quickcheck]
fn removed_vertex_leaves_no_trace(edges: Vec<(u8, u8)>) -> TestResult {
    if edges.is_empty() {
        return TestResult::discard();
    }
    let mut graph = build(&edges);
    let target = label(edges[0].0);

    graph.remove_vertex(&target);

    let gone = graph.neighbors(&target).is_none()
        && graph.vertices().all(|v| {
            graph
                .neighbors(v.label())
                .unwrap()
                .iter()
                .all(|n| n.label() != target)
        });
    TestResult::from_bool(gone)
}

#[quickcheck]
fn dfs_terminates_and_dedups(edges: Vec<(u8, u8)>) -> TestResult {
    if edges.is_empty() {
        return TestResult::discard();
    }
    let graph = build(&edges);
    let start = label(edges[0].0);

    let visited: Vec<String> = graph
        .dfs(&start)
        .unwrap()
        .map(|v| v.label().to_string())
        .collect();
    let unique: std::collections::HashSet<&String> = visited.iter().collect();

    TestResult::from_bool(visited.len() == unique.len() && visited.len() <= graph.vertex_count())
}
