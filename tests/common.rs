#![allow(dead_code)]

use std::collections::HashSet;

use grl_colouring::Graph;

pub fn build(n: usize, edges: &[(usize, usize)]) -> Graph {
    let mut graph = Graph::new(n);
    for &(u, v) in edges {
        graph.add_edge(u, v).unwrap();
    }
    graph
}

pub fn triangle() -> Graph {
    build(3, &[(0, 1), (1, 2), (2, 0)])
}

/// A triangle plus a vertex joined to all three corners.
pub fn k4() -> Graph {
    build(4, &[(0, 1), (1, 2), (2, 0), (3, 0), (3, 1), (3, 2)])
}

pub fn petersen() -> Graph {
    build(
        10,
        &[
            (0, 1),
            (0, 4),
            (0, 5),
            (1, 2),
            (1, 6),
            (2, 3),
            (2, 7),
            (3, 4),
            (3, 8),
            (4, 9),
            (5, 7),
            (5, 8),
            (6, 8),
            (6, 9),
            (7, 9),
        ],
    )
}

/// The edge list as a set of index pairs, smallest first.
pub fn undirected_edges(graph: &Graph) -> HashSet<(usize, usize)> {
    graph.edges().map(|e| e.undirected_key()).collect()
}

pub fn colour_values(graph: &Graph) -> Vec<u32> {
    graph.colours().into_iter().map(|c| c.value()).collect()
}
