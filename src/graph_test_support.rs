use std::collections::HashSet;
use std::hash::Hash;

use quickcheck::Arbitrary;
use tracing::info_span;

use crate::graph::{Graph, VertexId};
use crate::tracing_support::init_tracing;

/// A randomly generated graph for property tests.
#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub graph: Graph,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let num_vertices = usize::arbitrary(g) % 20; // Limit size for testing
        let num_edges = usize::arbitrary(g) % 50;
        let num_extra_duplicate_edges = usize::arbitrary(g) % 5;
        let num_extra_self_loops = usize::arbitrary(g) % 5;

        let mut graph = Graph::new(num_vertices);
        if num_vertices == 0 {
            return ArbGraph { graph };
        }

        for i in 0..num_edges {
            let u = usize::arbitrary(g) % num_vertices;
            let v = usize::arbitrary(g) % num_vertices;
            add_in_range(&mut graph, u, v);
            if i < num_extra_duplicate_edges {
                add_in_range(&mut graph, v, u);
            }
            if i < num_extra_self_loops {
                add_in_range(&mut graph, u, u);
            }
        }

        ArbGraph { graph }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Drop edge records from the end, keeping the vertex count.
        let edges: Vec<(usize, usize)> = self
            .graph
            .edges()
            .map(|e| (e.head().index(), e.tail().index()))
            .collect();
        let n = self.graph.vertex_count();
        Box::new((0..edges.len()).rev().map(move |keep| {
            let mut graph = Graph::new(n);
            for &(u, v) in &edges[..keep] {
                add_in_range(&mut graph, u, v);
            }
            ArbGraph { graph }
        }))
    }
}

fn add_in_range(graph: &mut Graph, u: usize, v: usize) {
    if let Err(err) = graph.add_edge(u, v) {
        panic!("generated an out-of-range edge ({u}, {v}): {err}");
    }
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Checks the internal consistency of a graph: every handle it holds belongs
/// to it, neighbour relations are symmetric and match the edge list, and
/// vertices are stored in index order.
pub fn check_graph_consistency(graph: &Graph) {
    init_tracing();
    let _span = info_span!("check_graph_consistency").entered();

    for (position, vertex) in graph.vertices().enumerate() {
        assert_eq!(vertex.index(), position);
        assert_eq!(vertex.graph(), graph.id());
        assert_eq!(graph.check_valid_vertex_id(vertex.id()), Ok(()));
        assert!(!has_duplicates(vertex.neighbours()));

        for neighbour in vertex.neighbours() {
            assert_eq!(graph.check_valid_vertex_id(neighbour), Ok(()));
            assert!(
                graph[neighbour].has_neighbour(vertex.id()),
                "{:?} lists {:?} as a neighbour but not the reverse",
                vertex.id(),
                neighbour
            );
        }
    }

    let mut from_edges: HashSet<(VertexId, VertexId)> = HashSet::new();
    for edge in graph.edges() {
        assert_eq!(graph.check_valid_vertex_id(edge.tail()), Ok(()));
        assert_eq!(graph.check_valid_vertex_id(edge.head()), Ok(()));
        assert!(graph[edge.tail()].has_neighbour(edge.head()));
        from_edges.insert(edge.ends());
        from_edges.insert((edge.head(), edge.tail()));
    }

    // Every neighbour entry is explained by at least one edge record.
    for vertex in graph.vertices() {
        for neighbour in vertex.neighbours() {
            assert!(from_edges.contains(&(vertex.id(), neighbour)));
        }
    }

    assert_eq!(graph.vertices().count(), graph.vertex_count());
    assert_eq!(graph.edges().count(), graph.edge_count());
    assert_eq!(graph.is_empty(), graph.vertex_count() == 0);
    assert!(graph.vertex_count() > 0 || graph.edge_count() == 0);
}
