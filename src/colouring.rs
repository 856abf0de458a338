//! A single-pass 3-colouring heuristic.
//!
//! Starting from one vertex coloured `1`, colours spread to neighbours
//! through a fixed transition table.  A neighbour's colour is overwritten
//! every time one of its neighbours is processed, visited or not, so a later
//! step can undo an earlier good choice.  The attempt fails as soon as the
//! table yields the conflict colour `4`.
//!
//! This is not a complete colouring algorithm.  It can fail on 3-colourable
//! graphs, and an attempt that finishes without conflict may still leave two
//! neighbours with the same colour; use [`is_proper`] to check.
//!
//! # Examples
//!
//! ```
//! use grl_colouring::{Graph, colouring::{self, Outcome}};
//!
//! let mut triangle = Graph::new(3);
//! triangle.add_edge(0, 1).unwrap();
//! triangle.add_edge(1, 2).unwrap();
//! triangle.add_edge(2, 0).unwrap();
//! assert!(matches!(colouring::run(&mut triangle), Outcome::Coloured { .. }));
//! assert!(colouring::is_proper(&triangle));
//! ```

use std::collections::BTreeSet;

use tracing::{debug, info, info_span, trace};

use crate::graph::{Colour, Graph, VertexId};

/// `TRANSITIONS[parent - 1][prior]` is the colour given to a neighbour whose
/// colour was `prior` when processed from a vertex coloured `parent`.
const TRANSITIONS: [[u32; 4]; 3] = [
    [2, 2, 2, 3], // parent 1
    [1, 1, 3, 3], // parent 2
    [1, 1, 2, 4], // parent 3
];

/// Looks up the colour a neighbour receives.
///
/// # Panics
///
/// Panics unless `parent` is a colour class (`1..=3`) and `prior` is
/// uncoloured or a colour class.
pub fn transition(parent: Colour, prior: Colour) -> Colour {
    assert!(parent.is_class(), "parent colour {} is not a class", parent);
    assert!(prior.value() <= 3, "prior colour {} is out of range", prior);
    Colour::new(TRANSITIONS[parent.value() as usize - 1][prior.value() as usize])
}

/// Result of [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The attempt started at `start` finished without conflict.
    Coloured { start: VertexId },
    /// Every start vertex ran into a conflict, or the graph has no vertices.
    Failed,
}

impl Outcome {
    pub fn is_coloured(&self) -> bool {
        matches!(self, Outcome::Coloured { .. })
    }
}

/// Runs one propagation from `start`, returning `true` if no conflict
/// occurred.  All colours are reset first.  On failure the colours are left
/// as they were when the conflict was found, including the conflict colour.
///
/// Panics if `start` is not a vertex of `graph`.
pub fn attempt(graph: &mut Graph, start: VertexId) -> bool {
    graph.assert_valid_vertex_id(start);
    let _span = info_span!("attempt", start = start.index()).entered();

    graph.reset_colours();
    graph.set_colour(start, Colour::new(1));

    // Drained smallest index first so that runs are reproducible.
    let mut worklist = BTreeSet::from([start]);
    let mut visited = BTreeSet::from([start]);

    while let Some(current) = worklist.pop_first() {
        let parent = graph[current].colour();
        let neighbours: Vec<VertexId> = graph[current].neighbours().collect();
        for neighbour in neighbours {
            let colour = transition(parent, graph[neighbour].colour());
            graph.set_colour(neighbour, colour);
            trace!(
                from = current.index(),
                to = neighbour.index(),
                %colour,
                "propagated"
            );
            if colour.is_conflict() {
                debug!(
                    from = current.index(),
                    at = neighbour.index(),
                    "conflict"
                );
                return false;
            }
            if visited.insert(neighbour) {
                worklist.insert(neighbour);
            }
        }
    }
    true
}

/// Tries [`attempt`] from each vertex in turn and stops at the first that
/// succeeds, leaving its colours in place.  If none succeeds, the colours of
/// the last attempt remain.
pub fn run(graph: &mut Graph) -> Outcome {
    let _span = info_span!("run", vertices = graph.vertex_count()).entered();
    let starts: Vec<VertexId> = graph.vertex_ids().collect();
    for start in starts {
        if attempt(graph, start) {
            info!(start = start.index(), label = %graph[start].label(), "coloured");
            return Outcome::Coloured { start };
        }
    }
    info!("graph is not 3-colourable by propagation");
    Outcome::Failed
}

/// True if every vertex has a colour class and no edge joins two vertices of
/// the same colour.
pub fn is_proper(graph: &Graph) -> bool {
    graph.vertices().all(|v| v.colour().is_class())
        && graph
            .edges()
            .all(|e| graph[e.tail()].colour() != graph[e.head()].colour())
}
