mod common;

use std::collections::HashSet;

use common::{build, colour_values, k4, petersen, triangle};
use grl_colouring::{
    colouring::{self, Outcome, attempt, is_proper, run},
    prelude::*,
};

#[test]
fn test_triangle_gets_three_distinct_colours() {
    let mut graph = triangle();
    assert!(run(&mut graph).is_coloured());
    let colours: HashSet<u32> = colour_values(&graph).into_iter().collect();
    assert_eq!(colours, HashSet::from([1, 2, 3]));
    assert!(is_proper(&graph));
}

#[test]
fn test_triangle_from_every_start() {
    for start in 0..3 {
        let mut graph = triangle();
        let id = graph.vertex_id(start).unwrap();
        assert!(attempt(&mut graph, id));
        assert_eq!(graph[id].colour(), Colour::new(1));
        assert!(is_proper(&graph));
    }
}

#[test]
fn test_k4_fails() {
    let mut graph = k4();
    assert_eq!(run(&mut graph), Outcome::Failed);
    // The last attempt's colours remain, conflict marker included.
    assert_eq!(colour_values(&graph), vec![2, 3, 4, 1]);
}

#[test]
fn test_k4_fails_from_every_start() {
    let mut graph = k4();
    for id in graph.vertex_ids().collect::<Vec<_>>() {
        assert!(!attempt(&mut graph, id));
        assert_eq!(graph.colours().iter().filter(|c| c.is_conflict()).count(), 1);
    }
}

#[test]
fn test_petersen_result_is_pinned() {
    let mut graph = petersen();
    let outcome = run(&mut graph);
    assert_eq!(
        outcome,
        Outcome::Coloured {
            start: graph.vertex_id(0).unwrap()
        }
    );
    assert_eq!(colour_values(&graph), vec![1, 2, 1, 3, 3, 3, 1, 3, 2, 2]);
    // Vertices 3 and 4 are adjacent and both got colour 3.
    assert!(!is_proper(&graph));
}

#[test]
fn test_petersen_is_repeatable() {
    let mut first = petersen();
    let mut second = first.clone();
    assert_eq!(
        run(&mut first).is_coloured(),
        run(&mut second).is_coloured()
    );
    assert_eq!(first.colours(), second.colours());
    assert_eq!(run(&mut first), run(&mut first));
}

#[test]
fn test_bipartite_path() {
    let mut graph = build(4, &[(0, 1), (1, 2), (2, 3)]);
    assert!(run(&mut graph).is_coloured());
    assert_eq!(colour_values(&graph), vec![1, 2, 1, 2]);
}

#[test]
fn test_disconnected_graph_colours_first_component_only() {
    let mut graph = build(4, &[(0, 1), (2, 3)]);
    assert!(run(&mut graph).is_coloured());
    assert_eq!(colour_values(&graph), vec![1, 2, 0, 0]);
    assert!(!colouring::is_proper(&graph));
}

#[test]
fn test_duplicate_edges_do_not_change_result() {
    let mut plain = triangle();
    let mut doubled = triangle();
    doubled.add_edge(1, 0).unwrap();
    doubled.add_edge(2, 1).unwrap();
    assert_eq!(
        run(&mut plain).is_coloured(),
        run(&mut doubled).is_coloured()
    );
    assert_eq!(plain.colours(), doubled.colours());
}
