#![cfg(feature = "dot")]

mod common;

use common::{k4, petersen, triangle};
use grl_colouring::{
    colouring,
    dot::{self, DotStyle, attr::Attr},
    graph_test_support::ArbGraph,
    prelude::*,
};
use quickcheck_macros::quickcheck;

fn node_lines(text: &str) -> Vec<&str> {
    text.lines()
        .filter(|l| l.starts_with("    ") && !l.contains("--") && !l.contains("->"))
        .collect()
}

fn edge_lines(text: &str) -> Vec<&str> {
    text.lines()
        .filter(|l| l.contains(" -- ") || l.contains(" -> "))
        .collect()
}

#[test]
fn test_coloured_triangle() {
    let mut graph = triangle();
    colouring::run(&mut graph);
    let text = dot::to_dot_string(&graph, false).unwrap();
    assert!(text.starts_with("graph G {\n"));
    assert!(text.ends_with("}\n"));
    assert_eq!(node_lines(&text).len(), 3);
    assert_eq!(edge_lines(&text).len(), 3);
    for colour in 1..=3 {
        assert!(text.contains(&format!("color={colour},colorscheme=set13")));
    }
}

#[test]
fn test_failed_k4_shows_conflict() {
    let mut graph = k4();
    colouring::run(&mut graph);
    let text = dot::to_dot_string(&graph, false).unwrap();
    assert_eq!(text.matches("style=filled,fillcolor=1").count(), 1);
}

#[test]
fn test_directed_export_to_writer() {
    let graph = petersen();
    let mut out = Vec::new();
    dot::export(&graph, true, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("digraph G {\n"));
    assert_eq!(edge_lines(&text).len(), 15);
    assert!(edge_lines(&text).iter().all(|l| l.contains(" -> ")));
}

struct LabelsOnly;

impl DotStyle for LabelsOnly {
    fn node_attrs(&self, vertex: &Vertex) -> Vec<Attr> {
        vec![Attr::Label(format!("v{}", vertex.label()))]
    }
}

#[test]
fn test_custom_style() {
    let mut out = Vec::new();
    dot::export_with(&triangle(), false, &LabelsOnly, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("    2 [label=\"v2\"]\n"));
    assert!(text.contains("    1 -- 0\n"));
}

#[quickcheck]
fn prop_one_line_per_vertex_and_edge(arb: ArbGraph, directed: bool) -> bool {
    let text = dot::to_dot_string(&arb.graph, directed).unwrap();
    node_lines(&text).len() == arb.graph.vertex_count()
        && edge_lines(&text).len() == arb.graph.edge_count()
}
