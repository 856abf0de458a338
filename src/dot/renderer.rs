use std::collections::HashMap;
use std::io::{self, BufWriter, Write};

use tracing::info_span;

use super::attr::{Attr, Style, format_attr_list, is_plain_id, quote};
use crate::{
    error::Result,
    graph::{Edge, Graph, Vertex, VertexId},
};

/// Number of colours in the default colour scheme.
pub const NUM_COLOURS: u32 = 4;

/// Graphviz colour scheme used by [`DefaultStyle`].
pub const DEFAULT_COLOUR_SCHEME: &str = "set13";

/// Trait for choosing the attributes of the generated DOT.  Implement it to
/// change how vertices and edges are decorated; node names are always the
/// vertex positions.
pub trait DotStyle {
    /// Returns the name of the graph to be used in the DOT output.
    /// By default, this returns "G".
    fn graph_name(&self) -> String {
        "G".to_string()
    }

    /// Returns a list of attributes for a given vertex.
    fn node_attrs(&self, vertex: &Vertex) -> Vec<Attr> {
        let _ = vertex;
        vec![]
    }

    /// Returns a list of attributes for a given edge record.
    fn edge_attrs(&self, edge: &Edge) -> Vec<Attr> {
        let _ = edge;
        vec![]
    }
}

/// Draws each vertex with its label and, once coloured, its colour class.
///
/// The outline colour is `colour mod 4` in the `set13` scheme.  Colours of
/// 4 and above (the conflict marker) are also filled, with
/// `(colour div 4) mod 4`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStyle;

impl DotStyle for DefaultStyle {
    fn node_attrs(&self, vertex: &Vertex) -> Vec<Attr> {
        let mut attrs = vec![
            Attr::Penwidth(3.0),
            Attr::Label(vertex.label().to_string()),
        ];
        if let Some(colour) = vertex.colour().assigned() {
            let value = colour.value();
            attrs.push(Attr::Color(value % NUM_COLOURS));
            attrs.push(Attr::Colorscheme(DEFAULT_COLOUR_SCHEME.to_string()));
            if value >= NUM_COLOURS {
                attrs.push(Attr::Style(Style::Filled));
                attrs.push(Attr::Fillcolor((value / NUM_COLOURS) % NUM_COLOURS));
            }
        }
        attrs
    }

    fn edge_attrs(&self, _edge: &Edge) -> Vec<Attr> {
        vec![Attr::Penwidth(2.0)]
    }
}

/// Writes `graph` as DOT using [`DefaultStyle`].  With `directed` set, the
/// output is a `digraph` with each edge drawn from tail to head.
pub fn export<W: Write>(graph: &Graph, directed: bool, writer: W) -> Result<()> {
    export_with(graph, directed, &DefaultStyle, writer)
}

/// Writes `graph` as DOT using the given style.  The graph is only read.
pub fn export_with<W, S>(graph: &Graph, directed: bool, style: &S, writer: W) -> Result<()>
where
    W: Write,
    S: DotStyle + ?Sized,
{
    let _span = info_span!("export", directed).entered();
    let mut out = BufWriter::new(writer);
    render(graph, directed, style, &mut out)?;
    out.flush()?;
    Ok(())
}

fn render<S: DotStyle + ?Sized>(
    graph: &Graph,
    directed: bool,
    style: &S,
    out: &mut impl Write,
) -> io::Result<()> {
    let (keyword, connector) = if directed {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };
    let name = style.graph_name();
    let name = if is_plain_id(&name) { name } else { quote(&name) };
    writeln!(out, "{} {} {{", keyword, name)?;

    let node_name: HashMap<VertexId, usize> = graph
        .vertex_ids()
        .enumerate()
        .map(|(i, id)| (id, i))
        .collect();

    for vertex in graph.vertices() {
        writeln!(
            out,
            "    {}{}",
            node_name[&vertex.id()],
            format_attr_list(&style.node_attrs(vertex))
        )?;
    }
    writeln!(out)?;

    for edge in graph.edges() {
        writeln!(
            out,
            "    {} {} {}{}",
            node_name[&edge.tail()],
            connector,
            node_name[&edge.head()],
            format_attr_list(&style.edge_attrs(edge))
        )?;
    }
    writeln!(out, "}}")
}

/// Renders `graph` as a DOT string using [`DefaultStyle`].
pub fn to_dot_string(graph: &Graph, directed: bool) -> Result<String> {
    let mut buffer = Vec::new();
    export(graph, directed, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}
