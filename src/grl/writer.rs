use std::{
    collections::HashMap,
    io::{self, BufWriter, Write},
};

use tracing::{debug, info_span};

use super::{EDGE_LIST_COMMENT, GrlRecord, NEXT_GRAPH_MARKER, VERTEX_COUNT_COMMENT};
use crate::{
    error::Result,
    graph::{Graph, VertexId},
};

fn write_graph(out: &mut impl Write, options: &[String], graph: &Graph) -> io::Result<()> {
    for option in options {
        writeln!(out, "{}", option)?;
    }
    writeln!(out, "{}", VERTEX_COUNT_COMMENT)?;
    writeln!(out, "{}", graph.vertex_count())?;

    // Vertices are written by their position in iteration order, whatever
    // their labels say.
    let position: HashMap<VertexId, usize> = graph
        .vertex_ids()
        .enumerate()
        .map(|(i, id)| (id, i))
        .collect();

    writeln!(out, "{}", EDGE_LIST_COMMENT)?;
    for edge in graph.edges() {
        writeln!(out, "{},{}", position[&edge.tail()], position[&edge.head()])?;
    }
    Ok(())
}

fn write_all<'a, W: Write>(
    items: impl IntoIterator<Item = (&'a [String], &'a Graph)>,
    writer: W,
) -> Result<()> {
    let _span = info_span!("encode").entered();
    let mut out = BufWriter::new(writer);
    let mut count = 0;
    for (options, graph) in items {
        if count > 0 {
            writeln!(out, "{}", NEXT_GRAPH_MARKER)?;
        }
        write_graph(&mut out, options, graph)?;
        count += 1;
    }
    out.flush()?;
    debug!(graphs = count, "encoded graph list");
    Ok(())
}

/// Writes graphs as a graph list, separated by `--- Next graph:` lines.
pub fn encode<'a, W: Write>(graphs: impl IntoIterator<Item = &'a Graph>, writer: W) -> Result<()> {
    let no_options: &[String] = &[];
    write_all(graphs.into_iter().map(|graph| (no_options, graph)), writer)
}

/// Writes records as a graph list, each preceded by its option lines.
pub fn encode_records<'a, W: Write>(
    records: impl IntoIterator<Item = &'a GrlRecord>,
    writer: W,
) -> Result<()> {
    write_all(
        records
            .into_iter()
            .map(|record| (record.options.as_slice(), &record.graph)),
        writer,
    )
}

/// Writes graphs as a graph list into a string.
pub fn encode_to_string<'a>(graphs: impl IntoIterator<Item = &'a Graph>) -> Result<String> {
    let mut buffer = Vec::new();
    encode(graphs, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grl::decode_records;

    fn path(n: usize) -> Graph {
        let mut graph = Graph::new(n);
        for i in 1..n {
            graph.add_edge(i - 1, i).unwrap();
        }
        graph
    }

    #[test]
    fn test_single_graph_layout() {
        let text = encode_to_string([&path(3)]).unwrap();
        assert_eq!(
            text,
            "# Number of vertices:\n3\n# Edge list:\n1,0\n2,1\n"
        );
    }

    #[test]
    fn test_separator_only_between_graphs() {
        let graphs = [path(2), Graph::new(0), path(1)];
        let text = encode_to_string(&graphs).unwrap();
        assert_eq!(text.matches(NEXT_GRAPH_MARKER).count(), 2);
        assert!(!text.ends_with(&format!("{}\n", NEXT_GRAPH_MARKER)));
        assert!(text.starts_with(VERTEX_COUNT_COMMENT));
    }

    #[test]
    fn test_no_graphs() {
        assert_eq!(encode_to_string(std::iter::empty()).unwrap(), "");
    }

    #[test]
    fn test_positions_ignore_labels() {
        let mut graph = path(2);
        graph.set_label(0, "zero").unwrap();
        graph.set_label(1, 42i64).unwrap();
        let text = encode_to_string([&graph]).unwrap();
        assert!(text.ends_with("# Edge list:\n1,0\n"), "{}", text);
    }

    #[test]
    fn test_records_keep_options() {
        let records = vec![
            GrlRecord {
                options: vec!["directed".to_string()],
                graph: path(2),
            },
            GrlRecord::from(path(3)),
        ];
        let mut buffer = Vec::new();
        encode_records(&records, &mut buffer).unwrap();
        let decoded = decode_records(buffer.as_slice()).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].options, vec!["directed"]);
        assert!(decoded[1].options.is_empty());
        assert_eq!(decoded[1].graph.edge_count(), 2);
    }
}
