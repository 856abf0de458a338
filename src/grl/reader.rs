use std::io::{BufRead, Lines};

use tracing::{debug, info_span};

use super::GrlRecord;
use crate::{
    error::{GraphError, Result},
    graph::Graph,
};

/// Yields trimmed lines, skipping comments and blank lines, and tracks the
/// 1-based number of the last line read.
struct LineReader<R> {
    lines: Lines<R>,
    line_no: usize,
}

impl<R: BufRead> LineReader<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        for line in self.lines.by_ref() {
            let line = line?;
            self.line_no += 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Ok(Some(trimmed.to_string()));
        }
        Ok(None)
    }
}

/// True for an optionally signed run of ASCII digits.
fn is_integer(line: &str) -> bool {
    let digits = line.strip_prefix(['-', '+']).unwrap_or(line);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// A line starting with `-` ends a record unless it is a well-formed edge
/// line, so that `-1,0` is still reported as a bad index.
fn is_next_graph_marker(line: &str) -> bool {
    line.starts_with('-')
}

fn parse_vertex_count(line: &str) -> Result<Graph> {
    let n: i64 = line.parse().map_err(|_| GraphError::InvalidSize {
        value: line.to_string(),
    })?;
    Graph::try_from(n)
}

fn parse_edge(line_no: usize, line: &str) -> Result<(i64, i64)> {
    let (first, second) = line
        .split_once(',')
        .ok_or_else(|| GraphError::format(line_no, format!("expected 'u,v', found {line:?}")))?;
    if second.contains(',') {
        return Err(GraphError::format(
            line_no,
            format!("expected exactly one comma, found {line:?}"),
        ));
    }
    let parse = |s: &str| {
        s.trim().parse::<i64>().map_err(|_| {
            GraphError::format(line_no, format!("invalid vertex index {:?}", s.trim()))
        })
    };
    Ok((parse(first)?, parse(second)?))
}

fn add_parsed_edge(graph: &mut Graph, u: i64, v: i64) -> Result<()> {
    let count = graph.vertex_count();
    let u = usize::try_from(u).map_err(|_| GraphError::index(u, count))?;
    let v = usize::try_from(v).map_err(|_| GraphError::index(v, count))?;
    graph.add_edge(u, v)
}

/// How a record ended.
enum RecordEnd {
    EndOfInput,
    NextGraph,
}

/// Reads one record.  Returns `None` when the input holds nothing but
/// comments and blank lines and no record is required.
fn read_record<R: BufRead>(
    lines: &mut LineReader<R>,
    required: bool,
) -> Result<Option<(GrlRecord, RecordEnd)>> {
    let mut options = Vec::new();
    let mut graph = loop {
        match lines.next_line()? {
            None if required || !options.is_empty() => {
                return Err(GraphError::format(
                    lines.line_no,
                    "unterminated record: missing vertex count",
                ));
            }
            None => return Ok(None),
            Some(line) if is_integer(&line) => break parse_vertex_count(&line)?,
            Some(line) => options.push(line),
        }
    };
    debug!(
        vertices = graph.vertex_count(),
        options = options.len(),
        line = lines.line_no,
        "read vertex count"
    );

    let end = loop {
        match lines.next_line()? {
            None => break RecordEnd::EndOfInput,
            Some(line) => match parse_edge(lines.line_no, &line) {
                Ok((u, v)) => add_parsed_edge(&mut graph, u, v)?,
                Err(_) if is_next_graph_marker(&line) => break RecordEnd::NextGraph,
                Err(err) => return Err(err),
            },
        }
    };

    Ok(Some((GrlRecord { options, graph }, end)))
}

/// Reads every record in a graph list, keeping option lines.
///
/// # Errors
///
/// Returns [`GraphError::InvalidSize`] for a negative or overflowing vertex
/// count, [`GraphError::Format`] for a malformed edge line or a record with
/// no vertex count, [`GraphError::Index`] for an edge naming a vertex outside
/// the graph, and [`GraphError::Io`] if reading fails.  Nothing is returned
/// for a list that fails part way.
pub fn decode_records<R: BufRead>(reader: R) -> Result<Vec<GrlRecord>> {
    let _span = info_span!("decode").entered();
    let mut lines = LineReader::new(reader);
    let mut records = Vec::new();
    let mut required = false;
    while let Some((record, end)) = read_record(&mut lines, required)? {
        records.push(record);
        match end {
            RecordEnd::EndOfInput => break,
            RecordEnd::NextGraph => required = true,
        }
    }
    debug!(graphs = records.len(), lines = lines.line_no, "decoded graph list");
    Ok(records)
}

/// Reads every graph in a graph list.  See [`decode_records`].
pub fn decode<R: BufRead>(reader: R) -> Result<Vec<Graph>> {
    Ok(decode_records(reader)?
        .into_iter()
        .map(|record| record.graph)
        .collect())
}

/// Reads every graph in a graph list held in memory.
pub fn decode_str(text: &str) -> Result<Vec<Graph>> {
    decode(text.as_bytes())
}
