//! Reading and writing graph lists in the line-oriented `.grl` format.
//!
//! ```text
//! # comments start with '#'
//! an option line
//! 3
//! 0,1
//! 1,2
//! --- Next graph:
//! 2
//! 0,1
//! ```
//!
//! Each record is any number of option lines, a vertex count, and edge lines
//! `u,v`.  A line starting with `-` separates records.
//!
//! # Examples
//!
//! ```
//! use grl_colouring::grl;
//!
//! let graphs = grl::decode_str("3\n0,1\n1,2\n").unwrap();
//! assert_eq!(graphs[0].vertex_count(), 3);
//! let text = grl::encode_to_string(&graphs).unwrap();
//! assert_eq!(grl::decode_str(&text).unwrap()[0].edge_count(), 2);
//! ```

mod reader;
mod writer;

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

pub use self::reader::{decode, decode_records, decode_str};
pub use self::writer::{encode, encode_records, encode_to_string};
use crate::{error::Result, graph::Graph};

/// Comment written before the vertex count.
pub const VERTEX_COUNT_COMMENT: &str = "# Number of vertices:";
/// Comment written before the edge list.
pub const EDGE_LIST_COMMENT: &str = "# Edge list:";
/// Line written between consecutive graphs.
pub const NEXT_GRAPH_MARKER: &str = "--- Next graph:";

/// One graph of a graph list together with the option lines that preceded
/// its vertex count.  Options are kept verbatim and not interpreted.
#[derive(Debug, Clone)]
pub struct GrlRecord {
    pub options: Vec<String>,
    pub graph: Graph,
}

impl From<Graph> for GrlRecord {
    fn from(graph: Graph) -> Self {
        Self {
            options: Vec::new(),
            graph,
        }
    }
}

/// Reads every graph in the file at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Graph>> {
    let file = File::open(path)?;
    decode(BufReader::new(file))
}

/// Writes `graphs` to the file at `path`, replacing its contents.
pub fn save<'a>(graphs: impl IntoIterator<Item = &'a Graph>, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    encode(graphs, BufWriter::new(file))
}
