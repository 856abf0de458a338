//! Example that reads a .grl graph list, colours one of its graphs, and
//! writes the result as DOT.
//!
//! Usage:
//!   cargo run --example colour_grl -- path/to/graphs.grl
//!   cat graphs.grl | cargo run --example colour_grl -- - --index 1 --output out.dot

#[cfg(feature = "dot")]
mod inner {
    use std::fs::File;
    use std::io::{self, BufReader};
    use std::path::PathBuf;
    use std::process;

    use clap::Parser;
    use grl_colouring::{colouring, dot, grl, prelude::*, tracing_support};

    /// Colour a graph from a .grl file and print it as DOT.
    #[derive(Parser, Debug)]
    #[command(author, version, about, long_about = None)]
    struct Args {
        /// Input .grl file path (use '-' or omit to read from stdin)
        input: Option<String>,

        /// Which graph of the list to colour
        #[arg(long, default_value_t = 0)]
        index: usize,

        /// Output .dot file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Draw edges as arrows from tail to head
        #[arg(long)]
        directed: bool,
    }

    fn read_records(input: Option<&str>) -> Result<Vec<GrlRecord>> {
        match input {
            Some("-") | None => grl::decode_records(io::stdin().lock()),
            Some(path) => grl::decode_records(BufReader::new(File::open(path)?)),
        }
    }

    fn colour_one(args: &Args) -> Result<()> {
        let mut records = read_records(args.input.as_deref())?;
        let count = records.len();
        let Some(record) = records.get_mut(args.index) else {
            return Err(GraphError::Index {
                index: args.index as i64,
                count,
            });
        };
        for option in &record.options {
            eprintln!("option: {option}");
        }

        let graph = &mut record.graph;
        match colouring::run(graph) {
            Outcome::Coloured { start } => eprintln!(
                "Coloured from vertex {}; proper: {}",
                graph[start].label(),
                colouring::is_proper(graph)
            ),
            Outcome::Failed => eprintln!("Graph is not 3-colourable by propagation"),
        }

        match &args.output {
            Some(path) => dot::export(graph, args.directed, File::create(path)?),
            None => dot::export(graph, args.directed, io::stdout().lock()),
        }
    }

    pub fn run() {
        let args = Args::parse();
        tracing_support::init_tracing();

        if let Err(err) = colour_one(&args) {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}

#[cfg(feature = "dot")]
fn main() {
    inner::run();
}

#[cfg(not(feature = "dot"))]
fn main() {
    println!("This example requires the 'dot' feature to be enabled.");
    println!("Run with: cargo run --example colour_grl --features dot");
}
