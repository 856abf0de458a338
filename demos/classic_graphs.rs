//! Example that colours a few well-known graphs and writes each one to a DOT
//! file.
//!
//! Usage:
//!   cargo run --example classic_graphs -- --out-dir dots
//!   GRL_LOG=debug cargo run --example classic_graphs -- --out-dir dots --timings

#[cfg(feature = "dot")]
mod inner {
    use std::fs::{self, File};
    use std::path::PathBuf;
    use std::process;

    use clap::Parser;
    use grl_colouring::{colouring, dot, prelude::*, tracing_support};

    /// Colour the triangle, K4 and Petersen graphs and export them as DOT.
    #[derive(Parser, Debug)]
    #[command(author, version, about, long_about = None)]
    struct Args {
        /// Directory for the generated .dot files
        #[arg(long, default_value = "dots")]
        out_dir: PathBuf,

        /// Draw edges as arrows from tail to head
        #[arg(long)]
        directed: bool,

        /// Print time spent per span after each graph
        #[arg(long)]
        timings: bool,
    }

    fn build(n: usize, edges: &[(usize, usize)]) -> Result<Graph> {
        let mut graph = Graph::new(n);
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    fn classic_graphs() -> Result<Vec<(&'static str, Graph)>> {
        Ok(vec![
            (
                "k4",
                build(4, &[(0, 1), (1, 2), (2, 0), (3, 0), (3, 1), (3, 2)])?,
            ),
            ("triangle", build(3, &[(0, 1), (1, 2), (2, 0)])?),
            (
                "petersen",
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
                )?,
            ),
        ])
    }

    fn colour_and_export(args: &Args) -> Result<()> {
        fs::create_dir_all(&args.out_dir)?;
        for (name, mut graph) in classic_graphs()? {
            tracing_support::reset_span_timings();
            let outcome = colouring::run(&mut graph);
            let proper = colouring::is_proper(&graph);
            match outcome {
                Outcome::Coloured { start } => println!(
                    "{name}: coloured from vertex {} ({})",
                    graph[start].label(),
                    if proper { "proper" } else { "not proper" }
                ),
                Outcome::Failed => println!("{name}: not 3-colourable by propagation"),
            }
            let path = args.out_dir.join(format!("{name}.dot"));
            dot::export(&graph, args.directed, File::create(&path)?)?;
            println!("  wrote {}", path.display());
            if args.timings {
                tracing_support::dump_span_timings();
            }
        }
        Ok(())
    }

    pub fn run() {
        let args = Args::parse();
        tracing_support::init_tracing();

        if let Err(err) = colour_and_export(&args) {
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
    println!("Run with: cargo run --example classic_graphs --features dot");
}
