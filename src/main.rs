mod gexf;
mod interaction_graph;

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};

use crate::gexf::write_gexf;
use crate::interaction_graph::read_data;

/// Build a Gephi GEXF file from a `$`-delimited file of drug-drug-reaction
/// rows.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Options {
    /// Path to the `$`-delimited input file.
    input: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let options = Options::parse();
    debug!("{:?}", options);

    let graph = read_data(&options.input)?;
    info!(
        "loaded {} drugs across {} interaction pairs",
        graph.node_count(),
        graph.edge_count()
    );

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_gexf(&graph, &mut out)?;
    out.flush()?;

    Ok(())
}
