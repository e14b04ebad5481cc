//! Reads a graph in adjacency-list format and prints whether it is Eulerian, followed by either
//! its bridges or one validated Eulerian circuit per start vertex.

use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::{Parser, ValueEnum};
use eulerian::{algo::*, io::*, prelude::*, report::*};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BridgesArg {
    PairScan,
    LowLink,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TieBreakArg {
    Stored,
    Ascending,
}

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Graph in adjacency-list format
    graph_file: PathBuf,

    /// How bridges of non-Eulerian graphs are enumerated
    #[arg(long, value_enum, default_value = "pair-scan")]
    bridges: BridgesArg,

    /// Order in which neighbors are tried when extending a circuit
    #[arg(long, value_enum, default_value = "stored")]
    tie_break: TieBreakArg,

    /// Build the circuits of different start vertices in parallel
    #[arg(long)]
    parallel: bool,

    /// Comment identifier of the input file
    #[arg(long, default_value = "c")]
    comment: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    ensure!(
        args.graph_file.exists(),
        "the file {} does not exist",
        args.graph_file.display()
    );

    let graph: AdjList = AdjListReader::new()
        .comment_identifier(args.comment.as_str())
        .try_read_graph_file(&args.graph_file)
        .with_context(|| format!("failed to read graph from {}", args.graph_file.display()))?;

    let strategy = match args.bridges {
        BridgesArg::PairScan => BridgeStrategy::PairScan,
        BridgesArg::LowLink => BridgeStrategy::LowLink,
    };
    let tie_break = match args.tie_break {
        TieBreakArg::Stored => TieBreak::StoredOrder,
        TieBreakArg::Ascending => TieBreak::Ascending,
    };

    let analysis = Analyzer::new()
        .bridge_strategy(strategy)
        .fleury(Fleury::new().tie_break(tie_break))
        .parallel(args.parallel)
        .analyze(&graph)?;

    print!("{analysis}");
    Ok(())
}
