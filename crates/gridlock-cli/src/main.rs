#![forbid(unsafe_code)]
//! gridlock: deadlock detection and Banker's safety analysis.

mod cmd;
mod output;
mod scenario;

use anyhow::Result;
use clap::{Parser, Subcommand};
use output::OutputMode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "gridlock: OS resource-management analysis (deadlock detection, Banker's algorithm)",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Human)]
    format: OutputMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Detect deadlock in a wait-for graph",
        long_about = "Parse a wait-for scenario (process count, then one wait list per \
                      process) and report whether the relation contains a cycle.",
        after_help = "EXAMPLES:\n    # Three processes in a ring (deadlocked)\n    \
                      printf '3\\n1\\n2\\n0\\n' | gridlock deadlock -"
    )]
    Deadlock(cmd::deadlock::DeadlockArgs),

    #[command(
        about = "Check allocation safety with the Banker's algorithm",
        long_about = "Parse a safety scenario ('n m' header, available vector, n max-need \
                      rows, n allocation rows) and report whether a safe completion \
                      order exists, printing one such order when it does."
    )]
    Safety(cmd::safety::SafetyArgs),

    #[command(
        about = "Emit the wait-for graph as a node/edge structure",
        long_about = "Parse a wait-for scenario and emit the presentation structure the \
                      renderer consumes: one node per process (P0, P1, ...) and one \
                      directed edge per wait entry."
    )]
    Graph(cmd::graph::GraphArgs),
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Deadlock(args) => cmd::deadlock::run(args, cli.format),
        Commands::Safety(args) => cmd::safety::run(args, cli.format),
        Commands::Graph(args) => cmd::graph::run(args, cli.format),
    }
}
