//! `gridlock deadlock` — wait-for-graph cycle detection.


use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tracing::info;

use gridlock_core::{WaitRelation, has_cycle};

use crate::output::{OutputMode, render};
use crate::scenario;

#[derive(Args, Debug)]
pub struct DeadlockArgs {
    /// Scenario file, or `-` for stdin.
    pub input: String,
}

/// The deadlock verdict plus the graph dimensions it was computed over.
#[derive(Debug, Serialize)]
struct DeadlockReport {
    deadlock: bool,
    processes: usize,
    edges: usize,
}

pub fn run(args: &DeadlockArgs, mode: OutputMode) -> Result<()> {
    let text = super::read_input(&args.input)?;
    let scenario = scenario::parse_deadlock(&text).context("parse deadlock scenario")?;
    let relation = WaitRelation::from_rows(scenario.rows).context("build wait-for relation")?;

    let report = DeadlockReport {
        deadlock: has_cycle(&relation),
        processes: relation.process_count(),
        edges: relation.edge_count(),
    };
    info!(deadlock = report.deadlock, "analysis complete");

    render(mode, &report, |r, w| {
        if r.deadlock {
            writeln!(w, "deadlock detected: the wait-for graph contains a cycle")
        } else {
            writeln!(w, "no deadlock: the wait-for graph is acyclic")
        }
    })
}
