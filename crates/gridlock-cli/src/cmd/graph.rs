//! `gridlock graph` — emit the wait-for graph presentation structure.


use anyhow::{Context, Result};
use clap::Args;

use gridlock_core::{GraphData, WaitRelation};

use crate::output::{OutputMode, render};
use crate::scenario;

#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Scenario file, or `-` for stdin.
    pub input: String,
}

pub fn run(args: &GraphArgs, mode: OutputMode) -> Result<()> {
    let text = super::read_input(&args.input)?;
    let scenario = scenario::parse_deadlock(&text).context("parse deadlock scenario")?;
    let relation = WaitRelation::from_rows(scenario.rows).context("build wait-for relation")?;
    let data = GraphData::from_relation(&relation);

    render(mode, &data, |d, w| {
        writeln!(
            w,
            "{} processes, {} wait edges",
            d.nodes.len(),
            d.edges.len()
        )?;
        for edge in &d.edges {
            writeln!(w, "{} → {}", edge.source, edge.target)?;
        }
        Ok(())
    })
}
