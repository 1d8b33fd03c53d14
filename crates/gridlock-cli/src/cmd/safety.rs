//! `gridlock safety` — Banker's-algorithm safety check.


use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use gridlock_core::{BankerState, check_safety};

use crate::output::{OutputMode, render};
use crate::scenario;

#[derive(Args, Debug)]
pub struct SafetyArgs {
    /// Scenario file, or `-` for stdin.
    pub input: String,
}

pub fn run(args: &SafetyArgs, mode: OutputMode) -> Result<()> {
    let text = super::read_input(&args.input)?;
    let s = scenario::parse_safety(&text).context("parse safety scenario")?;
    let state = BankerState::new(s.n, s.m, s.available, s.max_need, s.allocation)
        .context("validate allocation state")?;

    let verdict = check_safety(&state);
    info!(safe = verdict.is_safe(), "analysis complete");

    // An unsafe state is an answer, not a failure: exit 0 either way.
    render(mode, &verdict, |v, w| writeln!(w, "{v}"))
}
