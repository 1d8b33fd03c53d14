//! Subcommand handlers, one module per command.

pub mod deadlock;
pub mod graph;
pub mod safety;

use std::fs;
use std::io::Read;

use anyhow::{Context, Result};

/// Read a scenario from a path, or from stdin when the path is `-`.
pub fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("read scenario from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).with_context(|| format!("read scenario file '{path}'"))
    }
}
