use anyhow::{Context, Result};
use planner_core::{normalize, NormalizationMode};
use std::io::Read;
use std::path::Path;

use crate::output::print_json;

/// Normalize saved model output offline. Reads stdin when no file is given.
pub fn run(mode: NormalizationMode, file: Option<&Path>) -> Result<()> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    print_json(&normalize(&raw, mode))
}
