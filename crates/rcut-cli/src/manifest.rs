//! Cut manifest output.

use std::fs;
use std::path::Path;

use anyhow::Context;

use rcut_models::RoughCut;

/// Write the cut manifest as pretty-printed JSON.
pub fn write_manifest(path: &Path, cut: &RoughCut) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(cut).context("Failed to serialize cut manifest")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write manifest to {}", path.display()))?;
    Ok(())
}
