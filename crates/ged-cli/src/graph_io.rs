//! Loading and storing record graphs.
//!
//! The on-disk encoding is chosen by file extension: `.json` for JSON,
//! `.yaml` or `.yml` for YAML.

use std::path::Path;

use anyhow::{bail, Context, Result};
use ged_model::Gedcom;

/// On-disk encoding of a record graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Json,
    Yaml,
}

impl GraphFormat {
    /// Pick the encoding from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => bail!(
                "cannot tell the format of {}: expected a .json, .yaml or .yml extension",
                path.display()
            ),
        }
    }
}

/// Read a record graph from disk.
pub fn load_graph(path: &Path) -> Result<Gedcom> {
    let format = GraphFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let gedcom = match format {
        GraphFormat::Json => Gedcom::from_json_str(&text),
        GraphFormat::Yaml => Gedcom::from_yaml_str(&text),
    }
    .with_context(|| format!("failed to decode record graph from {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        records = gedcom.record_count(),
        "loaded record graph"
    );
    Ok(gedcom)
}

/// Write a record graph to disk, replacing any existing file.
pub fn store_graph(gedcom: &Gedcom, path: &Path) -> Result<()> {
    let format = GraphFormat::from_path(path)?;
    let text = match format {
        GraphFormat::Json => gedcom.to_json_string_pretty(),
        GraphFormat::Yaml => gedcom.to_yaml_string(),
    }
    .context("failed to encode record graph")?;
    std::fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote record graph");
    Ok(())
}
