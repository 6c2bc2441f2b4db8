//! CLI subcommands.

pub mod cluster;
pub mod crd;
pub mod single;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use vmgen_core::manifest::ManifestRequest;

/// Read & decode a manifest request from the given YAML file.
pub(crate) fn read_request<S: DeserializeOwned>(path: &Path) -> Result<ManifestRequest<S>> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("error reading request file {:?}", path))?;
    serde_yaml::from_str(&raw).with_context(|| format!("error decoding request file {:?}", path))
}

/// Write the rendered manifest to the given file, or to stdout when no file is given.
pub(crate) fn write_manifest(yaml: &str, out: Option<&PathBuf>) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, yaml).with_context(|| format!("error writing manifest to {:?}", path))?;
            tracing::info!(path = ?path, "manifest written");
        }
        None => print!("{}", yaml),
    }
    Ok(())
}
