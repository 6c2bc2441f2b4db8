//! VMCluster manifest rendering.

use std::path::PathBuf;

use anyhow::Result;
use structopt::StructOpt;

use vmgen_core::crd::VMClusterSpec;
use vmgen_core::manifest;

/// Render a VMCluster manifest.
#[derive(StructOpt)]
#[structopt(name = "cluster")]
pub struct Cluster {
    /// The YAML request file holding the metadata & spec to render.
    #[structopt(short, long)]
    file: PathBuf,
    /// Write the manifest to the given file instead of stdout.
    #[structopt(short, long)]
    out: Option<PathBuf>,
}

impl Cluster {
    pub fn run(&self) -> Result<()> {
        let req = super::read_request::<VMClusterSpec>(&self.file)?;
        let yaml = manifest::vmcluster(req)?;
        super::write_manifest(&yaml, self.out.as_ref())
    }
}
