//! VMSingle manifest rendering.

use std::path::PathBuf;

use anyhow::Result;
use structopt::StructOpt;

use vmgen_core::crd::VMSingleSpec;
use vmgen_core::manifest;

/// Render a VMSingle manifest.
#[derive(StructOpt)]
#[structopt(name = "single")]
pub struct Single {
    /// The YAML request file holding the metadata & spec to render.
    #[structopt(short, long)]
    file: PathBuf,
    /// Write the manifest to the given file instead of stdout.
    #[structopt(short, long)]
    out: Option<PathBuf>,
}

impl Single {
    pub fn run(&self) -> Result<()> {
        let req = super::read_request::<VMSingleSpec>(&self.file)?;
        let yaml = manifest::vmsingle(req)?;
        super::write_manifest(&yaml, self.out.as_ref())
    }
}
