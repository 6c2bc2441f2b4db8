//! CRD schema generation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use kube::CustomResourceExt;
use structopt::StructOpt;

use vmgen_core::crd::{VMCluster, VMSingle};

/// Emit the VictoriaMetrics CRD schemas.
#[derive(StructOpt)]
#[structopt(name = "crd")]
pub struct Crd {
    /// Write the schemas into the given directory instead of stdout.
    #[structopt(short, long)]
    dir: Option<PathBuf>,
}

impl Crd {
    pub fn run(&self) -> Result<()> {
        let vmcluster = serde_yaml::to_string(&VMCluster::crd()).context("error serializing VMCluster CRD to yaml")?;
        let vmsingle = serde_yaml::to_string(&VMSingle::crd()).context("error serializing VMSingle CRD to yaml")?;
        match &self.dir {
            Some(dir) => {
                std::fs::create_dir_all(dir).with_context(|| format!("error creating CRD output dir {:?}", dir))?;
                std::fs::write(dir.join("vmcluster.yaml"), &vmcluster).with_context(|| format!("error writing VMCluster CRD to {:?}", dir))?;
                std::fs::write(dir.join("vmsingle.yaml"), &vmsingle).with_context(|| format!("error writing VMSingle CRD to {:?}", dir))?;
                tracing::info!(dir = ?dir, "CRD schemas written");
            }
            None => {
                print!("{}", vmcluster);
                print!("{}", vmsingle);
            }
        }
        Ok(())
    }
}
