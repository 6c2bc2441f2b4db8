//! A script used to generate the CRDs used by this project.
//!
//! Any time a CRD spec changes, this script can be run to ensure that the CRDs are up-to-date and
//! ready to be synced with the cluster.

use anyhow::{Context, Result};
use kube::CustomResourceExt;
use vmgen_core::crd::{VMCluster, VMSingle};

fn main() -> Result<()> {
    let crds_path = std::path::Path::new("k8s").join("crds");
    std::fs::create_dir_all(&crds_path).with_context(|| format!("error creating CRD output dir {:?}", &crds_path))?;

    let vmcluster = VMCluster::crd();
    let vmcluster_yaml = serde_yaml::to_string(&vmcluster).context("error serializing VMCluster CRD to yaml")?;
    std::fs::write(crds_path.join("vmcluster.yaml"), &vmcluster_yaml).with_context(|| format!("error writing VMCluster CRD to {:?}", &crds_path))?;
    println!("VMCluster CRD written to {:?}", &crds_path);

    let vmsingle = VMSingle::crd();
    let vmsingle_yaml = serde_yaml::to_string(&vmsingle).context("error serializing VMSingle CRD to yaml")?;
    std::fs::write(crds_path.join("vmsingle.yaml"), &vmsingle_yaml).with_context(|| format!("error writing VMSingle CRD to {:?}", &crds_path))?;
    println!("VMSingle CRD written to {:?}", &crds_path);

    Ok(())
}
