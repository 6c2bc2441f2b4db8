//! VictoriaMetrics operator CRDs.
//!
//! References:
//! - https://kubernetes.io/docs/tasks/extend-kubernetes/custom-resources/custom-resource-definitions/
//! - https://docs.victoriametrics.com/operator/api/

mod common;
mod vmcluster;
mod vmsingle;

use kube::Resource;

pub use common::{
    CommonDeploymentParams, EmbeddedObjectMetadata, EmbeddedPersistentVolumeClaim, EmptyDir, EnvVar, HTTPGetAction, Image, InsertPorts,
    LocalObjectReference, LogFormat, LogLevel, PersistentVolumeClaimSpec, Probe, ResourceRequirements, SecretKeySelector, StorageSpec,
    UpdateStatus, VMBackup,
};
pub use vmcluster::{VMCluster, VMClusterSpec, VMClusterStatus, VMInsertSpec, VMSelectSpec, VMStorageSpec};
pub use vmsingle::{VMSingle, VMSingleSpec, VMSingleStatus};

/// A convenience trait built around the fact that all implementors
/// must have the following attributes.
pub trait RequiredMetadata {
    /// The namespace of this object.
    fn namespace(&self) -> &str;

    /// The name of this object.
    fn name(&self) -> &str;
}

impl RequiredMetadata for VMCluster {
    fn namespace(&self) -> &str {
        self.meta().namespace.as_deref().unwrap_or_default()
    }

    fn name(&self) -> &str {
        self.meta().name.as_deref().unwrap_or_default()
    }
}

impl RequiredMetadata for VMSingle {
    fn namespace(&self) -> &str {
        self.meta().namespace.as_deref().unwrap_or_default()
    }

    fn name(&self) -> &str {
        self.meta().name.as_deref().unwrap_or_default()
    }
}
