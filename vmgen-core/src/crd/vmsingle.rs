//! VMSingle CRD.
//!
//! The code here is used to generate the actual CRD used in K8s. See examples/crd.rs.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::crd::common::{
    CommonDeploymentParams, EmbeddedObjectMetadata, InsertPorts, PersistentVolumeClaimSpec, UpdateStatus, VMBackup,
};

pub type VMSingle = VMSingleCRD; // Mostly to resolve a Rust Analyzer issue.

/// CRD spec for the VMSingle resource.
///
/// A VMSingle describes a single-node VictoriaMetrics installation: one deployment which
/// ingests, stores and serves samples on its own.
///
/// Multi-word fields accept their snake_case name on input; output is always camelCase.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, CustomResource, JsonSchema)]
#[kube(
    struct = "VMSingleCRD",
    status = "VMSingleStatus",
    group = "operator.victoriametrics.com",
    version = "v1beta1",
    kind = "VMSingle",
    namespaced,
    derive = "PartialEq",
    apiextensions = "v1",
    shortname = "vmsingle",
    printcolumn = r#"{"name":"Retention","type":"string","jsonPath":".spec.retentionPeriod"}"#,
    printcolumn = r#"{"name":"Status","type":"string","jsonPath":".status.singleStatus"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct VMSingleSpec {
    /// The period for which ingested samples are retained, either a number of months or a
    /// value with an `h`, `d`, `w` or `y` suffix.
    #[serde(alias = "retention_period")]
    pub retention_period: String,
    /// The number of pods of the backing deployment. Values above 1 are only useful
    /// with a shared storage backend.
    #[serde(default, alias = "replica_count", skip_serializing_if = "Option::is_none")]
    pub replica_count: Option<i32>,
    /// The directory under which samples are stored.
    #[serde(default, alias = "storage_data_path", skip_serializing_if = "Option::is_none")]
    pub storage_data_path: Option<String>,
    /// The PVC spec used to provision the data volume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<PersistentVolumeClaimSpec>,
    /// Metadata propagated onto the generated data PVC.
    #[serde(default, alias = "storage_metadata", skip_serializing_if = "Option::is_none")]
    pub storage_metadata: Option<EmbeddedObjectMetadata>,
    /// Delete the generated data PVC together with the VMSingle object.
    #[serde(default, alias = "remove_pvc_after_delete", skip_serializing_if = "Option::is_none")]
    pub remove_pvc_after_delete: Option<bool>,
    /// Ports on which ingestion protocols other than the native one are served.
    #[serde(default, alias = "insert_ports", skip_serializing_if = "Option::is_none")]
    pub insert_ports: Option<InsertPorts>,
    /// Backup sidecar configuration.
    #[serde(default, alias = "vm_backup", skip_serializing_if = "Option::is_none")]
    pub vm_backup: Option<VMBackup>,
    #[serde(flatten)]
    pub common: CommonDeploymentParams,
}

/// CRD status object.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VMSingleStatus {
    /// Rollout state of the backing deployment.
    #[serde(default, alias = "single_status", skip_serializing_if = "Option::is_none")]
    pub single_status: Option<UpdateStatus>,
    /// Human-readable detail for the current status, populated on failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
