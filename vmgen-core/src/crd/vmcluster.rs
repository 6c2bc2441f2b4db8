//! VMCluster CRD.
//!
//! The code here is used to generate the actual CRD used in K8s. See examples/crd.rs.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::crd::common::{
    CommonDeploymentParams, InsertPorts, LocalObjectReference, StorageSpec, UpdateStatus, VMBackup,
};

pub type VMCluster = VMClusterCRD; // Mostly to resolve a Rust Analyzer issue.

/// CRD spec for the VMCluster resource.
///
/// A VMCluster describes a sharded VictoriaMetrics installation composed of the `vmstorage`,
/// `vmselect` and `vminsert` components, each deployed and scaled independently.
///
/// Multi-word fields accept their snake_case name on input; output is always camelCase.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, CustomResource, JsonSchema)]
#[kube(
    struct = "VMClusterCRD",
    status = "VMClusterStatus",
    group = "operator.victoriametrics.com",
    version = "v1beta1",
    kind = "VMCluster",
    namespaced,
    derive = "PartialEq",
    apiextensions = "v1",
    shortname = "vmcluster",
    printcolumn = r#"{"name":"Retention","type":"string","jsonPath":".spec.retentionPeriod"}"#,
    printcolumn = r#"{"name":"Replication Factor","type":"number","jsonPath":".spec.replicationFactor"}"#,
    printcolumn = r#"{"name":"Status","type":"string","jsonPath":".status.clusterStatus"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct VMClusterSpec {
    /// The period for which ingested samples are retained, either a number of months or a
    /// value with an `h`, `d`, `w` or `y` suffix.
    #[serde(alias = "retention_period")]
    pub retention_period: String,
    /// The number of vmstorage replicas each ingested sample is written to.
    #[serde(default, alias = "replication_factor", skip_serializing_if = "Option::is_none")]
    pub replication_factor: Option<i32>,
    /// Force an exact VictoriaMetrics version for every component of the cluster.
    ///
    /// Normally this should not be set, and the operator will pick the most recent
    /// compatible version on its own.
    #[serde(default, alias = "cluster_version", skip_serializing_if = "Option::is_none")]
    pub cluster_version: Option<String>,
    /// The service account under which the cluster's pods run.
    #[serde(default, alias = "service_account_name", skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,
    /// Secrets used for pulling component images from private registries.
    #[serde(default, alias = "image_pull_secrets", skip_serializing_if = "Vec::is_empty")]
    pub image_pull_secrets: Vec<LocalObjectReference>,
    /// Suspend reconciliation of this cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
    /// Apply the operator's strict pod security defaults to every component.
    #[serde(default, alias = "use_strict_security", skip_serializing_if = "Option::is_none")]
    pub use_strict_security: Option<bool>,
    /// The query frontend tier of the cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vmselect: Option<VMSelectSpec>,
    /// The ingestion tier of the cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vminsert: Option<VMInsertSpec>,
    /// The storage tier of the cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vmstorage: Option<VMStorageSpec>,
}

/// CRD status object.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VMClusterStatus {
    /// Aggregated rollout state of the cluster's components.
    #[serde(default, alias = "cluster_status", skip_serializing_if = "Option::is_none")]
    pub cluster_status: Option<UpdateStatus>,
    /// Human-readable detail for the current status, populated on failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// The vmselect tier of a VMCluster.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VMSelectSpec {
    /// The number of vmselect pods, which directly corresponds to the number of pods
    /// in the backing StatefulSet.
    #[serde(alias = "replica_count")]
    pub replica_count: i32,
    /// The mount path of the rollup result cache.
    #[serde(default, alias = "cache_mount_path", skip_serializing_if = "Option::is_none")]
    pub cache_mount_path: Option<String>,
    /// Storage backing the rollup result cache.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageSpec>,
    #[serde(flatten)]
    pub common: CommonDeploymentParams,
}

/// The vminsert tier of a VMCluster.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VMInsertSpec {
    /// The number of vminsert pods.
    #[serde(alias = "replica_count")]
    pub replica_count: i32,
    /// Ports on which ingestion protocols other than the native one are served.
    #[serde(default, alias = "insert_ports", skip_serializing_if = "Option::is_none")]
    pub insert_ports: Option<InsertPorts>,
    #[serde(flatten)]
    pub common: CommonDeploymentParams,
}

/// The vmstorage tier of a VMCluster.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VMStorageSpec {
    /// The number of vmstorage pods. Scaling this down loses the data held on the
    /// removed replicas. Use with care.
    #[serde(alias = "replica_count")]
    pub replica_count: i32,
    /// The directory under which vmstorage keeps its data.
    #[serde(default, alias = "storage_data_path", skip_serializing_if = "Option::is_none")]
    pub storage_data_path: Option<String>,
    /// Storage for the vmstorage data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageSpec>,
    /// Backup sidecar configuration for vmstorage.
    #[serde(default, alias = "vm_backup", skip_serializing_if = "Option::is_none")]
    pub vm_backup: Option<VMBackup>,
    #[serde(flatten)]
    pub common: CommonDeploymentParams,
}
