//! Embedded types shared across the VictoriaMetrics CRDs.
//!
//! The upstream operator repeats these shapes on every deployable component, so they live
//! here once and the per-kind spec files compose them.
//!
//! Every multi-word field carries a snake_case alias so request files may use either
//! casing; rendered output is always camelCase.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Docker image settings for a component.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// The image repository, without a tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    /// The image tag to deploy. Normally this should not be set, and the operator's
    /// default for the component is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// The pull policy for the image, one of `Always`, `Never` or `IfNotPresent`.
    #[serde(default, alias = "pull_policy", skip_serializing_if = "Option::is_none")]
    pub pull_policy: Option<String>,
}

/// Compute resource requirements of a container.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRequirements {
    /// The maximum amount of compute resources allowed, keyed by resource name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub limits: BTreeMap<String, String>,
    /// The minimum amount of compute resources required, keyed by resource name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub requests: BTreeMap<String, String>,
}

/// An environment variable set on a component's containers.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvVar {
    /// The name of the environment variable.
    pub name: String,
    /// The literal value of the environment variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// An HTTP probe request.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HTTPGetAction {
    /// The path to probe on the HTTP server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// The port to probe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// The scheme to connect with, `HTTP` or `HTTPS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
}

/// A health probe applied to a component's containers.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Probe {
    /// The HTTP request to perform for this probe.
    #[serde(default, alias = "http_get", skip_serializing_if = "Option::is_none")]
    pub http_get: Option<HTTPGetAction>,
    /// Seconds to wait after container start before the first probe.
    #[serde(default, alias = "initial_delay_seconds", skip_serializing_if = "Option::is_none")]
    pub initial_delay_seconds: Option<i32>,
    /// Seconds between consecutive probes.
    #[serde(default, alias = "period_seconds", skip_serializing_if = "Option::is_none")]
    pub period_seconds: Option<i32>,
    /// Seconds after which the probe times out.
    #[serde(default, alias = "timeout_seconds", skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<i32>,
    /// Minimum consecutive successes for the probe to be considered successful.
    #[serde(default, alias = "success_threshold", skip_serializing_if = "Option::is_none")]
    pub success_threshold: Option<i32>,
    /// Failures after which the probe is considered failed.
    #[serde(default, alias = "failure_threshold", skip_serializing_if = "Option::is_none")]
    pub failure_threshold: Option<i32>,
}

/// An emptyDir volume source.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmptyDir {
    /// The storage medium backing the volume. Leave unset to use the node's default medium.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    /// The total amount of local storage required by the volume.
    #[serde(default, alias = "size_limit", skip_serializing_if = "Option::is_none")]
    pub size_limit: Option<String>,
}

/// Metadata which may be set on an embedded object such as a PVC template.
///
/// This intentionally carries only the subset of object metadata which the operator
/// propagates onto generated objects.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedObjectMetadata {
    /// The name of the embedded object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Labels to apply to the embedded object.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    /// Annotations to apply to the embedded object.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

/// The spec of a persistent volume claim.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersistentVolumeClaimSpec {
    /// The desired access modes of the volume, e.g. `ReadWriteOnce`.
    #[serde(default, alias = "access_modes", skip_serializing_if = "Vec::is_empty")]
    pub access_modes: Vec<String>,
    /// The minimum resources the volume should have.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    /// The storage class required by the claim.
    #[serde(default, alias = "storage_class_name", skip_serializing_if = "Option::is_none")]
    pub storage_class_name: Option<String>,
    /// A binding reference to a specific persistent volume.
    #[serde(default, alias = "volume_name", skip_serializing_if = "Option::is_none")]
    pub volume_name: Option<String>,
}

/// A persistent volume claim template embedded in a storage spec.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedPersistentVolumeClaim {
    /// Metadata propagated onto the generated PVC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<EmbeddedObjectMetadata>,
    /// The desired characteristics of the volume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<PersistentVolumeClaimSpec>,
}

/// The storage configuration of a stateful component.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StorageSpec {
    /// Disable the default sub-path mounting behavior of the generated StatefulSet volumes.
    #[serde(default, alias = "disable_mount_sub_path", skip_serializing_if = "Option::is_none")]
    pub disable_mount_sub_path: Option<bool>,
    /// Use an emptyDir volume instead of a PVC. Data will not survive pod rescheduling.
    #[serde(default, alias = "empty_dir", skip_serializing_if = "Option::is_none")]
    pub empty_dir: Option<EmptyDir>,
    /// A PVC template used to provision per-replica volumes.
    #[serde(default, alias = "volume_claim_template", skip_serializing_if = "Option::is_none")]
    pub volume_claim_template: Option<EmbeddedPersistentVolumeClaim>,
}

/// A reference to a key of a secret in the same namespace.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecretKeySelector {
    /// The name of the secret.
    pub name: String,
    /// The key of the secret to select.
    pub key: String,
}

/// A reference to an object in the same namespace.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalObjectReference {
    /// The name of the referenced object.
    pub name: String,
}

/// The ports on which ingestion protocols other than the native one are served.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertPorts {
    /// The port for Graphite plaintext protocol ingestion.
    #[serde(default, alias = "graphite_port", skip_serializing_if = "Option::is_none")]
    pub graphite_port: Option<i32>,
    /// The port for InfluxDB line protocol ingestion.
    #[serde(default, alias = "influx_port", skip_serializing_if = "Option::is_none")]
    pub influx_port: Option<i32>,
    /// The port for OpenTSDB HTTP ingestion.
    #[serde(default, rename = "openTSDBHTTPPort", alias = "open_tsdb_http_port", skip_serializing_if = "Option::is_none")]
    pub open_tsdb_http_port: Option<i32>,
    /// The port for OpenTSDB telnet ingestion.
    #[serde(default, rename = "openTSDBPort", alias = "open_tsdb_port", skip_serializing_if = "Option::is_none")]
    pub open_tsdb_port: Option<i32>,
}

/// The logging verbosity of a component.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Info => "INFO",
                Self::Warn => "WARN",
                Self::Error => "ERROR",
                Self::Fatal => "FATAL",
                Self::Panic => "PANIC",
            }
        )
    }
}

/// The logging output format of a component.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Plaintext log lines.
    Default,
    /// One JSON object per log line.
    Json,
}

/// Backup sidecar configuration for a stateful component.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VMBackup {
    /// Accept the enterprise license agreement required by the vmbackupmanager binary.
    #[serde(default, rename = "acceptEULA", alias = "accept_eula")]
    pub accept_eula: bool,
    /// The remote storage location to back up to, e.g. `s3://bucket/path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// A custom S3-compatible endpoint to use instead of AWS.
    #[serde(default, rename = "customS3Endpoint", alias = "custom_s3_endpoint", skip_serializing_if = "Option::is_none")]
    pub custom_s3_endpoint: Option<String>,
    /// Disable hourly backup runs.
    #[serde(default, alias = "disable_hourly", skip_serializing_if = "Option::is_none")]
    pub disable_hourly: Option<bool>,
    /// Disable daily backup runs.
    #[serde(default, alias = "disable_daily", skip_serializing_if = "Option::is_none")]
    pub disable_daily: Option<bool>,
    /// Disable weekly backup runs.
    #[serde(default, alias = "disable_weekly", skip_serializing_if = "Option::is_none")]
    pub disable_weekly: Option<bool>,
    /// Disable monthly backup runs.
    #[serde(default, alias = "disable_monthly", skip_serializing_if = "Option::is_none")]
    pub disable_monthly: Option<bool>,
    /// The number of concurrent upload workers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<i32>,
    /// A secret holding the remote storage credentials file.
    #[serde(default, alias = "credentials_secret", skip_serializing_if = "Option::is_none")]
    pub credentials_secret: Option<SecretKeySelector>,
    /// Force an exact image to be used for the backup sidecar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// Compute resources of the backup sidecar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    /// Extra command line arguments passed to the backup sidecar.
    #[serde(default, alias = "extra_args", skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_args: BTreeMap<String, String>,
    /// Extra environment variables set on the backup sidecar.
    #[serde(default, alias = "extra_envs", skip_serializing_if = "Vec::is_empty")]
    pub extra_envs: Vec<EnvVar>,
}

/// Deployment parameters shared by every VictoriaMetrics component.
///
/// These fields are flattened into each component's spec so the rendered YAML matches the
/// upstream CRD layout exactly.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommonDeploymentParams {
    /// The container image of the component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// The listen port of the component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    /// The logging verbosity of the component.
    #[serde(default, alias = "log_level", skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
    /// The logging output format of the component.
    #[serde(default, alias = "log_format", skip_serializing_if = "Option::is_none")]
    pub log_format: Option<LogFormat>,
    /// Compute resources of the component's containers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    /// Extra command line arguments, keyed by flag name without the leading dash.
    #[serde(default, alias = "extra_args", skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_args: BTreeMap<String, String>,
    /// Extra environment variables set on the component's containers.
    #[serde(default, alias = "extra_envs", skip_serializing_if = "Vec::is_empty")]
    pub extra_envs: Vec<EnvVar>,
    /// Names of secrets mounted into the component's pods under `/etc/vm/secrets`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secrets: Vec<String>,
    /// Names of config maps mounted into the component's pods under `/etc/vm/configs`.
    #[serde(default, alias = "config_maps", skip_serializing_if = "Vec::is_empty")]
    pub config_maps: Vec<String>,
    /// Node labels required for pod scheduling.
    #[serde(default, alias = "node_selector", skip_serializing_if = "BTreeMap::is_empty")]
    pub node_selector: BTreeMap<String, String>,
    /// The priority class assigned to the component's pods.
    #[serde(default, alias = "priority_class_name", skip_serializing_if = "Option::is_none")]
    pub priority_class_name: Option<String>,
    /// The scheduler used to place the component's pods.
    #[serde(default, alias = "scheduler_name", skip_serializing_if = "Option::is_none")]
    pub scheduler_name: Option<String>,
    /// The runtime class assigned to the component's pods.
    #[serde(default, alias = "runtime_class_name", skip_serializing_if = "Option::is_none")]
    pub runtime_class_name: Option<String>,
    /// Seconds the pod is given to terminate gracefully.
    #[serde(default, alias = "termination_grace_period_seconds", skip_serializing_if = "Option::is_none")]
    pub termination_grace_period_seconds: Option<i64>,
    /// Liveness probe override for the component's containers.
    #[serde(default, alias = "liveness_probe", skip_serializing_if = "Option::is_none")]
    pub liveness_probe: Option<Probe>,
    /// Readiness probe override for the component's containers.
    #[serde(default, alias = "readiness_probe", skip_serializing_if = "Option::is_none")]
    pub readiness_probe: Option<Probe>,
    /// Startup probe override for the component's containers.
    #[serde(default, alias = "startup_probe", skip_serializing_if = "Option::is_none")]
    pub startup_probe: Option<Probe>,
}

/// Rollout state reported by the operator on a resource's status.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum UpdateStatus {
    /// The operator is creating or scaling the resource's workloads.
    Expanding,
    /// All workloads are running and ready.
    Operational,
    /// The last reconciliation failed.
    Failed,
    /// Reconciliation is paused.
    Paused,
}
