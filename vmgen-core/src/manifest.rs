//! Manifest rendering.
//!
//! Each operation here takes a caller-supplied request, validates it, stamps the canonical
//! `apiVersion`/`kind` pair for the resource kind onto it & serializes the result to a
//! single YAML document. Rendering is a pure transform: no cluster interaction takes
//! place and nothing is retained across invocations.

use std::collections::BTreeMap;

use anyhow::Result;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Serialize};

use crate::crd::{RequiredMetadata, VMCluster, VMClusterSpec, VMSingle, VMSingleSpec};
use crate::error::AppError;
use crate::validation::{self, Validate};

/// A request to render a manifest for a resource with spec type `S`.
///
/// The `apiVersion` and `kind` of the rendered resource are fixed per operation and may
/// not be supplied here; unknown fields are rejected during decoding.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ManifestRequest<S> {
    /// Object metadata of the rendered resource.
    pub metadata: RequestMetadata,
    /// The spec of the rendered resource.
    pub spec: S,
}

/// The caller-controllable subset of object metadata.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RequestMetadata {
    /// The name of the object. Required & validated per DNS-1123 label rules.
    pub name: String,
    /// The namespace of the object. Required & validated per DNS-1123 label rules.
    pub namespace: String,
    /// Labels to apply to the object.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    /// Annotations to apply to the object.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

impl RequestMetadata {
    /// Statically validate this metadata.
    fn validate(&self) -> Result<()> {
        validation::validate_name(&self.name)?;
        validation::validate_namespace(&self.namespace)?;
        validation::validate_labels(&self.labels)?;
        validation::validate_annotations(&self.annotations)?;
        Ok(())
    }

    fn into_object_meta(self) -> ObjectMeta {
        ObjectMeta {
            name: Some(self.name),
            namespace: Some(self.namespace),
            labels: if self.labels.is_empty() { None } else { Some(self.labels) },
            annotations: if self.annotations.is_empty() { None } else { Some(self.annotations) },
            ..Default::default()
        }
    }
}

/// Render a VMCluster manifest from the given request.
pub fn vmcluster(req: ManifestRequest<VMClusterSpec>) -> Result<String> {
    req.metadata.validate()?;
    req.spec.validate()?;
    let ManifestRequest { metadata, spec } = req;
    let mut obj = VMCluster::new(&metadata.name, spec);
    obj.metadata = metadata.into_object_meta();
    let yaml = render(&obj)?;
    tracing::debug!(namespace = obj.namespace(), name = obj.name(), "rendered VMCluster manifest");
    Ok(yaml)
}

/// Render a VMSingle manifest from the given request.
pub fn vmsingle(req: ManifestRequest<VMSingleSpec>) -> Result<String> {
    req.metadata.validate()?;
    req.spec.validate()?;
    let ManifestRequest { metadata, spec } = req;
    let mut obj = VMSingle::new(&metadata.name, spec);
    obj.metadata = metadata.into_object_meta();
    let yaml = render(&obj)?;
    tracing::debug!(namespace = obj.namespace(), name = obj.name(), "rendered VMSingle manifest");
    Ok(yaml)
}

/// Serialize the given resource object to a YAML document.
fn render<T: Serialize>(obj: &T) -> Result<String> {
    let yaml = serde_yaml::to_string(obj).map_err(AppError::from)?;
    Ok(yaml)
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;
    use serde_yaml::Value;

    fn cluster_request(val: serde_json::Value) -> ManifestRequest<VMClusterSpec> {
        serde_json::from_value(val).expect("failed to decode VMCluster request")
    }

    fn single_request(val: serde_json::Value) -> ManifestRequest<VMSingleSpec> {
        serde_json::from_value(val).expect("failed to decode VMSingle request")
    }

    fn example_cluster_request() -> ManifestRequest<VMClusterSpec> {
        cluster_request(json!({
            "metadata": {"name": "db", "namespace": "monitoring"},
            "spec": {
                "retentionPeriod": "30d",
                "vminsert": {"replicaCount": 2},
                "vmselect": {"replicaCount": 2},
                "vmstorage": {"replicaCount": 3},
            },
        }))
    }

    fn mapping_keys(val: &Value) -> Vec<String> {
        val.as_mapping()
            .expect("expected a YAML mapping")
            .iter()
            .map(|(key, _)| key.as_str().expect("expected a string key").to_string())
            .collect()
    }

    #[test]
    fn cluster_manifest_carries_injected_literals() {
        let yaml = vmcluster(example_cluster_request()).expect("failed to render VMCluster manifest");
        assert!(yaml.contains(&format!("apiVersion: {}", crate::API_GROUP_VERSION)), "unexpected apiVersion in output:\n{}", yaml);
        assert!(yaml.contains("kind: VMCluster"), "unexpected kind in output:\n{}", yaml);
    }

    #[test]
    fn cluster_required_fields_only_renders_minimal_document() {
        let req = cluster_request(json!({
            "metadata": {"name": "db", "namespace": "monitoring"},
            "spec": {"retentionPeriod": "30d"},
        }));
        let yaml = vmcluster(req).expect("failed to render VMCluster manifest");
        let doc: Value = serde_yaml::from_str(&yaml).expect("failed to parse rendered YAML");
        assert_eq!(mapping_keys(&doc["spec"]), vec!["retentionPeriod"]);
    }

    #[test]
    fn single_manifest_carries_injected_literals() {
        let req = single_request(json!({
            "metadata": {"name": "db", "namespace": "monitoring"},
            "spec": {"retentionPeriod": "1"},
        }));
        let yaml = vmsingle(req).expect("failed to render VMSingle manifest");
        assert!(yaml.contains("apiVersion: operator.victoriametrics.com/v1beta1"), "unexpected apiVersion in output:\n{}", yaml);
        assert!(yaml.contains("kind: VMSingle"), "unexpected kind in output:\n{}", yaml);
    }

    #[test]
    fn rendering_is_idempotent() {
        let req = example_cluster_request();
        let first = vmcluster(req.clone()).expect("failed to render VMCluster manifest");
        let second = vmcluster(req).expect("failed to render VMCluster manifest");
        assert_eq!(first, second);
    }

    #[test]
    fn unset_optional_fields_are_omitted() {
        let yaml = vmcluster(example_cluster_request()).expect("failed to render VMCluster manifest");
        let doc: Value = serde_yaml::from_str(&yaml).expect("failed to parse rendered YAML");

        let mut top = mapping_keys(&doc);
        top.sort();
        assert_eq!(top, vec!["apiVersion", "kind", "metadata", "spec"]);

        let mut meta = mapping_keys(&doc["metadata"]);
        meta.sort();
        assert_eq!(meta, vec!["name", "namespace"]);

        let mut spec = mapping_keys(&doc["spec"]);
        spec.sort();
        assert_eq!(spec, vec!["retentionPeriod", "vminsert", "vmselect", "vmstorage"]);

        assert_eq!(mapping_keys(&doc["spec"]["vmstorage"]), vec!["replicaCount"]);
    }

    #[test]
    fn example_scenario_renders_expected_fields() {
        let yaml = vmcluster(example_cluster_request()).expect("failed to render VMCluster manifest");
        let doc: Value = serde_yaml::from_str(&yaml).expect("failed to parse rendered YAML");
        assert_eq!(doc["metadata"]["name"].as_str(), Some("db"));
        assert_eq!(doc["metadata"]["namespace"].as_str(), Some("monitoring"));
        assert_eq!(doc["spec"]["retentionPeriod"].as_str(), Some("30d"));
        assert_eq!(doc["spec"]["vminsert"]["replicaCount"].as_i64(), Some(2));
        assert_eq!(doc["spec"]["vmselect"]["replicaCount"].as_i64(), Some(2));
        assert_eq!(doc["spec"]["vmstorage"]["replicaCount"].as_i64(), Some(3));
    }

    #[test]
    fn snake_case_request_keys_are_accepted() {
        let req = cluster_request(json!({
            "metadata": {"name": "db", "namespace": "monitoring"},
            "spec": {
                "retention_period": "30d",
                "vminsert": {"replica_count": 2},
                "vmselect": {"replica_count": 2},
                "vmstorage": {"replica_count": 3},
            },
        }));
        let yaml = vmcluster(req).expect("failed to render VMCluster manifest");
        let doc: Value = serde_yaml::from_str(&yaml).expect("failed to parse rendered YAML");
        assert_eq!(doc["spec"]["retentionPeriod"].as_str(), Some("30d"));
        assert_eq!(doc["spec"]["vminsert"]["replicaCount"].as_i64(), Some(2));
        assert_eq!(doc["spec"]["vmselect"]["replicaCount"].as_i64(), Some(2));
        assert_eq!(doc["spec"]["vmstorage"]["replicaCount"].as_i64(), Some(3));

        let mut spec = mapping_keys(&doc["spec"]);
        spec.sort();
        assert_eq!(spec, vec!["retentionPeriod", "vminsert", "vmselect", "vmstorage"]);
    }

    #[test]
    fn snake_case_keys_reach_flattened_fields() {
        let req = single_request(json!({
            "metadata": {"name": "db", "namespace": "monitoring"},
            "spec": {
                "retention_period": "4w",
                "replica_count": 1,
                "log_level": "WARN",
                "storage_data_path": "/vm-data",
            },
        }));
        let yaml = vmsingle(req).expect("failed to render VMSingle manifest");
        let doc: Value = serde_yaml::from_str(&yaml).expect("failed to parse rendered YAML");
        assert_eq!(doc["spec"]["retentionPeriod"].as_str(), Some("4w"));
        assert_eq!(doc["spec"]["replicaCount"].as_i64(), Some(1));
        assert_eq!(doc["spec"]["logLevel"].as_str(), Some("WARN"));
        assert_eq!(doc["spec"]["storageDataPath"].as_str(), Some("/vm-data"));
    }

    #[test]
    fn supplied_fields_round_trip() {
        let req = cluster_request(json!({
            "metadata": {
                "name": "db",
                "namespace": "monitoring",
                "labels": {"team": "observability"},
            },
            "spec": {
                "retentionPeriod": "4w",
                "replicationFactor": 2,
                "vmstorage": {
                    "replicaCount": 3,
                    "storageDataPath": "/vm-data",
                    "extraArgs": {"dedup.minScrapeInterval": "30s"},
                },
            },
        }));
        let yaml = vmcluster(req).expect("failed to render VMCluster manifest");
        let doc: Value = serde_yaml::from_str(&yaml).expect("failed to parse rendered YAML");

        let mut meta = mapping_keys(&doc["metadata"]);
        meta.sort();
        assert_eq!(meta, vec!["labels", "name", "namespace"]);
        assert_eq!(doc["metadata"]["labels"]["team"].as_str(), Some("observability"));

        let mut spec = mapping_keys(&doc["spec"]);
        spec.sort();
        assert_eq!(spec, vec!["replicationFactor", "retentionPeriod", "vmstorage"]);

        let mut vmstorage = mapping_keys(&doc["spec"]["vmstorage"]);
        vmstorage.sort();
        assert_eq!(vmstorage, vec!["extraArgs", "replicaCount", "storageDataPath"]);
        assert_eq!(doc["spec"]["vmstorage"]["extraArgs"]["dedup.minScrapeInterval"].as_str(), Some("30s"));
    }

    #[test]
    fn single_minimal_request_renders_minimal_document() {
        let req = single_request(json!({
            "metadata": {"name": "vmsingle", "namespace": "default"},
            "spec": {"retentionPeriod": "1"},
        }));
        let yaml = vmsingle(req).expect("failed to render VMSingle manifest");
        let doc: Value = serde_yaml::from_str(&yaml).expect("failed to parse rendered YAML");
        assert_eq!(mapping_keys(&doc["spec"]), vec!["retentionPeriod"]);
    }

    #[test]
    fn caller_may_not_supply_api_version_or_kind() {
        let res = serde_json::from_value::<ManifestRequest<VMClusterSpec>>(json!({
            "apiVersion": "example.com/v1",
            "kind": "VMCluster",
            "metadata": {"name": "db", "namespace": "monitoring"},
            "spec": {"retentionPeriod": "30d"},
        }));
        assert!(res.is_err());
    }

    #[test]
    fn unknown_metadata_fields_are_rejected() {
        let res = serde_json::from_value::<RequestMetadata>(json!({
            "name": "db",
            "namespace": "monitoring",
            "uid": "not-settable",
        }));
        assert!(res.is_err());
    }

    #[test]
    fn empty_name_is_rejected() {
        let req = cluster_request(json!({
            "metadata": {"name": "", "namespace": "monitoring"},
            "spec": {"retentionPeriod": "30d"},
        }));
        assert!(vmcluster(req).is_err());
    }

    #[test]
    fn bad_label_key_is_rejected() {
        let req = cluster_request(json!({
            "metadata": {
                "name": "db",
                "namespace": "monitoring",
                "labels": {"/bad": "v"},
            },
            "spec": {"retentionPeriod": "30d"},
        }));
        assert!(vmcluster(req).is_err());
    }

    #[test]
    fn log_level_is_a_closed_enumeration() {
        let res = serde_json::from_value::<ManifestRequest<VMSingleSpec>>(json!({
            "metadata": {"name": "db", "namespace": "monitoring"},
            "spec": {"retentionPeriod": "1", "logLevel": "VERBOSE"},
        }));
        assert!(res.is_err());

        let req = single_request(json!({
            "metadata": {"name": "db", "namespace": "monitoring"},
            "spec": {"retentionPeriod": "1", "logLevel": "WARN", "logFormat": "json"},
        }));
        let yaml = vmsingle(req).expect("failed to render VMSingle manifest");
        assert!(yaml.contains("logLevel: WARN"), "unexpected logLevel in output:\n{}", yaml);
        assert!(yaml.contains("logFormat: json"), "unexpected logFormat in output:\n{}", yaml);
    }
}
