//! Input validation applied before a manifest is rendered.
//!
//! The rules here mirror the validation which the Kubernetes API server would apply when
//! the rendered manifest is submitted, so that bad input is rejected at render time
//! instead of at apply time.

use std::collections::BTreeMap;

use anyhow::{bail, ensure, Result};
use lazy_static::lazy_static;
use regex::Regex;

use crate::crd::{VMClusterSpec, VMSingleSpec};
use crate::error::AppError;

/// Maximum length of an object name, namespace, label value or qualified-name suffix.
const MAX_LABEL_LEN: usize = 63;
/// Maximum length of a qualified-name prefix.
const MAX_PREFIX_LEN: usize = 253;

lazy_static! {
    /// Regular expression used to validate object names & namespaces, per DNS-1123 label rules.
    static ref RE_DNS_LABEL: Regex = Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").expect("failed to compile RE_DNS_LABEL regex");
    /// Regular expression used to validate the name part of label & annotation keys.
    static ref RE_QUALIFIED_NAME: Regex = Regex::new(r"^[A-Za-z0-9]([-A-Za-z0-9_.]*[A-Za-z0-9])?$").expect("failed to compile RE_QUALIFIED_NAME regex");
    /// Regular expression used to validate label values.
    static ref RE_LABEL_VALUE: Regex = Regex::new(r"^([A-Za-z0-9]([-A-Za-z0-9_.]*[A-Za-z0-9])?)?$").expect("failed to compile RE_LABEL_VALUE regex");
    /// Regular expression used to validate retention periods, either a number of months or a
    /// value suffixed with `h`, `d`, `w` or `y`.
    static ref RE_RETENTION: Regex = Regex::new(r"^[0-9]+(h|d|w|y)?$").expect("failed to compile RE_RETENTION regex");
}

/// A resource spec which can be statically validated before rendering.
pub trait Validate {
    /// Statically validate this object.
    fn validate(&self) -> Result<()>;
}

/// Validate the given object name per DNS-1123 label rules.
pub fn validate_name(name: &str) -> Result<()> {
    validate_dns_label("name", name)
}

/// Validate the given namespace per DNS-1123 label rules.
pub fn validate_namespace(namespace: &str) -> Result<()> {
    validate_dns_label("namespace", namespace)
}

fn validate_dns_label(field: &str, val: &str) -> Result<()> {
    ensure!(!val.is_empty(), AppError::InvalidInput(format!("{} may not be empty", field)));
    ensure!(
        val.len() <= MAX_LABEL_LEN,
        AppError::InvalidInput(format!("{} `{}` is invalid, may contain a maximum of {} characters", field, val, MAX_LABEL_LEN))
    );
    ensure!(
        RE_DNS_LABEL.is_match(val),
        AppError::InvalidInput(format!("{} `{}` is invalid, must match the pattern `{}`", field, val, RE_DNS_LABEL.as_str()))
    );
    Ok(())
}

/// Validate the given label set, checking both keys and values.
pub fn validate_labels(labels: &BTreeMap<String, String>) -> Result<()> {
    for (key, val) in labels {
        validate_key("label", key)?;
        ensure!(
            val.len() <= MAX_LABEL_LEN && RE_LABEL_VALUE.is_match(val),
            AppError::InvalidInput(format!("value `{}` of label `{}` is invalid, must match the pattern `{}`", val, key, RE_LABEL_VALUE.as_str()))
        );
    }
    Ok(())
}

/// Validate the given annotation set. Only keys are constrained, values are free-form.
pub fn validate_annotations(annotations: &BTreeMap<String, String>) -> Result<()> {
    for key in annotations.keys() {
        validate_key("annotation", key)?;
    }
    Ok(())
}

/// Validate a label or annotation key as a Kubernetes qualified name, which is an
/// optional DNS-1123 subdomain prefix and a name part, separated by `/`.
fn validate_key(field: &str, key: &str) -> Result<()> {
    let (prefix, name) = match key.split_once('/') {
        Some((prefix, name)) => (Some(prefix), name),
        None => (None, key),
    };
    if let Some(prefix) = prefix {
        ensure!(
            !prefix.is_empty() && prefix.len() <= MAX_PREFIX_LEN,
            AppError::InvalidInput(format!("prefix of {} key `{}` may contain a maximum of {} characters", field, key, MAX_PREFIX_LEN))
        );
        for seg in prefix.split('.') {
            if !RE_DNS_LABEL.is_match(seg) {
                bail!(AppError::InvalidInput(format!(
                    "prefix of {} key `{}` is invalid, must be a DNS subdomain",
                    field, key,
                )));
            }
        }
    }
    ensure!(
        !name.is_empty() && name.len() <= MAX_LABEL_LEN,
        AppError::InvalidInput(format!("{} key `{}` may contain a maximum of {} characters after the prefix", field, key, MAX_LABEL_LEN))
    );
    ensure!(
        RE_QUALIFIED_NAME.is_match(name),
        AppError::InvalidInput(format!("{} key `{}` is invalid, must match the pattern `{}`", field, key, RE_QUALIFIED_NAME.as_str()))
    );
    Ok(())
}

/// Validate the given retention period value.
pub fn validate_retention_period(val: &str) -> Result<()> {
    ensure!(
        RE_RETENTION.is_match(val),
        AppError::InvalidInput(format!("retention period `{}` is invalid, must match the pattern `{}`", val, RE_RETENTION.as_str()))
    );
    Ok(())
}

fn validate_replica_count(component: &str, count: i32) -> Result<()> {
    ensure!(
        count > 0,
        AppError::InvalidInput(format!("component `{}` is invalid, must have at least 1 replica", component))
    );
    Ok(())
}

impl Validate for VMClusterSpec {
    fn validate(&self) -> Result<()> {
        validate_retention_period(&self.retention_period)?;
        if let Some(factor) = self.replication_factor {
            ensure!(
                factor > 0,
                AppError::InvalidInput(format!("replication factor `{}` is invalid, must be greater than 0", factor))
            );
        }
        if let Some(vmselect) = &self.vmselect {
            validate_replica_count("vmselect", vmselect.replica_count)?;
        }
        if let Some(vminsert) = &self.vminsert {
            validate_replica_count("vminsert", vminsert.replica_count)?;
        }
        if let Some(vmstorage) = &self.vmstorage {
            validate_replica_count("vmstorage", vmstorage.replica_count)?;
        }
        Ok(())
    }
}

impl Validate for VMSingleSpec {
    fn validate(&self) -> Result<()> {
        validate_retention_period(&self.retention_period)?;
        if let Some(count) = self.replica_count {
            validate_replica_count("vmsingle", count)?;
        }
        Ok(())
    }
}
