use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use crate::krm::resource_list::null_as_default;

/// Copies the density-specific variant of `key` onto `key` in the named
/// ConfigMap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigMapScalePolicy {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,
}

impl ConfigMapScalePolicy {
    pub fn scaled_key(&self, site_density: &str) -> String {
        format!("{}-{}", self.key, site_density)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentScalePolicy {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub low_density: PodScalePolicy,
    #[serde(default, deserialize_with = "null_as_default")]
    pub medium_density: PodScalePolicy,
    #[serde(default, deserialize_with = "null_as_default")]
    pub high_density: PodScalePolicy,
}

impl DeploymentScalePolicy {
    pub fn for_density(&self, site_density: &str) -> Option<&PodScalePolicy> {
        match site_density {
            "low" => Some(&self.low_density),
            "medium" => Some(&self.medium_density),
            "high" => Some(&self.high_density),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PodScalePolicy {
    #[serde(default, deserialize_with = "null_as_default")]
    pub replicas: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub containers: Vec<ContainerScalePolicy>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContainerScalePolicy {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resources: ResourceRequirements,
}

/// Container compute requests and limits, keyed by resource name
/// (`cpu`, `memory`, ...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResourceRequirements {
    #[serde(default, deserialize_with = "null_as_default")]
    pub limits: BTreeMap<String, Quantity>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub requests: BTreeMap<String, Quantity>,
}

/// A resource quantity as written in the config, e.g. `500m`, `1Gi` or `2`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Text(String),
    Number(serde_yaml::Number),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Text(value) => f.write_str(value),
            Quantity::Number(value) => write!(f, "{value}"),
        }
    }
}
