use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppError, AppResult};

use super::object::KubeObject;

pub const RESOURCE_LIST_API_VERSION: &str = "config.kubernetes.io/v1";
pub const RESOURCE_LIST_KIND: &str = "ResourceList";

/// The batch exchanged with the pipeline driver: the resources to transform,
/// the function's own configuration, and any results it reports back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceList {
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<KubeObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_config: Option<KubeObject>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub results: Vec<FunctionResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionResult {
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl ResourceList {
    pub fn new(items: Vec<KubeObject>, function_config: Option<KubeObject>) -> Self {
        Self {
            api_version: RESOURCE_LIST_API_VERSION.to_string(),
            kind: RESOURCE_LIST_KIND.to_string(),
            items,
            function_config,
            results: Vec::new(),
        }
    }

    /// Parses a ResourceList from YAML or JSON.
    pub fn parse(raw: &str) -> AppResult<Self> {
        if raw.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "empty input; expected a ResourceList".to_string(),
            ));
        }

        let list: ResourceList = serde_yaml::from_str(raw)?;
        if list.kind != RESOURCE_LIST_KIND {
            return Err(AppError::InvalidInput(format!(
                "expected kind {RESOURCE_LIST_KIND:?}, found {:?}",
                list.kind
            )));
        }

        Ok(list)
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.results.push(FunctionResult {
            message: message.into(),
            severity: Severity::Error,
        });
    }
}

fn default_api_version() -> String {
    RESOURCE_LIST_API_VERSION.to_string()
}

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
