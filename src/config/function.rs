use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::krm::KubeObject;
use crate::krm::resource_list::null_as_default;

use super::policy::{ConfigMapScalePolicy, DeploymentScalePolicy};

/// The function configuration carried in a ResourceList's `functionConfig`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: ConfigMetadata,
    #[serde(rename = "profile", default, deserialize_with = "null_as_default")]
    pub profile_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub config_maps: Vec<ConfigMapScalePolicy>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub deployments: Vec<DeploymentScalePolicy>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigMetadata {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

impl FunctionConfig {
    pub fn decode(object: &KubeObject) -> AppResult<Self> {
        serde_yaml::from_value(object.to_value())
            .map_err(|err| AppError::ConfigDecode(err.to_string()))
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.profile_name.is_empty() {
            return Err(AppError::MissingRequiredField("profile"));
        }

        Ok(())
    }
}
