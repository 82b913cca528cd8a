use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not parse function config: {0}")]
    ConfigDecode(String),
    #[error("{0} is required in function config")]
    MissingRequiredField(&'static str),
    #[error("could not find {group}/{version} ClusterScaleProfile named {name:?}")]
    ProfileNotFound {
        group: &'static str,
        version: &'static str,
        name: String,
    },
    #[error("ConfigMap {0:?} not found in resource list")]
    ConfigMapNotFound(String),
    #[error("key {key:?} not found in ConfigMap {config_map:?}")]
    ScaledKeyNotFound { key: String, config_map: String },
    #[error("malformed field {field:?} on {object}: {reason}")]
    MalformedField {
        object: String,
        field: String,
        reason: String,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub(crate) fn malformed(object: &str, fields: &[&str], reason: impl Into<String>) -> Self {
        AppError::MalformedField {
            object: object.to_string(),
            field: fields.join("."),
            reason: reason.into(),
        }
    }
}
