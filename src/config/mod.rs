pub mod function;
pub mod paths;
pub mod policy;

use std::path::Path;

pub use function::FunctionConfig;
pub use paths::AppPaths;
pub use policy::{ConfigMapScalePolicy, DeploymentScalePolicy};

use crate::error::AppResult;
use crate::krm::KubeObject;

/// Loads a function config document from disk; it replaces whatever
/// `functionConfig` the ResourceList carried.
pub async fn load_function_config(path: &Path) -> AppResult<KubeObject> {
    let raw = tokio::fs::read_to_string(path).await?;
    KubeObject::from_yaml(&raw)
}
