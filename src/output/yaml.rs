use crate::error::AppResult;
use crate::krm::ResourceList;

pub fn render(list: &ResourceList) -> AppResult<String> {
    Ok(serde_yaml::to_string(list)?)
}
