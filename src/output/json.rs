use crate::error::AppResult;
use crate::krm::ResourceList;

pub fn render(list: &ResourceList) -> AppResult<String> {
    let mut payload = serde_json::to_string_pretty(list)?;
    payload.push('\n');
    Ok(payload)
}
