pub mod json;
pub mod yaml;

use crate::error::AppResult;
use crate::krm::ResourceList;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Yaml,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Yaml
        };
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn render(&self, list: &ResourceList) -> AppResult<String> {
        match self.mode {
            OutputMode::Yaml => yaml::render(list),
            OutputMode::Json => json::render(list),
        }
    }
}
