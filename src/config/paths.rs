use std::path::{Path, PathBuf};

use tokio::io::{AsyncReadExt, AsyncWriteExt};

use crate::error::AppResult;

/// Where the ResourceList comes from and goes to. `None` means the standard
/// stream.
#[derive(Debug, Clone, Default)]
pub struct AppPaths {
    fn_config: Option<PathBuf>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl AppPaths {
    pub fn new(
        fn_config: Option<PathBuf>,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Self {
        Self {
            fn_config,
            input,
            output,
        }
    }

    pub fn fn_config(&self) -> Option<&Path> {
        self.fn_config.as_deref()
    }

    pub fn input(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub async fn read_input(&self) -> AppResult<String> {
        if let Some(path) = self.input() {
            return Ok(tokio::fs::read_to_string(path).await?);
        }

        let mut raw = String::new();
        tokio::io::stdin().read_to_string(&mut raw).await?;
        Ok(raw)
    }

    pub async fn write_output(&self, payload: &str) -> AppResult<()> {
        if let Some(path) = self.output() {
            tokio::fs::write(path, payload).await?;
            return Ok(());
        }

        let mut stdout = tokio::io::stdout();
        stdout.write_all(payload.as_bytes()).await?;
        stdout.flush().await?;
        Ok(())
    }
}
