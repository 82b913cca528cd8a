pub mod app;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod krm;
pub mod output;
pub mod scale;

use cli::Cli;
use error::AppResult;

pub async fn run(cli: Cli) -> AppResult<()> {
    app::run(cli).await
}
