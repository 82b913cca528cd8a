use tracing::debug;

use crate::cli::Cli;
use crate::config;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::krm::ResourceList;
use crate::scale;

/// Reads a ResourceList, applies the scale profile and writes the list
/// back. The list is written even when the transform fails, with the
/// failure recorded in its `results`.
pub async fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        fn_config,
        input,
        output,
        json,
        verbose,
    } = cli;

    let ctx = AppContext::bootstrap(fn_config, input, output, json, verbose);

    let raw = ctx.paths.read_input().await?;
    let mut list = ResourceList::parse(&raw)?;
    debug!(items = list.items.len(), "read resource list");

    if let Some(path) = ctx.paths.fn_config() {
        debug!(path = %path.display(), "loading function config from file");
        list.function_config = Some(config::load_function_config(path).await?);
    }

    let outcome = scale::run(&mut list);
    if let Err(err) = &outcome {
        list.push_error(err.to_string());
    }

    let rendered = ctx.output.render(&list)?;
    debug!(mode = ?ctx.output.mode(), bytes = rendered.len(), "writing resource list");
    ctx.paths.write_output(&rendered).await?;

    outcome
}
