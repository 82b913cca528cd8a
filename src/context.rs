use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::config::AppPaths;
use crate::output::Output;

#[derive(Debug)]
pub struct AppContext {
    pub paths: AppPaths,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(
        fn_config: Option<PathBuf>,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        json: bool,
        verbose: u8,
    ) -> Self {
        init_tracing(verbose);

        Self {
            paths: AppPaths::new(fn_config, input, output),
            output: Output::new(json),
        }
    }
}

/// Logs go to stderr; stdout carries the ResourceList. `RUST_LOG` takes
/// precedence over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("apply_scale_profile={level}")));

    // A global subscriber may already be set when `run` is called more than
    // once in the same process, as the integration tests do.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
