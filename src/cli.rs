use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "apply-scale-profile",
    version,
    about = "KRM function that applies a ClusterScaleProfile to ConfigMaps"
)]
pub struct Cli {
    #[arg(help = "Function config file; replaces the ResourceList functionConfig")]
    pub fn_config: Option<PathBuf>,
    #[arg(short, long, help = "Read the ResourceList from a file instead of stdin")]
    pub input: Option<PathBuf>,
    #[arg(short, long, help = "Write the ResourceList to a file instead of stdout")]
    pub output: Option<PathBuf>,
    #[arg(long, help = "Emit the ResourceList as JSON")]
    pub json: bool,
    #[arg(short = 'v', long, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
}
