use clap::Parser;
use std::path::PathBuf;

/// User-specified command line parameters.
#[derive(Debug, Parser)]
#[clap(name = "bunnymark", about, version)]
pub struct Args {
    /// Engine version tag to benchmark (e.g. "v6.2.1"). Unknown tags fall
    /// back to the default release. Omitted: the last run's choice.
    #[clap(long, short = 'e')]
    pub engine: Option<String>,

    /// Workload to run (e.g. "sprites-single-texture"). Omitted: the last
    /// run's choice, then the first workload in the roster.
    #[clap(long, short = 's')]
    pub scene: Option<String>,

    /// Number of live objects on the stage.
    #[clap(long, short = 'c')]
    pub count: Option<usize>,

    /// Directory containing the benchmark assets.
    #[clap(long, default_value = "assets")]
    pub asset_root: PathBuf,

    /// Placement RNG seed. Fixing it makes layouts identical across engine
    /// versions.
    #[clap(long)]
    pub seed: Option<u64>,

    /// List the available workloads and exit.
    #[clap(long)]
    pub list_scenes: bool,

    /// List the installable engine versions and exit.
    #[clap(long)]
    pub list_versions: bool,
}
