use dep_visualizer::application::dto::{OutputStyle, SourceMode};
use clap::Parser;
use std::path::PathBuf;

/// Visualize npm dependency graphs: load order, cycles and trees
#[derive(Parser, Debug)]
#[command(name = "dep-visualizer")]
#[command(version)]
#[command(
    about = "Visualize npm dependency graphs: load order, cycles and trees",
    long_about = None
)]
pub struct Args {
    /// Graph source: file (a local graph file) or live (the npm registry)
    #[arg(long, default_value = "live")]
    pub mode: SourceMode,

    /// Package to start the analysis from
    #[arg(short, long, value_name = "NAME")]
    pub package: Option<String>,

    /// Version of the start package (live mode; defaults to the latest)
    #[arg(long, value_name = "VERSION")]
    pub package_version: Option<String>,

    /// Graph file with `name: dep1 dep2` lines (file mode)
    #[arg(long, value_name = "FILE")]
    pub repo_path: Option<PathBuf>,

    /// npm registry base URL [default: https://registry.npmjs.org/]
    #[arg(long, value_name = "URL")]
    pub registry_url: Option<String>,

    /// Maximum dependency depth, 1 to 1000 [default: 100]
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Skip dependencies whose name contains this substring
    #[arg(long, value_name = "SUBSTRING")]
    pub ignore: Option<String>,

    /// Output style: tree, flat or order [default: tree]
    #[arg(long)]
    pub style: Option<OutputStyle>,

    /// Compare our load order with what npm installs (live mode)
    #[arg(long)]
    pub compare_npm: bool,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to dep-visualizer.config.yml in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Per-request registry timeout in seconds [default: 15]
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Tracing filter for the `-v` count
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
