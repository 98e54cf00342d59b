use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "markupfilter",
    version,
    about = "Cross-reference labeling and cleanup for rendered HTML pages"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Filter(FilterArgs),
    Labels(LabelsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    #[arg(long)]
    pub input: PathBuf,

    /// Defaults to stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Directory that `/`-rooted code block paths resolve against.
    #[arg(long, default_value = ".")]
    pub content_root: PathBuf,

    #[arg(long)]
    pub manifest_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct LabelsArgs {
    #[arg(long)]
    pub input: PathBuf,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}
