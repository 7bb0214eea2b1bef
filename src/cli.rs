use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    /// Show more logs (repeat for more detail)
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify the captured output of a JFlex run.
    Classify(ClassifyArgs),
    /// Check that JFlex is configured well enough to be launched.
    CheckConfig(CheckConfigArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Exit code JFlex finished with
    #[clap(long, allow_hyphen_values = true)]
    pub exit_code: i32,

    /// Command line that was run, quoted in failure reports
    #[clap(long)]
    pub command: String,

    /// File holding the captured standard output
    #[clap(long)]
    pub stdout: Option<PathBuf>,

    /// File holding the captured standard error
    #[clap(long)]
    pub stderr: Option<PathBuf>,

    /// Lexer specification the errors refer to, used as the location prefix
    #[clap(long)]
    pub source: Option<String>,

    #[clap(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct CheckConfigArgs {
    /// Config file to use instead of the nearest jfx.toml
    #[clap(long, env = "JFX_CONFIG")]
    pub config: Option<PathBuf>,
}
