//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the final score printout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Domains with their facets
    Full,
    /// Domain averages only
    Domains,
    /// JSON output
    Json,
}

/// CLI arguments for bigfive
#[derive(Parser, Debug)]
#[command(name = "bigfive")]
#[command(author, version, about = "BFI-2 personality inventory in the terminal")]
#[command(long_about = r#"
bigfive presents the 60-item BFI-2 personality questionnaire and scores
your answers across the five domains (Extraversion, Agreeableness,
Conscientiousness, Negative Emotionality, Open-Mindedness) and their
fifteen facets.

Answer each statement on a 1-5 scale (keys 1-5), move with Enter/arrows,
and read your averages on the result screen. Nothing is persisted.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./bigfive.toml      Project-level config
3. ~/.config/bigfive/config.toml   Global config

Example:
  bigfive
  bigfive --catalog my-items.toml --output json
"#)]
pub struct Cli {
    /// Path to an alternate item catalog (TOML); defaults to the embedded BFI-2 set
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Output format for the final scores (defaults to the config file value)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}
