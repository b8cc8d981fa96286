//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// recslug - URL slugs for records, prefixed with their identifier
#[derive(Parser, Debug)]
#[command(name = "recslug", version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ~/.config/recslug/config.toml)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Normalize text into a base slug (no identifier, no length cap)
    Base(BaseArgs),

    /// Build a full slug from text and an identifier
    Build(BuildArgs),

    /// Print the identifier portion of a slug
    Extract(ExtractArgs),

    /// Build slugs for every record in a JSON file
    Records(RecordsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Slug policy flags shared by the building commands
#[derive(Args, Debug, Clone, Default)]
pub struct PolicyArgs {
    /// Do not prepend the identifier
    #[arg(long)]
    pub no_prefix: bool,

    /// Maximum slug length in characters
    #[arg(short = 'm', long)]
    pub max_length: Option<usize>,

    /// Keep the original letter case
    #[arg(short = 'k', long)]
    pub keep_case: bool,
}

/// Arguments for the `base` command
#[derive(Parser, Debug)]
pub struct BaseArgs {
    /// Text to normalize
    pub text: String,

    /// Keep the original letter case
    #[arg(short = 'k', long)]
    pub keep_case: bool,
}

/// Arguments for the `build` command
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Source text (e.g. a title)
    pub text: String,

    /// Record identifier used as the prefix
    #[arg(short, long)]
    pub id: Option<String>,

    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `extract` command
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Slug to read the identifier from
    pub slug: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `records` command
#[derive(Parser, Debug)]
pub struct RecordsArgs {
    /// JSON file holding an array of objects
    pub file: PathBuf,

    /// Entity name used in error messages
    #[arg(short, long, default_value = "Record")]
    pub entity: String,

    /// Field holding the source text (overrides config)
    #[arg(short, long)]
    pub source_attr: Option<String>,

    /// Field holding the identifier (overrides config)
    #[arg(long)]
    pub id_attr: Option<String>,

    #[command(flatten)]
    pub policy: PolicyArgs,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
