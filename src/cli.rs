//! Command-line interface components.

pub mod commands;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nextgen")]
#[command(about = "Load, parse and filter NextGen showcase content from published spreadsheets")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Configuration file (JSON). Defaults to <config dir>/nextgen/config.json when present
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse any CSV source and print its rows
    Parse(ParseArgs),
    /// List community profiles
    Community(CommunityArgs),
    /// List news items
    News(NewsArgs),
    /// Count submitted applications
    Applications(SourceArgs),
    /// Load every sheet and report counts and filter options
    Summary,
    /// List benefiting municipalities with coordinates
    Municipalities(FormatArgs),
    /// List the scheduled tour routes
    Routes(FormatArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(ClapArgs, Debug)]
pub struct FormatArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ClapArgs, Debug)]
pub struct SourceArgs {
    /// CSV URL or file, overriding the configured sheet
    #[arg(short, long)]
    pub source: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct ParseArgs {
    /// CSV URL or file
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Drop the first row
    #[arg(long)]
    pub skip_header: bool,

    #[command(flatten)]
    pub output: FormatArgs,
}

#[derive(ClapArgs, Debug)]
pub struct CommunityArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Only profiles from this municipality ("Todos" for all)
    #[arg(short, long)]
    pub municipality: Option<String>,

    /// Only profiles in this sector ("Todos" for all)
    #[arg(long)]
    pub sector: Option<String>,

    /// Show at most this many profiles
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Show the home-page preview (first `preview_limit` profiles)
    #[arg(long, conflicts_with_all = ["municipality", "sector", "limit"])]
    pub preview: bool,

    #[command(flatten)]
    pub output: FormatArgs,
}

#[derive(ClapArgs, Debug)]
pub struct NewsArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Only news from this municipality ("Todos" for all)
    #[arg(short, long)]
    pub municipality: Option<String>,

    /// Show at most this many items
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Show the home-page preview (first `preview_limit` items)
    #[arg(long, conflicts_with_all = ["municipality", "limit"])]
    pub preview: bool,

    #[command(flatten)]
    pub output: FormatArgs,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
