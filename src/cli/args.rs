//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    boat::BoatCommands,
    boxes::BoxCommands,
    completions::CompletionsArgs,
    dashboard::DashboardArgs,
    lang::LangCommands,
    profile::ProfileCommands,
    quote::QuoteArgs,
    register::RegisterArgs,
};

#[derive(Parser)]
#[command(name = "selal")]
#[command(author, version, about = "Selal fish supply chain front office")]
#[command(
    long_about = "Terminal front office for the Selal platform: producer onboarding, boat fleet management, box requests, and subscription pricing."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

impl GlobalOpts {
    /// Effective output format: the -f flag wins, then the configured
    /// default, then Auto
    pub fn resolve_format(&self, config: &crate::core::config::Config) -> OutputFormat {
        if self.format != OutputFormat::Auto {
            return self.format;
        }
        config
            .default_format
            .as_deref()
            .and_then(|s| <OutputFormat as clap::ValueEnum>::from_str(s, true).ok())
            .unwrap_or(OutputFormat::Auto)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a new account (multi-step wizard)
    Register(RegisterArgs),

    /// Boat fleet management
    #[command(subcommand)]
    Boat(BoatCommands),

    /// Box request ordering
    #[command(subcommand, name = "box")]
    Boxes(BoxCommands),

    /// Producer dashboard - key metrics and recent activity
    Dashboard(DashboardArgs),

    /// Profile and subscription management
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Subscription pricing quote for a fleet
    Quote(QuoteArgs),

    /// Interface language (English/Arabic)
    #[command(subcommand)]
    Lang(LangCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format for list and show commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pick a sensible format per command
    Auto,
    /// Aligned columns for terminals
    Tsv,
    /// JSON document
    Json,
    /// YAML document
    Yaml,
    /// Comma-separated values
    Csv,
    /// Markdown table
    Md,
    /// IDs only, one per line
    Id,
}
