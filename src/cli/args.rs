//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use crate::registry::OutputFormat;
use crate::shell::PlatformTag;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// prdenv - Environment probing and framework install guidance.
#[derive(Debug, Parser)]
#[command(name = "prdenv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Minimal output (suppress progress lines)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Probe the host for installed development tools
    Check,

    /// Print install commands for a known framework
    Install(InstallArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Framework name (e.g. flask, react, hexo)
    #[arg(short, long)]
    pub framework: Option<String>,

    /// List all supported frameworks
    #[arg(short, long)]
    pub list: bool,

    /// Target operating system (default: auto-detect)
    #[arg(short, long, value_enum, default_value_t = PlatformArg::Auto)]
    pub platform: PlatformArg,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Platform selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PlatformArg {
    Windows,
    Macos,
    Linux,
    #[default]
    Auto,
}

impl PlatformArg {
    /// Resolve to a concrete platform, `None` meaning auto-detect.
    pub fn resolve(self) -> Option<PlatformTag> {
        match self {
            PlatformArg::Windows => Some(PlatformTag::Windows),
            PlatformArg::Macos => Some(PlatformTag::Macos),
            PlatformArg::Linux => Some(PlatformTag::Linux),
            PlatformArg::Auto => None,
        }
    }
}

/// Output format selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FormatArg {
    #[default]
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
