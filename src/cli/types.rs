use clap::{Parser, Subcommand};
use std::path::PathBuf;
use weft::models::Platform;
use weft::validation::clap_platform_parser;

const HELP_TEMPLATE: &str = "
 ┬ ┬┌─┐┌─┐┌┬┐
 │││├┤ ├┤  │
 └┴┘└─┘└   ┴

{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}";

#[derive(Parser)]
#[command(name = "weft")]
#[command(about = "Workflow template transpiler for AI assistant platforms", long_about = None)]
#[command(version)]
#[command(help_template = HELP_TEMPLATE)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a workflow template into platform files
    Convert {
        /// Path to the template file
        template: PathBuf,

        /// Target platform: claude, cursor, windsurf, copilot (repeatable; default: all)
        #[arg(short, long = "target", value_name = "PLATFORM", value_parser = clap_platform_parser)]
        targets: Vec<Platform>,

        /// Directory the platform files are written under (default: .)
        #[arg(short, long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Fail a platform when its conversion raises any warning
        #[arg(long)]
        strict: bool,

        /// Only show SECURITY warnings
        #[arg(short, long)]
        quiet: bool,

        /// Show what would be written without touching the filesystem
        #[arg(long)]
        dry_run: bool,

        /// Configuration file (default: ./weft.toml when present)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// List the constructs detected in a template body
    Detect {
        /// Path to the template file
        template: PathBuf,

        /// Print findings as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how each platform handles every construct
    Platforms,

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}
