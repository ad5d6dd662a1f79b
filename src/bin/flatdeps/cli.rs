//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell as CompletionShell;

use flatdeps::util::shell::ColorChoice;

/// flatdeps - write the flattened compile dependencies of every build variant
#[derive(Parser)]
#[command(name = "flatdeps")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Coloring: auto, always, never
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    pub color: ColorChoice,

    /// Output format for messages
    #[arg(long, global = true, value_enum, default_value_t = MessageFormat::Human)]
    pub message_format: MessageFormat,

    /// Path to BuildModel.toml or the directory containing it
    #[arg(long, global = true, value_name = "PATH", env = "FLATDEPS_MODEL")]
    pub model: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MessageFormat {
    Human,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run flatdeps tasks (default: flatDeps)
    Run(RunArgs),

    /// List the registered tasks
    Tasks(TasksArgs),

    /// Show the located variants and their configurations
    Variants,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Tasks to run, e.g. flatDepsDebug
    pub tasks: Vec<String>,

    /// Number of tasks run in parallel
    #[arg(short, long, value_parser = parse_jobs)]
    pub jobs: Option<usize>,
}

#[derive(Args)]
pub struct TasksArgs {
    /// Show every task, not only the dependency group
    #[arg(long)]
    pub all: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: CompletionShell,
}

fn parse_jobs(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
