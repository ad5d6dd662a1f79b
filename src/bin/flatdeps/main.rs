//! flatdeps CLI

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use flatdeps::util::Shell;

mod cli;
mod commands;

use cli::{Cli, Commands, MessageFormat};

fn main() {
    let cli = Cli::parse();

    let shell = Arc::new(Shell::from_flags(
        cli.quiet,
        cli.verbose,
        cli.color,
        cli.message_format == MessageFormat::Json,
    ));

    if let Err(e) = run(cli, &shell) {
        if shell.is_json() {
            shell.error(format!("{:#}", e));
        } else {
            eprintln!("error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli, shell: &Arc<Shell>) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("flatdeps=debug")
    } else if cli.quiet {
        EnvFilter::new("flatdeps=error")
    } else {
        EnvFilter::new("flatdeps=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let model = cli.model.as_deref();

    match cli.command {
        Commands::Run(args) => commands::run::execute(args, model, shell),
        Commands::Tasks(args) => commands::tasks::execute(args, model, shell),
        Commands::Variants => commands::variants::execute(model, shell),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
