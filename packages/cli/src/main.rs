mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{build, replay, BuildArgs, ReplayArgs};
use config::Config;

/// Pagetree CLI - inspect and edit recognized page trees
#[derive(Parser, Debug)]
#[command(name = "pagetree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize a recognition result and print its tree
    Build(BuildArgs),

    /// Apply a sequence of editor actions and report the final state
    Replay(ReplayArgs),
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?.display().to_string();
    let config = Config::load(&cwd)?;

    tracing_subscriber::fmt()
        .with_max_level(config.level()?)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Build(args) => build(args, &config),
        Command::Replay(args) => replay(args, &config),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
