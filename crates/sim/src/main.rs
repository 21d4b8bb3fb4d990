//! Headless NPC simulation.
//!
//! Loads a content directory, spawns its roster into a scripted world and
//! drives the decision runtime tick by tick.
//! Run with: `cargo run -p npc-sim -- <command>`

mod commands;
mod world;

use anyhow::Result;
use clap::Parser;
use commands::{Run, Validate};

/// Headless NPC simulation
#[derive(Parser)]
#[command(name = "npc-sim")]
#[command(about = "Drive NPC decision-making without a game attached", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run the roster against a scripted intruder
    Run(Run),

    /// Load and cross-check a content directory
    Validate(Validate),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run(cmd) => cmd.execute(),
        Command::Validate(cmd) => cmd.execute(),
    }
}
