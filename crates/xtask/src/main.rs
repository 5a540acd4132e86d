//! Development tasks for the spell targeting workspace
//!
//! This binary provides content utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod dirs;

use anyhow::Result;
use clap::Parser;
use commands::{Classify, Validate};

/// Development tasks for the spell targeting workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Spell content tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List every spell in the catalog with its kind
    Classify(Classify),

    /// Check the catalog for dangling references
    Validate(Validate),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for SPELL_DATA_DIR and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Classify(cmd) => cmd.execute(),
        Command::Validate(cmd) => cmd.execute(),
    }
}
