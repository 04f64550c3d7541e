use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    generate::{self, GenerateArgs},
    presets::{self, PresetsArgs},
    verify::{self, VerifyArgs},
    version::{self, VersionArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "santa", about = "Secret Santa matcher with couple and blacklist constraints")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw a random assignment and print the report as JSON.
    Generate(GenerateArgs),
    /// Check an existing assignment against a configuration.
    Verify(VerifyArgs),
    /// List the built-in participant lists.
    Presets(PresetsArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => generate::run(&args),
        Command::Verify(args) => verify::run(&args),
        Command::Presets(args) => presets::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
