use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use santa_match::{generate, GeneratorOptions, DEFAULT_MAX_ATTEMPTS};
use tracing::debug;

use super::{emit_json, ConfigSource};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: ConfigSource,
    /// Master seed; a fresh one is drawn and reported when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Number of full restarts allowed before giving up.
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,
    /// Write the report to this file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let config = args.source.load()?;
    let options = GeneratorOptions {
        max_attempts: args.max_attempts,
        seed: args.seed,
    };
    let report = generate(&config, &options)?;
    for pair in &report.assignment {
        debug!(giver = %pair.giver, receiver = %pair.receiver, "match");
    }
    emit_json(&report, args.out.as_deref())
}
