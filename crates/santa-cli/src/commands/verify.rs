use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use santa_match::{assignment_hash, load_assignment, validate, verify};
use serde_json::json;
use tracing::{info, warn};

use super::{emit_json, ConfigSource};

#[derive(Args, Debug)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub source: ConfigSource,
    /// JSON file holding `[[giver, receiver], ...]` pairs.
    #[arg(long)]
    pub assignment: PathBuf,
}

pub fn run(args: &VerifyArgs) -> Result<(), Box<dyn Error>> {
    let config = args.source.load()?;
    let warnings = validate(&config)?;
    for warning in &warnings {
        warn!("{warning}");
    }
    let assignment = load_assignment(&args.assignment)?;
    verify(&config, &assignment)?;
    info!(pairs = assignment.len(), "assignment verified");
    emit_json(
        &json!({
            "valid": true,
            "pairs": assignment.len(),
            "assignment_hash": assignment_hash(&assignment)?,
            "warnings": warnings,
        }),
        None,
    )
}
