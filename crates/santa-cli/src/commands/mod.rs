pub mod generate;
pub mod presets;
pub mod verify;
pub mod version;

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use santa_match::{load_config, to_canonical_json_bytes, ExchangeConfig, Preset};
use serde::Serialize;
use tracing::debug;

/// Where the exchange configuration comes from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ConfigSource {
    /// YAML or JSON file describing participants and constraints.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Built-in participant list (family-adults, cousins, friends).
    #[arg(long)]
    pub preset: Option<String>,
}

impl ConfigSource {
    pub fn load(&self) -> Result<ExchangeConfig, Box<dyn Error>> {
        if let Some(path) = &self.config {
            debug!(path = %path.display(), "loading exchange configuration");
            return Ok(load_config(path)?);
        }
        let Some(name) = &self.preset else {
            return Err("either --config or --preset is required".into());
        };
        let preset: Preset = name.parse()?;
        debug!(preset = %preset, "using built-in preset");
        Ok(preset.config())
    }
}

/// Prints canonical JSON to stdout, or writes it to `out` when given.
pub fn emit_json<T: Serialize>(value: &T, out: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let json = String::from_utf8(to_canonical_json_bytes(value)?)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json)?;
        }
        None => println!("{json}"),
    }
    Ok(())
}
