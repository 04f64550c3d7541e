use std::error::Error;

use clap::Args;
use santa_match::{to_yaml_string, Preset};

#[derive(Args, Debug)]
pub struct PresetsArgs {
    /// Print the configuration of one preset as YAML.
    #[arg(long)]
    pub show: Option<String>,
}

pub fn run(args: &PresetsArgs) -> Result<(), Box<dyn Error>> {
    if let Some(name) = &args.show {
        let preset: Preset = name.parse()?;
        print!("{}", to_yaml_string(&preset.config())?);
        return Ok(());
    }
    for preset in Preset::ALL {
        let config = preset.config();
        println!(
            "{:<14} {} ({} participants, {} couples, {} blacklisted)",
            preset.name(),
            preset.title(),
            config.participants.len(),
            config.couples.len(),
            config.blacklist.len(),
        );
    }
    Ok(())
}
