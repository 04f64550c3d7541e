use std::fmt;
use std::str::FromStr;

use santa_core::errors::{ErrorInfo, SantaError};

use crate::config::ExchangeConfig;

/// Built-in participant lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Adults of the family.
    FamilyAdults,
    /// The cousins.
    Cousins,
    /// A group of friends.
    Friends,
}

impl Preset {
    /// Every preset, in display order.
    pub const ALL: [Preset; 3] = [Preset::FamilyAdults, Preset::Cousins, Preset::Friends];

    /// Short name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Preset::FamilyAdults => "family-adults",
            Preset::Cousins => "cousins",
            Preset::Friends => "friends",
        }
    }

    /// Human readable title.
    pub fn title(self) -> &'static str {
        match self {
            Preset::FamilyAdults => "Secret Santa - Family Adults",
            Preset::Cousins => "Secret Santa - Cousins",
            Preset::Friends => "Secret Santa - Friends",
        }
    }

    /// Builds the configuration for this preset.
    pub fn config(self) -> ExchangeConfig {
        match self {
            Preset::FamilyAdults => ExchangeConfig::new([
                "Shano",
                "Charl",
                "Avvie",
                "Mel",
                "Dale",
                "Granny Margi",
                "Dave",
                "Sandy",
            ])
            .with_couple("Mel", "Dale")
            .with_couple("Avvie", "Shano")
            .with_couple("Sandy", "Dave"),
            Preset::Cousins => ExchangeConfig::new([
                "Luke",
                "Sam",
                "Briony",
                "Jamie",
                "Shantelle",
                "Doug",
                "Levi",
                "Jake",
                "Shane",
                "Keisha",
            ])
            .with_couple("Jake", "Keisha")
            .with_couple("Doug", "Shantelle")
            .with_blacklist("Luke", "Sam")
            .with_blacklist("Briony", "Jamie")
            .with_blacklist("Jake", "Shane")
            .with_blacklist("Jake", "Doug")
            .with_blacklist("Shane", "Doug"),
            Preset::Friends => {
                ExchangeConfig::new(["Sarah", "Mike", "Lisa", "Tom", "Rachel", "Chris"])
                    .with_couple("Sarah", "Mike")
                    .with_couple("Lisa", "Tom")
                    .with_blacklist("Rachel", "Chris")
                    .with_blacklist("Sarah", "Lisa")
            }
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = SantaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squash = |name: &str| name.to_ascii_lowercase().replace(['-', '_'], "");
        let wanted = squash(s.trim());
        Preset::ALL
            .into_iter()
            .find(|preset| squash(preset.name()) == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Preset::ALL.iter().map(|preset| preset.name()).collect();
                SantaError::Config(
                    ErrorInfo::new("unknown-preset", "no preset with that name")
                        .with_context("preset", s)
                        .with_hint(format!("known presets: {}", known.join(", "))),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;

    #[test]
    fn presets_parse_by_name() {
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>().unwrap(), preset);
        }
        assert_eq!("familyAdults".parse::<Preset>().unwrap(), Preset::FamilyAdults);
        assert_eq!("unknown".parse::<Preset>().unwrap_err().code(), "unknown-preset");
    }

    #[test]
    fn presets_validate_without_warnings() {
        for preset in Preset::ALL {
            assert!(validate(&preset.config()).unwrap().is_empty());
        }
    }
}
