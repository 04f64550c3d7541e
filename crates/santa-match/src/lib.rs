#![deny(missing_docs)]

//! Constrained random gift-exchange matcher.
//!
//! Given participants, couples (symmetric exclusions), a directional blacklist
//! and optional forced matches, [`generate`] draws a giver -> receiver
//! bijection without self-pairs that honours every exclusion. Dead ends restart
//! the whole draw from the forced seed; restarts are capped by
//! [`GeneratorOptions::max_attempts`] so impossible constraint sets fail with a
//! generation error instead of looping.

mod assignment;
mod config;
mod generator;
mod hash;
mod pair;
mod presets;
mod serialization;
mod validate;
mod verify;

pub use assignment::{Assignment, GenerationReport, OverrideRule, OverrideWarning};
pub use config::{ExchangeConfig, GeneratorOptions, DEFAULT_MAX_ATTEMPTS};
pub use generator::{generate, generate_with_rng};
pub use hash::{assignment_hash, config_hash, stable_hash_string};
pub use pair::{Pair, Participant};
pub use presets::Preset;
pub use validate::validate;
pub use verify::verify;

/// Re-export serialization helpers for downstream crates.
pub use serialization::{
    assignment_from_json_str, config_from_json_str, config_from_yaml_str, load_assignment,
    load_config, to_canonical_json_bytes, to_yaml_string,
};
