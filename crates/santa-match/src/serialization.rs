use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use santa_core::errors::{ErrorInfo, SantaError};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::assignment::Assignment;
use crate::config::ExchangeConfig;

fn serde_error(code: &str, err: impl ToString) -> SantaError {
    SantaError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into canonical JSON bytes with deterministic key ordering.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, SantaError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json_serialize", err))?;
    let canonical = canonicalize(value);
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonical).map_err(|err| serde_error("json_write", err))?;
    Ok(bytes)
}

/// Serializes a value into YAML.
pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, SantaError> {
    serde_yaml::to_string(value).map_err(|err| serde_error("yaml_serialize", err))
}

fn from_json_str<T: DeserializeOwned>(json: &str) -> Result<T, SantaError> {
    serde_json::from_str(json).map_err(|err| serde_error("json_deserialize", err))
}

/// Parses an exchange configuration from YAML.
pub fn config_from_yaml_str(yaml: &str) -> Result<ExchangeConfig, SantaError> {
    serde_yaml::from_str(yaml).map_err(|err| serde_error("yaml_deserialize", err))
}

/// Parses an exchange configuration from JSON.
pub fn config_from_json_str(json: &str) -> Result<ExchangeConfig, SantaError> {
    from_json_str(json)
}

/// Parses an assignment from a JSON array of `[giver, receiver]` pairs.
pub fn assignment_from_json_str(json: &str) -> Result<Assignment, SantaError> {
    from_json_str(json)
}

fn read_file(path: &Path) -> Result<String, SantaError> {
    fs::read_to_string(path).map_err(|err| {
        SantaError::Config(
            ErrorInfo::new("config-read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Loads a configuration file; `.json` files are parsed as JSON, anything else as YAML.
pub fn load_config(path: &Path) -> Result<ExchangeConfig, SantaError> {
    let contents = read_file(path)?;
    if is_json(path) {
        config_from_json_str(&contents)
    } else {
        config_from_yaml_str(&contents)
    }
}

/// Loads an assignment JSON file.
pub fn load_assignment(path: &Path) -> Result<Assignment, SantaError> {
    assignment_from_json_str(&read_file(path)?)
}
