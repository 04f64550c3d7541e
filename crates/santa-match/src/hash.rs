use santa_core::errors::SantaError;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::assignment::Assignment;
use crate::config::ExchangeConfig;
use crate::serialization::to_canonical_json_bytes;

/// Computes a stable hexadecimal hash for the provided serializable payload.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, SantaError> {
    let bytes = to_canonical_json_bytes(value)?;
    let digest = Sha256::digest(bytes);
    Ok(format!("{:x}", digest))
}

/// Hashes the mapping of an assignment independently of pair emission order.
pub fn assignment_hash(assignment: &Assignment) -> Result<String, SantaError> {
    let mut pairs = assignment.pairs().to_vec();
    pairs.sort();
    stable_hash_string(&pairs)
}

/// Hashes the configuration exactly as supplied.
pub fn config_hash(config: &ExchangeConfig) -> Result<String, SantaError> {
    stable_hash_string(config)
}
