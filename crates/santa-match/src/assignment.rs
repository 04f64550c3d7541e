use std::fmt;

use santa_core::provenance::{RunProvenance, SchemaVersion};
use serde::{Deserialize, Serialize};

use crate::pair::{Pair, Participant};

/// Complete `giver -> receiver` mapping produced by the generator.
///
/// Forced matches come first in the order they were supplied, followed by the
/// randomly drawn pairs in the order they were committed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment {
    pairs: Vec<Pair>,
}

impl Assignment {
    /// Wraps an already computed list of pairs.
    pub fn from_pairs(pairs: Vec<Pair>) -> Self {
        Self { pairs }
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true when the assignment holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over the pairs in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pair> {
        self.pairs.iter()
    }

    /// Borrows the pairs as a slice.
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Consumes the assignment and returns its pairs.
    pub fn into_pairs(self) -> Vec<Pair> {
        self.pairs
    }

    /// Returns who `giver` buys for.
    pub fn receiver_of(&self, giver: &str) -> Option<&Participant> {
        self.pairs
            .iter()
            .find(|pair| pair.giver.as_str() == giver)
            .map(|pair| &pair.receiver)
    }

    /// Returns who buys for `receiver`.
    pub fn giver_of(&self, receiver: &str) -> Option<&Participant> {
        self.pairs
            .iter()
            .find(|pair| pair.receiver.as_str() == receiver)
            .map(|pair| &pair.giver)
    }

    /// Returns true when the assignment contains exactly this ordered pair.
    pub fn contains(&self, pair: &Pair) -> bool {
        self.pairs.contains(pair)
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// Exclusion rule a forced match overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverrideRule {
    /// The forced pair is a declared couple.
    Couple,
    /// The forced pair is on the blacklist.
    Blacklist,
}

/// Forced match that contradicts a couple or blacklist entry.
///
/// The match is kept; the warning is surfaced so callers can decide whether the
/// override was intended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideWarning {
    /// Forced pair in question.
    pub pair: Pair,
    /// Rule it overrides.
    pub rule: OverrideRule,
}

impl fmt::Display for OverrideWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = match self.rule {
            OverrideRule::Couple => "couple",
            OverrideRule::Blacklist => "blacklist",
        };
        write!(f, "forced match {} overrides a {rule} rule", self.pair)
    }
}

/// Everything a successful generation run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Schema of this report.
    pub schema_version: SchemaVersion,
    /// The assignment itself.
    pub assignment: Assignment,
    /// Number of attempts consumed, including the successful one.
    pub attempts: usize,
    /// Forced matches that override exclusion rules.
    #[serde(default)]
    pub warnings: Vec<OverrideWarning>,
    /// Order independent hash of the assignment.
    pub assignment_hash: String,
    /// Seed, retry budget and configuration hash for replaying the run.
    pub provenance: RunProvenance,
}
