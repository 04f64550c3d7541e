use serde::{Deserialize, Serialize};

use crate::assignment::OverrideRule;
use crate::pair::{Pair, Participant};

/// Participants and constraints for a single exchange.
///
/// Loaded from YAML or JSON; every list except `participants` may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExchangeConfig {
    /// Everyone taking part, each name unique.
    pub participants: Vec<Participant>,
    /// Unordered pairs that must not be matched in either direction.
    #[serde(default)]
    pub couples: Vec<Pair>,
    /// Ordered pairs: the giver must not be matched with the receiver.
    #[serde(default)]
    pub blacklist: Vec<Pair>,
    /// Pairs committed before any randomization.
    #[serde(default, alias = "forcedMatches", alias = "predefined")]
    pub forced_matches: Vec<Pair>,
}

impl ExchangeConfig {
    /// Creates a configuration with the given participants and no constraints.
    pub fn new<I, P>(participants: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Participant>,
    {
        Self {
            participants: participants.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Adds a couple constraint.
    pub fn with_couple(mut self, a: impl Into<Participant>, b: impl Into<Participant>) -> Self {
        self.couples.push(Pair::new(a, b));
        self
    }

    /// Adds a directional blacklist entry.
    pub fn with_blacklist(
        mut self,
        giver: impl Into<Participant>,
        receiver: impl Into<Participant>,
    ) -> Self {
        self.blacklist.push(Pair::new(giver, receiver));
        self
    }

    /// Adds a forced match.
    pub fn with_forced(
        mut self,
        giver: impl Into<Participant>,
        receiver: impl Into<Participant>,
    ) -> Self {
        self.forced_matches.push(Pair::new(giver, receiver));
        self
    }

    /// Returns true when `giver -> receiver` is excluded by a couple or the blacklist.
    pub fn is_excluded(&self, giver: &Participant, receiver: &Participant) -> bool {
        self.excluded_by(&Pair::new(giver.clone(), receiver.clone()))
            .is_some()
    }

    pub(crate) fn excluded_by(&self, pair: &Pair) -> Option<OverrideRule> {
        if self.couples.iter().any(|couple| couple.same_members(pair)) {
            Some(OverrideRule::Couple)
        } else if self.blacklist.iter().any(|entry| entry == pair) {
            Some(OverrideRule::Blacklist)
        } else {
            None
        }
    }
}

/// Knobs controlling a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    /// Number of full restarts allowed before giving up.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    /// Master seed; a fresh one is drawn and reported when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Retry budget used when none is configured.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            seed: None,
        }
    }
}

impl GeneratorOptions {
    /// Options with a fixed seed and the default retry budget.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
