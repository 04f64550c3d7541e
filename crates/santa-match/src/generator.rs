use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;
use santa_core::errors::{ErrorInfo, SantaError};
use santa_core::provenance::{RunProvenance, SchemaVersion};
use santa_core::rng::{fresh_master_seed, RngHandle};
use tracing::{debug, info, warn};

use crate::assignment::{Assignment, GenerationReport};
use crate::config::{ExchangeConfig, GeneratorOptions};
use crate::hash::{assignment_hash, config_hash};
use crate::pair::{Pair, Participant};
use crate::validate::validate;

/// Produces a random assignment honouring every exclusion in `config`.
///
/// Each attempt draws from its own substream of the master seed, so attempt
/// `k` of a run can be replayed in isolation. When no seed is configured a
/// fresh one is drawn and recorded in the report provenance.
pub fn generate(
    config: &ExchangeConfig,
    options: &GeneratorOptions,
) -> Result<GenerationReport, SantaError> {
    check_budget(options.max_attempts)?;
    let warnings = validate(config)?;
    for warning in &warnings {
        warn!(pair = %warning.pair, rule = ?warning.rule, "forced match overrides an exclusion rule");
    }

    let seed = options.seed.unwrap_or_else(fresh_master_seed);
    let plan = Plan::new(config);
    let mut found = None;
    for attempt in 0..options.max_attempts {
        let mut rng = RngHandle::substream(seed, attempt as u64);
        if let Some(pairs) = plan.attempt(attempt, &mut rng) {
            found = Some((plan.into_assignment(&pairs), attempt + 1));
            break;
        }
    }
    let Some((assignment, attempts)) = found else {
        return Err(exhausted(config, options.max_attempts));
    };
    info!(
        participants = config.participants.len(),
        attempts, seed, "generated assignment"
    );

    Ok(GenerationReport {
        schema_version: SchemaVersion::default(),
        assignment_hash: assignment_hash(&assignment)?,
        assignment,
        attempts,
        warnings,
        provenance: RunProvenance {
            config_hash: config_hash(config)?,
            seed,
            max_attempts: options.max_attempts,
            ..RunProvenance::default()
        }
        .with_tool(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
    })
}

/// Runs the restart loop on a caller supplied RNG.
///
/// Returns the assignment and the number of attempts it took.
pub fn generate_with_rng(
    config: &ExchangeConfig,
    max_attempts: usize,
    rng: &mut RngHandle,
) -> Result<(Assignment, usize), SantaError> {
    check_budget(max_attempts)?;
    validate(config)?;
    let plan = Plan::new(config);
    for attempt in 0..max_attempts {
        if let Some(pairs) = plan.attempt(attempt, rng) {
            return Ok((plan.into_assignment(&pairs), attempt + 1));
        }
    }
    Err(exhausted(config, max_attempts))
}

fn check_budget(max_attempts: usize) -> Result<(), SantaError> {
    if max_attempts == 0 {
        return Err(SantaError::Validation(ErrorInfo::new(
            "zero-attempts",
            "max_attempts must be at least one",
        )));
    }
    Ok(())
}

fn exhausted(config: &ExchangeConfig, max_attempts: usize) -> SantaError {
    SantaError::Generation(
        ErrorInfo::new(
            "no-valid-assignment",
            "no valid assignment found within the retry budget",
        )
        .with_context("attempts", max_attempts.to_string())
        .with_context("participants", config.participants.len().to_string())
        .with_context("couples", config.couples.len().to_string())
        .with_context("blacklist", config.blacklist.len().to_string())
        .with_hint("try loosening the couple or blacklist constraints"),
    )
}

/// Index-based view of a validated configuration.
struct Plan<'a> {
    names: Vec<&'a Participant>,
    /// Row-major `giver * n + receiver`; the diagonal is always blocked.
    blocked: Vec<bool>,
    forced: Vec<(usize, usize)>,
    free_givers: Vec<usize>,
    free_receivers: Vec<usize>,
}

impl<'a> Plan<'a> {
    fn new(config: &'a ExchangeConfig) -> Self {
        let names: Vec<&Participant> = config.participants.iter().collect();
        let n = names.len();
        let index: HashMap<&str, usize> = names
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.as_str(), idx))
            .collect();
        let position = |pair: &Pair| (index[pair.giver.as_str()], index[pair.receiver.as_str()]);

        let mut blocked = vec![false; n * n];
        for idx in 0..n {
            blocked[idx * n + idx] = true;
        }
        for couple in &config.couples {
            let (a, b) = position(couple);
            blocked[a * n + b] = true;
            blocked[b * n + a] = true;
        }
        for entry in &config.blacklist {
            let (giver, receiver) = position(entry);
            blocked[giver * n + receiver] = true;
        }

        let forced: Vec<(usize, usize)> = config.forced_matches.iter().map(position).collect();
        let mut giver_taken = vec![false; n];
        let mut receiver_taken = vec![false; n];
        for &(giver, receiver) in &forced {
            giver_taken[giver] = true;
            receiver_taken[receiver] = true;
        }

        Self {
            names,
            blocked,
            forced,
            free_givers: (0..n).filter(|idx| !giver_taken[*idx]).collect(),
            free_receivers: (0..n).filter(|idx| !receiver_taken[*idx]).collect(),
        }
    }

    fn is_blocked(&self, giver: usize, receiver: usize) -> bool {
        self.blocked[giver * self.names.len() + receiver]
    }

    /// One pass from the forced seed; `None` on a dead end.
    fn attempt<R: Rng>(&self, attempt: usize, rng: &mut R) -> Option<Vec<(usize, usize)>> {
        let mut givers = self.free_givers.clone();
        let mut receivers = self.free_receivers.clone();
        let mut pairs = self.forced.clone();
        pairs.reserve(givers.len());

        while !givers.is_empty() {
            let giver = givers.swap_remove(rng.gen_range(0..givers.len()));
            let eligible: Vec<usize> = (0..receivers.len())
                .filter(|slot| !self.is_blocked(giver, receivers[*slot]))
                .collect();
            let Some(&slot) = eligible.choose(rng) else {
                debug!(attempt, giver = %self.names[giver], "dead end, restarting");
                return None;
            };
            pairs.push((giver, receivers.swap_remove(slot)));
        }
        Some(pairs)
    }

    fn into_assignment(&self, pairs: &[(usize, usize)]) -> Assignment {
        Assignment::from_pairs(
            pairs
                .iter()
                .map(|&(giver, receiver)| {
                    Pair::new(self.names[giver].clone(), self.names[receiver].clone())
                })
                .collect(),
        )
    }
}
