use std::collections::HashSet;

use santa_core::errors::{ErrorInfo, SantaError};

use crate::assignment::OverrideWarning;
use crate::config::ExchangeConfig;
use crate::pair::{Pair, Participant};

/// Checks a configuration before any randomness is spent.
///
/// Checks run in a fixed order so the same malformed input always yields the
/// same error code. On success the forced matches that contradict a couple or
/// blacklist entry are returned as warnings.
pub fn validate(config: &ExchangeConfig) -> Result<Vec<OverrideWarning>, SantaError> {
    if config.participants.len() < 2 {
        return Err(SantaError::Validation(
            ErrorInfo::new(
                "too-few-participants",
                "an exchange needs at least two participants",
            )
            .with_context("participants", config.participants.len().to_string()),
        ));
    }

    let mut known: HashSet<&str> = HashSet::with_capacity(config.participants.len());
    for participant in &config.participants {
        if participant.as_str().trim().is_empty() {
            return Err(SantaError::Validation(ErrorInfo::new(
                "empty-participant",
                "participant names must not be blank",
            )));
        }
        if !known.insert(participant.as_str()) {
            return Err(SantaError::Validation(
                ErrorInfo::new("duplicate-participant", "participant listed more than once")
                    .with_context("participant", participant.as_str()),
            ));
        }
    }

    check_known(&known, "couples", &config.couples)?;
    check_known(&known, "blacklist", &config.blacklist)?;
    check_known(&known, "forced_matches", &config.forced_matches)?;

    let mut forced_givers: HashSet<&Participant> = HashSet::new();
    let mut forced_receivers: HashSet<&Participant> = HashSet::new();
    for pair in &config.forced_matches {
        if pair.is_self_pair() {
            return Err(SantaError::Validation(
                ErrorInfo::new(
                    "forced-self-match",
                    "a participant cannot be forced to give to themselves",
                )
                .with_context("participant", pair.giver.as_str()),
            ));
        }
        if !forced_givers.insert(&pair.giver) {
            return Err(SantaError::Validation(
                ErrorInfo::new("duplicate-forced-giver", "giver forced more than once")
                    .with_context("giver", pair.giver.as_str()),
            ));
        }
        if !forced_receivers.insert(&pair.receiver) {
            return Err(SantaError::Validation(
                ErrorInfo::new("duplicate-forced-receiver", "receiver forced more than once")
                    .with_context("receiver", pair.receiver.as_str()),
            ));
        }
    }

    Ok(override_warnings(config))
}

fn check_known(known: &HashSet<&str>, rule: &str, pairs: &[Pair]) -> Result<(), SantaError> {
    for pair in pairs {
        for name in [&pair.giver, &pair.receiver] {
            if !known.contains(name.as_str()) {
                return Err(SantaError::Validation(
                    ErrorInfo::new("unknown-participant", "rule references an unknown participant")
                        .with_context("rule", rule)
                        .with_context("participant", name.as_str()),
                ));
            }
        }
    }
    Ok(())
}

fn override_warnings(config: &ExchangeConfig) -> Vec<OverrideWarning> {
    config
        .forced_matches
        .iter()
        .filter_map(|pair| {
            config.excluded_by(pair).map(|rule| OverrideWarning {
                pair: pair.clone(),
                rule,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::OverrideRule;

    #[test]
    fn single_participant_is_rejected() {
        let err = validate(&ExchangeConfig::new(["A"])).unwrap_err();
        assert_eq!(err.code(), "too-few-participants");
    }

    #[test]
    fn blank_and_duplicate_names_are_rejected() {
        let err = validate(&ExchangeConfig::new(["A", " "])).unwrap_err();
        assert_eq!(err.code(), "empty-participant");
        let err = validate(&ExchangeConfig::new(["A", "B", "A"])).unwrap_err();
        assert_eq!(err.code(), "duplicate-participant");
    }

    #[test]
    fn unknown_names_report_the_rule() {
        let config = ExchangeConfig::new(["A", "B"]).with_blacklist("A", "Z");
        let err = validate(&config).unwrap_err();
        assert_eq!(err.code(), "unknown-participant");
        assert_eq!(err.info().context["rule"], "blacklist");
        assert_eq!(err.info().context["participant"], "Z");
    }

    #[test]
    fn forced_conflicts_are_warnings_not_errors() {
        let config = ExchangeConfig::new(["A", "B", "C"])
            .with_couple("B", "A")
            .with_forced("A", "B");
        let warnings = validate(&config).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].rule, OverrideRule::Couple);
        assert_eq!(warnings[0].pair, Pair::new("A", "B"));
    }
}
