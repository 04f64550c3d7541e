use std::collections::HashSet;

use santa_core::errors::{ErrorInfo, SantaError};

use crate::assignment::{Assignment, OverrideRule};
use crate::config::ExchangeConfig;

fn violation(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
}

/// Checks a finished assignment against `config`.
///
/// Every participant must give exactly once and receive exactly once, nobody
/// gives to themselves, all forced matches are present verbatim and every
/// other pair honours the couple and blacklist rules.
pub fn verify(config: &ExchangeConfig, assignment: &Assignment) -> Result<(), SantaError> {
    let known: HashSet<&str> = config.participants.iter().map(|p| p.as_str()).collect();
    let mut givers: HashSet<&str> = HashSet::new();
    let mut receivers: HashSet<&str> = HashSet::new();

    for pair in assignment {
        for name in [&pair.giver, &pair.receiver] {
            if !known.contains(name.as_str()) {
                return Err(SantaError::Generation(
                    violation("unknown-participant", "assignment names an unknown participant")
                        .with_context("participant", name.as_str()),
                ));
            }
        }
        if !givers.insert(pair.giver.as_str()) {
            return Err(SantaError::Generation(
                violation("duplicate-giver", "participant gives more than once")
                    .with_context("giver", pair.giver.as_str()),
            ));
        }
        if !receivers.insert(pair.receiver.as_str()) {
            return Err(SantaError::Generation(
                violation("duplicate-receiver", "participant receives more than once")
                    .with_context("receiver", pair.receiver.as_str()),
            ));
        }
        if pair.is_self_pair() {
            return Err(SantaError::Generation(
                violation("self-pair", "participant gives to themselves")
                    .with_context("participant", pair.giver.as_str()),
            ));
        }
        if config.forced_matches.contains(pair) {
            continue;
        }
        match config.excluded_by(pair) {
            Some(OverrideRule::Couple) => {
                return Err(SantaError::Generation(
                    violation("couple-violation", "pair matches a couple")
                        .with_context("pair", pair.to_string()),
                ))
            }
            Some(OverrideRule::Blacklist) => {
                return Err(SantaError::Generation(
                    violation("blacklist-violation", "pair is blacklisted")
                        .with_context("pair", pair.to_string()),
                ))
            }
            None => {}
        }
    }

    for participant in &config.participants {
        if !givers.contains(participant.as_str()) {
            return Err(SantaError::Generation(
                violation("missing-giver", "participant does not give")
                    .with_context("participant", participant.as_str()),
            ));
        }
        if !receivers.contains(participant.as_str()) {
            return Err(SantaError::Generation(
                violation("missing-receiver", "participant does not receive")
                    .with_context("participant", participant.as_str()),
            ));
        }
    }

    if let Some(pair) = config
        .forced_matches
        .iter()
        .find(|pair| !assignment.contains(pair))
    {
        return Err(SantaError::Generation(
            violation("missing-forced-match", "forced match absent from the assignment")
                .with_context("pair", pair.to_string()),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pair::Pair;

    fn three() -> ExchangeConfig {
        ExchangeConfig::new(["A", "B", "C"]).with_couple("A", "B")
    }

    #[test]
    fn accepts_a_valid_cycle() {
        let assignment = Assignment::from_pairs(vec![
            Pair::new("A", "C"),
            Pair::new("B", "A"),
            Pair::new("C", "B"),
        ]);
        // B -> A is a couple pair, so this one must fail
        let err = verify(&three(), &assignment).unwrap_err();
        assert_eq!(err.code(), "couple-violation");

        let config = ExchangeConfig::new(["A", "B", "C"]);
        verify(&config, &assignment).unwrap();
    }

    #[test]
    fn flags_missing_and_duplicate_roles() {
        let config = ExchangeConfig::new(["A", "B", "C"]);
        let partial = Assignment::from_pairs(vec![Pair::new("A", "B"), Pair::new("B", "A")]);
        assert_eq!(verify(&config, &partial).unwrap_err().code(), "missing-giver");

        let doubled = Assignment::from_pairs(vec![
            Pair::new("A", "B"),
            Pair::new("B", "C"),
            Pair::new("C", "B"),
        ]);
        assert_eq!(
            verify(&config, &doubled).unwrap_err().code(),
            "duplicate-receiver"
        );
    }

    #[test]
    fn forced_pairs_are_exempt_but_required() {
        let config = ExchangeConfig::new(["A", "B", "C"])
            .with_blacklist("A", "B")
            .with_forced("A", "B");
        let with_forced = Assignment::from_pairs(vec![
            Pair::new("A", "B"),
            Pair::new("B", "C"),
            Pair::new("C", "A"),
        ]);
        verify(&config, &with_forced).unwrap();

        let config = ExchangeConfig::new(["A", "B", "C"]).with_forced("A", "C");
        assert_eq!(
            verify(&config, &with_forced).unwrap_err().code(),
            "missing-forced-match"
        );
    }
}
