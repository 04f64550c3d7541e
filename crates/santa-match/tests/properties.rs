use std::collections::BTreeSet;

use proptest::prelude::*;
use santa_match::{generate, verify, ExchangeConfig, GeneratorOptions, Pair};

fn build_config(
    n: usize,
    couples: &[(usize, usize)],
    blacklist: &[(usize, usize)],
    forced: Option<(usize, usize)>,
) -> ExchangeConfig {
    let names: Vec<String> = (0..n).map(|idx| format!("p{idx}")).collect();
    let mut config = ExchangeConfig::new(names.iter().cloned());
    for &(a, b) in couples {
        config = config.with_couple(names[a % n].clone(), names[b % n].clone());
    }
    for &(g, r) in blacklist {
        config = config.with_blacklist(names[g % n].clone(), names[r % n].clone());
    }
    if let Some((g, r)) = forced {
        let (g, r) = (g % n, r % n);
        if g != r {
            config = config.with_forced(names[g].clone(), names[r].clone());
        }
    }
    config
}

fn check_bijection(config: &ExchangeConfig, pairs: &[Pair]) {
    let givers: BTreeSet<_> = pairs.iter().map(|pair| pair.giver.clone()).collect();
    let receivers: BTreeSet<_> = pairs.iter().map(|pair| pair.receiver.clone()).collect();
    let everyone: BTreeSet<_> = config.participants.iter().cloned().collect();
    assert_eq!(pairs.len(), config.participants.len());
    assert_eq!(givers, everyone);
    assert_eq!(receivers, everyone);
}

proptest! {
    #[test]
    fn generated_assignments_honour_every_rule(
        seed in any::<u64>(),
        n in 2usize..12,
        couples in prop::collection::vec((0usize..12, 0usize..12), 0..4),
        blacklist in prop::collection::vec((0usize..12, 0usize..12), 0..6),
        forced in prop::option::of((0usize..12, 0usize..12)),
    ) {
        let config = build_config(n, &couples, &blacklist, forced);
        let options = GeneratorOptions { max_attempts: 200, seed: Some(seed) };
        match generate(&config, &options) {
            Ok(report) => {
                check_bijection(&config, report.assignment.pairs());
                for pair in &report.assignment {
                    prop_assert!(!pair.is_self_pair());
                    if !config.forced_matches.contains(pair) {
                        prop_assert!(!config.is_excluded(&pair.giver, &pair.receiver));
                    }
                }
                for pair in &config.forced_matches {
                    prop_assert!(report.assignment.contains(pair));
                }
                prop_assert!(verify(&config, &report.assignment).is_ok());
            }
            Err(err) => prop_assert!(err.is_generation()),
        }
    }

    #[test]
    fn unconstrained_exchanges_always_succeed(seed in any::<u64>(), n in 2usize..30) {
        let config = build_config(n, &[], &[], None);
        let report = generate(&config, &GeneratorOptions::seeded(seed)).unwrap();
        check_bijection(&config, report.assignment.pairs());
        prop_assert!(report.assignment.iter().all(|pair| !pair.is_self_pair()));
    }
}
