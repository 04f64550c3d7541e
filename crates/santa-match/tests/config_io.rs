use std::fs;

use santa_match::{
    config_from_json_str, config_from_yaml_str, load_assignment, load_config, to_yaml_string,
    ExchangeConfig, Pair, Preset,
};

const FAMILY_YAML: &str = r#"
participants: [Shano, Charl, Avvie, Mel]
couples:
  - [Avvie, Shano]
blacklist:
  - [Mel, Charl]
forced_matches:
  - [Charl, Mel]
"#;

#[test]
fn yaml_configs_use_two_element_pairs() {
    let config = config_from_yaml_str(FAMILY_YAML).unwrap();
    assert_eq!(config.participants.len(), 4);
    assert_eq!(config.couples, vec![Pair::new("Avvie", "Shano")]);
    assert_eq!(config.blacklist, vec![Pair::new("Mel", "Charl")]);
    assert_eq!(config.forced_matches, vec![Pair::new("Charl", "Mel")]);
}

#[test]
fn json_accepts_camel_case_forced_matches() {
    let json = r#"{
        "participants": ["A", "B", "C", "D"],
        "forcedMatches": [["A", "C"]]
    }"#;
    let config = config_from_json_str(json).unwrap();
    assert_eq!(config.forced_matches, vec![Pair::new("A", "C")]);
    assert!(config.couples.is_empty());
    assert!(config.blacklist.is_empty());
}

#[test]
fn malformed_pairs_are_serde_errors() {
    let err = config_from_json_str(r#"{"participants": ["A"], "couples": [["A"]]}"#).unwrap_err();
    assert_eq!(err.code(), "json_deserialize");
    let err = config_from_yaml_str("couples: []").unwrap_err();
    assert_eq!(err.code(), "yaml_deserialize");
}

#[test]
fn presets_round_trip_through_yaml_files() {
    let dir = tempfile::tempdir().unwrap();
    for preset in Preset::ALL {
        let path = dir.path().join(format!("{}.yaml", preset.name()));
        fs::write(&path, to_yaml_string(&preset.config()).unwrap()).unwrap();
        let loaded: ExchangeConfig = load_config(&path).unwrap();
        assert_eq!(loaded, preset.config());
    }
}

#[test]
fn json_files_are_detected_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("exchange.JSON");
    fs::write(&config_path, r#"{"participants": ["A", "B"]}"#).unwrap();
    assert_eq!(
        load_config(&config_path).unwrap(),
        ExchangeConfig::new(["A", "B"])
    );

    let assignment_path = dir.path().join("assignment.json");
    fs::write(&assignment_path, r#"[["A", "B"], ["B", "A"]]"#).unwrap();
    let assignment = load_assignment(&assignment_path).unwrap();
    assert_eq!(assignment.receiver_of("B").unwrap().as_str(), "A");
}

#[test]
fn missing_files_are_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(&dir.path().join("absent.yaml")).unwrap_err();
    assert_eq!(err.code(), "config-read");
    assert!(err.info().context.contains_key("path"));
}
