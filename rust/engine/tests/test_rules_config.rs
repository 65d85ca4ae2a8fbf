use std::io::Write;

use ofc_engine::errors::RulesError;
use ofc_engine::rules::{BonusTable, ScoreRules, RULES_PATH_VAR, SCOOP_VAR};
use serial_test::serial;
use tempfile::NamedTempFile;

fn write_temp(suffix: &str, body: &str) -> NamedTempFile {
    let mut f = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp file");
    f.write_all(body.as_bytes()).expect("write rules");
    f
}

#[test]
fn loads_toml_file() {
    let f = write_temp(
        ".toml",
        "back = [2, 4, 6, 10, 15, 25]\nmid = [4, 8, 12, 20, 30, 50]\nfront = true\n",
    );
    let rules = ScoreRules::load(f.path()).unwrap();
    assert_eq!(rules, ScoreRules::standard());
}

#[test]
fn loads_json_file() {
    let f = write_temp(".json", r#"{"back": [1, 1, 1, 1, 1, 1], "scoop": 0}"#);
    let rules = ScoreRules::load(f.path()).unwrap();
    assert_eq!(rules.back, Some(BonusTable::new([1; 6])));
    assert_eq!(rules.scoop, 0);
    assert!(!rules.front);
}

#[test]
fn malformed_tables_load_but_fail_validation() {
    let rules = ScoreRules::from_toml_str("mid = [1, 2, 3]\n").unwrap();
    assert!(rules.validate().is_err());
    assert!(ScoreRules::standard().validate().is_ok());
}

#[test]
fn parse_errors_are_reported() {
    assert!(matches!(
        ScoreRules::from_toml_str("scoop = \"many\""),
        Err(RulesError::Toml(_))
    ));
    assert!(matches!(
        ScoreRules::from_json_str("{"),
        Err(RulesError::Json(_))
    ));
    assert!(matches!(
        ScoreRules::load("/nonexistent/ofc/rules.toml"),
        Err(RulesError::Io(_))
    ));
}

#[test]
#[serial]
fn env_selects_file_and_scoop() {
    let f = write_temp(".toml", "front = true\nscoop = 2\n");
    std::env::set_var(RULES_PATH_VAR, f.path());
    std::env::remove_var(SCOOP_VAR);
    let rules = ScoreRules::load_from_env().unwrap();
    assert!(rules.front);
    assert_eq!(rules.scoop, 2);

    std::env::set_var(SCOOP_VAR, "9");
    assert_eq!(ScoreRules::load_from_env().unwrap().scoop, 9);

    std::env::remove_var(RULES_PATH_VAR);
    std::env::remove_var(SCOOP_VAR);
}

#[test]
#[serial]
fn env_defaults_and_bad_scoop() {
    std::env::remove_var(RULES_PATH_VAR);
    std::env::remove_var(SCOOP_VAR);
    assert_eq!(ScoreRules::load_from_env().unwrap(), ScoreRules::default());

    std::env::set_var(SCOOP_VAR, "lots");
    assert!(matches!(
        ScoreRules::load_from_env(),
        Err(RulesError::Env { .. })
    ));
    std::env::remove_var(SCOOP_VAR);
}

#[test]
fn front_table_switches_front_royalties_on() {
    let json = ScoreRules::from_json_str(r#"{"front": [0, 0, 0, 0, 0, 0]}"#).unwrap();
    assert!(json.front);
    let toml = ScoreRules::from_toml_str("front = [0, 0, 0, 0, 0, 0]\n").unwrap();
    assert!(toml.front);

    let off = ScoreRules::from_json_str(r#"{"front": false}"#).unwrap();
    assert!(!off.front);
    let null = ScoreRules::from_json_str(r#"{"front": null}"#).unwrap();
    assert!(!null.front);
    assert!(matches!(
        ScoreRules::from_json_str(r#"{"front": "yes"}"#),
        Err(RulesError::Json(_))
    ));
}
