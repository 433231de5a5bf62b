//! Integration tests for the travel-assistant CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("travel-assistant").expect("binary is built");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Test that the CLI shows help when run without arguments
#[test]
fn test_cli_help_without_args() {
    cli()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Budget, season and type based"));
}

#[test]
fn test_cli_explicit_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("recommend"))
        .stdout(predicate::str::contains("weather"))
        .stdout(predicate::str::contains("map"));
}

#[test]
fn test_recommend_spring_under_three() {
    cli()
        .args(["recommend", "--budget", "3", "--season", "Spring", "--month", "4", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paris - City"))
        .stdout(predicate::str::contains("Rome - Historical"))
        .stdout(predicate::str::contains("Tokyo").not())
        .stdout(predicate::str::contains("(Spring season)"));
}

#[test]
fn test_recommend_no_matches_is_not_an_error() {
    cli()
        .args(["recommend", "--budget", "1", "--month", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Try being more flexible"));
}

#[test]
fn test_recommend_json_output() {
    let output = cli()
        .args(["recommend", "--type", "beach", "--month", "7", "--seed", "3", "--json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let cards = value["recommendations"].as_array().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["destination"]["name"], "Bali");
    assert_eq!(cards[0]["weather"]["season"], "Summer");
    assert_eq!(value["preferences"]["category"], "Beach");
    assert_eq!(value["preferences"]["season"], "Any");
}

#[test]
fn test_same_seed_same_output() {
    let run = || {
        cli()
            .args(["recommend", "--month", "10", "--seed", "42"])
            .output()
            .expect("Failed to execute command")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_invalid_budget_rejected() {
    cli()
        .args(["recommend", "--budget", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_invalid_season_rejected() {
    cli()
        .args(["recommend", "--season", "Monsoon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown season"));
}

#[test]
fn test_invalid_month_rejected() {
    cli()
        .args(["weather", "--month", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_recommend_invalid_month_rejected_without_matches() {
    cli()
        .args(["recommend", "--budget", "1", "--month", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_weather_for_destination() {
    cli()
        .args(["weather", "--destination", "tokyo", "--month", "1", "--seed", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Weather for Tokyo"))
        .stdout(predicate::str::contains("❄️ Cold"))
        .stdout(predicate::str::contains("(Winter season)"));
}

#[test]
fn test_weather_unknown_destination() {
    cli()
        .args(["weather", "--destination", "Atlantis", "--month", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown destination"));
}

#[test]
fn test_catalog_listing() {
    cli()
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("New York"))
        .stdout(predicate::str::contains("Indonesia"));
}

#[test]
fn test_custom_catalog() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"name": "Lisbon", "category": "City", "budget_level": 1, "best_season": "Spring",
            "description": "Hills and trams", "country": "Portugal"}}]"#
    )
    .unwrap();

    cli()
        .arg("--catalog")
        .arg(file.path())
        .args(["recommend", "--budget", "1", "--month", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lisbon - City"));
}

#[test]
fn test_config_defaults_apply_when_flags_omitted() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[defaults]\nbudget = 2").unwrap();

    cli()
        .arg("--config")
        .arg(file.path())
        .args(["recommend", "--month", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bali"))
        .stdout(predicate::str::contains("Paris").not());
}

/// Map lookups against an unreachable service degrade to a warning
#[test]
fn test_map_unreachable_service_warns() {
    let file = unreachable_geocoder_config();

    cli()
        .arg("--config")
        .arg(file.path())
        .args(["map", "Paris"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unavailable"));
}

fn unreachable_geocoder_config() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[geocoding]\nbase_url = \"http://127.0.0.1:9\"\nmax_retries = 0\ntimeout_seconds = 2"
    )
    .unwrap();
    file
}

/// Every card gets its own map warning when the service is down
#[test]
fn test_recommend_with_map_warns_per_card() {
    let config = unreachable_geocoder_config();

    let output = cli()
        .arg("--config")
        .arg(config.path())
        .args(["recommend", "--season", "Spring", "--month", "4", "--seed", "1", "--map"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Paris - City"));
    assert!(stdout.contains("Rome - Historical"));
    assert_eq!(stdout.matches("Map service unavailable").count(), 2);
}

#[test]
fn test_recommend_json_with_map() {
    let config = unreachable_geocoder_config();

    let output = cli()
        .arg("--config")
        .arg(config.path())
        .args(["recommend", "--type", "Beach", "--month", "7", "--seed", "3", "--json", "--map"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let cards = value["recommendations"].as_array().unwrap();
    assert_eq!(cards.len(), 1);

    let map = &cards[0]["map"];
    assert_eq!(map["status"], "unavailable");
    assert_eq!(map["query"], "Bali");
    assert_eq!(map["code"], "geocode_network_error");
}

/// The shipped sample configuration loads and validates
#[test]
fn test_sample_config_file() {
    cli()
        .args(["--config", "config/default.toml", "catalog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paris"));
}
