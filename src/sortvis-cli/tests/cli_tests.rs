//! End-to-end runs of the `sortvis` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary with config and cache dirs pointed into `home`.
fn sortvis(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sortvis").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_CACHE_HOME", home.path().join("cache"))
        .env_remove("SORTVIS_CONFIG")
        .env_remove("SORTVIS_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

fn output_values(stdout: &str) -> Vec<u32> {
    let line = stdout
        .lines()
        .find(|l| l.starts_with("output:"))
        .expect("no output line");
    let inner = line
        .trim_start_matches("output:")
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']');
    if inner.is_empty() {
        return Vec::new();
    }
    inner.split(", ").map(|v| v.parse().unwrap()).collect()
}

#[test]
fn test_headless_sorts_with_every_algorithm() {
    let home = TempDir::new().unwrap();
    for algorithm in [
        "bubble",
        "unoptimized-bubble",
        "quicksort",
        "shellsort",
        "insertion",
    ] {
        let assert = sortvis(&home)
            .args(["--headless", "--algorithm", algorithm, "-n", "25", "--seed", "4"])
            .assert()
            .success()
            .stdout(predicate::str::contains("completed: "));

        let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
        let values = output_values(&stdout);
        assert_eq!(values.len(), 25, "{algorithm}");
        assert!(values.windows(2).all(|w| w[0] <= w[1]), "{algorithm}: {values:?}");
    }
}

#[test]
fn test_seed_makes_runs_reproducible() {
    let home = TempDir::new().unwrap();
    let run = || {
        let output = sortvis(&home)
            .args(["--headless", "-n", "15", "--max-value", "200", "--seed", "77"])
            .output()
            .unwrap();
        String::from_utf8(output.stdout).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_empty_input() {
    let home = TempDir::new().unwrap();
    sortvis(&home)
        .args(["--headless", "-n", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output:    []"))
        .stdout(predicate::str::contains("completed: 0 comparisons"));
}

#[test]
fn test_config_file_selects_algorithm() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    std::fs::write(&config, "algorithm = \"quicksort\"\nsize = 8\nseed = 2\n").unwrap();

    sortvis(&home)
        .arg("--headless")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm: Quicksort"))
        .stdout(predicate::str::contains("partitions"));
}

#[test]
fn test_env_config_is_used_and_flags_win() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("env.toml");
    std::fs::write(&config, "algorithm = \"quicksort\"\nsize = 8\n").unwrap();

    sortvis(&home)
        .env("SORTVIS_CONFIG", &config)
        .args(["--headless", "--algorithm", "insertion"])
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm: Insert sort"));
}

#[test]
fn test_loose_names_from_flags_and_config() {
    let home = TempDir::new().unwrap();
    sortvis(&home)
        .args(["--headless", "--speed", "turbo", "--algorithm", "quick", "-n", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm: Quicksort"))
        .stdout(predicate::str::contains("completed: "));

    let config = home.path().join("menu.toml");
    std::fs::write(&config, "algorithm = \"Insert sort\"\nspeed = \"turbo\"\nsize = 6\n")
        .unwrap();
    sortvis(&home)
        .arg("--headless")
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm: Insert sort"));
}

#[test]
fn test_missing_config_file_fails() {
    let home = TempDir::new().unwrap();
    sortvis(&home)
        .args(["--headless", "--config"])
        .arg(home.path().join("missing.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn test_bad_config_file_fails() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("bad.toml");
    std::fs::write(&config, "algorithm = \"bogosort\"\n").unwrap();

    sortvis(&home)
        .args(["--headless", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config file"));
}

#[test]
fn test_negative_delay_is_rejected() {
    let home = TempDir::new().unwrap();
    sortvis(&home)
        .args(["--headless", "--delay=-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid delay"));
}

#[test]
fn test_interactive_needs_a_terminal() {
    let home = TempDir::new().unwrap();
    sortvis(&home)
        .arg("--log-file")
        .arg(home.path().join("sortvis.log"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--headless"));
}

#[test]
fn test_unknown_algorithm_flag() {
    let home = TempDir::new().unwrap();
    sortvis(&home)
        .args(["--headless", "--algorithm", "bogo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bogo"));
}
