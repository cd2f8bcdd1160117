//! These tests are for testing some invalid config-file-specific options.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::hostinfo_command;

#[test]
fn test_toml_mismatch_type() {
    hostinfo_command(&["-C", "./tests/invalid_configs/toml_mismatch_type.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid type"));
}

#[test]
fn test_invalid_backend() {
    hostinfo_command(&["-C", "./tests/invalid_configs/invalid_backend.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown variant"));
}

#[test]
fn test_unknown_key() {
    hostinfo_command(&["-C", "./tests/invalid_configs/unknown_key.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field"));
}

#[test]
fn test_invalid_timeout() {
    hostinfo_command(&["-C", "./tests/invalid_configs/invalid_timeout.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'timeout' was set with an invalid value",
        ));
}

#[test]
fn test_small_timeout() {
    hostinfo_command(&["-C", "./tests/invalid_configs/small_timeout.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'timeout' must be at least"));
}

#[test]
fn test_missing_config_file() {
    hostinfo_command(&["-C", "./tests/invalid_configs/does_not_exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unable to properly parse or read the config file.",
        ))
        .stderr(predicate::str::contains("Could not read the config file: "));
}
