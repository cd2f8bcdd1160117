//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::no_cfg_hostinfo_command;

#[test]
fn test_invalid_timeout() {
    no_cfg_hostinfo_command()
        .arg("-t")
        .arg("soon")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--timeout' was set with an invalid value",
        ));
}

#[test]
fn test_small_timeout() {
    no_cfg_hostinfo_command()
        .arg("-t")
        .arg("99")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--timeout' must be at least"));
}

#[test]
fn test_large_timeout() {
    no_cfg_hostinfo_command()
        .arg("--timeout")
        .arg("5m")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'--timeout' must be at most"));
}

#[test]
fn test_large_timeout_number() {
    no_cfg_hostinfo_command()
        .arg("-t")
        .arg("18446744073709551616")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--timeout' was set with an invalid value",
        ));
}

#[test]
fn test_invalid_backend() {
    no_cfg_hostinfo_command()
        .arg("--backend")
        .arg("opengl")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'opengl'"));
}

#[test]
fn test_empty_lspci_command() {
    no_cfg_hostinfo_command()
        .arg("--lspci-command")
        .arg(" ")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'--lspci-command' was set with an invalid value",
        ));
}

#[test]
fn test_help_headings() {
    no_cfg_hostinfo_command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Display Options"))
        .stdout(predicate::str::contains("Output Options"));
}

#[test]
fn test_version() {
    no_cfg_hostinfo_command()
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_default_config() {
    no_cfg_hostinfo_command()
        .arg("--default-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("#[display]"))
        .stdout(predicate::str::contains("#backend = \"lspci\""));
}
