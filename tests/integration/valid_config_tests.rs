//! Tests that run the full report with valid configs.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{hostinfo_command, no_cfg_hostinfo_command};

#[test]
fn test_empty_config() {
    no_cfg_hostinfo_command()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Local System Information:\n"))
        .stdout(predicate::str::is_match(r"Total RAM = \d+ bytes \(").unwrap())
        .stdout(predicate::str::contains("Available RAM = "))
        .stdout(predicate::str::contains("Graphics Device = "));
}

#[test]
fn test_full_config() {
    hostinfo_command(&["-C", "./tests/valid_configs/all_display_options.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total RAM = "));
}

#[test]
fn test_json_output() {
    let output = no_cfg_hostinfo_command().arg("--json").output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let total = json["total_ram"].as_u64().unwrap();
    let available = json["available_ram"].as_u64().unwrap();

    assert!(total > 0);
    assert!(available <= total);
    assert!(json.get("graphics_device").is_some());
    assert!(json["arch"].is_string());
}

#[test]
fn test_legacy_output() {
    no_cfg_hostinfo_command()
        .arg("--legacy")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"Total RAM = \d+ bytes\n").unwrap());
}

#[cfg(target_os = "linux")]
#[test]
fn test_lspci_command_output_is_parsed() {
    no_cfg_hostinfo_command()
        .arg("--lspci-command")
        .arg("echo 00:02.0 VGA compatible controller: Example Graphics 9000")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Graphics Device = Example Graphics 9000\n",
        ));
}

#[cfg(target_os = "linux")]
#[test]
fn test_failing_device_query_is_unknown() {
    hostinfo_command(&["-C", "./tests/valid_configs/missing_lspci.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Graphics Device = unknown\n"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_failing_device_query_is_null_in_legacy_mode() {
    hostinfo_command(&["-C", "./tests/valid_configs/missing_lspci.toml", "--legacy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Graphics Device = null\n"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_failing_device_query_is_null_in_json() {
    let output = hostinfo_command(&["-C", "./tests/valid_configs/missing_lspci.toml", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["graphics_device"].is_null());
}

#[cfg(all(target_os = "linux", not(feature = "sdl")))]
#[test]
fn test_sdl_backend_without_the_feature_is_unknown() {
    no_cfg_hostinfo_command()
        .args(["--backend", "sdl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Graphics Device = unknown\n"));
}
