// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Basic CLI tests - help, version, argument and configuration errors

// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn piwebapi_cmd() -> Command {
    let mut cmd = Command::cargo_bin("piwebapi").expect("Failed to find piwebapi binary");
    for var in [
        "PIWEBAPI_URL",
        "PIWEBAPI_USERNAME",
        "PIWEBAPI_PASSWORD",
        "PIWEBAPI_TOKEN",
        "PIWEBAPI_INSECURE",
        "PIWEBAPI_TIMEOUT_SECS",
        "PIWEBAPI_WEBID_TYPE",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_piwebapi_version() {
    piwebapi_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("piwebapi"));
}

#[test]
fn test_piwebapi_help() {
    piwebapi_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("element"));
}

#[test]
fn test_element_help_lists_subcommands() {
    piwebapi_cmd()
        .args(["element", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("get-by-path"))
        .stdout(predicate::str::contains("children"))
        .stdout(predicate::str::contains("security-entries"));
}

#[test]
fn test_missing_url_is_reported() {
    piwebapi_cmd()
        .args(["element", "get", "F1Em"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PIWEBAPI_URL"));
}

/// A blank WebID is rejected before any connection is attempted; the URL
/// points at a closed port.
#[test]
fn test_blank_web_id_fails_locally() {
    piwebapi_cmd()
        .args(["--url", "http://127.0.0.1:9/piwebapi", "element", "get", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required parameter 'webId'"));
}

#[test]
fn test_invalid_url_is_reported() {
    piwebapi_cmd()
        .args(["--url", "ftp://pisrv/piwebapi", "element", "get", "F1Em"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported URL scheme"));
}

/// `PIWEBAPI_INSECURE=1` is accepted; the command gets as far as the
/// local parameter check.
#[test]
fn test_insecure_numeric_environment_value() {
    piwebapi_cmd()
        .env("PIWEBAPI_INSECURE", "1")
        .args(["--url", "http://127.0.0.1:9/piwebapi", "element", "get", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value").not())
        .stderr(predicate::str::contains("Missing required parameter 'webId'"));
}

