//! CLI integration tests for terrain decryption
//!
//! These tests run real invocations of the binary against captured
//! terrain fixtures and check output files and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const ATT_SMALL: &[u8] =
    include_bytes!("../../file-formats/world-data/mu-terrain/tests/data/att_small.bin");
const ATT_SMALL_DEC: &[u8] =
    include_bytes!("../../file-formats/world-data/mu-terrain/tests/data/att_small.dec");
const MAP_WINDOWS: &[u8] =
    include_bytes!("../../file-formats/world-data/mu-terrain/tests/data/map_windows.bin");
const MAP_WINDOWS_DEC: &[u8] =
    include_bytes!("../../file-formats/world-data/mu-terrain/tests/data/map_windows.dec");

fn mu_rs() -> Command {
    Command::cargo_bin("mu-rs").expect("binary built")
}

#[test]
fn decrypts_att_file_to_explicit_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("EncTerrain1.att");
    let output = dir.path().join("Terrain1.att");
    fs::write(&input, ATT_SMALL).unwrap();

    mu_rs()
        .args(["terrain", "decrypt"])
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::starts_with("OK 64"));

    assert_eq!(fs::read(&output).unwrap(), ATT_SMALL_DEC);
}

#[test]
fn decrypts_map_file_to_default_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("EncTerrain1.bin");
    fs::write(&input, MAP_WINDOWS).unwrap();

    mu_rs()
        .args(["terrain", "decrypt"])
        .arg(&input)
        .assert()
        .success();

    // Output path takes the extension of the detected asset kind
    let output = dir.path().join("EncTerrain1.map");
    assert_eq!(fs::read(&output).unwrap(), MAP_WINDOWS_DEC);
}

#[test]
fn refuses_default_output_that_is_the_input() {
    // A canonically named input resolves to itself as the default output;
    // the encrypted source must not be overwritten.
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("EncTerrain1.att");
    fs::write(&input, ATT_SMALL).unwrap();

    mu_rs()
        .args(["terrain", "decrypt"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is the input file"));

    assert_eq!(fs::read(&input).unwrap(), ATT_SMALL);
}

#[test]
fn refuses_explicit_output_that_is_the_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("EncTerrain1.att");
    fs::write(&input, ATT_SMALL).unwrap();

    mu_rs()
        .args(["terrain", "decrypt"])
        .arg(&input)
        .arg(&input)
        .assert()
        .failure();

    assert_eq!(fs::read(&input).unwrap(), ATT_SMALL);
}

#[test]
fn missing_input_exits_with_io_code() {
    let dir = TempDir::new().unwrap();
    mu_rs()
        .args(["terrain", "decrypt"])
        .arg(dir.path().join("nonexistent.att"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn unknown_magic_exits_with_format_code() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bogus.att");
    let mut raw = ATT_SMALL.to_vec();
    raw[..4].copy_from_slice(b"XYZ\x01");
    fs::write(&input, &raw).unwrap();

    mu_rs()
        .args(["terrain", "decrypt"])
        .arg(&input)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown magic"));

    // No output file is produced on failure
    assert!(!dir.path().join("bogus.map").exists());
}

#[test]
fn truncated_body_exits_with_decrypt_code() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("short.att");
    fs::write(&input, &ATT_SMALL[..24]).unwrap();

    mu_rs()
        .args(["terrain", "decrypt"])
        .arg(&input)
        .assert()
        .code(5);
}

#[test]
fn legacy_flag_skips_magic_detection() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("EncTerrain1.map");
    // Legacy files carry no magic; any bytes are accepted
    fs::write(&input, [0x10u8; 32]).unwrap();

    mu_rs()
        .args(["terrain", "decrypt", "--legacy", "map"])
        .arg(&input)
        .arg(dir.path().join("out.map"))
        .assert()
        .success();

    assert_eq!(fs::read(dir.path().join("out.map")).unwrap().len(), 32);
}

#[test]
fn info_reports_kind_and_ciphers() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("EncTerrain1.att");
    fs::write(&input, ATT_SMALL).unwrap();

    mu_rs()
        .args(["terrain", "info"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("ATT terrain data"))
        .stdout(predicate::str::contains("Stage 1"))
        .stdout(predicate::str::contains("Stage 2"));
}

#[test]
fn info_on_unknown_magic_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bogus.bin");
    fs::write(&input, b"XYZ\x01payload").unwrap();

    mu_rs()
        .args(["terrain", "info"])
        .arg(&input)
        .assert()
        .code(4);
}

#[test]
fn completions_generate() {
    mu_rs()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mu-rs"));
}
