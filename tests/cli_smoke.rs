#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! Each test points `XDG_CONFIG_HOME` at an empty directory so a user's
//! config file cannot leak in. Nothing here reaches the network.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn gtrans(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gtrans").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    gtrans(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Google Translate"))
        .stdout(predicate::str::contains("--to"))
        .stdout(predicate::str::contains("--from"))
        .stdout(predicate::str::contains("--raw"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    gtrans(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_languages_list() {
    let home = TempDir::new().unwrap();
    gtrans(&home)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("auto"))
        .stdout(predicate::str::contains("zh-CN"))
        .stdout(predicate::str::contains("ja"));
}

#[test]
fn test_invalid_language_code() {
    let home = TempDir::new().unwrap();
    gtrans(&home)
        .args(["--to", "invalid_lang_xyz"])
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid language code"));
}

#[test]
fn test_same_source_and_target_rejected() {
    let home = TempDir::new().unwrap();
    gtrans(&home)
        .args(["--from", "en", "--to", "en"])
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be the same"));
}

#[test]
fn test_empty_stdin_rejected() {
    let home = TempDir::new().unwrap();
    gtrans(&home)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input is empty"));
}

#[test]
fn test_original_audio_requires_source() {
    let home = TempDir::new().unwrap();
    gtrans(&home)
        .args(["audio", "--original"])
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source language cannot be auto"));
}

#[test]
fn test_original_audio_prints_url() {
    let home = TempDir::new().unwrap();
    gtrans(&home)
        .args(["audio", "--original", "--from", "en", "--to", "ja"])
        .write_stdin("hello\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "https://translate.google.com/translate_tts?",
        ))
        .stdout(predicate::str::contains("client=tw-ob"))
        .stdout(predicate::str::contains("tl=en"))
        .stdout(predicate::str::contains("q=hello&"));
}

#[test]
fn test_audio_reads_text_from_file_argument() {
    let home = TempDir::new().unwrap();
    let notes = home.path().join("notes.txt");
    std::fs::write(&notes, "Bonjour\n").unwrap();

    gtrans(&home)
        .args(["audio", "--original", "--from", "fr"])
        .arg(&notes)
        .assert()
        .success()
        .stdout(predicate::str::contains("q=Bonjour&"))
        .stdout(predicate::str::contains("tl=fr"))
        .stdout(predicate::str::contains("notes.txt").not());
}

#[test]
fn test_missing_input_file_is_reported() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("missing.txt");

    gtrans(&home)
        .args(["--from", "en", "--to", "ja"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to access file"));
}

#[test]
fn test_configure_show_without_config() {
    let home = TempDir::new().unwrap();
    gtrans(&home)
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current defaults"))
        .stdout(predicate::str::contains("(built-in)"));
}

#[test]
fn test_configure_show_reads_config_file() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("gtrans");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[gtrans]\ntarget = \"ja\"\n").unwrap();

    gtrans(&home)
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ja"));
}

#[test]
fn test_audio_help() {
    let home = TempDir::new().unwrap();
    gtrans(&home)
        .args(["audio", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--original"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--to"));
}
