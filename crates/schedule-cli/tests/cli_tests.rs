//! Integration tests for the `festplan` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the list, plan,
//! conflicts, and normalize subcommands through the actual binary, including
//! the interactive prompt, config files, and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the festival.json fixture.
fn festival_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/festival.json")
}

fn festplan() -> Command {
    Command::cargo_bin("festplan").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// List subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn list_numbers_items_from_one() {
    festplan()
        .args(["list", "--catalog", festival_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Night Swim"))
        .stdout(predicate::str::contains("3. The Ferry"))
        .stdout(predicate::str::contains("4. Closing Gala"));
}

#[test]
fn list_resolves_missing_end_with_default_duration() {
    festplan()
        .args(["list", "--catalog", festival_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-03-15 19:00-20:30  Capitol"))
        .stdout(predicate::str::contains("2026-03-14 10:15-11:15  Chrysler"));
}

#[test]
fn default_duration_flag_overrides_builtin() {
    festplan()
        .args(["list", "--catalog", festival_json_path(), "--default-duration", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-03-15 19:00-19:30  Capitol"));
}

#[test]
fn config_file_sets_default_duration_and_flag_wins() {
    let config_path = std::env::temp_dir().join("festplan-test-config.toml");
    std::fs::write(&config_path, "default_duration_minutes = 45\n").unwrap();
    let config = config_path.to_str().unwrap();

    festplan()
        .args(["list", "--catalog", festival_json_path(), "--config", config])
        .assert()
        .success()
        .stdout(predicate::str::contains("19:00-19:45"));

    festplan()
        .args([
            "list",
            "--catalog",
            festival_json_path(),
            "--config",
            config,
            "--default-duration",
            "60",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("19:00-20:00"));

    let _ = std::fs::remove_file(&config_path);
}

#[test]
fn missing_catalog_fails() {
    festplan()
        .args(["list", "--catalog", "/nonexistent/festival.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Plan subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn plan_picks_the_adjacent_showing() {
    festplan()
        .args(["plan", "--catalog", festival_json_path(), "--select", "1,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 schedule."))
        .stdout(predicate::str::contains("Night Swim: 2026-03-14 11:00-12:30  Capitol"))
        .stdout(predicate::str::contains("Lowlands: 2026-03-14 10:00-11:00  Armouries"))
        .stdout(predicate::str::contains("09:00").not());
}

#[test]
fn plan_counts_schedules() {
    festplan()
        .args(["plan", "--catalog", festival_json_path(), "--select", "1,3", "--count"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn plan_count_rejects_parallel() {
    festplan()
        .args([
            "plan",
            "--catalog",
            festival_json_path(),
            "--select",
            "1,3",
            "--count",
            "--parallel",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn plan_without_feasible_schedule_explains_conflicts() {
    festplan()
        .args([
            "plan",
            "--catalog",
            festival_json_path(),
            "--select",
            "2,3",
            "--available",
            "2026-03-14",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No conflict-free schedule exists"))
        .stdout(predicate::str::contains("Lowlands"))
        .stdout(predicate::str::contains("by 45 min"));
}

#[test]
fn plan_unavailable_item_fails_with_its_name() {
    festplan()
        .args([
            "plan",
            "--catalog",
            festival_json_path(),
            "--select",
            "1,4",
            "--available",
            "2026-03-14,2026-03-15",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Closing Gala"));
}

#[test]
fn plan_out_of_range_selection_fails() {
    festplan()
        .args(["plan", "--catalog", festival_json_path(), "--select", "1,9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn plan_json_output() {
    let output = festplan()
        .args([
            "plan",
            "--catalog",
            festival_json_path(),
            "--select",
            "2,1",
            "--format",
            "json",
        ])
        .output()
        .expect("plan should run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let schedules = value.as_array().unwrap();
    assert_eq!(schedules.len(), 1);
    // Entries follow catalog number order regardless of how they were typed.
    assert_eq!(schedules[0][0]["item"], "Night Swim");
    assert_eq!(schedules[0][0]["showing"]["start"], "11:00:00");
    assert_eq!(schedules[0][1]["item"], "Lowlands");
    assert_eq!(schedules[0][1]["showing"]["location"], "Armouries");
}

#[test]
fn plan_parallel_matches_sequential() {
    let args = ["plan", "--catalog", festival_json_path(), "--select", "1,3,4"];
    let sequential = festplan().args(args).output().unwrap();
    let parallel = festplan().args(args).arg("--parallel").output().unwrap();

    assert!(sequential.status.success());
    assert_eq!(sequential.stdout, parallel.stdout);
}

#[test]
fn plan_prompts_until_valid_selection() {
    festplan()
        .args(["plan", "--catalog", festival_json_path()])
        .write_stdin("9\n1 2\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("1. Night Swim"))
        .stderr(predicate::str::contains("Selection 9 is out of range"))
        .stdout(predicate::str::contains("Found 1 schedule."));
}

#[test]
fn plan_prompt_eof_fails() {
    festplan()
        .args(["plan", "--catalog", festival_json_path()])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No selection entered"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Conflicts and normalize subcommands
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn conflicts_lists_overlapping_pairs() {
    festplan()
        .args(["conflicts", "--catalog", festival_json_path(), "--select", "1,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Night Swim (2026-03-14 09:00-10:30  Capitol) overlaps Lowlands (2026-03-14 10:00-11:00  Armouries) by 30 min",
        ));
}

#[test]
fn conflicts_none() {
    festplan()
        .args(["conflicts", "--catalog", festival_json_path(), "--select", "1,4"])
        .assert()
        .success()
        .stdout("No conflicts.\n");
}

#[test]
fn normalize_writes_explicit_end_times() {
    let output = festplan()
        .args(["normalize", "--catalog", festival_json_path()])
        .output()
        .expect("normalize should run");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ferry = &value["items"][2];
    assert_eq!(ferry["name"], "The Ferry");
    assert_eq!(ferry["showings"][0]["end"], "11:15");
    assert_eq!(ferry["showings"][1]["end"], "20:30");
    assert!(ferry["showings"][0].get("duration_minutes").is_none());
}

#[test]
fn normalize_to_file_round_trips() {
    let output_path = std::env::temp_dir().join("festplan-test-normalized.json");
    let _ = std::fs::remove_file(&output_path);
    let out = output_path.to_str().unwrap();

    festplan()
        .args(["normalize", "--catalog", festival_json_path(), "-o", out])
        .assert()
        .success();

    // The normalized file lists the same catalog, even with a different default.
    festplan()
        .args(["list", "--catalog", out, "--default-duration", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-03-15 19:00-20:30  Capitol"));

    let _ = std::fs::remove_file(&output_path);
}
