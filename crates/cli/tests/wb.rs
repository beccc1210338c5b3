use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn wb() -> Command {
    Command::cargo_bin("wb").expect("wb bin")
}

#[test]
fn typical_load_is_within_limits() {
    wb().args(["--pilot", "180", "--rear-seats", "0", "--fuel-gal", "50"])
        .assert()
        .success()
        .stdout(contains("=== Weight & Balance: C182T ==="))
        .stdout(contains("Takeoff         : 2450 lb"))
        .stdout(contains("WITHIN LIMITS"))
        .stdout(contains("WARNING").not());
}

#[test]
fn overweight_load_warns_but_exits_cleanly() {
    wb().args([
        "--pilot",
        "400",
        "--co-pilot",
        "400",
        "--fuel-gal",
        "55",
    ])
    .assert()
    .success()
    .stdout(contains("OUT OF LIMITS"))
    .stdout(contains("WARNING: takeoff CG"));
}

#[test]
fn baggage_over_compartment_limit_is_flagged() {
    wb().args(["--pilot", "180", "--baggage-b", "90"])
        .assert()
        .success()
        .stdout(contains("WARNING: Baggage B is over its limit"));
}

#[test]
fn kilogram_entry_is_converted_to_pounds() {
    // 80 kg -> 176.37 lb -> 176 lb
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("sheet.csv");
    wb().args(["--pilot", "80", "--unit", "kg", "--csv"])
        .arg(&csv)
        .assert()
        .success();
    let written = std::fs::read_to_string(&csv).unwrap();
    assert!(written.contains("pilot,Pilot,176.0,41.0,7216.0"), "{written}");
}

#[test]
fn saved_profile_can_be_reloaded() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("profiles.json");

    wb().args(["--pilot", "190", "--fuel-gal", "60", "--save-profile", "solo", "--profiles"])
        .arg(&store)
        .assert()
        .success()
        .stdout(contains("Saved profile 'solo'"));

    wb().args(["--profile", "solo", "--profiles"])
        .arg(&store)
        .assert()
        .success()
        .stdout(contains("Pilot           :   190 lb"));
}

#[test]
fn legacy_profile_store_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("profiles.json");
    std::fs::write(
        &store,
        r#"[{ "name": "old", "weights": { "frontSeats": 340, "coPilot": 150, "fuel": 240 } }]"#,
    )
    .unwrap();

    wb().args(["--profile", "old", "--profiles"])
        .arg(&store)
        .assert()
        .success()
        .stdout(contains("Pilot           :   340 lb"))
        .stdout(contains("Co-Pilot").not());
}

#[test]
fn unknown_profile_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    wb().args(["--profile", "nobody", "--profiles"])
        .arg(dir.path().join("profiles.json"))
        .assert()
        .failure()
        .stderr(contains("profile 'nobody' not found"));
}

#[test]
fn json_load_sheet_goes_to_stdout() {
    wb().args(["--pilot", "180", "--json", "-"])
        .assert()
        .success()
        .stdout(contains("\"airframe\": \"C182T\""))
        .stdout(contains("\"isWithinLimits\": true"));
}
