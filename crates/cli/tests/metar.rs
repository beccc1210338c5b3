use assert_cmd::Command;
use predicates::str::contains;

fn metar() -> Command {
    Command::cargo_bin("metar").expect("metar bin")
}

#[test]
fn classifies_a_single_report() {
    metar()
        .arg("KXXX 011200Z 00000KT 1/2SM FG BKN003 12/12 A2992")
        .assert()
        .success()
        .stdout("LIFR\n");
}

#[test]
fn placeholder_reports_are_unknown() {
    metar().arg("N/A").assert().success().stdout("UNKNOWN\n");
}

#[test]
fn reads_reports_from_stdin() {
    metar()
        .write_stdin("EGLL 9999 FEW040\n\nK 1 1/2SM BKN020\n")
        .assert()
        .success()
        .stdout("VFR\nUNKNOWN\nIFR\n");
}

#[test]
fn details_show_visibility_and_ceiling() {
    metar()
        .args(["--details", "X 9999 BKN040 OVC012"])
        .assert()
        .success()
        .stdout(contains("MVFR (vis 7.00 sm, ceiling 1200 ft)"));
}
