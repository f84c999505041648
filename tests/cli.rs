use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

const BINARY_NAME: &str = "vista";

/// Helper to get a temporary home directory
fn temp_home() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".vista").join("config.json")
}

fn vista(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()); // simulate different $HOME
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let tmp = temp_home();
    vista(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Tabs are listed with their ids, in navigation order.
fn tabs_lists_every_tab_in_order() {
    let tmp = temp_home();
    let output = vista(&tmp).arg("tabs").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let ids: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split('\t').next())
        .collect();
    assert_eq!(
        ids,
        [
            "overview",
            "voice",
            "interpretation",
            "storyline",
            "trajectory",
            "alignment",
            "meta",
            "methods",
            "export"
        ]
    );
    assert!(stdout.contains("methods\tMethods & Models"));
}

#[test]
fn snapshot_renders_requested_tab() {
    let tmp = temp_home();
    vista(&tmp)
        .args(["snapshot", "--tab", "alignment"])
        .assert()
        .success()
        .stdout(contains("Theme-Pillar Alignment Heatmap"))
        .stdout(contains("Last Updated: 2024-03-15 14:30 UTC"));
}

#[test]
/// Without a flag, the snapshot opens on the tab stored in the config file.
fn snapshot_uses_configured_start_tab() {
    let tmp = temp_home();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, r#"{"start_tab": "methods"}"#).unwrap();

    vista(&tmp)
        .arg("snapshot")
        .assert()
        .success()
        .stdout(contains("Technical Specifications"));
}

#[test]
/// Narrow terminals squeeze the bar chart panels without aborting.
fn snapshot_renders_bar_panels_on_narrow_terminals() {
    let tmp = temp_home();
    for (tab, width) in [("voice", "12"), ("voice", "20"), ("alignment", "30"), ("meta", "41")] {
        vista(&tmp)
            .args(["snapshot", "--tab", tab, "--width", width, "--height", "20"])
            .assert()
            .success();
    }
}

#[test]
fn snapshot_rejects_malformed_config() {
    let tmp = temp_home();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{ not json").unwrap();

    vista(&tmp).arg("snapshot").assert().failure();
}

#[test]
/// Config updates are merged into the saved file and picked up by later commands.
fn config_saves_settings_for_later_runs() {
    let tmp = temp_home();
    let config_path = config_file_path(&tmp);

    vista(&tmp)
        .args(["config", "--start-tab", "meta"])
        .assert()
        .success()
        .stdout(contains("Configuration saved to"));
    vista(&tmp)
        .args(["config", "--background-color", "false"])
        .assert()
        .success();

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config_path).unwrap()).unwrap();
    assert_eq!(saved["start_tab"], "meta");
    assert_eq!(saved["with_background_color"], false);

    vista(&tmp)
        .arg("snapshot")
        .assert()
        .success()
        .stdout(contains("Momentum Index"));
}

#[test]
/// Export writes a JSON document holding one entry per selected section.
fn export_writes_selected_sections() {
    let tmp = temp_home();
    let out = tmp.path().join("out.json");

    vista(&tmp)
        .args([
            "export",
            "--format",
            "dashboard",
            "--section",
            "trajectory",
            "--section",
            "alignment",
            "--range",
            "q1_2024",
            "--output",
        ])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Sections: 2"))
        .stdout(contains("Date Range: q1_2024"))
        .stdout(contains("Export written to"));

    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let sections = document["sections"].as_object().unwrap();
    let keys: Vec<&str> = sections.keys().map(String::as_str).collect();
    assert_eq!(keys, ["trajectory", "alignment"]);
    assert_eq!(document["date_range"], "q1_2024");
}

#[test]
fn export_into_directory_names_the_file() {
    let tmp = temp_home();
    let out_dir = tmp.path().join("exports");
    fs::create_dir_all(&out_dir).unwrap();

    vista(&tmp)
        .args(["export", "--output"])
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(contains("Sections: 3"));

    let written: Vec<_> = fs::read_dir(&out_dir).unwrap().collect();
    assert_eq!(written.len(), 1);
}

#[test]
fn export_with_only_the_export_tab_fails() {
    let tmp = temp_home();
    vista(&tmp)
        .args(["export", "--section", "export"])
        .assert()
        .failure()
        .stderr(contains("No sections selected for export"));
}

#[test]
fn unknown_tab_ids_are_rejected() {
    let tmp = temp_home();
    vista(&tmp)
        .args(["export", "--section", "dashboard"])
        .assert()
        .failure()
        .stderr(contains("invalid value"));
    vista(&tmp)
        .args(["start", "--tab", "bogus"])
        .assert()
        .failure();
}
