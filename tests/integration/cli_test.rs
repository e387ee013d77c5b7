use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const TINY_MAP: &str = r#"{
    "name": "Tiny",
    "layout": [[1, 0, 0, 0], [0, 0, 4, 0], [0, 0, 0, 1]],
    "entrances": [[[0, 1], 1]],
    "exits": [[[2, 2], 1]]
}"#;

fn mazing(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mazing"))
        .args(args)
        .arg("--dir")
        .arg(dir)
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to execute mazing")
}

fn write_tiny_map(dir: &Path) -> String {
    let path = dir.join("tiny-map.json");
    fs::write(&path, TINY_MAP).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_search_session_on_map_file() {
    let dir = TempDir::new().unwrap();
    let map_file = write_tiny_map(dir.path());

    let output = mazing(dir.path(), &["Tiny", "0.05", "--map-file", &map_file, "--seed", "3"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "Command failed with status: {:?}\nstderr: {}\nstdout: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr),
        stdout
    );

    assert!(stdout.contains("Map: Tiny"));
    assert!(stdout.contains("Time: 0 minutes 3 seconds."));
    assert!(stdout.contains("Longest path length:"));
    assert!(stdout.contains("Example path:"));
    assert!(stdout.contains("Saved and done."));
    assert!(dir.path().join("Tiny_0-1_2-2.json").exists());
    assert!(dir.path().join("Tiny.json").exists());

    // the only pair is solved now, so a second session has nothing to do
    let again = mazing(dir.path(), &["Tiny", "0", "--map-file", &map_file]);
    assert!(again.status.success());
    let stdout = String::from_utf8_lossy(&again.stdout);
    assert!(stdout.contains("Congratulations: the map Tiny has been solved!"));
}

#[test]
fn test_park_short_session() {
    let dir = TempDir::new().unwrap();

    let output = mazing(dir.path(), &["park", "0.002", "--workers", "2", "--seed", "11"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Map: Park"));
    assert!(stdout.contains("Saved and done."));

    let pair_files = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().starts_with("Park_"))
        .count();
    assert_eq!(pair_files, 2);
}

#[test]
fn test_report_without_search() {
    let dir = TempDir::new().unwrap();

    let output = mazing(dir.path(), &["report", "Park"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Longest path length: 0"));
    assert!(stdout.contains("No complete path found yet."));
    assert_eq!(fs::read_to_string(dir.path().join("Park.json")).unwrap(), "[0,[]]");
}

#[test]
fn test_unknown_map_fails_before_work() {
    let dir = TempDir::new().unwrap();

    let output = mazing(dir.path(), &["Labyrinth", "1"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unmapped"), "stderr: {stderr}");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_non_finite_budget_is_rejected() {
    let dir = TempDir::new().unwrap();
    let output = mazing(dir.path(), &["Park", "NaN"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("time budget"));
}

#[test]
fn test_out_of_range_budget_is_rejected() {
    let dir = TempDir::new().unwrap();
    let output = mazing(dir.path(), &["Park", "1e300"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of range"), "stderr: {stderr}");
    assert!(!stderr.contains("panicked"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_strict_checkpoints_report_corruption() {
    let dir = TempDir::new().unwrap();
    let map_file = write_tiny_map(dir.path());
    fs::write(dir.path().join("Tiny_0-1_2-2.json"), "[[], [").unwrap();

    let output = mazing(
        dir.path(),
        &["Tiny", "0.01", "--map-file", &map_file, "--strict-checkpoints"],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("pair(s) failed"));
    assert_eq!(
        fs::read_to_string(dir.path().join("Tiny_0-1_2-2.json")).unwrap(),
        "[[], ["
    );

    // lenient mode discards the broken file and starts over
    let output = mazing(dir.path(), &["Tiny", "0.01", "--map-file", &map_file]);
    assert!(output.status.success());
}
