//! Integration tests for the CLI application
//!
//! These tests run the built binary against real data files.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::{NamedTempFile, TempDir};

/// Helper to create test data files
struct TestDataFiles {
    pub data_file: NamedTempFile,
    pub labels_file: NamedTempFile,
    pub short_labels_file: NamedTempFile,
}

impl TestDataFiles {
    /// Ten points; the first feature is the point id and the label is id + 100
    fn new() -> std::io::Result<Self> {
        let mut data_file = NamedTempFile::with_suffix(".csv")?;
        writeln!(data_file, "id,value")?;
        for i in 0..10 {
            writeln!(data_file, "{i},{}", i as f64 * 0.5)?;
        }
        data_file.flush()?;

        let mut labels_file = NamedTempFile::with_suffix(".csv")?;
        for i in 0..10 {
            writeln!(labels_file, "{}", i + 100)?;
        }
        labels_file.flush()?;

        let mut short_labels_file = NamedTempFile::with_suffix(".csv")?;
        for i in 0..9 {
            writeln!(short_labels_file, "{i}")?;
        }
        short_labels_file.flush()?;

        Ok(TestDataFiles {
            data_file,
            labels_file,
            short_labels_file,
        })
    }
}

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dsplit"))
        .args(args)
        .output()
        .expect("Failed to run CLI")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("Failed to read output")
        .lines()
        .map(str::to_string)
        .collect()
}

fn first_column(path: &Path) -> Vec<usize> {
    read_lines(path)
        .iter()
        .map(|line| line.split(',').next().unwrap().parse::<f64>().unwrap() as usize)
        .collect()
}

#[test]
fn test_cli_split_unlabeled() {
    let test_data = TestDataFiles::new().expect("Failed to create test data");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let train_path = temp_dir.path().join("train.csv");
    let test_path = temp_dir.path().join("test.csv");

    let output = run_cli(&[
        "--input",
        path_str(test_data.data_file.path()),
        "--training",
        path_str(&train_path),
        "--test",
        path_str(&test_path),
        "--test-ratio",
        "0.3",
        "--seed",
        "42",
    ]);

    assert!(
        output.status.success(),
        "Split failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let mut ids = first_column(&train_path);
    assert_eq!(ids.len(), 7);
    let test_ids = first_column(&test_path);
    assert_eq!(test_ids.len(), 3);

    ids.extend(test_ids);
    ids.sort_unstable();
    assert_eq!(ids, (0..10).collect::<Vec<_>>());
}

#[test]
fn test_cli_split_labeled_keeps_alignment() {
    let test_data = TestDataFiles::new().expect("Failed to create test data");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let train_path = temp_dir.path().join("train.csv");
    let test_path = temp_dir.path().join("test.csv");
    let train_labels = temp_dir.path().join("train_labels.csv");
    let test_labels = temp_dir.path().join("test_labels.csv");

    let output = run_cli(&[
        "-i",
        path_str(test_data.data_file.path()),
        "-I",
        path_str(test_data.labels_file.path()),
        "-t",
        path_str(&train_path),
        "-T",
        path_str(&test_path),
        "-l",
        path_str(&train_labels),
        "-L",
        path_str(&test_labels),
        "-r",
        "0.4",
        "-s",
        "7",
    ]);

    assert!(
        output.status.success(),
        "Split failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    for (data, labels) in [(&train_path, &train_labels), (&test_path, &test_labels)] {
        let ids = first_column(data);
        let labels: Vec<usize> = read_lines(labels)
            .iter()
            .map(|l| l.parse().unwrap())
            .collect();

        assert_eq!(ids.len(), labels.len());
        for (id, label) in ids.iter().zip(&labels) {
            assert_eq!(id + 100, *label);
        }
    }
    assert_eq!(read_lines(&test_labels).len(), 4);
}

#[test]
fn test_cli_same_seed_same_output() {
    let test_data = TestDataFiles::new().expect("Failed to create test data");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let first = temp_dir.path().join("first.csv");
    let second = temp_dir.path().join("second.csv");

    for out in [&first, &second] {
        let output = run_cli(&[
            "-i",
            path_str(test_data.data_file.path()),
            "-t",
            path_str(out),
            "-s",
            "1234",
        ]);
        assert!(output.status.success());
    }

    assert_eq!(read_lines(&first), read_lines(&second));
}

#[test]
fn test_cli_invalid_ratio_writes_nothing() {
    let test_data = TestDataFiles::new().expect("Failed to create test data");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let train_path = temp_dir.path().join("train.csv");

    for ratio in ["1.5", "-0.1"] {
        let output = run_cli(&[
            "-i",
            path_str(test_data.data_file.path()),
            "-t",
            path_str(&train_path),
            "-r",
            ratio,
        ]);

        assert!(!output.status.success());
        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid test ratio"));
        assert!(!train_path.exists());
    }
}

#[test]
fn test_cli_mismatched_labels_fail() {
    let test_data = TestDataFiles::new().expect("Failed to create test data");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let train_path = temp_dir.path().join("train.csv");

    let output = run_cli(&[
        "-i",
        path_str(test_data.data_file.path()),
        "-I",
        path_str(test_data.short_labels_file.path()),
        "-t",
        path_str(&train_path),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Label count mismatch"));
    assert!(!train_path.exists());
}

#[test]
fn test_cli_warnings() {
    let test_data = TestDataFiles::new().expect("Failed to create test data");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let labels_out = temp_dir.path().join("labels.csv");

    let output = run_cli(&[
        "-i",
        path_str(test_data.data_file.path()),
        "-l",
        path_str(&labels_out),
    ]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no training set will be saved"));
    assert!(stderr.contains("no test set will be saved"));
    assert!(stderr.contains("--training-labels ignored"));
    assert!(stderr.contains("automatically set to 0.2"));
    assert!(!labels_out.exists());
}

#[test]
fn test_cli_verbose_reports_counts() {
    let test_data = TestDataFiles::new().expect("Failed to create test data");

    let output = run_cli(&["-i", path_str(test_data.data_file.path()), "-v", "-r", "0.2"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Training data contains 8 points."));
    assert!(stderr.contains("Test data contains 2 points."));
}

#[test]
fn test_cli_manifest_replays_unseeded_run() {
    let test_data = TestDataFiles::new().expect("Failed to create test data");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let first = temp_dir.path().join("first.csv");
    let replay = temp_dir.path().join("replay.csv");
    let manifest_path = temp_dir.path().join("split.json");

    let output = run_cli(&[
        "-i",
        path_str(test_data.data_file.path()),
        "-t",
        path_str(&first),
        "-m",
        path_str(&manifest_path),
    ]);
    assert!(output.status.success());

    let manifest = dsplit::SplitManifest::load_from_file(&manifest_path).unwrap();
    assert!(!manifest.seed_was_fixed);
    assert_eq!(manifest.total_points, 10);
    assert_eq!(manifest.train_points, 8);
    assert_eq!(manifest.test_points, 2);

    // The CLI seed is signed; the manifest stores the same bits unsigned
    let seed = (manifest.seed as i64).to_string();
    let output = run_cli(&[
        "-i",
        path_str(test_data.data_file.path()),
        "-t",
        path_str(&replay),
        "-s",
        &seed,
    ]);
    assert!(output.status.success());

    assert_eq!(read_lines(&first), read_lines(&replay));
}

#[test]
fn test_cli_missing_input_file() {
    let output = run_cli(&["-i", "/non/existent/data.csv"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("IO error"));
}
