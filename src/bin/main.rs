//! dsplit Command Line Interface
//!
//! Splits a dataset, and optionally its labels, into a training set and a
//! test set after randomly reordering the points.

use clap::Parser;
use dsplit::core::{Labels, Result};
use dsplit::data::{load_labels, save_labels};
use dsplit::{DenseMatrix, Seed, SplitManifest, Splitter, TestRatio};
use env_logger::Env;
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::process;

/// Split a dataset into a training set and a test set
///
/// Before the split, the points in the dataset are randomly reordered. Labels
/// given with --input-labels are reordered and split the same way.
///
/// Example, 30% of the points in the test set:
///
///   dsplit -i X.csv -I y.csv -r 0.3 -t X_train.csv -l y_train.csv -T X_test.csv -L y_test.csv
#[derive(Parser, Debug)]
#[command(name = "dsplit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "dsplit contributors")]
struct Cli {
    /// Matrix containing data, one point per line
    #[arg(short, long)]
    input: PathBuf,

    /// File to save training data to
    #[arg(short, long)]
    training: Option<PathBuf>,

    /// File to save test data to
    #[arg(short = 'T', long)]
    test: Option<PathBuf>,

    /// File containing one label per point
    #[arg(short = 'I', long)]
    input_labels: Option<PathBuf>,

    /// File to save training labels to
    #[arg(short = 'l', long)]
    training_labels: Option<PathBuf>,

    /// File to save test labels to
    #[arg(short = 'L', long)]
    test_labels: Option<PathBuf>,

    /// Ratio of the test set; defaults to 0.2 if not set
    #[arg(short = 'r', long, allow_negative_numbers = true)]
    test_ratio: Option<f64>,

    /// Random seed (0 for an unpredictable seed)
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    seed: i64,

    /// File to save a JSON record of the split to
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli) {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    for warning in output_warnings(&cli) {
        warn!("{warning}");
    }

    let ratio = resolve_ratio(cli.test_ratio)?;
    let seed = Seed::from_cli(cli.seed);

    info!("Loading data from {:?}", cli.input);
    let data = DenseMatrix::from_file(&cli.input)?;
    info!(
        "Loaded {} points with {} features",
        data.n_points(),
        data.n_features()
    );

    let splitter = Splitter::new()
        .with_test_ratio(ratio.value())
        .with_seed(seed);

    let (train_points, test_points, used_seed, labeled) = match &cli.input_labels {
        Some(labels_path) => {
            info!("Loading labels from {labels_path:?}");
            let labels: Labels = load_labels(labels_path)?;

            let outcome = splitter.split_labeled_with_report(&data, &labels)?;
            let split = outcome.split;
            report_counts(split.train.n_points(), split.test.n_points());

            save_matrix(cli.training.as_deref(), &split.train)?;
            save_matrix(cli.test.as_deref(), &split.test)?;
            save_label_file(cli.training_labels.as_deref(), &split.train_labels)?;
            save_label_file(cli.test_labels.as_deref(), &split.test_labels)?;

            (split.train.n_points(), split.test.n_points(), outcome.seed, true)
        }
        None => {
            let outcome = splitter.split_with_report(&data)?;
            let split = outcome.split;
            report_counts(split.train.n_points(), split.test.n_points());

            save_matrix(cli.training.as_deref(), &split.train)?;
            save_matrix(cli.test.as_deref(), &split.test)?;

            (split.train.n_points(), split.test.n_points(), outcome.seed, false)
        }
    };

    if seed.is_fixed() {
        debug!("Shuffled with seed {}", cli.seed);
    } else {
        info!(
            "Shuffled with random seed; rerun with --seed {} to reproduce",
            used_seed as i64
        );
    }

    if let Some(path) = &cli.manifest {
        let manifest = SplitManifest::new(
            used_seed,
            seed.is_fixed(),
            ratio,
            train_points,
            test_points,
            labeled,
        );
        manifest.save_to_file(path)?;
        info!("Manifest saved to: {path:?}");
    }

    Ok(())
}

/// Non-fatal problems with the requested outputs
fn output_warnings(cli: &Cli) -> Vec<String> {
    let mut warnings = Vec::new();

    if cli.training.is_none() {
        warnings.push("--training (-t) is not specified; no training set will be saved!".to_string());
    }
    if cli.test.is_none() {
        warnings.push("--test (-T) is not specified; no test set will be saved!".to_string());
    }

    if cli.input_labels.is_some() {
        if cli.training_labels.is_none() {
            warnings.push(
                "--training-labels (-l) is not specified; no training set labels will be saved!"
                    .to_string(),
            );
        }
        if cli.test_labels.is_none() {
            warnings.push(
                "--test-labels (-L) is not specified; no test set labels will be saved!"
                    .to_string(),
            );
        }
    } else {
        if cli.training_labels.is_some() {
            warnings.push(
                "--training-labels ignored because --input-labels is not specified.".to_string(),
            );
        }
        if cli.test_labels.is_some() {
            warnings
                .push("--test-labels ignored because --input-labels is not specified.".to_string());
        }
    }

    warnings
}

fn resolve_ratio(test_ratio: Option<f64>) -> Result<TestRatio> {
    match test_ratio {
        Some(ratio) => TestRatio::new(ratio),
        None => {
            warn!(
                "You did not specify --test-ratio, so it will be automatically set to {}.",
                TestRatio::DEFAULT.value()
            );
            Ok(TestRatio::DEFAULT)
        }
    }
}

fn report_counts(train_points: usize, test_points: usize) {
    info!("Training data contains {train_points} points.");
    info!("Test data contains {test_points} points.");
}

fn save_matrix(path: Option<&Path>, matrix: &DenseMatrix) -> Result<()> {
    if let Some(path) = path {
        matrix.save(path)?;
        info!("Saved {} points to: {path:?}", matrix.n_points());
    }
    Ok(())
}

fn save_label_file(path: Option<&Path>, labels: &[usize]) -> Result<()> {
    if let Some(path) = path {
        save_labels(path, labels)?;
        info!("Saved {} labels to: {path:?}", labels.len());
    }
    Ok(())
}
