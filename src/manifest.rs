//! Split manifests
//!
//! A manifest records how a split was produced: the seed that actually drove
//! the shuffle, the ratio, and the resulting point counts. Passing the
//! recorded seed back in reproduces the split, even when the original run
//! was unseeded.

use crate::core::{Result, SplitError};
use crate::split::TestRatio;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Serializable record of a performed split
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SplitManifest {
    /// Library version used to create the split
    pub tool_version: String,
    /// Creation timestamp
    pub created_at: String,
    /// Seed the generator was built from
    pub seed: u64,
    /// Whether the seed was given by the user rather than drawn at random
    pub seed_was_fixed: bool,
    pub test_ratio: f64,
    pub total_points: usize,
    pub train_points: usize,
    pub test_points: usize,
    /// Whether labels were split alongside the data
    pub labeled: bool,
}

impl SplitManifest {
    pub fn new(
        seed: u64,
        seed_was_fixed: bool,
        ratio: TestRatio,
        train_points: usize,
        test_points: usize,
        labeled: bool,
    ) -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            seed,
            seed_was_fixed,
            test_ratio: ratio.value(),
            total_points: train_points + test_points,
            train_points,
            test_points,
            labeled,
        }
    }

    /// Save manifest to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path).map_err(SplitError::IoError)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| SplitError::SerializationError(e.to_string()))?;
        Ok(())
    }

    /// Load manifest from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(SplitError::IoError)?;
        let reader = BufReader::new(file);
        let manifest = serde_json::from_reader(reader)
            .map_err(|e| SplitError::SerializationError(e.to_string()))?;
        Ok(manifest)
    }
}
