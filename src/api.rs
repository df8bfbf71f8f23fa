//! High-level API for splitting datasets
//!
//! This module wires the permutation engine and the partitioner together
//! behind a small builder.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use dsplit::api::Splitter;
//! use dsplit::{DenseMatrix, Seed};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = DenseMatrix::from_file("points.csv")?;
//! let labels = dsplit::data::load_labels("labels.csv")?;
//!
//! let split = Splitter::new()
//!     .with_test_ratio(0.3)
//!     .with_seed(Seed::Fixed(42))
//!     .split_labeled(&data, &labels)?;
//!
//! println!("{} training / {} test points", split.train_len(), split.test_len());
//! # Ok(())
//! # }
//! ```

use crate::core::{Dataset, Result, SplitError};
use crate::permutation::{Permutation, Seed, SplitRng};
use crate::split::{partition, partition_labeled, DataSplit, LabeledSplit, TestRatio};
use rand::SeedableRng;

/// Train/test splitter with builder pattern
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Splitter {
    test_ratio: f64,
    seed: Seed,
}

/// A split together with the seed that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct SplitOutcome<S> {
    pub split: S,
    /// Concrete seed the generator was built from
    pub seed: u64,
}

impl Splitter {
    /// Create a splitter with a 0.2 test ratio and an unpredictable seed
    pub fn new() -> Self {
        Self {
            test_ratio: TestRatio::DEFAULT.value(),
            seed: Seed::Entropy,
        }
    }

    /// Set the fraction of points that go to the test set
    pub fn with_test_ratio(mut self, test_ratio: f64) -> Self {
        self.test_ratio = test_ratio;
        self
    }

    /// Set the seeding policy
    pub fn with_seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    pub fn test_ratio(&self) -> f64 {
        self.test_ratio
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Shuffle and split a dataset
    pub fn split<D: Dataset>(&self, dataset: &D) -> Result<DataSplit<D>> {
        Ok(self.split_with_report(dataset)?.split)
    }

    /// Shuffle and split a dataset and its labels identically
    pub fn split_labeled<D: Dataset, L: Clone>(
        &self,
        dataset: &D,
        labels: &[L],
    ) -> Result<LabeledSplit<D, L>> {
        Ok(self.split_labeled_with_report(dataset, labels)?.split)
    }

    /// Like [`Splitter::split`], also returning the seed used
    pub fn split_with_report<D: Dataset>(&self, dataset: &D) -> Result<SplitOutcome<DataSplit<D>>> {
        TestRatio::new(self.test_ratio)?;

        let (permutation, seed) = self.draw(dataset.len());
        let split = partition(dataset, self.test_ratio, &permutation)?;
        Ok(SplitOutcome { split, seed })
    }

    /// Like [`Splitter::split_labeled`], also returning the seed used
    pub fn split_labeled_with_report<D: Dataset, L: Clone>(
        &self,
        dataset: &D,
        labels: &[L],
    ) -> Result<SplitOutcome<LabeledSplit<D, L>>> {
        TestRatio::new(self.test_ratio)?;
        if labels.len() != dataset.len() {
            return Err(SplitError::LabelCountMismatch {
                points: dataset.len(),
                labels: labels.len(),
            });
        }

        let (permutation, seed) = self.draw(dataset.len());
        let split = partition_labeled(dataset, labels, self.test_ratio, &permutation)?;
        Ok(SplitOutcome { split, seed })
    }

    fn draw(&self, n: usize) -> (Permutation, u64) {
        let seed = self.seed.resolve();
        let mut rng = SplitRng::seed_from_u64(seed);
        (Permutation::generate(n, &mut rng), seed)
    }
}

impl Default for Splitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience functions for quick operations
pub mod quick {
    use super::*;
    use crate::core::{DenseMatrix, Labels};
    use crate::data::load_labels;
    use std::path::Path;

    /// Load a matrix file and split it
    pub fn split_file<P: AsRef<Path>>(
        input: P,
        test_ratio: f64,
        seed: Seed,
    ) -> Result<DataSplit<DenseMatrix>> {
        TestRatio::new(test_ratio)?;
        let data = DenseMatrix::from_file(input)?;
        Splitter::new()
            .with_test_ratio(test_ratio)
            .with_seed(seed)
            .split(&data)
    }

    /// Load a matrix file and its label file and split them together
    pub fn split_labeled_files<P1: AsRef<Path>, P2: AsRef<Path>>(
        input: P1,
        labels: P2,
        test_ratio: f64,
        seed: Seed,
    ) -> Result<LabeledSplit<DenseMatrix, usize>> {
        TestRatio::new(test_ratio)?;
        let data = DenseMatrix::from_file(input)?;
        let labels: Labels = load_labels(labels)?;
        Splitter::new()
            .with_test_ratio(test_ratio)
            .with_seed(seed)
            .split_labeled(&data, &labels)
    }
}
