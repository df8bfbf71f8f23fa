//! Train/test partitioning of shuffled datasets
//!
//! Given a dataset and a permutation of its points, the partitioner builds
//! the shuffled order `shuffled[k] = original[perm[k]]`, keeps the first
//! `train_count` shuffled points for training and the rest for testing. When
//! labels are present the same permutation and the same cut are applied to
//! them, so every output label still belongs to the point beside it.
//!
//! All preconditions are checked before anything is allocated. On error no
//! part of a split is produced.

use crate::core::{Dataset, Result, SplitError};
use crate::permutation::Permutation;

/// Absorbs float error in `ratio * n` so that e.g. 0.29 * 100 counts as 29
const COUNT_TOLERANCE: f64 = 1e-9;

/// Fraction of points assigned to the test set, validated to `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TestRatio(f64);

impl TestRatio {
    /// Ratio used when none is given
    pub const DEFAULT: TestRatio = TestRatio(0.2);

    pub fn new(ratio: f64) -> Result<Self> {
        // Written so that NaN is rejected too
        if !(0.0..=1.0).contains(&ratio) {
            return Err(SplitError::InvalidRatio(ratio));
        }
        Ok(Self(ratio))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Number of test points out of `n`
    ///
    /// Truncates `ratio * n` toward zero, so 0.5 of 5 points gives 2 test
    /// points and 3 training points.
    pub fn test_count(&self, n: usize) -> usize {
        let exact = self.0 * n as f64;
        ((exact + COUNT_TOLERANCE).floor() as usize).min(n)
    }

    /// Number of training points out of `n`
    pub fn train_count(&self, n: usize) -> usize {
        n - self.test_count(n)
    }
}

impl Default for TestRatio {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for TestRatio {
    type Error = SplitError;

    fn try_from(ratio: f64) -> Result<Self> {
        Self::new(ratio)
    }
}

/// Unlabeled split result
#[derive(Debug, Clone, PartialEq)]
pub struct DataSplit<D> {
    pub train: D,
    pub test: D,
}

impl<D: Dataset> DataSplit<D> {
    pub fn train_len(&self) -> usize {
        self.train.len()
    }

    pub fn test_len(&self) -> usize {
        self.test.len()
    }
}

/// Labeled split result; labels line up with the points of the same half
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSplit<D, L> {
    pub train: D,
    pub train_labels: Vec<L>,
    pub test: D,
    pub test_labels: Vec<L>,
}

impl<D: Dataset, L> LabeledSplit<D, L> {
    pub fn train_len(&self) -> usize {
        self.train.len()
    }

    pub fn test_len(&self) -> usize {
        self.test.len()
    }

    /// Drop the label halves
    pub fn without_labels(self) -> DataSplit<D> {
        DataSplit {
            train: self.train,
            test: self.test,
        }
    }
}

/// Split `dataset` into train and test halves following `permutation`
pub fn partition<D: Dataset>(
    dataset: &D,
    ratio: f64,
    permutation: &Permutation,
) -> Result<DataSplit<D>> {
    let ratio = TestRatio::new(ratio)?;
    check_permutation(dataset, permutation)?;

    let (train_idx, test_idx) = cut(permutation, ratio);

    Ok(DataSplit {
        train: dataset.select(train_idx),
        test: dataset.select(test_idx),
    })
}

/// Split `dataset` and its `labels` with the same permutation and boundary
pub fn partition_labeled<D: Dataset, L: Clone>(
    dataset: &D,
    labels: &[L],
    ratio: f64,
    permutation: &Permutation,
) -> Result<LabeledSplit<D, L>> {
    let ratio = TestRatio::new(ratio)?;
    check_permutation(dataset, permutation)?;
    if labels.len() != dataset.len() {
        return Err(SplitError::LabelCountMismatch {
            points: dataset.len(),
            labels: labels.len(),
        });
    }

    let (train_idx, test_idx) = cut(permutation, ratio);

    Ok(LabeledSplit {
        train: dataset.select(train_idx),
        train_labels: gather(labels, train_idx),
        test: dataset.select(test_idx),
        test_labels: gather(labels, test_idx),
    })
}

fn check_permutation<D: Dataset>(dataset: &D, permutation: &Permutation) -> Result<()> {
    if permutation.len() != dataset.len() {
        return Err(SplitError::DimensionMismatch {
            expected: dataset.len(),
            actual: permutation.len(),
        });
    }
    Ok(())
}

/// Shuffled indices for the training and test halves
fn cut(permutation: &Permutation, ratio: TestRatio) -> (&[usize], &[usize]) {
    let train_count = ratio.train_count(permutation.len());
    permutation.as_slice().split_at(train_count)
}

fn gather<L: Clone>(labels: &[L], indices: &[usize]) -> Vec<L> {
    indices.iter().map(|&i| labels[i].clone()).collect()
}
