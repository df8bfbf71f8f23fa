//! Random permutations of point indices
//!
//! Every permutation is drawn from an explicit generator owned by the caller.
//! There is no process-wide random state: two splits running side by side
//! never see each other's stream.

use crate::core::{Result, SplitError};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator used for shuffling
///
/// ChaCha8 produces the same stream on every platform and release, so a
/// recorded seed keeps reproducing the same split.
pub type SplitRng = ChaCha8Rng;

/// Seeding policy for a split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seed {
    /// Draw a fresh seed from the operating system
    #[default]
    Entropy,
    /// Use this exact seed
    Fixed(u64),
}

impl Seed {
    /// Interpret a command-line seed, where 0 means "unset"
    pub fn from_cli(value: i64) -> Self {
        if value == 0 {
            Seed::Entropy
        } else {
            Seed::Fixed(value as u64)
        }
    }

    /// Whether this seed reproduces the same split on every run
    pub fn is_fixed(&self) -> bool {
        matches!(self, Seed::Fixed(_))
    }

    /// Turn the policy into a concrete seed value
    pub fn resolve(&self) -> u64 {
        match *self {
            Seed::Fixed(seed) => seed,
            Seed::Entropy => rand::random(),
        }
    }

    /// Build a new generator from this policy
    pub fn rng(&self) -> SplitRng {
        SplitRng::seed_from_u64(self.resolve())
    }
}

/// A bijection on `0..n`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    indices: Vec<usize>,
}

impl Permutation {
    /// Draw a uniformly random permutation of `0..n` from `rng`
    pub fn generate<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut indices: Vec<usize> = (0..n).collect();
        indices.shuffle(rng);
        Self { indices }
    }

    /// Draw a permutation of `0..n` from a generator built from `seed`
    pub fn seeded(n: usize, seed: Seed) -> Self {
        Self::generate(n, &mut seed.rng())
    }

    /// The permutation that leaves every index in place
    pub fn identity(n: usize) -> Self {
        Self {
            indices: (0..n).collect(),
        }
    }

    /// Wrap caller-supplied indices, checking that they form a bijection
    pub fn from_indices(indices: Vec<usize>) -> Result<Self> {
        let n = indices.len();
        let mut seen = vec![false; n];

        for &i in &indices {
            if i >= n {
                return Err(SplitError::InvalidPermutation(format!(
                    "index {i} out of range for {n} points"
                )));
            }
            if seen[i] {
                return Err(SplitError::InvalidPermutation(format!(
                    "index {i} appears more than once"
                )));
            }
            seen[i] = true;
        }

        Ok(Self { indices })
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.indices
    }
}
