//! Randomized train/test splitting for tabular datasets
//!
//! Points are shuffled with a seedable permutation and cut into a training
//! and a test set. Labels, when given, follow their points through the
//! shuffle and the cut.

pub mod api;
pub mod core;
pub mod data;
pub mod manifest;
pub mod permutation;
pub mod split;

// Re-export main types for convenience
pub use crate::api::{SplitOutcome, Splitter};
pub use crate::core::traits::*;
pub use crate::core::types::*;
pub use crate::core::{Result, SplitError};
pub use crate::data::DataFormat;
pub use crate::manifest::SplitManifest;
pub use crate::permutation::{Permutation, Seed, SplitRng};
pub use crate::split::{partition, partition_labeled, DataSplit, LabeledSplit, TestRatio};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
