//! Data loading and saving
//!
//! Matrices are stored as delimited text with one point per line. Labels
//! are non-negative integers, one per point.

pub mod labels;
pub mod text;

pub use self::labels::*;
pub use self::text::*;

use log::warn;
use std::path::Path;

/// Delimited text layouts understood by the loaders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// Comma separated
    Csv,
    /// Tab separated
    Tsv,
    /// Any run of whitespace
    Txt,
}

impl DataFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => match ext.to_ascii_lowercase().as_str() {
                "csv" => DataFormat::Csv,
                "tsv" => DataFormat::Tsv,
                "txt" => DataFormat::Txt,
                other => {
                    warn!("Unknown file extension '{other}', assuming CSV format");
                    DataFormat::Csv
                }
            },
            None => {
                warn!("No file extension, assuming CSV format");
                DataFormat::Csv
            }
        }
    }

    /// Split a line into its fields
    pub(crate) fn fields<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self {
            DataFormat::Csv => line.split(',').map(str::trim).collect(),
            DataFormat::Tsv => line.split('\t').map(str::trim).collect(),
            DataFormat::Txt => line.split_whitespace().collect(),
        }
    }

    /// Separator written between fields
    pub(crate) fn delimiter(&self) -> &'static str {
        match self {
            DataFormat::Csv => ",",
            DataFormat::Tsv => "\t",
            DataFormat::Txt => " ",
        }
    }
}
