//! Integer label vectors
//!
//! A label file holds one non-negative class id per point, written either
//! one per line or as a single delimited row.

use crate::core::{Labels, Result, SplitError};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Load labels from a file
pub fn load_labels<P: AsRef<Path>>(path: P) -> Result<Labels> {
    let path = path.as_ref();
    let file = File::open(path).map_err(SplitError::IoError)?;
    let labels = labels_from_reader(BufReader::new(file))?;

    debug!("Loaded {} labels from {:?}", labels.len(), path);
    Ok(labels)
}

/// Load labels from a reader
pub fn labels_from_reader<R: BufRead>(reader: R) -> Result<Labels> {
    let mut rows: Vec<Labels> = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.map_err(SplitError::IoError)?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let row = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(parse_label)
            .collect::<Result<Labels>>()
            .map_err(|e| {
                SplitError::ParseError(format!("Error parsing line {}: {}", line_num + 1, e))
            })?;
        rows.push(row);
    }

    if rows.len() > 1 && rows.iter().any(|row| row.len() > 1) {
        return Err(SplitError::ParseError(
            "Labels must be a single row or a single column".to_string(),
        ));
    }

    Ok(rows.into_iter().flatten().collect())
}

/// Parse one class id; integral floats such as `2.0` are accepted
fn parse_label(token: &str) -> Result<usize> {
    if let Ok(label) = token.parse::<usize>() {
        return Ok(label);
    }

    match token.parse::<f64>() {
        Ok(value) if value >= 0.0 && value.fract() == 0.0 && value <= usize::MAX as f64 => {
            Ok(value as usize)
        }
        _ => Err(SplitError::ParseError(format!(
            "Invalid label '{token}': expected a non-negative integer"
        ))),
    }
}

/// Save labels to a file, one per line
pub fn save_labels<P: AsRef<Path>>(path: P, labels: &[usize]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(SplitError::IoError)?;
    let mut writer = BufWriter::new(file);
    write_labels(&mut writer, labels)?;
    writer.flush().map_err(SplitError::IoError)?;

    debug!("Saved {} labels to {:?}", labels.len(), path);
    Ok(())
}

/// Write labels, one per line
pub fn write_labels<W: Write>(writer: &mut W, labels: &[usize]) -> Result<()> {
    for label in labels {
        writeln!(writer, "{label}").map_err(SplitError::IoError)?;
    }
    Ok(())
}
