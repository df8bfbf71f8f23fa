//! Delimited text matrices
//!
//! Supports files where:
//! - Every non-empty line is one point
//! - Every field is a numeric feature value
//! - Lines starting with `#` are comments
//! - A leading header row is detected and skipped

use crate::core::{DenseMatrix, Result, SplitError};
use crate::data::DataFormat;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

impl DenseMatrix {
    /// Load a matrix from a file, choosing the delimiter from its extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = DataFormat::from_path(path);
        let file = File::open(path).map_err(SplitError::IoError)?;
        let matrix = Self::from_reader(BufReader::new(file), format)?;

        debug!(
            "Loaded {} points with {} features from {:?}",
            matrix.n_points(),
            matrix.n_features(),
            path
        );
        Ok(matrix)
    }

    /// Load a matrix from a reader, skipping a header row if one is present
    pub fn from_reader<R: BufRead>(reader: R, format: DataFormat) -> Result<Self> {
        Self::from_reader_with_options(reader, format, true)
    }

    /// Load a matrix from a reader with explicit header option
    pub fn from_reader_with_options<R: BufRead>(
        reader: R,
        format: DataFormat,
        auto_detect_header: bool,
    ) -> Result<Self> {
        let mut rows: Vec<Vec<f64>> = Vec::new();
        let mut seen_content = false;

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(SplitError::IoError)?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields = format.fields(line);
            let first_content = !seen_content;
            seen_content = true;

            if first_content && auto_detect_header && Self::is_header_line(&fields) {
                continue;
            }

            let row = Self::parse_row(&fields).map_err(|e| {
                SplitError::ParseError(format!("Error parsing line {}: {}", line_num + 1, e))
            })?;

            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(SplitError::ParseError(format!(
                        "Error parsing line {}: expected {} fields, got {}",
                        line_num + 1,
                        first.len(),
                        row.len()
                    )));
                }
            }
            rows.push(row);
        }

        DenseMatrix::from_rows(rows)
    }

    /// Check if a line appears to be a header
    fn is_header_line(fields: &[&str]) -> bool {
        let non_numeric = fields
            .iter()
            .filter(|field| field.parse::<f64>().is_err())
            .count();

        non_numeric * 2 > fields.len()
    }

    fn parse_row(fields: &[&str]) -> Result<Vec<f64>> {
        fields
            .iter()
            .enumerate()
            .map(|(idx, field)| {
                field.parse::<f64>().map_err(|_| {
                    SplitError::ParseError(format!(
                        "Invalid value at column {}: '{}'",
                        idx + 1,
                        field
                    ))
                })
            })
            .collect()
    }

    /// Save the matrix to a file, choosing the delimiter from its extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let format = DataFormat::from_path(path);
        let file = File::create(path).map_err(SplitError::IoError)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer, format)?;
        writer.flush().map_err(SplitError::IoError)?;

        debug!("Saved {} points to {:?}", self.n_points(), path);
        Ok(())
    }

    /// Write one line per point
    ///
    /// Values are written in their shortest round-trip form, so loading the
    /// output gives back the exact same numbers.
    pub fn write_to<W: Write>(&self, writer: &mut W, format: DataFormat) -> Result<()> {
        let delimiter = format.delimiter();

        for point in self.points() {
            let line = point
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(delimiter);
            writeln!(writer, "{line}").map_err(SplitError::IoError)?;
        }

        Ok(())
    }
}
