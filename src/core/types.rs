//! Core type definitions for dataset splitting

use crate::core::{Dataset, Result, SplitError};

/// Integer class labels, one per point
pub type Labels = Vec<usize>;

/// Dense row-major matrix where each row is one point
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix {
    /// Row-major values, `n_points * n_features` long
    data: Vec<f64>,
    n_points: usize,
    n_features: usize,
}

impl DenseMatrix {
    /// Create a matrix from row-major data
    pub fn new(data: Vec<f64>, n_points: usize, n_features: usize) -> Result<Self> {
        let expected = n_points * n_features;
        if data.len() != expected {
            return Err(SplitError::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            n_points,
            n_features,
        })
    }

    /// Create a matrix with no points and the given number of features
    pub fn empty(n_features: usize) -> Self {
        Self {
            data: Vec::new(),
            n_points: 0,
            n_features,
        }
    }

    /// Build a matrix from a list of rows, all of which must share a length
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n_features = rows.first().map_or(0, Vec::len);
        let n_points = rows.len();
        let mut data = Vec::with_capacity(n_points * n_features);

        for row in rows {
            if row.len() != n_features {
                return Err(SplitError::DimensionMismatch {
                    expected: n_features,
                    actual: row.len(),
                });
            }
            data.extend(row);
        }

        Ok(Self {
            data,
            n_points,
            n_features,
        })
    }

    /// Number of points (rows)
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Number of features (columns)
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Feature values of a single point
    ///
    /// # Panics
    /// Panics if `i >= n_points()`
    pub fn point(&self, i: usize) -> &[f64] {
        let start = i * self.n_features;
        &self.data[start..start + self.n_features]
    }

    /// Iterate over points in order
    pub fn points(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.n_points).map(move |i| self.point(i))
    }

    /// Raw row-major values
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl Dataset for DenseMatrix {
    fn len(&self) -> usize {
        self.n_points
    }

    fn dim(&self) -> usize {
        self.n_features
    }

    fn select(&self, indices: &[usize]) -> Self {
        let mut data = Vec::with_capacity(indices.len() * self.n_features);
        for &i in indices {
            data.extend_from_slice(self.point(i));
        }

        Self {
            data,
            n_points: indices.len(),
            n_features: self.n_features,
        }
    }
}
