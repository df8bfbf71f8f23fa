//! Core traits for dataset splitting

/// Point-indexed dataset abstraction
///
/// A point is one observation. Splitting only ever reorders and slices
/// points; the feature axis is left untouched.
pub trait Dataset: Sized + Send + Sync {
    /// Number of points in the dataset
    fn len(&self) -> usize;

    /// Number of features per point
    fn dim(&self) -> usize;

    /// Gather the given points, in the given order, into a new dataset
    ///
    /// # Panics
    /// Panics if any index >= len()
    fn select(&self, indices: &[usize]) -> Self;

    /// Check if the dataset has no points
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
