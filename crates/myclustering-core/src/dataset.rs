//! Dataset validation at the API boundary.

use ndarray::ArrayView2;

use crate::errors::{ClusteringError, ClusteringResult};

/// Validate a sample matrix before fitting.
///
/// Rejects empty datasets, zero-width rows, and non-finite values,
/// reporting the first offending cell.
pub fn validate_dataset(data: ArrayView2<'_, f64>) -> ClusteringResult<()> {
    if data.nrows() == 0 {
        return Err(ClusteringError::EmptyDataset);
    }
    if data.ncols() == 0 {
        return Err(ClusteringError::invalid_parameter(
            "data",
            "samples must have at least one feature",
        ));
    }
    for ((row, col), &value) in data.indexed_iter() {
        if !value.is_finite() {
            return Err(ClusteringError::NonFiniteValue { row, col });
        }
    }
    Ok(())
}

/// Validate that a query matrix is compatible with a fitted dimensionality.
pub fn validate_query(data: ArrayView2<'_, f64>, expected_dims: usize) -> ClusteringResult<()> {
    validate_dataset(data)?;
    if data.ncols() != expected_dims {
        return Err(ClusteringError::DimensionMismatch {
            expected: expected_dims,
            found: data.ncols(),
        });
    }
    Ok(())
}
