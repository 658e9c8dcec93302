use thiserror::Error;

// ---------------------------------------------------------------------------
// MatrixError – why a matrix could not be constructed
// ---------------------------------------------------------------------------

/// Construction errors for [`Matrix`]. The loader never hands out a ragged
/// or empty matrix; it fails with one of these instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatrixError {
    #[error("matrix has no rows")]
    Empty,
    #[error("row {row} has {got} columns, expected {expected}")]
    Ragged {
        row: usize,
        got: usize,
        expected: usize,
    },
}

// ---------------------------------------------------------------------------
// ValueRange – finite min/max of a matrix, used for colour normalization
// ---------------------------------------------------------------------------

/// Finite value range of a matrix. `min == max` is allowed (flat matrix);
/// [`ValueRange::normalize`] maps that case to 0.5.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    /// Map a value into `[0, 1]` relative to this range, clamped.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span.abs() < f64::EPSILON {
            return 0.5;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

// ---------------------------------------------------------------------------
// Matrix – the measurement matrix (rows × columns, row-major)
// ---------------------------------------------------------------------------

/// A rectangular 2-D array of `f64`. Rows correspond to input lines,
/// columns to delimited fields within a line. Immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    /// Row-major cell values, `rows * cols` long.
    values: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from parsed rows, rejecting empty and ragged input.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let n_rows = rows.len();
        if n_rows == 0 {
            return Err(MatrixError::Empty);
        }
        let n_cols = rows[0].len();
        if n_cols == 0 {
            return Err(MatrixError::Empty);
        }

        let mut values = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(MatrixError::Ragged {
                    row: i,
                    got: row.len(),
                    expected: n_cols,
                });
            }
            values.extend(row);
        }

        Ok(Matrix {
            rows: n_rows,
            cols: n_cols,
            values,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell value at (row, col). Panics on out-of-bounds, like slice indexing.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "cell out of bounds");
        self.values[row * self.cols + col]
    }

    /// Row-major view of all cells.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Finite min/max of the matrix, `None` if no cell is finite.
    pub fn value_range(&self) -> Option<ValueRange> {
        let mut range: Option<ValueRange> = None;
        for &v in &self.values {
            if !v.is_finite() {
                continue;
            }
            range = Some(match range {
                None => ValueRange { min: v, max: v },
                Some(r) => ValueRange {
                    min: r.min.min(v),
                    max: r.max.max(v),
                },
            });
        }
        range
    }

    /// Mean of the finite cells, `None` if no cell is finite.
    pub fn mean(&self) -> Option<f64> {
        let mut sum = 0.0;
        let mut count = 0usize;
        for &v in &self.values {
            if v.is_finite() {
                sum += v;
                count += 1;
            }
        }
        if count == 0 {
            return None;
        }
        Some(sum / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_preserves_shape_and_order() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.values(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.get(0, 2), 3.0);
        assert_eq!(m.get(1, 0), 4.0);
    }

    #[test]
    fn single_cell_matrix() {
        let m = Matrix::from_rows(vec![vec![7.5]]).unwrap();
        assert_eq!(m.rows(), 1);
        assert_eq!(m.cols(), 1);
        assert_eq!(m.get(0, 0), 7.5);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(Matrix::from_rows(vec![]).unwrap_err(), MatrixError::Empty);
        assert_eq!(
            Matrix::from_rows(vec![vec![]]).unwrap_err(),
            MatrixError::Empty
        );
    }

    #[test]
    fn ragged_input_is_rejected() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::Ragged {
                row: 1,
                got: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn value_range_ignores_non_finite() {
        let m = Matrix::from_rows(vec![vec![f64::NAN, 2.0], vec![-1.0, f64::INFINITY]]).unwrap();
        let r = m.value_range().unwrap();
        assert_eq!(r.min, -1.0);
        assert_eq!(r.max, 2.0);
    }

    #[test]
    fn value_range_none_without_finite_cells() {
        let m = Matrix::from_rows(vec![vec![f64::NAN]]).unwrap();
        assert!(m.value_range().is_none());
        assert!(m.mean().is_none());
    }

    #[test]
    fn normalize_maps_range_to_unit_interval() {
        let r = ValueRange {
            min: 10.0,
            max: 30.0,
        };
        assert_eq!(r.normalize(10.0), 0.0);
        assert_eq!(r.normalize(30.0), 1.0);
        assert_eq!(r.normalize(20.0), 0.5);
        // Out of range clamps.
        assert_eq!(r.normalize(-5.0), 0.0);
        assert_eq!(r.normalize(99.0), 1.0);
    }

    #[test]
    fn normalize_flat_range_is_half() {
        let r = ValueRange { min: 4.0, max: 4.0 };
        assert_eq!(r.normalize(4.0), 0.5);
    }

    #[test]
    fn mean_of_known_matrix() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.mean(), Some(2.5));
    }
}
