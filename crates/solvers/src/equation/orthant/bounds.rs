use thiserror::Error;

use super::signature::MAX_DIMENSIONS;

/// Errors that can occur when validating search bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    /// The number of rows differs from the dimension of the initial point.
    #[error("expected {expected} rows of bounds, found {found}")]
    RowCount { expected: usize, found: usize },

    /// A row does not hold exactly a lower and an upper bound.
    #[error("row {row} has {found} columns, expected 2")]
    ColumnCount { row: usize, found: usize },

    /// A row holds a NaN or infinite bound.
    #[error("row {row} has a non-finite bound")]
    NonFinite { row: usize },

    /// The problem has more dimensions than a signature can encode.
    #[error("{found} dimensions exceeds the maximum of {max}")]
    TooManyDimensions { found: usize, max: usize },
}

/// Validated per-dimension `(lower, upper)` bounds of the search box.
///
/// Bounds are used as given: a row whose lower value exceeds its upper value
/// is accepted and simply swaps which corner is called "lower".
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    rows: Vec<[f64; 2]>,
}

impl Bounds {
    /// Validates `rows` against the problem dimension.
    ///
    /// # Errors
    ///
    /// Returns a [`BoundsError`] if the row count differs from `dimension`,
    /// a row does not have exactly two columns, a bound is non-finite, or
    /// `dimension` is too large to encode.
    pub fn new<B: AsRef<[f64]>>(rows: &[B], dimension: usize) -> Result<Self, BoundsError> {
        if rows.len() != dimension {
            return Err(BoundsError::RowCount {
                expected: dimension,
                found: rows.len(),
            });
        }
        if dimension > MAX_DIMENSIONS {
            return Err(BoundsError::TooManyDimensions {
                found: dimension,
                max: MAX_DIMENSIONS,
            });
        }

        let rows: Vec<[f64; 2]> = rows
            .iter()
            .enumerate()
            .map(|(row, values)| match *values.as_ref() {
                [lower, upper] if lower.is_finite() && upper.is_finite() => Ok([lower, upper]),
                [_, _] => Err(BoundsError::NonFinite { row }),
                ref other => Err(BoundsError::ColumnCount {
                    row,
                    found: other.len(),
                }),
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { rows })
    }

    /// Returns the number of dimensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the box has no dimensions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the lower bound of dimension `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn lower(&self, i: usize) -> f64 {
        self.rows[i][0]
    }

    /// Returns the upper bound of dimension `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn upper(&self, i: usize) -> f64 {
        self.rows[i][1]
    }

    /// Returns the corner made of every lower bound.
    #[must_use]
    pub fn lower_corner(&self) -> Vec<f64> {
        self.rows.iter().map(|[lower, _]| *lower).collect()
    }

    /// Returns the corner made of every upper bound.
    #[must_use]
    pub fn upper_corner(&self) -> Vec<f64> {
        self.rows.iter().map(|[_, upper]| *upper).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn accepts_fixed_size_rows() {
        let bounds = Bounds::new(&[[-1.0, 10.0], [-3.5, 3.5]], 2).expect("valid bounds");

        assert_eq!(bounds.len(), 2);
        assert_relative_eq!(bounds.lower(0), -1.0);
        assert_relative_eq!(bounds.upper(1), 3.5);
        assert_eq!(bounds.lower_corner(), vec![-1.0, -3.5]);
        assert_eq!(bounds.upper_corner(), vec![10.0, 3.5]);
    }

    #[test]
    fn accepts_vector_rows() {
        let rows = vec![vec![0.0, 12.0], vec![0.0, 12.0]];
        let bounds = Bounds::new(&rows, 2).expect("valid bounds");
        assert_relative_eq!(bounds.upper(0), 12.0);
    }

    #[test]
    fn keeps_reversed_rows_as_given() {
        let bounds = Bounds::new(&[[5.0, -5.0]], 1).expect("valid bounds");
        assert_relative_eq!(bounds.lower(0), 5.0);
        assert_relative_eq!(bounds.upper(0), -5.0);
    }

    #[test]
    fn rejects_row_count_mismatch() {
        let result = Bounds::new(&[[0.0, 1.0]], 2);
        assert_eq!(
            result,
            Err(BoundsError::RowCount {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn rejects_wrong_column_count() {
        let rows = vec![vec![0.0, 1.0], vec![0.0, 1.0, 2.0]];
        assert_eq!(
            Bounds::new(&rows, 2),
            Err(BoundsError::ColumnCount { row: 1, found: 3 })
        );

        let rows = vec![vec![0.0]];
        assert_eq!(
            Bounds::new(&rows, 1),
            Err(BoundsError::ColumnCount { row: 0, found: 1 })
        );
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert_eq!(
            Bounds::new(&[[0.0, 1.0], [f64::NEG_INFINITY, 1.0]], 2),
            Err(BoundsError::NonFinite { row: 1 })
        );
        assert_eq!(
            Bounds::new(&[[f64::NAN, 1.0]], 1),
            Err(BoundsError::NonFinite { row: 0 })
        );
    }

    #[test]
    fn rejects_too_many_dimensions() {
        let rows = vec![[0.0, 1.0]; MAX_DIMENSIONS + 1];
        assert_eq!(
            Bounds::new(&rows, MAX_DIMENSIONS + 1),
            Err(BoundsError::TooManyDimensions {
                found: MAX_DIMENSIONS + 1,
                max: MAX_DIMENSIONS
            })
        );
    }
}
