use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::error::NnError;

/// Dense 2-D matrix of `f64` values.
///
/// The shape is fixed at construction: operations that change shape return
/// a new `Matrix`, and in-place operations never reallocate. Every row of
/// `data` holds exactly `cols` entries.
///
/// Associated functions taking two matrices (`dot`, `hadamard`, `sub`) are
/// pure and allocate their result; methods on `&mut self` (`scale`,
/// `add_matrix`, `add_scalar`, `apply`, `randomize`) mutate the receiver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    /// Zero-filled matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Result<Matrix, NnError> {
        if rows == 0 || cols == 0 {
            return Err(NnError::InvalidShape { rows, cols });
        }
        Ok(Matrix::with_shape(rows, cols))
    }

    /// Wraps an existing grid of values. The grid must be non-empty and
    /// rectangular.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix, NnError> {
        let rows = data.len();
        let cols = data.first().map_or(0, |row| row.len());
        if rows == 0 || cols == 0 {
            return Err(NnError::InvalidShape { rows, cols });
        }
        if let Some(row) = data.iter().find(|row| row.len() != cols) {
            return Err(NnError::DimensionMismatch {
                left: (rows, cols),
                right: (1, row.len()),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Column vector (n x 1) holding the values of a flat slice.
    pub fn from_array(values: &[f64]) -> Result<Matrix, NnError> {
        if values.is_empty() {
            return Err(NnError::InvalidShape { rows: 0, cols: 1 });
        }
        let data = values.iter().map(|&v| vec![v]).collect();
        Ok(Matrix {
            rows: values.len(),
            cols: 1,
            data,
        })
    }

    /// Flattens the matrix in row-major order.
    pub fn to_array(&self) -> Vec<f64> {
        self.data.iter().flat_map(|row| row.iter().copied()).collect()
    }

    /// Matrix product. Requires `a.cols == b.rows`; the result has shape
    /// `a.rows x b.cols`.
    pub fn dot(a: &Matrix, b: &Matrix) -> Result<Matrix, NnError> {
        if a.cols != b.rows {
            return Err(NnError::DimensionMismatch {
                left: (a.rows, a.cols),
                right: (b.rows, b.cols),
            });
        }

        let mut res = Matrix::with_shape(a.rows, b.cols);

        for i in 0..res.rows {
            for j in 0..res.cols {
                let mut sum = 0.0;

                for k in 0..a.cols {
                    sum += a.data[i][k] * b.data[k][j];
                }

                res.data[i][j] = sum;
            }
        }

        Ok(res)
    }

    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(a: &Matrix, b: &Matrix) -> Result<Matrix, NnError> {
        Matrix::check_same_shape(a, b)?;

        let mut res = Matrix::with_shape(a.rows, a.cols);

        for i in 0..a.rows {
            for j in 0..a.cols {
                res.data[i][j] = a.data[i][j] * b.data[i][j];
            }
        }

        Ok(res)
    }

    /// Element-wise difference `a - b` of two same-shape matrices.
    pub fn sub(a: &Matrix, b: &Matrix) -> Result<Matrix, NnError> {
        Matrix::check_same_shape(a, b)?;

        let mut res = Matrix::with_shape(a.rows, a.cols);

        for i in 0..a.rows {
            for j in 0..a.cols {
                res.data[i][j] = a.data[i][j] - b.data[i][j];
            }
        }

        Ok(res)
    }

    pub fn transpose(&self) -> Matrix {
        let mut res = Matrix::with_shape(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    /// Returns a new matrix with `functor` applied to every element.
    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        let mut res = Matrix::with_shape(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = functor(self.data[i][j]);
            }
        }

        res
    }

    /// In-place counterpart of [`map`](Matrix::map).
    pub fn apply<F>(&mut self, functor: F)
    where
        F: Fn(f64) -> f64,
    {
        for row in self.data.iter_mut() {
            for value in row.iter_mut() {
                *value = functor(*value);
            }
        }
    }

    /// Scales every element in place.
    pub fn scale(&mut self, n: f64) {
        for row in self.data.iter_mut() {
            for value in row.iter_mut() {
                *value *= n;
            }
        }
    }

    /// Adds `other` element-wise in place. The shapes must match.
    pub fn add_matrix(&mut self, other: &Matrix) -> Result<(), NnError> {
        Matrix::check_same_shape(self, other)?;

        for i in 0..self.rows {
            for j in 0..self.cols {
                self.data[i][j] += other.data[i][j];
            }
        }

        Ok(())
    }

    /// Adds `n` to every element in place.
    pub fn add_scalar(&mut self, n: f64) {
        for row in self.data.iter_mut() {
            for value in row.iter_mut() {
                *value += n;
            }
        }
    }

    /// Fills every element with an independent uniform draw from [-1, 1).
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for row in self.data.iter_mut() {
            for value in row.iter_mut() {
                *value = rng.gen::<f64>() * 2.0 - 1.0;
            }
        }
    }

    // Internal constructor for shapes already known to be valid.
    fn with_shape(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    fn check_same_shape(a: &Matrix, b: &Matrix) -> Result<(), NnError> {
        if a.rows != b.rows || a.cols != b.cols {
            return Err(NnError::DimensionMismatch {
                left: (a.rows, a.cols),
                right: (b.rows, b.cols),
            });
        }
        Ok(())
    }
}
